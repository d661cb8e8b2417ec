//! Routing a byte stream to the matching container reader.

use crate::generic::{generic_image_to_texture, GenericImageDecoder};
use crate::image_format::ImageFormat;
use crate::options::LoadOptions;
use alloc::string::ToString;
use texcodec_texture_common::{DecodeError, DecodeOutput, DecodeResult, DecodeWarning, TextureSource};

/// A loaded texture plus the non-fatal conditions noticed while loading it.
pub type LoadedTexture = DecodeOutput;

/// Loads a texture from `source`, choosing the reader from `suffix`.
///
/// `suffix` is the lowercase file extension without the dot. Suffixes other
/// than `dds`, `ktx`, `pkm` and `hdr` read the whole stream and hand it to
/// `generic`.
///
/// # Errors
///
/// Whatever the selected reader reports. For generic formats,
/// [`DecodeError::GenericDecodeFailed`] when no decoder is given or it cannot
/// decode the data.
///
/// # Example
///
/// ```
/// use texcodec_texture_api::{load_texture, LoadOptions};
/// use texcodec_texture_common::SliceSource;
///
/// let result = load_texture(&mut SliceSource::new(b"not a texture"), "dds", &LoadOptions::default(), None);
/// assert!(result.is_err());
/// ```
pub fn load_texture<S>(
    source: &mut S,
    suffix: &str,
    options: &LoadOptions,
    generic: Option<&dyn GenericImageDecoder>,
) -> DecodeResult<LoadedTexture>
where
    S: TextureSource + ?Sized,
{
    let format = ImageFormat::from_suffix(suffix);
    let mut output = match format {
        ImageFormat::Dds => texcodec_dds::decode_dds(source),
        ImageFormat::Ktx => texcodec_ktx::decode_ktx(source),
        ImageFormat::Pkm => texcodec_pkm::decode_pkm(source),
        ImageFormat::Hdr => texcodec_hdr::decode_hdr(source),
        ImageFormat::Generic => decode_generic(source, suffix, options, generic),
    }
    .inspect_err(|e| log::warn!("Failed to load {format:?} texture: {e}"))?;

    check_third_dimension(&mut output, options);
    Ok(output)
}

fn decode_generic<S>(
    source: &mut S,
    suffix: &str,
    options: &LoadOptions,
    generic: Option<&dyn GenericImageDecoder>,
) -> DecodeResult<LoadedTexture>
where
    S: TextureSource + ?Sized,
{
    let failed = || DecodeError::GenericDecodeFailed {
        suffix: suffix.to_string(),
    };

    let decoder = generic.ok_or_else(failed)?;
    let bytes = source.read_to_end()?;
    let image = decoder.decode(&bytes, suffix).ok_or_else(failed)?;
    let texture = generic_image_to_texture(image, options.mirrored)?;
    Ok(LoadedTexture::new(texture))
}

/// Flags textures with layers or depth when the caller did not ask for them.
fn check_third_dimension(output: &mut LoadedTexture, options: &LoadOptions) {
    let (layers, depth) = (output.texture.layers(), output.texture.depth());
    if !options.allow_3d && (layers > 1 || depth > 1) {
        log::warn!("Texture has {layers} layers and depth {depth}, but 3D data was not requested");
        output
            .warnings
            .push(DecodeWarning::UnexpectedThirdDimension { layers, depth });
    }
}
