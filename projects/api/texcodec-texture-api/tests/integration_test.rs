//! End-to-end loading through the public API, from bytes and from files.

use rstest::rstest;
use std::io::Write;
use texcodec_texture_api::{load_texture, GenericImage, ImageFormat, LoadOptions};
use texcodec_texture_common::{DecodeError, DecodeWarning, SliceSource, Target, TextureFormat};

const DDPF_FOURCC: u32 = 0x4;
const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28;
const GL_COMPRESSED_RGB8_ETC2: u32 = 0x9274;

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// A legacy DDS header followed by `payload_len` bytes.
fn dds_fourcc(code: &[u8; 4], width: u32, height: u32, payload_len: usize) -> Vec<u8> {
    let mut data = vec![0u8; 128];
    data[0..4].copy_from_slice(b"DDS ");
    put_u32(&mut data, 0x04, 124);
    put_u32(&mut data, 0x0C, height);
    put_u32(&mut data, 0x10, width);
    put_u32(&mut data, 0x4C, 32);
    put_u32(&mut data, 0x50, DDPF_FOURCC);
    data[0x54..0x58].copy_from_slice(code);
    data.resize(128 + payload_len, 0xAB);
    data
}

/// A DX10 DDS texture array of RGBA8 layers.
fn dds_rgba8_array(width: u32, height: u32, layers: u32) -> Vec<u8> {
    let mut data = dds_fourcc(b"DX10", width, height, 0);
    let mut dx10 = [0u8; 20];
    put_u32(&mut dx10, 0, DXGI_FORMAT_R8G8B8A8_UNORM);
    put_u32(&mut dx10, 4, 3);
    put_u32(&mut dx10, 12, layers);
    data.extend_from_slice(&dx10);
    data.resize(data.len() + (width * height * 4 * layers) as usize, 0x11);
    data
}

/// A single level, single face ETC2 KTX file.
fn ktx_etc2(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; 64];
    data[0..12].copy_from_slice(&[
        0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
    ]);
    put_u32(&mut data, 12, 0x04030201);
    put_u32(&mut data, 28, GL_COMPRESSED_RGB8_ETC2);
    put_u32(&mut data, 36, width);
    put_u32(&mut data, 40, height);
    put_u32(&mut data, 52, 1);
    put_u32(&mut data, 56, 1);

    let level_size = width.div_ceil(4) * height.div_ceil(4) * 8;
    data.extend_from_slice(&level_size.to_le_bytes());
    data.resize(data.len() + level_size as usize, 0x22);
    data
}

/// A version 1 (ETC1) PKM file.
fn pkm_etc1(width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"PKM 10");
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.resize(data.len() + (width as usize / 4) * (height as usize / 4) * 8, 0x33);
    data
}

/// A flat (unencoded) Radiance file with every pixel set to `pixel`.
fn hdr_flat(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n");
    data.extend_from_slice(format!("-Y {height} +X {width}\n").as_bytes());
    for _ in 0..width * height {
        data.extend_from_slice(&pixel);
    }
    data
}

fn checker(bytes: &[u8], _suffix: &str) -> Option<GenericImage> {
    if bytes != b"checker" {
        return None;
    }
    Some(GenericImage {
        width: 2,
        height: 1,
        rgba8: vec![0, 0, 0, 255, 255, 255, 255, 255],
    })
}

#[rstest]
#[case::dds("dds", dds_fourcc(b"DXT1", 8, 8, 32), TextureFormat::RgbaDxt1, 8, 8, 32)]
#[case::ktx("ktx", ktx_etc2(8, 4), TextureFormat::Rgb8Etc2, 8, 4, 4 + 16)]
#[case::pkm("pkm", pkm_etc1(4, 8), TextureFormat::Rgb8Etc1, 4, 8, 16)]
#[case::hdr("hdr", hdr_flat(3, 2, [128, 64, 32, 129]), TextureFormat::Rgba32F, 3, 2, 3 * 2 * 16)]
fn suffix_selects_container_reader(
    #[case] suffix: &str,
    #[case] data: Vec<u8>,
    #[case] format: TextureFormat,
    #[case] width: u32,
    #[case] height: u32,
    #[case] payload_len: usize,
) {
    let output = load_texture(&mut SliceSource::new(&data), suffix, &LoadOptions::default(), None).unwrap();

    assert_eq!(output.texture.format(), format);
    assert_eq!(output.texture.width(), width);
    assert_eq!(output.texture.height(), height);
    assert_eq!(output.texture.payload().len(), payload_len);
    assert!(output.warnings.is_empty());
}

#[test]
fn container_reader_is_not_guessed_from_content() {
    // DDS bytes behind a KTX suffix go to the KTX reader.
    let data = dds_fourcc(b"DXT1", 4, 4, 8);
    let result = load_texture(&mut SliceSource::new(&data), "ktx", &LoadOptions::default(), None);
    assert!(matches!(result, Err(DecodeError::MalformedHeader(_))));
}

#[test]
fn array_texture_warns_when_3d_not_requested() {
    let data = dds_rgba8_array(2, 2, 3);
    let options = LoadOptions::default().with_allow_3d(false);
    let output = load_texture(&mut SliceSource::new(&data), "dds", &options, None).unwrap();

    assert_eq!(output.texture.target(), Target::Target2DArray);
    assert_eq!(output.texture.layers(), 3);
    assert_eq!(
        output.warnings,
        vec![DecodeWarning::UnexpectedThirdDimension { layers: 3, depth: 1 }]
    );
}

#[test]
fn array_texture_is_silent_when_3d_requested() {
    let data = dds_rgba8_array(2, 2, 3);
    let output = load_texture(&mut SliceSource::new(&data), "dds", &LoadOptions::default(), None).unwrap();
    assert!(output.warnings.is_empty());
}

#[test]
fn generic_fallback_decodes_and_mirrors() {
    let options = LoadOptions::default().with_mirrored(true);
    let output = load_texture(&mut SliceSource::new(b"checker"), "png", &options, Some(&checker)).unwrap();

    // A single row is unchanged by mirroring.
    assert_eq!(output.texture.format(), TextureFormat::Rgba8Unorm);
    assert_eq!(output.texture.payload(), &[0, 0, 0, 255, 255, 255, 255, 255]);
}

#[rstest]
#[case::no_decoder(b"checker".as_slice(), false)]
#[case::decoder_rejects(b"garbage".as_slice(), true)]
fn generic_fallback_failure_names_suffix(#[case] data: &[u8], #[case] with_decoder: bool) {
    let decoder = with_decoder.then_some(&checker as &dyn texcodec_texture_api::GenericImageDecoder);
    let result = load_texture(&mut SliceSource::new(data), "jpg", &LoadOptions::default(), decoder);

    match result {
        Err(DecodeError::GenericDecodeFailed { suffix }) => assert_eq!(suffix, "jpg"),
        other => panic!("expected GenericDecodeFailed, got {other:?}"),
    }
}

#[test]
fn every_format_round_trips_its_suffix() {
    for format in ImageFormat::all_values() {
        if let Some(suffix) = format.suffix() {
            assert_eq!(ImageFormat::from_suffix(suffix), *format);
        }
    }
}

mod file_io {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;
    use texcodec_texture_api::{load_texture_from_path, FileOperationError};

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn loads_file_using_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "sky.HDR", &hdr_flat(2, 2, [10, 20, 30, 130]));

        let output = load_texture_from_path(&path, &LoadOptions::default(), None).unwrap();
        assert_eq!(output.texture.format(), TextureFormat::Rgba32F);
        assert_eq!(output.texture.width(), 2);
    }

    #[test]
    fn trailing_bytes_in_file_produce_warning() {
        let dir = TempDir::new().unwrap();
        let mut data = dds_fourcc(b"DXT5", 4, 4, 16);
        data.push(0);
        let path = write_file(&dir, "tile.dds", &data);

        let output = load_texture_from_path(&path, &LoadOptions::default(), None).unwrap();
        assert_eq!(output.warnings, vec![DecodeWarning::TrailingData]);
    }

    #[test]
    fn empty_file_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.dds", &[]);

        let result = load_texture_from_path(&path, &LoadOptions::default(), None);
        assert!(matches!(
            result,
            Err(FileOperationError::Decode(DecodeError::MalformedHeader(_)))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_texture_from_path(
            Path::new("/nonexistent/texcodec/missing.dds"),
            &LoadOptions::default(),
            None,
        );
        assert!(matches!(result, Err(FileOperationError::Io(_))));
    }
}
