//! Mapping file suffixes to container readers.

use derive_enum_all_values::AllValues;

/// The container reader a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ImageFormat {
    Dds,
    Ktx,
    Pkm,
    Hdr,
    /// Anything else, handed to a [`GenericImageDecoder`](crate::GenericImageDecoder).
    Generic,
}

impl ImageFormat {
    /// Picks the reader for a lowercase suffix without the leading dot.
    ///
    /// The match is exact: `"DDS"` or `".dds"` are [`ImageFormat::Generic`].
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "dds" => Self::Dds,
            "ktx" => Self::Ktx,
            "pkm" => Self::Pkm,
            "hdr" => Self::Hdr,
            _ => Self::Generic,
        }
    }

    /// Picks the reader from a path's extension, compared case-insensitively.
    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Self {
        let suffix = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .unwrap_or_default();
        Self::from_suffix(&suffix)
    }

    /// The suffix this format is recognised by, [`None`] for [`ImageFormat::Generic`].
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Dds => Some("dds"),
            Self::Ktx => Some("ktx"),
            Self::Pkm => Some("pkm"),
            Self::Hdr => Some("hdr"),
            Self::Generic => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case("dds", ImageFormat::Dds)]
    #[case("ktx", ImageFormat::Ktx)]
    #[case("pkm", ImageFormat::Pkm)]
    #[case("hdr", ImageFormat::Hdr)]
    #[case("png", ImageFormat::Generic)]
    #[case("", ImageFormat::Generic)]
    #[case("DDS", ImageFormat::Generic)]
    #[case(".dds", ImageFormat::Generic)]
    #[case("dds ", ImageFormat::Generic)]
    fn from_suffix_is_exact(#[case] suffix: &str, #[case] expected: ImageFormat) {
        assert_eq!(ImageFormat::from_suffix(suffix), expected);
    }

    #[test]
    fn suffix_round_trips_for_containers() {
        for &format in ImageFormat::all_values() {
            match format.suffix() {
                Some(suffix) => assert_eq!(ImageFormat::from_suffix(suffix), format),
                None => assert_eq!(format, ImageFormat::Generic),
            }
        }
    }

    #[cfg(feature = "std")]
    #[rstest]
    #[case("textures/sky.HDR", ImageFormat::Hdr)]
    #[case("a.b.Ktx", ImageFormat::Ktx)]
    #[case("no_extension", ImageFormat::Generic)]
    #[case("image.jpeg", ImageFormat::Generic)]
    fn from_path_lowercases_extension(#[case] path: &str, #[case] expected: ImageFormat) {
        assert_eq!(ImageFormat::from_path(std::path::Path::new(path)), expected);
    }
}
