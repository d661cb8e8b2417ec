/// Caller preferences for [`load_texture`](crate::load_texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Whether the caller expects array layers or depth. When `false`, such
    /// textures still load but carry an
    /// [`UnexpectedThirdDimension`](texcodec_texture_common::DecodeWarning::UnexpectedThirdDimension) warning.
    pub allow_3d: bool,
    /// Flip generic images vertically.
    pub mirrored: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            allow_3d: true,
            mirrored: false,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_3d(mut self, allow_3d: bool) -> Self {
        self.allow_3d = allow_3d;
        self
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}
