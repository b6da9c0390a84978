use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largest square edge we agree to rasterize.
pub const MAX_SIZE: u32 = 1024;

/// Largest edge an ICO directory entry can describe (stored as 0).
pub const MAX_ICO_SIZE: u32 = 256;

/// Edge length in pixels of a square icon raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    pub fn new(px: u32) -> crate::Result<Self> {
        if px == 0 || px > MAX_SIZE {
            return Err(CoreError::InvalidSize(px));
        }
        Ok(Self(px))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this size can be stored as a frame of an ICO container.
    pub fn fits_ico(self) -> bool {
        self.0 <= MAX_ICO_SIZE
    }
}

impl TryFrom<u32> for IconSize {
    type Error = CoreError;

    fn try_from(px: u32) -> crate::Result<Self> {
        Self::new(px)
    }
}

impl From<IconSize> for u32 {
    fn from(size: IconSize) -> u32 {
        size.0
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Build a list of sizes from raw pixel values. Only used for the built-in tables.
pub(crate) fn sizes(raw: &[u32]) -> Vec<IconSize> {
    raw.iter().map(|&px| IconSize(px)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_oversized() {
        assert!(matches!(IconSize::new(0), Err(CoreError::InvalidSize(0))));
        assert!(IconSize::new(MAX_SIZE + 1).is_err());
        assert!(IconSize::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn ico_limit_is_256() {
        assert!(IconSize::new(256).unwrap().fits_ico());
        assert!(!IconSize::new(284).unwrap().fits_ico());
    }

    #[test]
    fn displays_as_square_dimensions() {
        assert_eq!(IconSize::new(48).unwrap().to_string(), "48x48");
    }

    #[test]
    fn deserialize_validates() {
        let ok: IconSize = serde_json::from_str("32").unwrap();
        assert_eq!(ok.get(), 32);
        assert!(serde_json::from_str::<IconSize>("0").is_err());
    }
}
