//! Pizza sizes.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when a size name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown size '{0}' (expected Small, Medium or Large)")]
pub struct UnknownSize(pub String);

/// Pizza size.
///
/// The wire form is the capitalized name (`"Small"`, `"Medium"`, `"Large"`).
/// Medium is the default selection on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Price multiplier applied to a pizza's base price.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Small => Decimal::ONE,
            Self::Medium => Decimal::new(125, 2),
            Self::Large => Decimal::new(150, 2),
        }
    }

    /// The display and wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = UnknownSize;

    /// Case-insensitive; also accepts the single-letter forms `s`, `m`, `l`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(Self::Small),
            "medium" | "m" => Ok(Self::Medium),
            "large" | "l" => Ok(Self::Large),
            _ => Err(UnknownSize(s.to_owned())),
        }
    }
}
