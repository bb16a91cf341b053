//! Health log category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidCategoryError;

/// All log categories, in display order
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Voeding,
    Category::Supplement,
    Category::Beweging,
    Category::Slaap,
    Category::Welzijn,
    Category::Overig,
];

/// The six log categories. Wire tags are Dutch, matching what the
/// extraction model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Voeding,
    Supplement,
    Beweging,
    Slaap,
    Welzijn,
    Overig,
}

impl Category {
    /// Get the wire/storage tag for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Voeding => "voeding",
            Self::Supplement => "supplement",
            Self::Beweging => "beweging",
            Self::Slaap => "slaap",
            Self::Welzijn => "welzijn",
            Self::Overig => "overig",
        }
    }

    /// Get the Dutch display label
    pub const fn label_dutch(&self) -> &'static str {
        match self {
            Self::Voeding => "Voeding",
            Self::Supplement => "Supplement",
            Self::Beweging => "Beweging",
            Self::Slaap => "Slaap",
            Self::Welzijn => "Welzijn",
            Self::Overig => "Overig",
        }
    }

    /// Get the English display label
    pub const fn label_english(&self) -> &'static str {
        match self {
            Self::Voeding => "Nutrition",
            Self::Supplement => "Supplement",
            Self::Beweging => "Movement",
            Self::Slaap => "Sleep",
            Self::Welzijn => "Wellbeing",
            Self::Overig => "Other",
        }
    }

    /// Get the display emoji
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Voeding => "🍎",
            Self::Supplement => "💊",
            Self::Beweging => "🏃",
            Self::Slaap => "😴",
            Self::Welzijn => "💚",
            Self::Overig => "📝",
        }
    }

    /// Get the category accent color (hex)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Voeding => "#4D7C0F",
            Self::Supplement => "#7E22CE",
            Self::Beweging => "#B45309",
            Self::Slaap => "#1E40AF",
            Self::Welzijn => "#BE185D",
            Self::Overig => "#57534E",
        }
    }

    /// Get the card background tint (rgba)
    pub const fn background_color(&self) -> &'static str {
        match self {
            Self::Voeding => "rgba(77, 124, 15, 0.06)",
            Self::Supplement => "rgba(126, 34, 206, 0.06)",
            Self::Beweging => "rgba(180, 83, 9, 0.06)",
            Self::Slaap => "rgba(30, 64, 175, 0.06)",
            Self::Welzijn => "rgba(190, 24, 93, 0.06)",
            Self::Overig => "rgba(87, 83, 78, 0.06)",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voeding" => Ok(Self::Voeding),
            "supplement" => Ok(Self::Supplement),
            "beweging" => Ok(Self::Beweging),
            "slaap" => Ok(Self::Slaap),
            "welzijn" => Ok(Self::Welzijn),
            "overig" => Ok(Self::Overig),
            _ => Err(InvalidCategoryError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
