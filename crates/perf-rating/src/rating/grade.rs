use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal evaluation labels used on every scored row and for the overall result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "E--")]
    FarBelow,
    #[serde(rename = "E-")]
    Below,
    #[serde(rename = "E")]
    Meets,
    #[serde(rename = "E+")]
    Exceeds,
    #[serde(rename = "E++")]
    FarExceeds,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::FarBelow,
        Grade::Below,
        Grade::Meets,
        Grade::Exceeds,
        Grade::FarExceeds,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FarBelow => "E--",
            Self::Below => "E-",
            Self::Meets => "E",
            Self::Exceeds => "E+",
            Self::FarExceeds => "E++",
        }
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::FarBelow => 0,
            Self::Below => 1,
            Self::Meets => 3,
            Self::Exceeds => 4,
            Self::FarExceeds => 5,
        }
    }

    /// Exact, case-sensitive match against the five labels.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.label() == value)
    }

    /// Like [`Grade::from_label`] but anything unrecognized collapses to the lowest grade.
    pub fn from_label_or_lowest(value: &str) -> Self {
        Self::from_label(value).unwrap_or(Self::FarBelow)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point value for a raw grade label. Total: unknown or empty labels score 0.
pub fn points_for_label(value: &str) -> u8 {
    Grade::from_label(value).map(Grade::points).unwrap_or(0)
}
