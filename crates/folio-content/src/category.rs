//! Portfolio view categories.

use std::fmt;
use std::str::FromStr;

use crate::model::{MediaKind, PortfolioItem};

/// Filter tab of the portfolio grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Videos,
    Puzzle,
    Casual,
}

impl CategoryFilter {
    /// Derive the view category of an item from its source category and
    /// media kind. Videos win over any category; unknown categories map to
    /// [`CategoryFilter::All`].
    #[must_use]
    pub fn for_item(category: &str, kind: MediaKind) -> Self {
        if kind == MediaKind::Video || category == "GameVideos" {
            return Self::Videos;
        }
        match category {
            "Mobile Puzzle" => Self::Puzzle,
            "Mobile Casual" => Self::Casual,
            _ => Self::All,
        }
    }

    /// Whether an item is shown under this filter.
    #[must_use]
    pub fn matches(self, item: &PortfolioItem) -> bool {
        self == Self::All || Self::for_item(&item.category, item.kind) == self
    }

    /// Value used in `data-category` / `data-filter` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Videos => "videos",
            Self::Puzzle => "puzzle",
            Self::Casual => "casual",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "videos" => Ok(Self::Videos),
            "puzzle" => Ok(Self::Puzzle),
            "casual" => Ok(Self::Casual),
            other => Err(format!("unknown portfolio filter '{other}'")),
        }
    }
}
