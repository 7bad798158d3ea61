//! Timer modes.

use serde::{Deserialize, Serialize};

/// One of the three countdown kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Focused work session
    #[default]
    Work,
    /// Short break
    Short,
    /// Long break
    Long,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::Short, Self::Long];

    /// Lowercase identifier, as shown in the window title.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Short => "Short Break",
            Self::Long => "Long Break",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
