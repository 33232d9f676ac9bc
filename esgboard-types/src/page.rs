//! Dashboard navigation pages.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Navigation entries of the dashboard menu.
///
/// Front ends pass the selected page explicitly instead of keeping it in
/// ambient UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Landing page with usage hints.
    Welcome,
    /// Single-ticker lookup.
    ViewScore,
    /// Two-ticker comparison.
    Compare,
    /// Bulk lookup from an uploaded CSV file.
    Upload,
}

impl Page {
    /// Menu entries in display order.
    pub const ALL: [Self; 4] = [Self::Welcome, Self::ViewScore, Self::Compare, Self::Upload];

    /// Menu label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::ViewScore => "View ESG Score",
            Self::Compare => "Compare ESG Scores",
            Self::Upload => "Upload File for ESG Data",
        }
    }

    /// Label of the button that triggers the page's pipeline, if any.
    #[must_use]
    pub const fn action(self) -> Option<&'static str> {
        match self {
            Self::Welcome => None,
            Self::ViewScore => Some("Get ESG Score"),
            Self::Compare => Some("Compare"),
            Self::Upload => Some("Get ESG Data"),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
