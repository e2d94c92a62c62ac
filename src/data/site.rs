use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// LaunchSite – the four fixed launch pads
// ---------------------------------------------------------------------------

/// One of the four physical launch pads present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaunchSite {
    Lc40,
    Slc40,
    Lc39a,
    Slc4e,
}

impl LaunchSite {
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::Lc40,
        LaunchSite::Slc40,
        LaunchSite::Lc39a,
        LaunchSite::Slc4e,
    ];

    /// Dropdown value, e.g. `lc-39a`.
    pub fn value(self) -> &'static str {
        match self {
            LaunchSite::Lc40 => "lc-40",
            LaunchSite::Slc40 => "slc-40",
            LaunchSite::Lc39a => "lc-39a",
            LaunchSite::Slc4e => "slc-4e",
        }
    }

    /// Name used in the `Launch Site` column and as the dropdown label.
    pub fn dataset_name(self) -> &'static str {
        match self {
            LaunchSite::Lc40 => "CCAFS LC-40",
            LaunchSite::Slc40 => "CCAFS SLC-40",
            LaunchSite::Lc39a => "KSC LC-39A",
            LaunchSite::Slc4e => "VAFB SLC-4E",
        }
    }

    /// Short upper-case pad code used in chart titles, e.g. `LC-39A`.
    pub fn code(self) -> String {
        self.value().to_ascii_uppercase()
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dataset_name())
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the dropdown value
// ---------------------------------------------------------------------------

/// Value of the site dropdown: every site, or a single pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(LaunchSite),
}

impl SiteSelection {
    pub const ALL_VALUE: &'static str = "all";

    pub fn value(self) -> &'static str {
        match self {
            SiteSelection::All => Self::ALL_VALUE,
            SiteSelection::Site(site) => site.value(),
        }
    }

    /// Whether a `Launch Site` column value belongs to this selection.
    pub fn matches(self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site.dataset_name() == launch_site,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_VALUE {
            return Ok(SiteSelection::All);
        }
        LaunchSite::ALL
            .into_iter()
            .find(|site| site.value() == s)
            .map(SiteSelection::Site)
            .ok_or_else(|| DashboardError::UnknownSite(s.to_string()))
    }
}
