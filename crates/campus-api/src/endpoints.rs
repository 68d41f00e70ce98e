//! Backend endpoint table.

use campus_core::error::CampusError;
use std::fmt;
use std::str::FromStr;

/// Site section, one per page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Admissions,
    Infrastructure,
    StudentLife,
    Research,
    News,
    Navbar,
    Gallery,
}

pub const ABOUT: &str = "/api/about/";
pub const LEADERSHIP: &str = "/api/leadership/";
pub const PROGRAMS: &str = "/api/admissions/programs/";
pub const ADMISSION_FAQ: &str = "/api/admissions/faq/";
pub const INFRASTRUCTURE: &str = "/api/infrastructure/";
pub const CLUBS: &str = "/api/student-life/clubs/";
pub const EVENTS: &str = "/api/student-life/events/";
pub const GRANTS: &str = "/research/api/grants/";
pub const PUBLICATIONS: &str = "/research/api/publications/";
pub const NEWS: &str = "/api/news/";
pub const MENU: &str = "/api/menu/";
pub const GALLERY: &str = "/api/gallery/";

/// Write paths.
pub const APPEALS: &str = "/api/appeals/";
pub const GRANT_APPLICATIONS: &str = "/research/api/grant-applications/";

impl Section {
    pub const ALL: [Section; 8] = [
        Section::About,
        Section::Admissions,
        Section::Infrastructure,
        Section::StudentLife,
        Section::Research,
        Section::News,
        Section::Navbar,
        Section::Gallery,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Admissions => "admissions",
            Self::Infrastructure => "infrastructure",
            Self::StudentLife => "student-life",
            Self::Research => "research",
            Self::News => "news",
            Self::Navbar => "navbar",
            Self::Gallery => "gallery",
        }
    }

    /// Every endpoint the section's page reads.
    pub fn endpoints(&self) -> &'static [&'static str] {
        match self {
            Self::About => &[ABOUT, LEADERSHIP],
            Self::Admissions => &[PROGRAMS, ADMISSION_FAQ],
            Self::Infrastructure => &[INFRASTRUCTURE],
            Self::StudentLife => &[CLUBS, EVENTS],
            Self::Research => &[GRANTS, PUBLICATIONS],
            Self::News => &[NEWS],
            Self::Navbar => &[MENU],
            Self::Gallery => &[GALLERY],
        }
    }

    /// Whether the backend filters this section by `search`/`category`.
    pub fn accepts_filters(&self) -> bool {
        matches!(self, Self::News | Self::Gallery)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Section::ALL
            .into_iter()
            .find(|sec| sec.slug() == wanted)
            .or(match wanted.as_str() {
                "menu" | "nav" => Some(Self::Navbar),
                "studentlife" | "student" => Some(Self::StudentLife),
                _ => None,
            })
            .ok_or_else(|| CampusError::Config(format!("unknown section '{s}'")))
    }
}

/// Absolute URL for a downloadable document. Already-absolute links are
/// returned unchanged.
pub fn download_url(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    join(base_url, path)
}

/// Join the backend host and a path without doubling slashes.
pub fn join(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
