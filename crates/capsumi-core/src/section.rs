//! In-page sections reachable from the navbar

/// Page section with its own anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Assignments,
    Progress,
    UiProgress,
}

impl Section {
    /// Navbar order
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Assignments,
        Section::Progress,
        Section::UiProgress,
    ];

    /// Element id the anchor scrolls to
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Assignments => "assignments",
            Section::Progress => "progress",
            Section::UiProgress => "ui-progress",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "About Us",
            Section::Assignments => "Assignments",
            Section::Progress => "Project Progress",
            Section::UiProgress => "UI Development",
        }
    }

    /// Heading rendered at the top of the section
    pub fn heading(self) -> &'static str {
        match self {
            Section::UiProgress => "UI Development Progress",
            other => other.nav_label(),
        }
    }
}
