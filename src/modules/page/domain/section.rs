use std::fmt;
use std::str::FromStr;

/// One of the three paginated collections on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Portfolio,
    Testimonials,
    CompletedTasks,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Portfolio,
        Section::Testimonials,
        Section::CompletedTasks,
    ];

    /// Id of the skeleton element the section renders into.
    pub fn mount_id(self) -> &'static str {
        match self {
            Section::Portfolio => "portfolioGrid",
            Section::Testimonials => "testimonialsSlider",
            Section::CompletedTasks => "completedTasksList",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
            Section::CompletedTasks => "completed-tasks",
        }
    }

    /// Fragment endpoint that reveals the page after `shown` items.
    pub fn reveal_path(self, shown: usize) -> String {
        format!("/sections/{}/more?shown={}", self.slug(), shown)
    }

    /// Shown in place of the list when the data bundle is unavailable.
    pub fn failure_message(self) -> &'static str {
        match self {
            Section::Portfolio => "Portfolio failed to load",
            Section::Testimonials => "Testimonials failed to load",
            Section::CompletedTasks => "Completed projects failed to load",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}
