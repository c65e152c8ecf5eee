//! Project listing: grouping by name or deduplication by URL.
//!
//! Both modes compare normalized strings and display the original ones.
//! Participants without a complete project (name and URL) are skipped.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::participant::Participant;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

pub const MODE_GROUPED: &str = "grouped";
pub const MODE_DEDUPLICATED: &str = "deduplicated";

/// How the "all projects" listing collapses entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectListingMode {
    /// One entry per normalized project name, listing every distinct URL.
    #[default]
    Grouped,
    /// One entry per normalized URL, sorted by name.
    Deduplicated,
}

impl ProjectListingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grouped => MODE_GROUPED,
            Self::Deduplicated => MODE_DEDUPLICATED,
        }
    }
}

impl fmt::Display for ProjectListingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectListingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            MODE_GROUPED => Ok(Self::Grouped),
            MODE_DEDUPLICATED => Ok(Self::Deduplicated),
            other => Err(CoreError::Validation(format!(
                "Invalid project listing mode '{other}'. Must be one of: {MODE_GROUPED}, {MODE_DEDUPLICATED}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Canonical form of a project URL for equality checks.
///
/// Lowercases, then strips the `http://`/`https://` scheme, a leading `www.`
/// and any trailing slashes.
pub fn normalize_url(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let rest = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

/// Canonical form of a project name: trimmed and lowercased.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Grouping by name
// ---------------------------------------------------------------------------

/// Projects sharing a normalized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    /// First-seen display name.
    pub title: String,
    /// Distinct URLs (by normalized form) in first-seen order.
    pub urls: Vec<String>,
}

/// Group projects by normalized name, in first-seen group order.
pub fn group_by_name(participants: &[Participant]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut seen_urls: Vec<HashSet<String>> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (name, url) in participants.iter().filter_map(Participant::project) {
        let idx = *index_by_name.entry(normalize_name(name)).or_insert_with(|| {
            groups.push(ProjectGroup {
                title: name.to_string(),
                urls: Vec::new(),
            });
            seen_urls.push(HashSet::new());
            groups.len() - 1
        });

        if seen_urls[idx].insert(normalize_url(url)) {
            groups[idx].urls.push(url.to_string());
        }
    }

    groups
}

// ---------------------------------------------------------------------------
// Deduplication by URL
// ---------------------------------------------------------------------------

/// A single project keyed by its normalized URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedProject {
    /// First-seen display name.
    pub name: String,
    pub url: String,
}

/// One entry per normalized URL, sorted case-insensitively by name.
///
/// Ties keep first-seen order.
pub fn dedup_by_url(participants: &[Participant]) -> Vec<ListedProject> {
    let mut seen = HashSet::new();
    let mut projects: Vec<ListedProject> = participants
        .iter()
        .filter_map(Participant::project)
        .filter(|(_, url)| seen.insert(normalize_url(url)))
        .map(|(name, url)| ListedProject {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect();

    projects.sort_by_cached_key(|p| p.name.to_lowercase());
    projects
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// The project listing in whichever mode was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "projects", rename_all = "snake_case")]
pub enum ProjectListing {
    Grouped(Vec<ProjectGroup>),
    Deduplicated(Vec<ListedProject>),
}

impl ProjectListing {
    pub fn build(participants: &[Participant], mode: ProjectListingMode) -> Self {
        match mode {
            ProjectListingMode::Grouped => Self::Grouped(group_by_name(participants)),
            ProjectListingMode::Deduplicated => Self::Deduplicated(dedup_by_url(participants)),
        }
    }

    pub fn mode(&self) -> ProjectListingMode {
        match self {
            Self::Grouped(_) => ProjectListingMode::Grouped,
            Self::Deduplicated(_) => ProjectListingMode::Deduplicated,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Grouped(groups) => groups.len(),
            Self::Deduplicated(projects) => projects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of links across all entries.
    pub fn total_links(&self) -> usize {
        match self {
            Self::Grouped(groups) => groups.iter().map(|g| g.urls.len()).sum(),
            Self::Deduplicated(projects) => projects.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
