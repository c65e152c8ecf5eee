//! Status announcements and their estimated reading time.
//!
//! Every view carries an [`Announcement`] so a client can surface it to
//! assistive technology and hold off any auto-navigation until it has
//! likely been conveyed.

use std::time::Duration;

use serde::Serialize;

/// Floor for any announcement, in milliseconds.
pub const MIN_READING_TIME_MS: u64 = 2_000;

/// Assumed reading speed, in words per minute.
pub const WORDS_PER_MINUTE: u64 = 120;

/// Fixed pause added to every estimate, in milliseconds.
pub const READING_BUFFER_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const PARTICIPANTS_LOADED: &str = "Participants loaded";
pub const PARTICIPANTS_LOAD_FAILED: &str = "Error loading participants";
pub const NO_PARTICIPANTS: &str = "No participants found";
pub const NO_PROJECTS: &str = "No projects found";
pub const PROJECTS_LOAD_FAILED: &str = "Error loading projects";
pub const PARTICIPANT_ADDED: &str = "Success! Your card has been added to the hackathon.";
pub const PARTICIPANT_ADD_FAILED: &str = "Error: Could not add participant. Please try again.";

pub fn participants_counted(count: usize) -> String {
    format!("Loaded {count} participants")
}

pub fn projects_counted(projects: usize, links: usize) -> String {
    format!("Loaded {projects} projects with {links} links")
}

/// Estimated time to read `message` aloud.
///
/// `max(2 s, words / 120 wpm + 500 ms)`, counting whitespace-separated words.
pub fn estimated_reading_time(message: &str) -> Duration {
    let words = message.split_whitespace().count() as u64;
    let spoken_ms = words * 60_000 / WORDS_PER_MINUTE;
    Duration::from_millis((spoken_ms + READING_BUFFER_MS).max(MIN_READING_TIME_MS))
}

/// A status message paired with how long it takes to convey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub message: String,
    pub duration_ms: u64,
}

impl Announcement {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let duration_ms = estimated_reading_time(&message).as_millis() as u64;
        Self {
            message,
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Completes once the announcement has likely been read out.
    pub async fn conveyed(&self) {
        tokio::time::sleep(self.duration()).await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_use_the_floor() {
        assert_eq!(estimated_reading_time(""), Duration::from_millis(2_000));
        assert_eq!(
            estimated_reading_time(PARTICIPANTS_LOADED),
            Duration::from_millis(2_000)
        );
    }

    #[test]
    fn long_messages_grow_with_word_count() {
        // 9 words -> 4500 ms + 500 ms
        assert_eq!(
            estimated_reading_time(PARTICIPANT_ADDED),
            Duration::from_millis(5_000)
        );

        let longer = format!("{PARTICIPANT_ADDED} Please wait while we refresh the grid");
        assert!(estimated_reading_time(&longer) > estimated_reading_time(PARTICIPANT_ADDED));
    }

    #[test]
    fn counted_messages() {
        assert_eq!(participants_counted(5), "Loaded 5 participants");
        assert_eq!(projects_counted(3, 4), "Loaded 3 projects with 4 links");
    }

    #[test]
    fn announcement_carries_duration() {
        let a = Announcement::new(PARTICIPANT_ADD_FAILED);
        assert_eq!(a.duration(), estimated_reading_time(PARTICIPANT_ADD_FAILED));
    }

    #[tokio::test(start_paused = true)]
    async fn conveyed_waits_for_reading_time() {
        let a = Announcement::new(PARTICIPANT_ADDED);
        let start = tokio::time::Instant::now();

        a.conveyed().await;

        assert!(start.elapsed() >= Duration::from_millis(5_000));
    }
}
