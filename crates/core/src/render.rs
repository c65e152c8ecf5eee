//! View models for the grid, participant and project listings.
//!
//! A [`RenderPass`] owns the random source and the avatar pool for one
//! request. Every public render method resets the pool first, so fruit
//! avatars never repeat within a view until the palette runs out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::announce::{self, Announcement};
use crate::avatar::AvatarPool;
use crate::error::CoreError;
use crate::grid::{featured_index, layout_slots, unavailable_slots, GridGeometry, Slot};
use crate::participant::Participant;
use crate::projects::{ProjectListing, ProjectListingMode};
use crate::shuffle::{shuffle, shuffle_in_place};
use crate::types::ParticipantId;

pub const EMPTY_PARTICIPANTS_MESSAGE: &str = "No participants yet. Be the first to join!";
pub const EMPTY_PROJECTS_MESSAGE: &str = "No projects have been submitted yet.";
pub const PARTICIPANTS_UNAVAILABLE_MESSAGE: &str =
    "Failed to load participants. Please try again later.";
pub const PROJECTS_UNAVAILABLE_MESSAGE: &str = "Failed to load projects. Please try again later.";

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Avatar {
    /// The participant's own upload.
    Image { src: String, alt: String },
    /// A placeholder drawn from the pool.
    Fruit {
        glyph: &'static str,
        color: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantCard {
    pub id: ParticipantId,
    pub name: String,
    pub avatar: Avatar,
    /// LinkedIn, then portfolio, then the project when complete.
    pub links: Vec<CardLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCard {
    Participant {
        card: ParticipantCard,
        highlighted: bool,
    },
    Empty,
    Featured,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub geometry: GridGeometry,
    pub featured_index: usize,
    pub cards: Vec<GridCard>,
    /// Whether the requested highlight was found and placed.
    pub highlight_placed: bool,
    pub announcement: Announcement,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantsView {
    pub participants: Vec<ParticipantCard>,
    /// Shown in place of the list when it is empty.
    pub message: Option<&'static str>,
    pub announcement: Announcement,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsView {
    pub listing: ProjectListing,
    pub total_links: usize,
    pub message: Option<&'static str>,
    pub announcement: Announcement,
}

// ---------------------------------------------------------------------------
// Render pass
// ---------------------------------------------------------------------------

pub struct RenderPass<R> {
    rng: R,
    avatars: AvatarPool,
}

impl<R: Rng> RenderPass<R> {
    pub fn new(rng: R) -> Self {
        Self::with_pool(rng, AvatarPool::fruits())
    }

    pub fn with_pool(rng: R, avatars: AvatarPool) -> Self {
        Self { rng, avatars }
    }

    /// Lay out `participants` on a grid of the given geometry.
    pub fn grid(
        &mut self,
        participants: &[Participant],
        geometry: GridGeometry,
        highlight: Option<ParticipantId>,
    ) -> Result<GridView, CoreError> {
        self.avatars.reset();
        let slots = layout_slots(participants, geometry.slot_count(), highlight, &mut self.rng)?;

        let mut highlight_placed = false;
        let cards = slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Filled { item, highlighted } => {
                    highlight_placed |= highlighted;
                    GridCard::Participant {
                        card: self.card(item),
                        highlighted,
                    }
                }
                Slot::Empty => GridCard::Empty,
                Slot::Featured => GridCard::Featured,
            })
            .collect();

        Ok(GridView {
            geometry,
            featured_index: featured_index(geometry.slot_count()),
            cards,
            highlight_placed,
            announcement: Announcement::new(announce::PARTICIPANTS_LOADED),
        })
    }

    /// Every participant, in shuffled order.
    pub fn all_participants(&mut self, participants: &[Participant]) -> ParticipantsView {
        self.avatars.reset();
        if participants.is_empty() {
            return ParticipantsView {
                participants: Vec::new(),
                message: Some(EMPTY_PARTICIPANTS_MESSAGE),
                announcement: Announcement::new(announce::NO_PARTICIPANTS),
            };
        }

        let shuffled = shuffle(participants, &mut self.rng);
        let cards: Vec<_> = shuffled.iter().map(|p| self.card(p)).collect();
        let announcement = Announcement::new(announce::participants_counted(cards.len()));

        ParticipantsView {
            participants: cards,
            message: None,
            announcement,
        }
    }

    /// The project listing. Grouped listings are shown in shuffled group order.
    pub fn projects(&mut self, participants: &[Participant], mode: ProjectListingMode) -> ProjectsView {
        self.avatars.reset();
        let mut listing = ProjectListing::build(participants, mode);
        if let ProjectListing::Grouped(groups) = &mut listing {
            shuffle_in_place(groups, &mut self.rng);
        }

        if listing.is_empty() {
            return ProjectsView {
                listing,
                total_links: 0,
                message: Some(EMPTY_PROJECTS_MESSAGE),
                announcement: Announcement::new(announce::NO_PROJECTS),
            };
        }

        let total_links = listing.total_links();
        let announcement = Announcement::new(announce::projects_counted(listing.len(), total_links));
        ProjectsView {
            listing,
            total_links,
            message: None,
            announcement,
        }
    }

    fn card(&mut self, participant: &Participant) -> ParticipantCard {
        let avatar = match participant.avatar_image.as_deref() {
            Some(src) if participant.has_avatar_image() => Avatar::Image {
                src: src.to_string(),
                alt: format!("{}'s avatar", participant.name),
            },
            _ => {
                let fruit = self.avatars.draw(&mut self.rng);
                Avatar::Fruit {
                    glyph: fruit.glyph,
                    color: fruit.color,
                }
            }
        };

        let mut links = vec![CardLink {
            label: "LinkedIn".to_string(),
            href: participant.linkedin_url.clone(),
        }];
        if let Some(url) = participant.portfolio_url.as_deref().filter(|s| !s.is_empty()) {
            links.push(CardLink {
                label: "Portfolio".to_string(),
                href: url.to_string(),
            });
        }
        if let Some((name, url)) = participant.project() {
            links.push(CardLink {
                label: name.to_string(),
                href: url.to_string(),
            });
        }

        ParticipantCard {
            id: participant.id,
            name: participant.name.clone(),
            avatar,
            links,
        }
    }
}

impl RenderPass<StdRng> {
    /// A pass seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

// ---------------------------------------------------------------------------
// Unavailable views
// ---------------------------------------------------------------------------

/// Grid shown when the store could not be read.
pub fn unavailable_grid(geometry: GridGeometry) -> GridView {
    let cards = unavailable_slots::<()>(geometry.slot_count())
        .into_iter()
        .map(|slot| match slot {
            Slot::Featured => GridCard::Featured,
            _ => GridCard::Empty,
        })
        .collect();

    GridView {
        geometry,
        featured_index: featured_index(geometry.slot_count()),
        cards,
        highlight_placed: false,
        announcement: Announcement::new(announce::PARTICIPANTS_LOAD_FAILED),
    }
}

pub fn unavailable_participants() -> ParticipantsView {
    ParticipantsView {
        participants: Vec::new(),
        message: Some(PARTICIPANTS_UNAVAILABLE_MESSAGE),
        announcement: Announcement::new(announce::PARTICIPANTS_LOAD_FAILED),
    }
}

pub fn unavailable_projects(mode: ProjectListingMode) -> ProjectsView {
    ProjectsView {
        listing: ProjectListing::build(&[], mode),
        total_links: 0,
        message: Some(PROJECTS_UNAVAILABLE_MESSAGE),
        announcement: Announcement::new(announce::PROJECTS_LOAD_FAILED),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
