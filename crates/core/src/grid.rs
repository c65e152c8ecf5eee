//! Slot layout for the randomized participant grid.
//!
//! A grid of `S` slots always carries one featured call-to-action card at
//! index `S / 2`. The other `S - 1` general slots are filled with participants
//! or plain empty cards, with filled positions chosen by shuffling a marker
//! sequence. A just-added participant is pinned to the first general slot.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::participant::Participant;
use crate::shuffle::shuffle;
use crate::types::ParticipantId;

pub const DEFAULT_GRID_COLS: u32 = 4;
pub const DEFAULT_GRID_ROWS: u32 = 3;
pub const MAX_GRID_DIMENSION: u32 = 12;

/// Columns and rows of the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub cols: u32,
    pub rows: u32,
}

impl GridGeometry {
    /// Validate both dimensions against `1..=MAX_GRID_DIMENSION`.
    pub fn new(cols: u32, rows: u32) -> Result<Self, CoreError> {
        let range = 1..=MAX_GRID_DIMENSION;
        if !range.contains(&cols) || !range.contains(&rows) {
            return Err(CoreError::Validation(format!(
                "Grid dimensions must be between 1 and {MAX_GRID_DIMENSION}, got {cols}x{rows}"
            )));
        }
        Ok(Self { cols, rows })
    }

    pub fn slot_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cols: DEFAULT_GRID_COLS,
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

/// One position in the laid-out grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Filled { item: T, highlighted: bool },
    Empty,
    Featured,
}

impl<T> Slot<T> {
    pub fn is_filled(&self) -> bool {
        matches!(self, Slot::Filled { .. })
    }
}

/// Index of the featured card in a grid of `slot_count` slots.
pub fn featured_index(slot_count: usize) -> usize {
    slot_count / 2
}

/// Lay out `participants` over `slot_count` slots.
///
/// When `highlight` names a participant present in `participants`, that
/// participant takes general position 0 and is marked highlighted; it is
/// dropped when there is no general slot to hold it (`slot_count == 1`).
pub fn layout_slots<'a, R: Rng>(
    participants: &'a [Participant],
    slot_count: usize,
    highlight: Option<ParticipantId>,
    rng: &mut R,
) -> Result<Vec<Slot<&'a Participant>>, CoreError> {
    if slot_count == 0 {
        return Err(CoreError::Validation(
            "Grid must have at least one slot".to_string(),
        ));
    }

    let general = slot_count - 1;
    let pinned = highlight
        .filter(|_| general > 0)
        .and_then(|id| participants.iter().find(|p| p.id == id));

    let mut slots = Vec::with_capacity(slot_count);
    let mut open_positions = general;

    if let Some(p) = pinned {
        slots.push(Slot::Filled {
            item: p,
            highlighted: true,
        });
        open_positions -= 1;
    }

    let others: Vec<&Participant> = participants
        .iter()
        .filter(|p| !pinned.is_some_and(|pin| pin.id == p.id))
        .collect();

    let filled = others.len().min(open_positions);
    let markers: Vec<bool> = (0..open_positions).map(|i| i < filled).collect();
    let markers = shuffle(&markers, rng);
    let mut queue = shuffle(&others, rng).into_iter();

    for is_filled in markers {
        let slot = match is_filled.then(|| queue.next()).flatten() {
            Some(item) => Slot::Filled {
                item,
                highlighted: false,
            },
            None => Slot::Empty,
        };
        slots.push(slot);
    }

    slots.insert(featured_index(slot_count), Slot::Featured);
    Ok(slots)
}

/// Grid shown when participants could not be loaded: every slot empty,
/// featured card still centered.
pub fn unavailable_slots<T>(slot_count: usize) -> Vec<Slot<T>> {
    let center = featured_index(slot_count);
    (0..slot_count)
        .map(|i| if i == center { Slot::Featured } else { Slot::Empty })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
