use serde::{Deserialize, Serialize};

use super::{Color, PlayerType, Race};

/// A participant of the game, or an open/closed lobby slot.
///
/// Players are immutable once built. The header shares them as `Arc<Player>`
/// so that the same slot can appear in both `Header::slots` and
/// `Header::players`; membership between the two is by pointer identity.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Player {
    slot_id: u16,
    id: u8,
    kind: PlayerType,
    race: Race,
    team: u8,
    name: String,
    color: Color,
}

impl Player {
    pub fn new(
        slot_id: u16,
        id: u8,
        kind: PlayerType,
        race: Race,
        team: u8,
        name: String,
        color: Color,
    ) -> Self {
        Self {
            slot_id,
            id,
            kind,
            race,
            team,
            name,
            color,
        }
    }

    pub fn slot_id(&self) -> u16 {
        self.slot_id
    }

    /// The in-game player ID, distinct from the lobby slot.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn kind(&self) -> PlayerType {
        self.kind
    }

    pub fn race(&self) -> Race {
        self.race
    }

    /// Teams are not necessarily contiguous or zero-based.
    pub fn team(&self) -> u8 {
        self.team
    }

    /// Empty for computer and unoccupied slots.
    pub fn name(&self) -> &'_ str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerType::Human
    }

    pub fn is_computer(&self) -> bool {
        matches!(
            self.kind,
            PlayerType::Computer | PlayerType::ComputerControlled
        )
    }
}
