//! The replay header: game-level metadata plus the players of the game.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Engine, Frame, GameType, Player, Speed};

mod views;

/// Metadata of a recorded game.
///
/// A `Header` is filled in once by whatever decodes the replay and is then
/// only read. The decoder is responsible for handing over well-formed data:
/// every entry of `players` must also be an entry of `slots` (the same
/// `Arc`), and no field is range-checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    pub engine: Engine,
    pub frames: Frame,
    pub start_time: DateTime<Utc>,
    pub title: String,
    pub map_width: u16,
    pub map_height: u16,
    pub avail_slots_count: u8,
    pub speed: Speed,
    pub game_type: GameType,
    /// Size of the "home" team, e.g. 3 for a 3v5 and 7 for a 7v1.
    pub sub_type: u16,
    /// Name of the game's creator.
    pub host: String,
    pub map: String,
    /// Every lobby slot, including open and closed ones. Not serialized.
    #[serde(skip)]
    pub slots: Vec<Arc<Player>>,
    /// The actual players, in the order the decoder found them.
    pub players: Vec<Arc<Player>>,
    /// `players` in team order, computed on first use and never refreshed.
    #[serde(skip)]
    team_players: OnceLock<Vec<Arc<Player>>>,
}

impl Header {
    pub fn new(engine: Engine, frames: Frame, start_time: DateTime<Utc>) -> Self {
        Self {
            engine,
            frames,
            start_time,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        self.frames.duration()
    }

    /// The map size in `widthxheight` format, e.g. "128x128".
    pub fn map_size(&self) -> String {
        format!("{}x{}", self.map_width, self.map_height)
    }

    /// The actual players, stably sorted by team.
    ///
    /// The order is computed on the first call and kept for the lifetime of
    /// the header: changing `players` afterwards is not reflected here.
    pub fn team_players(&self) -> &'_ [Arc<Player>] {
        self.team_players.get_or_init(|| {
            let mut ordered = self.players.clone();
            ordered.sort_by_key(|p| p.team());
            log::trace!("ordered {} players by team", ordered.len());
            ordered
        })
    }

    /// Race letters in team order, with a `v` between teams, e.g. "PvT" or
    /// "PTZvZTP".
    pub fn matchup(&self) -> String {
        views::join_by_team(self.team_players(), "", "v", |out, p| {
            out.push(p.race().letter())
        })
    }

    /// Comma-separated player names in team order, with " VS " between
    /// teams, e.g. "Alice, Bob VS Carol".
    pub fn player_names(&self) -> String {
        views::join_by_team(self.team_players(), ", ", " VS ", |out, p| {
            out.push_str(p.name())
        })
    }

    /// Whether `player` is one of this header's slots (by identity, not by
    /// value).
    pub fn is_slot(&self, player: &Arc<Player>) -> bool {
        self.slots.iter().any(|s| Arc::ptr_eq(s, player))
    }
}
