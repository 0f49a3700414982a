//! In-memory model of a replay header and the summaries derived from it
//! (duration, map size, team order, matchup and player listing).
//!
//! Decoding a replay file into a [`Header`] happens elsewhere; this crate only
//! holds the decoded values.

pub mod header;
pub mod types;

pub use header::Header;
pub use types::{
    Color, Engine, Frame, GameType, Player, PlayerType, Race, Speed, UnknownIdError,
};
