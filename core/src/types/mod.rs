//! Value types the replay header is built from.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod players;

pub use players::Player;

/// A number of game frames. There are approximately ~23.81 frames in a
/// second (one frame is exactly 42ms).
#[derive(
    Debug, Copy, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
#[serde(transparent)]
pub struct Frame(pub u32);

impl Frame {
    /// Wall-clock length of a single frame.
    pub const DURATION: Duration = Duration::from_millis(42);

    pub fn milliseconds(self) -> u64 {
        u64::from(self.0) * 42
    }

    pub fn seconds(self) -> u64 {
        self.milliseconds() / 1000
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(self.milliseconds())
    }
}

/// Formats as `m:ss`, or `h:mm:ss` once the frame count passes an hour.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sec = self.seconds();
        let hours = sec / 3600;
        if hours > 0 {
            write!(f, "{}:{:02}:{:02}", hours, sec % 3600 / 60, sec % 60)
        } else {
            write!(f, "{}:{:02}", sec / 60, sec % 60)
        }
    }
}

/// The engine (game edition) the replay was recorded with.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Engine {
    StarCraft,
    #[default]
    BroodWar,
}

impl Engine {
    pub fn from_id(id: u8) -> Result<Self, UnknownIdError> {
        match id {
            0x00 => Ok(Engine::StarCraft),
            0x01 => Ok(Engine::BroodWar),
            _ => Err(UnknownIdError::Engine(id)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Engine::StarCraft => 0x00,
            Engine::BroodWar => 0x01,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::StarCraft => "StarCraft",
            Engine::BroodWar => "Brood War",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Engine::StarCraft => "SC",
            Engine::BroodWar => "BW",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Speed {
    Slowest,
    Slower,
    Slow,
    Normal,
    Fast,
    Faster,
    #[default]
    Fastest,
}

impl Speed {
    const ALL: [Speed; 7] = [
        Speed::Slowest,
        Speed::Slower,
        Speed::Slow,
        Speed::Normal,
        Speed::Fast,
        Speed::Faster,
        Speed::Fastest,
    ];

    pub fn from_id(id: u8) -> Result<Self, UnknownIdError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(UnknownIdError::Speed(id))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slowest => "Slowest",
            Speed::Slower => "Slower",
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::Faster => "Faster",
            Speed::Fastest => "Fastest",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum GameType {
    #[default]
    Melee,
    FreeForAll,
    OneOnOne,
    CaptureTheFlag,
    Greed,
    Slaughter,
    SuddenDeath,
    Ladder,
    UseMapSettings,
    TeamMelee,
    TeamFreeForAll,
    TeamCaptureTheFlag,
    TopVsBottom,
    IronManLadder,
}

impl GameType {
    const ALL: [GameType; 14] = [
        GameType::Melee,
        GameType::FreeForAll,
        GameType::OneOnOne,
        GameType::CaptureTheFlag,
        GameType::Greed,
        GameType::Slaughter,
        GameType::SuddenDeath,
        GameType::Ladder,
        GameType::UseMapSettings,
        GameType::TeamMelee,
        GameType::TeamFreeForAll,
        GameType::TeamCaptureTheFlag,
        GameType::TopVsBottom,
        GameType::IronManLadder,
    ];

    pub fn from_id(id: u16) -> Result<Self, UnknownIdError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.id() == id)
            .ok_or(UnknownIdError::GameType(id))
    }

    /// The on-disk ID. Note: 0x0e is not assigned.
    pub fn id(self) -> u16 {
        match self {
            GameType::Melee => 0x02,
            GameType::FreeForAll => 0x03,
            GameType::OneOnOne => 0x04,
            GameType::CaptureTheFlag => 0x05,
            GameType::Greed => 0x06,
            GameType::Slaughter => 0x07,
            GameType::SuddenDeath => 0x08,
            GameType::Ladder => 0x09,
            GameType::UseMapSettings => 0x0a,
            GameType::TeamMelee => 0x0b,
            GameType::TeamFreeForAll => 0x0c,
            GameType::TeamCaptureTheFlag => 0x0d,
            GameType::TopVsBottom => 0x0f,
            GameType::IronManLadder => 0x10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameType::Melee => "Melee",
            GameType::FreeForAll => "Free For All",
            GameType::OneOnOne => "One on One",
            GameType::CaptureTheFlag => "Capture The Flag",
            GameType::Greed => "Greed",
            GameType::Slaughter => "Slaughter",
            GameType::SuddenDeath => "Sudden Death",
            GameType::Ladder => "Ladder",
            GameType::UseMapSettings => "Use map settings",
            GameType::TeamMelee => "Team Melee",
            GameType::TeamFreeForAll => "Team Free For All",
            GameType::TeamCaptureTheFlag => "Team Capture The Flag",
            GameType::TopVsBottom => "Top vs Bottom",
            GameType::IronManLadder => "Iron Man Ladder",
        }
    }
}

/// What occupies a lobby slot.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum PlayerType {
    Inactive,
    Computer,
    Human,
    RescuePassive,
    Unused,
    ComputerControlled,
    Open,
    Neutral,
    Closed,
}

impl PlayerType {
    const ALL: [PlayerType; 9] = [
        PlayerType::Inactive,
        PlayerType::Computer,
        PlayerType::Human,
        PlayerType::RescuePassive,
        PlayerType::Unused,
        PlayerType::ComputerControlled,
        PlayerType::Open,
        PlayerType::Neutral,
        PlayerType::Closed,
    ];

    pub fn from_id(id: u8) -> Result<Self, UnknownIdError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(UnknownIdError::PlayerType(id))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerType::Inactive => "Inactive",
            PlayerType::Computer => "Computer",
            PlayerType::Human => "Human",
            PlayerType::RescuePassive => "Rescue Passive",
            PlayerType::Unused => "(Unused)",
            PlayerType::ComputerControlled => "Computer Controlled",
            PlayerType::Open => "Open",
            PlayerType::Neutral => "Neutral",
            PlayerType::Closed => "Closed",
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Race {
    Zerg,
    Terran,
    Protoss,
}

impl Race {
    pub fn from_id(id: u8) -> Result<Self, UnknownIdError> {
        match id {
            0x00 => Ok(Race::Zerg),
            0x01 => Ok(Race::Terran),
            0x02 => Ok(Race::Protoss),
            _ => Err(UnknownIdError::Race(id)),
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Race::Zerg => "Zerg",
            Race::Terran => "Terran",
            Race::Protoss => "Protoss",
        }
    }

    /// The single letter used in matchup strings, e.g. `'P'` in "PvT".
    pub fn letter(self) -> char {
        match self {
            Race::Zerg => 'Z',
            Race::Terran => 'T',
            Race::Protoss => 'P',
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Color {
    Red,
    Blue,
    Teal,
    Purple,
    Orange,
    Brown,
    White,
    Yellow,
    Green,
    PaleYellow,
    Tan,
    DarkAqua,
}

impl Color {
    const ALL: [Color; 12] = [
        Color::Red,
        Color::Blue,
        Color::Teal,
        Color::Purple,
        Color::Orange,
        Color::Brown,
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::PaleYellow,
        Color::Tan,
        Color::DarkAqua,
    ];

    pub fn from_id(id: u8) -> Result<Self, UnknownIdError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(UnknownIdError::Color(id))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Teal => "Teal",
            Color::Purple => "Purple",
            Color::Orange => "Orange",
            Color::Brown => "Brown",
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::PaleYellow => "Pale Yellow",
            Color::Tan => "Tan",
            Color::DarkAqua => "Dark Aqua",
        }
    }

    /// The in-game color as `0xRRGGBB`.
    pub fn rgb(self) -> u32 {
        match self {
            Color::Red => 0xf4_04_04,
            Color::Blue => 0x0c_48_cc,
            Color::Teal => 0x2c_b4_94,
            Color::Purple => 0x88_40_9c,
            Color::Orange => 0xf8_8c_14,
            Color::Brown => 0x70_30_14,
            Color::White => 0xcc_e0_d0,
            Color::Yellow => 0xfc_fc_38,
            Color::Green => 0x08_80_08,
            Color::PaleYellow => 0xfc_fc_7c,
            Color::Tan => 0xec_c4_b0,
            Color::DarkAqua => 0x40_68_d4,
        }
    }
}

macro_rules! display_by_name {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(Engine, Speed, GameType, PlayerType, Race, Color);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnknownIdError {
    #[error("Unknown engine ID {0:#04x}")]
    Engine(u8),
    #[error("Unknown game speed ID {0:#04x}")]
    Speed(u8),
    #[error("Unknown game type ID {0:#06x}")]
    GameType(u16),
    #[error("Unknown player type ID {0:#04x}")]
    PlayerType(u8),
    #[error("Unknown race ID {0:#04x}")]
    Race(u8),
    #[error("Unknown color ID {0:#04x}")]
    Color(u8),
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Color, Engine, Frame, GameType, PlayerType, Race, Speed, UnknownIdError};

    #[test]
    pub fn test_frame_duration() {
        assert_eq!(Frame(0).duration(), Duration::from_secs(0));
        assert_eq!(Frame(1).duration(), Frame::DURATION);
        assert_eq!(Frame(1).duration(), Duration::from_millis(42));
        // 10 minutes of game time at fastest speed.
        assert_eq!(Frame(14_286).seconds(), 600);
        assert_eq!(Frame(u32::MAX).milliseconds(), u64::from(u32::MAX) * 42);
    }

    #[test]
    pub fn test_frame_display() {
        assert_eq!(Frame(0).to_string(), "0:00");
        assert_eq!(Frame(1_000).to_string(), "0:42");
        assert_eq!(Frame(14_286).to_string(), "10:00");
        // 3725s = 1h 2m 5s
        assert_eq!(Frame(88_691).to_string(), "1:02:05");
    }

    #[test]
    pub fn test_lookup_known_ids() {
        for id in 0..=1 {
            assert_eq!(Engine::from_id(id).unwrap().id(), id);
        }
        for id in 0..=6 {
            assert_eq!(Speed::from_id(id).unwrap().id(), id);
        }
        for id in (0x02..=0x0d).chain(0x0f..=0x10) {
            assert_eq!(GameType::from_id(id).unwrap().id(), id);
        }
        for id in 0..=8 {
            assert_eq!(PlayerType::from_id(id).unwrap().id(), id);
        }
        for id in 0..=2 {
            assert_eq!(Race::from_id(id).unwrap().id(), id);
        }
        for id in 0..=11 {
            assert_eq!(Color::from_id(id).unwrap().id(), id);
        }
    }

    #[test]
    pub fn test_lookup_unknown_ids() {
        assert_eq!(Engine::from_id(2).unwrap_err(), UnknownIdError::Engine(2));
        assert_eq!(Speed::from_id(7).unwrap_err(), UnknownIdError::Speed(7));
        assert_eq!(
            GameType::from_id(0x0e).unwrap_err(),
            UnknownIdError::GameType(0x0e)
        );
        assert_eq!(
            PlayerType::from_id(9).unwrap_err(),
            UnknownIdError::PlayerType(9)
        );
        assert_eq!(Race::from_id(6).unwrap_err(), UnknownIdError::Race(6));
        assert_eq!(Color::from_id(0xff).unwrap_err(), UnknownIdError::Color(0xff));
        assert_eq!(
            Race::from_id(6).unwrap_err().to_string(),
            "Unknown race ID 0x06"
        );
    }

    #[test]
    pub fn test_race_letters_and_display() {
        assert_eq!(Race::Zerg.letter(), 'Z');
        assert_eq!(Race::Terran.letter(), 'T');
        assert_eq!(Race::Protoss.letter(), 'P');
        assert_eq!(Race::Protoss.to_string(), "Protoss");
        assert_eq!(Engine::BroodWar.to_string(), "Brood War");
        assert_eq!(Engine::BroodWar.short_name(), "BW");
        assert_eq!(Color::Red.rgb(), 0xf4_04_04);
    }
}
