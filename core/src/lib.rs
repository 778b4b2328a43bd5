#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use moves::*;
pub use reward::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod controller;
mod error;
mod generator;
mod grid;
mod moves;
mod reward;
mod tile;
mod types;
mod view;

/// Shuffle steps for a normal game.
pub const PRODUCTION_SHUFFLE_STEPS: u32 = 1000;

/// Shuffle steps in development mode, one slide from solved.
pub const DEVELOPMENT_SHUFFLE_STEPS: u32 = 1;

pub const DEFAULT_CHALLENGE_TITLE: &str = "The Controller";

/// Settings read once when the puzzle is mounted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub shuffle_steps: u32,
    pub image_set: ImageSet,
    pub challenge_title: String,
    pub network: Network,
}

impl PuzzleConfig {
    pub fn development() -> Self {
        Self {
            shuffle_steps: DEVELOPMENT_SHUFFLE_STEPS,
            ..Self::default()
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            shuffle_steps: PRODUCTION_SHUFFLE_STEPS,
            image_set: ImageSet::default(),
            challenge_title: String::from(DEFAULT_CHALLENGE_TITLE),
            network: Network::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected,
    Moved,
    Solved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Rejected => false,
            Self::Moved | Self::Solved => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShuffleProgress {
    Stepped,
    Done,
}

/// What became of a settled mint handed to the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MintApplied {
    Recorded,
    Stale,
}

impl MintApplied {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Recorded)
    }
}
