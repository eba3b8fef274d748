//! Data-driven game balance
//!
//! The physics knobs live in one struct so playtesting can adjust them
//! without a rebuild. Defaults match the shipped constants; a JSON file named
//! by `SKYRUNNER_TUNING` overrides them, and anything unreadable falls back
//! to defaults with a warning rather than failing the session.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player physics tuning, threaded into the player tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_strength: f32,
    pub max_fall_speed: f32,
    pub player_speed: f32,
    pub animation_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            max_fall_speed: MAX_FALL_SPEED,
            player_speed: PLAYER_SPEED,
            animation_speed: ANIMATION_SPEED,
        }
    }
}

impl Tuning {
    /// Load tuning from the file named by `SKYRUNNER_TUNING`.
    ///
    /// No variable set means defaults, quietly. A set variable pointing at a
    /// missing or unparseable file also means defaults, with a warning.
    pub fn load() -> Self {
        let Ok(path) = std::env::var("SKYRUNNER_TUNING") else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("failed to parse {path}: {e}, using default tuning");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {path}: {e}, using default tuning");
                Self::default()
            }
        }
    }
}
