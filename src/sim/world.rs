//! Session state and lifecycle
//!
//! The world owns the live entity collections and every mutation of score,
//! lives and camera. Entities report [`super::state::TickEvent`]s; only this
//! controller interprets them. The per-tick sequence lives in [`super::tick`].

use glam::Vec2;

use super::chunk::Batch;
use super::source::WorldSource;
use super::state::{Enemy, Platform, Player};
use crate::consts::*;
use crate::tuning::Tuning;

/// Session phase. `GameOver` and `GameWon` are terminal until `restart`;
/// endless sessions only ever see `Running` and `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Fixed-level mode: goal reached, waiting for `restart` to advance
    LevelComplete,
    /// Fixed-level mode: last goal reached
    GameWon,
    /// Out of lives
    GameOver,
}

/// The live game session
pub struct World {
    pub phase: Phase,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    /// Smoothed horizontal scroll offset, never negative
    pub camera_x: f32,
    /// Last safe grounded stance; respawn target
    pub checkpoint: Vec2,
    /// Monotone session score
    pub score: u64,
    /// Accumulated stomp and level-clear points
    pub combat_score: u64,
    pub lives: u8,
    pub tuning: Tuning,
    pub(crate) source: Box<dyn WorldSource>,
}

impl World {
    /// Build a session over the given terrain source and start it
    pub fn new(source: Box<dyn WorldSource>, tuning: Tuning) -> Self {
        let mut world = Self {
            phase: Phase::Running,
            player: Player::new(Vec2::new(SPAWN_X, SPAWN_Y)),
            platforms: Vec::new(),
            enemies: Vec::new(),
            camera_x: 0.0,
            checkpoint: Vec2::new(SPAWN_X, SPAWN_Y),
            score: 0,
            combat_score: 0,
            lives: START_LIVES,
            tuning,
            source,
        };
        world.start();
        world
    }

    /// Initialize a fresh session: full lives, zero score, terrain from the
    /// source's first level / first chunks, player at the fixed spawn point.
    pub fn start(&mut self) {
        self.source.rewind();
        let initial = self.source.reset();
        self.populate(initial);
        self.lives = START_LIVES;
        self.score = 0;
        self.combat_score = 0;
        self.phase = Phase::Running;
        log::info!("session started: {} platforms live", self.platforms.len());
    }

    /// Leave a terminal or between-levels phase.
    ///
    /// From `LevelComplete` this advances to the next level, carrying score
    /// and lives; from `GameOver` or `GameWon` it starts a fresh session.
    /// A no-op while running.
    pub fn restart(&mut self) {
        match self.phase {
            Phase::LevelComplete => {
                // the source already advanced when the goal was reached
                let batch = self.source.reset();
                self.populate(batch);
                self.phase = Phase::Running;
                log::info!("level {} started", self.source.level());
            }
            Phase::GameOver | Phase::GameWon => self.start(),
            Phase::Running => {}
        }
    }

    /// Replace the live entity sets and reset player/camera/checkpoint
    fn populate(&mut self, batch: Batch) {
        self.platforms = batch.platforms;
        self.enemies = batch.enemies;
        self.player = Player::new(Vec2::new(SPAWN_X, SPAWN_Y));
        self.checkpoint = Vec2::new(SPAWN_X, SPAWN_Y);
        self.camera_x = 0.0;
    }

    /// Difficulty tier derived from the player's distance
    pub fn difficulty(&self) -> u32 {
        let tier = (self.player.rect.pos.x / DIFFICULTY_DISTANCE) as u32;
        tier.min(MAX_DIFFICULTY)
    }

    /// Distance indicator for the HUD
    pub fn distance(&self) -> u64 {
        self.player.rect.pos.x as u64
    }

    /// 1-based level for the HUD (always 1 in endless mode)
    pub fn level(&self) -> u32 {
        self.source.level()
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Fold the distance-derived score into the monotone session score
    pub(crate) fn refresh_score(&mut self) {
        let distance_score = (self.player.rect.pos.x / 10.0).floor() as u64;
        self.score = self.score.max(distance_score + self.combat_score);
    }

    /// Take one life. Ends the session at zero; otherwise respawns a fresh
    /// player at the checkpoint and snaps the camera to it.
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            log::info!("game over: final score {}", self.score);
        } else {
            self.player = Player::new(self.checkpoint);
            if self.source.scrolls() {
                self.camera_x = (self.checkpoint.x - CAMERA_AHEAD * VIEW_WIDTH).max(0.0);
            }
            log::debug!(
                "respawned at checkpoint ({}, {}), {} lives left",
                self.checkpoint.x,
                self.checkpoint.y,
                self.lives
            );
        }
    }

    /// Goal platform reached (fixed-level mode)
    pub(crate) fn complete_level(&mut self) {
        self.combat_score += LEVEL_CLEAR_SCORE;
        self.refresh_score();
        if self.source.advance_level() {
            self.phase = Phase::LevelComplete;
            log::info!("level complete, next up: {}", self.source.level());
        } else {
            self.phase = Phase::GameWon;
            log::info!("all levels clear: final score {}", self.score);
        }
    }
}
