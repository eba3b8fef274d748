//! Terrain sources
//!
//! One `World` runs both game variants behind this seam: the endless
//! procedural generator and the five authored fixed levels. The controller
//! only ever talks to the trait; it does not know which variant is live.

use crate::consts::*;

use super::chunk::{Batch, ChunkGenerator};
use super::state::{Enemy, Platform, PlatformKind};

/// Where terrain comes from
pub trait WorldSource {
    /// Rewind to the start of a fresh session (level 1 / world-x 0)
    fn rewind(&mut self) {}

    /// Initial terrain for the current session or level. Also resets the
    /// generation frontier for sources that have one.
    fn reset(&mut self) -> Batch;

    /// World-x up to which terrain exists. Fixed layouts never run out and
    /// report infinity.
    fn frontier(&self) -> f32;

    /// Emit one more slice of terrain at the frontier. `existing` is the live
    /// platform set, used to keep new placements clear of old ones.
    fn extend(&mut self, difficulty: u32, existing: &[Platform]) -> Batch;

    /// Right wall of the world, if any (fixed-level mode)
    fn right_bound(&self) -> Option<f32> {
        None
    }

    /// Whether the viewport scrolls. Scrolling worlds get camera follow and
    /// behind-the-camera cleanup; fixed layouts are a static screen.
    fn scrolls(&self) -> bool {
        true
    }

    /// Step to the next level; false when there is none (run is won)
    fn advance_level(&mut self) -> bool {
        false
    }

    /// 1-based level for the HUD
    fn level(&self) -> u32 {
        1
    }
}

/// Endless procedural terrain driven by the chunk generator
pub struct EndlessSource {
    seed: u64,
    generator: ChunkGenerator,
    next_spawn_x: f32,
}

/// Chunks pre-generated at session start
const INITIAL_CHUNKS: u32 = 3;

impl EndlessSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            generator: ChunkGenerator::new(seed),
            next_spawn_x: 0.0,
        }
    }
}

impl WorldSource for EndlessSource {
    fn reset(&mut self) -> Batch {
        // Fresh RNG stream: a session's terrain reproduces from the seed
        self.generator = ChunkGenerator::new(self.seed);
        self.next_spawn_x = 0.0;

        let mut initial = Batch::default();
        for _ in 0..INITIAL_CHUNKS {
            let batch = self.extend(0, &initial.platforms);
            initial.platforms.extend(batch.platforms);
            initial.enemies.extend(batch.enemies);
        }
        initial
    }

    fn frontier(&self) -> f32 {
        self.next_spawn_x
    }

    fn extend(&mut self, difficulty: u32, existing: &[Platform]) -> Batch {
        let batch = self
            .generator
            .generate(self.next_spawn_x, difficulty, existing);
        self.next_spawn_x += CHUNK_WIDTH;
        batch
    }
}

/// The five authored layouts, in play order
pub struct FixedLevelSource {
    current: usize,
}

impl FixedLevelSource {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn level_count() -> usize {
        LEVELS.len()
    }
}

impl Default for FixedLevelSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldSource for FixedLevelSource {
    fn rewind(&mut self) {
        self.current = 0;
    }

    fn reset(&mut self) -> Batch {
        LEVELS[self.current].build()
    }

    fn frontier(&self) -> f32 {
        f32::INFINITY
    }

    fn extend(&mut self, _difficulty: u32, _existing: &[Platform]) -> Batch {
        Batch::default()
    }

    fn right_bound(&self) -> Option<f32> {
        Some(VIEW_WIDTH)
    }

    fn scrolls(&self) -> bool {
        false
    }

    fn advance_level(&mut self) -> bool {
        if self.current + 1 < LEVELS.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn level(&self) -> u32 {
        self.current as u32 + 1
    }
}

/// Compact authored-level notation: (x, y, w, h, kind) and (x, y)
struct LevelDef {
    platforms: &'static [(f32, f32, f32, f32, PlatformKind)],
    enemies: &'static [(f32, f32)],
}

impl LevelDef {
    fn build(&self) -> Batch {
        Batch {
            platforms: self
                .platforms
                .iter()
                .map(|&(x, y, w, h, kind)| Platform::new(x, y, w, h, kind))
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|&(x, y)| Enemy::new(x, y, 2.0))
                .collect(),
        }
    }
}

use super::state::PlatformKind::{Goal, Moving, Normal};

static LEVELS: [LevelDef; 5] = [
    // Level 1 - easy warmup
    LevelDef {
        platforms: &[
            (0.0, 550.0, 800.0, 50.0, Normal), // ground
            (100.0, 480.0, 150.0, 20.0, Normal),
            (350.0, 430.0, 150.0, 20.0, Normal),
            (600.0, 480.0, 150.0, 20.0, Normal),
            (250.0, 320.0, 150.0, 20.0, Normal),
            (500.0, 250.0, 200.0, 20.0, Goal),
        ],
        enemies: &[(100.0, 450.0), (350.0, 400.0)],
    },
    // Level 2 - introduces a moving platform
    LevelDef {
        platforms: &[
            (0.0, 550.0, 800.0, 50.0, Normal),
            (50.0, 470.0, 120.0, 20.0, Normal),
            (250.0, 430.0, 120.0, 20.0, Normal),
            (450.0, 470.0, 120.0, 20.0, Moving),
            (650.0, 420.0, 120.0, 20.0, Normal),
            (200.0, 320.0, 150.0, 20.0, Normal),
            (550.0, 280.0, 150.0, 20.0, Normal),
            (300.0, 150.0, 200.0, 20.0, Goal),
        ],
        enemies: &[(250.0, 400.0), (450.0, 440.0), (200.0, 290.0)],
    },
    // Level 3
    LevelDef {
        platforms: &[
            (0.0, 550.0, 800.0, 50.0, Normal),
            (100.0, 480.0, 100.0, 20.0, Normal),
            (300.0, 450.0, 120.0, 20.0, Moving),
            (550.0, 480.0, 100.0, 20.0, Normal),
            (150.0, 360.0, 120.0, 20.0, Normal),
            (450.0, 330.0, 120.0, 20.0, Moving),
            (300.0, 220.0, 120.0, 20.0, Normal),
            (650.0, 200.0, 100.0, 20.0, Normal),
            (250.0, 80.0, 200.0, 20.0, Goal),
        ],
        enemies: &[
            (300.0, 420.0),
            (550.0, 450.0),
            (150.0, 330.0),
            (450.0, 300.0),
        ],
    },
    // Level 4
    LevelDef {
        platforms: &[
            (0.0, 550.0, 800.0, 50.0, Normal),
            (80.0, 490.0, 100.0, 20.0, Normal),
            (280.0, 460.0, 100.0, 20.0, Moving),
            (520.0, 490.0, 100.0, 20.0, Normal),
            (700.0, 430.0, 80.0, 20.0, Normal),
            (150.0, 380.0, 100.0, 20.0, Normal),
            (400.0, 340.0, 100.0, 20.0, Moving),
            (650.0, 300.0, 100.0, 20.0, Normal),
            (200.0, 240.0, 120.0, 20.0, Normal),
            (500.0, 200.0, 120.0, 20.0, Moving),
            (300.0, 100.0, 200.0, 20.0, Goal),
        ],
        enemies: &[
            (280.0, 430.0),
            (520.0, 460.0),
            (150.0, 350.0),
            (400.0, 310.0),
            (200.0, 210.0),
        ],
    },
    // Level 5 - dense, mostly moving
    LevelDef {
        platforms: &[
            (0.0, 550.0, 800.0, 50.0, Normal),
            (70.0, 500.0, 80.0, 20.0, Normal),
            (250.0, 480.0, 90.0, 20.0, Moving),
            (500.0, 510.0, 80.0, 20.0, Normal),
            (720.0, 470.0, 80.0, 20.0, Normal),
            (150.0, 420.0, 90.0, 20.0, Moving),
            (380.0, 390.0, 90.0, 20.0, Normal),
            (650.0, 360.0, 90.0, 20.0, Moving),
            (50.0, 300.0, 100.0, 20.0, Normal),
            (300.0, 270.0, 100.0, 20.0, Moving),
            (550.0, 300.0, 100.0, 20.0, Normal),
            (200.0, 180.0, 120.0, 20.0, Normal),
            (500.0, 140.0, 120.0, 20.0, Moving),
            (350.0, 50.0, 200.0, 20.0, Goal),
        ],
        enemies: &[
            (250.0, 450.0),
            (500.0, 480.0),
            (150.0, 390.0),
            (380.0, 360.0),
            (650.0, 330.0),
            (300.0, 240.0),
            (200.0, 150.0),
        ],
    },
];
