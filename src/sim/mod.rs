//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - Seeded RNG only (terrain reproduces from a single seed)
//! - Stable iteration order (entities keep insertion order)
//! - No rendering or platform dependencies

pub mod chunk;
pub mod geom;
pub mod source;
pub mod state;
pub mod tick;
pub mod world;

pub use chunk::{Batch, ChunkGenerator};
pub use geom::Rect;
pub use source::{EndlessSource, FixedLevelSource, WorldSource};
pub use state::{Enemy, Facing, Platform, PlatformKind, Player, TickEvent};
pub use tick::{TickInput, tick};
pub use world::{Phase, World};
