//! Read-only presentation snapshots
//!
//! The render and UI collaborators consume these once per tick. A snapshot is
//! plain data: capturing one never mutates the simulation, and nothing in it
//! lets a renderer reach back in.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Facing, PlatformKind, World};

/// Player draw data
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub jumping: bool,
    /// Frame of the 4-frame run cycle (0 when idle)
    pub frame: u8,
}

/// Platform draw data
#[derive(Debug, Clone, Serialize)]
pub struct PlatformView {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    /// Visual counter for brick shimmer / flag wave
    pub anim_frame: u32,
}

/// Enemy draw data. Defeated enemies never appear here.
#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: Vec2,
    /// Walk direction, used to mirror the sprite
    pub direction: f32,
    /// Visual counter for the eye animation
    pub anim_counter: f32,
}

/// Everything the HUD shows
#[derive(Debug, Clone, Serialize)]
pub struct HudView {
    pub score: u64,
    pub lives: u8,
    /// 1-based level (always 1 in endless mode)
    pub level: u32,
    /// Horizontal distance travelled, in world units
    pub distance: u64,
    pub game_over: bool,
    /// Final score, present once the run has ended
    pub final_score: Option<u64>,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    /// Horizontal scroll offset; subtract from world x to get screen x
    pub camera_x: f32,
    pub player: PlayerView,
    pub platforms: Vec<PlatformView>,
    pub enemies: Vec<EnemyView>,
    pub hud: HudView,
}

impl FrameView {
    pub fn capture(world: &World) -> Self {
        Self {
            camera_x: world.camera_x,
            player: PlayerView {
                pos: world.player.rect.pos,
                size: world.player.rect.size,
                facing: world.player.facing,
                jumping: world.player.jumping,
                frame: world.player.anim_frame,
            },
            platforms: world
                .platforms
                .iter()
                .map(|p| PlatformView {
                    pos: p.rect.pos,
                    size: p.rect.size,
                    kind: p.kind,
                    anim_frame: p.anim_frame,
                })
                .collect(),
            enemies: world
                .enemies
                .iter()
                .filter(|e| !e.defeated)
                .map(|e| EnemyView {
                    pos: e.rect.pos,
                    size: e.rect.size,
                    direction: e.direction,
                    anim_counter: e.anim_counter,
                })
                .collect(),
            hud: HudView::capture(world),
        }
    }
}

impl HudView {
    pub fn capture(world: &World) -> Self {
        Self {
            score: world.score,
            lives: world.lives,
            level: world.level(),
            distance: world.distance(),
            game_over: world.game_over(),
            final_score: world.game_over().then_some(world.score),
        }
    }
}
