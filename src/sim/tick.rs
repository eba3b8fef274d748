//! The fixed per-tick update sequence
//!
//! One call advances the session by exactly one frame. The step order is
//! load-bearing: checkpoint capture sees post-physics positions, the frontier
//! check sees the post-follow camera, and scoring sees this tick's stomps.

use crate::consts::*;

use super::state::{PlatformKind, TickEvent};
use super::world::{Phase, World};

/// Input intents sampled once per tick by the embedder.
///
/// `jump` is edge-triggered: the controller consumes it (sets it back to
/// false) after one jump attempt, so a held key does not re-jump on landing.
/// `move_left`/`move_right` are level-triggered; right wins when both are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the world by one tick. A no-op outside `Running`.
pub fn tick(world: &mut World, input: &mut TickInput) {
    if world.phase != Phase::Running {
        return;
    }

    // 1. Translate intents into player control. Right overrides left.
    if input.move_right {
        world.player.move_right(&world.tuning);
    } else if input.move_left {
        world.player.move_left(&world.tuning);
    } else {
        world.player.stop();
    }
    if input.jump {
        world.player.jump(&world.tuning);
        input.jump = false;
    }

    // 2. Player physics and collision
    let right_bound = world.source.right_bound();
    let events = world.player.tick(
        &world.platforms,
        &mut world.enemies,
        &world.tuning,
        right_bound,
    );

    // Interpret combat immediately so this tick's stomps count toward score;
    // hazards are applied at the end of the sequence.
    let mut hazards = 0u32;
    for event in &events {
        match event {
            TickEvent::Stomped { .. } => world.combat_score += STOMP_SCORE,
            TickEvent::Hit | TickEvent::Fell => hazards += 1,
        }
    }

    // 3. Entity-local updates
    for platform in &mut world.platforms {
        platform.tick();
    }
    for enemy in &mut world.enemies {
        enemy.tick();
    }

    // 4. Checkpoint capture: grounded this tick on a platform that fully
    // carries the player.
    if world.player.vel.y == 0.0 {
        let player = &world.player.rect;
        let stance = world.platforms.iter().find(|p| {
            (p.rect.top() - player.bottom()).abs() <= 2.0
                && p.rect.left() <= player.left()
                && player.right() <= p.rect.right()
        });
        if let Some(platform) = stance {
            world.checkpoint.x = player.left();
            world.checkpoint.y = platform.rect.top() - player.size.y;
        }
    }

    // 5. Defeated enemies never survive the tick boundary
    world.enemies.retain(|e| !e.defeated);

    if world.source.scrolls() {
        // 6. Camera follow: exponential smoothing toward a point that keeps
        // 35% of the viewport behind the player.
        let target = world.player.rect.pos.x - CAMERA_AHEAD * VIEW_WIDTH;
        world.camera_x += (target - world.camera_x) * CAMERA_LERP;
        world.camera_x = world.camera_x.max(0.0);

        // 7. Keep generation ahead of the camera
        let difficulty = world.difficulty();
        while world.source.frontier() < world.camera_x + SPAWN_LOOKAHEAD {
            let batch = world.source.extend(difficulty, &world.platforms);
            world.platforms.extend(batch.platforms);
            world.enemies.extend(batch.enemies);
        }

        // 8. Drop entities far behind the camera
        let cutoff = world.camera_x - CLEANUP_MARGIN;
        world.platforms.retain(|p| p.rect.right() >= cutoff);
        world.enemies.retain(|e| e.rect.right() >= cutoff);
    }

    // 9. Goal contact (fixed-level mode; endless terrain has no goals)
    let on_goal = world
        .platforms
        .iter()
        .any(|p| p.kind == PlatformKind::Goal && world.player.rect.overlaps(&p.rect, 0.0));
    if on_goal {
        world.complete_level();
        return;
    }

    // 10. Score is the running max of distance + combat
    world.refresh_score();

    // 11. Hazard contacts cost one life each; the session may end here
    for _ in 0..hazards {
        world.lose_life();
        if world.phase == Phase::GameOver {
            break;
        }
    }
}
