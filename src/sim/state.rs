//! Entity models and their local update rules
//!
//! Entities never reach into session state: anything that affects score or
//! lives is reported as a [`TickEvent`] and interpreted by the world
//! controller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Gameplay outcome of one player tick, consumed by the world controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Landed on an enemy; it is now defeated
    Stomped { at: Vec2 },
    /// Touched a live enemy without stomping it
    Hit,
    /// Fell below the play field
    Fell,
}

/// The player character
///
/// Replaced wholesale on respawn; only the checkpoint coordinates held by the
/// world survive a life loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub jumping: bool,
    pub facing: Facing,
    pub moving: bool,
    /// Run-cycle phase accumulator, rolls over into `anim_frame`
    #[serde(skip)]
    pub anim_phase: f32,
    /// Current frame of the 4-frame run cycle
    #[serde(skip)]
    pub anim_frame: u8,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            rect: Rect {
                pos: spawn,
                size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            },
            vel: Vec2::ZERO,
            jumping: false,
            facing: Facing::Right,
            moving: false,
            anim_phase: 0.0,
            anim_frame: 0,
        }
    }

    pub fn move_left(&mut self, tuning: &Tuning) {
        self.vel.x = -tuning.player_speed;
        self.facing = Facing::Left;
        self.moving = true;
    }

    pub fn move_right(&mut self, tuning: &Tuning) {
        self.vel.x = tuning.player_speed;
        self.facing = Facing::Right;
        self.moving = true;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
        self.moving = false;
    }

    /// Start a jump. Gated on `jumping`: no double jump, and holding the
    /// intent has no effect until a landing clears the flag.
    pub fn jump(&mut self, tuning: &Tuning) {
        if !self.jumping {
            self.vel.y = -tuning.jump_strength;
            self.jumping = true;
        }
    }

    /// Advance the player one tick against the current terrain and enemy set.
    ///
    /// Landing uses the previous-tick bottom edge (`bottom() - vel.y`) tested
    /// against a tolerance band below the surface top. This is a
    /// landed-on-top-this-tick heuristic, not swept collision: side and
    /// underside contacts with platforms are not resolved, and a fast fall
    /// can step past a thin surface. Both are intended behavior.
    pub fn tick(
        &mut self,
        platforms: &[Platform],
        enemies: &mut [Enemy],
        tuning: &Tuning,
        right_bound: Option<f32>,
    ) -> Vec<TickEvent> {
        // Gravity, clamped to terminal fall speed. Applied even when grounded;
        // the platform pass below re-establishes grounding each tick.
        self.vel.y += tuning.gravity;
        self.vel.y = self.vel.y.min(tuning.max_fall_speed);

        self.rect.pos += self.vel;

        // Left wall at x = 0; right wall only in fixed-level mode
        if self.rect.pos.x < 0.0 {
            self.rect.pos.x = 0.0;
        }
        if let Some(bound) = right_bound {
            let max_x = bound - self.rect.size.x;
            if self.rect.pos.x > max_x {
                self.rect.pos.x = max_x;
            }
        }

        let mut events = Vec::new();

        // Platform landing. A snap zeroes vel.y, which disqualifies any later
        // platform in the same pass (the falling test fails) - same shape as
        // the enemy check below.
        for platform in platforms {
            if self.rect.overlaps(&platform.rect, 0.0)
                && self.vel.y > 0.0
                && self.rect.bottom() - self.vel.y <= platform.rect.top() + LANDING_TOLERANCE
            {
                self.rect.pos.y = platform.rect.top() - self.rect.size.y;
                self.vel.y = 0.0;
                self.jumping = false;
            }
        }

        // Enemy contact: stomp when falling onto the top band, otherwise a
        // hit. One outcome per overlapping enemy, in iteration order; the
        // stomp bounce flips vel.y upward, so a second enemy overlapped in
        // the same tick registers as a hit.
        for enemy in enemies.iter_mut() {
            if enemy.defeated || !self.rect.overlaps(&enemy.rect, 0.0) {
                continue;
            }
            if self.vel.y > 0.0
                && self.rect.bottom() - self.vel.y <= enemy.rect.top() + LANDING_TOLERANCE
            {
                enemy.defeated = true;
                self.vel.y = STOMP_BOUNCE;
                self.jumping = true;
                events.push(TickEvent::Stomped {
                    at: enemy.rect.center(),
                });
            } else {
                events.push(TickEvent::Hit);
            }
        }

        if self.rect.pos.y > FALL_LIMIT {
            events.push(TickEvent::Fell);
        }

        // Run-cycle animation; cosmetic but deterministic
        if self.moving {
            self.anim_phase += tuning.animation_speed;
            if self.anim_phase >= 1.0 {
                self.anim_phase = 0.0;
                self.anim_frame = (self.anim_frame + 1) % 4;
            }
        } else {
            self.anim_frame = 0;
        }

        events
    }
}

/// Terrain kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Oscillates horizontally around its origin
    Moving,
    /// Touching it completes the level (fixed-level mode only)
    Goal,
}

/// A terrain segment or obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    /// Signed horizontal speed; flips at the oscillation boundary
    pub move_speed: f32,
    /// Oscillation half-range around `origin_x`
    pub move_range: f32,
    /// Center of oscillation
    pub origin_x: f32,
    /// Visual-only counter (brick shimmer, flag wave), wraps mod 60
    #[serde(skip)]
    pub anim_frame: u32,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
            move_speed: PLATFORM_MOVE_SPEED,
            move_range: OSC_RANGE,
            origin_x: x,
            anim_frame: 0,
        }
    }

    /// Oscillate if Moving; Normal and Goal platforms are static.
    /// x never leaves `[origin_x - move_range, origin_x + move_range]`; the
    /// crossing step is clamped to the boundary and the direction flips.
    pub fn tick(&mut self) {
        if self.kind == PlatformKind::Moving {
            self.rect.pos.x += self.move_speed;
            if (self.rect.pos.x - self.origin_x).abs() > self.move_range {
                self.rect.pos.x = self
                    .rect
                    .pos
                    .x
                    .clamp(self.origin_x - self.move_range, self.origin_x + self.move_range);
                self.move_speed = -self.move_speed;
            }
        }
        self.anim_frame = (self.anim_frame + 1) % 60;
    }
}

/// A hostile mobile obstacle
///
/// Once `defeated` it is a tombstone: it no longer moves, animates, or
/// collides, and the world removes it at the end of the same tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    /// Walk direction, +1 or -1
    pub direction: f32,
    pub origin_x: f32,
    pub move_range: f32,
    pub defeated: bool,
    /// Visual-only counter driving the eye animation
    #[serde(skip)]
    pub anim_counter: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            speed,
            direction: 1.0,
            origin_x: x,
            move_range: OSC_RANGE,
            defeated: false,
            anim_counter: 0.0,
        }
    }

    /// Patrol around the origin; same clamped oscillation as a Moving platform
    pub fn tick(&mut self) {
        if self.defeated {
            return;
        }
        self.rect.pos.x += self.speed * self.direction;
        if (self.rect.pos.x - self.origin_x).abs() > self.move_range {
            self.rect.pos.x = self
                .rect
                .pos
                .x
                .clamp(self.origin_x - self.move_range, self.origin_x + self.move_range);
            self.direction = -self.direction;
        }
        self.anim_counter += 0.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y))
    }

    #[test]
    fn gravity_accumulates_and_clamps() {
        let mut player = player_at(50.0, 100.0);
        let t = tuning();
        for _ in 0..100 {
            player.tick(&[], &mut [], &t, None);
            assert!(
                player.vel.y <= t.max_fall_speed,
                "fall speed exceeded clamp: {}",
                player.vel.y
            );
        }
        assert_eq!(player.vel.y, t.max_fall_speed);
    }

    #[test]
    fn left_wall_clamps_x() {
        let mut player = player_at(2.0, 100.0);
        let t = tuning();
        player.move_left(&t);
        player.tick(&[], &mut [], &t, None);
        assert_eq!(player.rect.pos.x, 0.0);
    }

    #[test]
    fn right_bound_clamps_in_fixed_mode() {
        let mut player = player_at(VIEW_WIDTH - PLAYER_WIDTH - 1.0, 100.0);
        let t = tuning();
        player.move_right(&t);
        player.tick(&[], &mut [], &t, Some(VIEW_WIDTH));
        assert_eq!(player.rect.pos.x, VIEW_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn jump_sets_velocity_once() {
        let mut player = player_at(50.0, 480.0);
        let t = tuning();
        player.jump(&t);
        assert_eq!(player.vel.y, -t.jump_strength);
        assert!(player.jumping);

        // Second jump before landing is ignored
        player.vel.y = -3.0;
        player.jump(&t);
        assert_eq!(player.vel.y, -3.0);
    }

    #[test]
    fn falling_player_lands_on_platform() {
        let platform = Platform::new(0.0, 500.0, 200.0, 20.0, PlatformKind::Normal);
        let mut player = player_at(50.0, 500.0 - PLAYER_HEIGHT - 4.0);
        player.jumping = true;
        let t = tuning();

        let mut landed = false;
        for _ in 0..10 {
            player.tick(std::slice::from_ref(&platform), &mut [], &t, None);
            if player.vel.y == 0.0 && !player.jumping {
                landed = true;
                break;
            }
        }
        assert!(landed, "player should land within a few ticks");
        assert_eq!(player.rect.bottom(), platform.rect.top());
    }

    #[test]
    fn rising_player_passes_through_platform() {
        let platform = Platform::new(0.0, 400.0, 200.0, 20.0, PlatformKind::Normal);
        let mut player = player_at(50.0, 430.0);
        let t = tuning();
        player.jump(&t);
        player.tick(std::slice::from_ref(&platform), &mut [], &t, None);

        // Moving upward: no landing, no snap
        assert!(player.vel.y < 0.0);
        assert!(player.jumping);
    }

    #[test]
    fn deep_side_overlap_does_not_land() {
        // Player center overlaps the platform side, previous bottom edge well
        // below the tolerance band: the heuristic leaves it clipped through.
        let platform = Platform::new(100.0, 400.0, 100.0, 100.0, PlatformKind::Normal);
        let mut player = player_at(90.0, 440.0);
        player.vel.y = 2.0;
        let t = tuning();
        player.tick(std::slice::from_ref(&platform), &mut [], &t, None);
        assert!(player.vel.y > 0.0, "side contact must not count as landing");
    }

    #[test]
    fn stomp_defeats_enemy_and_bounces() {
        let mut enemy = Enemy::new(48.0, 480.0, 2.0);
        // Falling at vy=5, previous bottom edge just above the enemy top band
        let mut player = player_at(50.0, 480.0 - PLAYER_HEIGHT);
        player.vel.y = 4.5;
        let t = tuning();

        let events = player.tick(&[], std::slice::from_mut(&mut enemy), &t, None);
        assert!(enemy.defeated);
        assert_eq!(player.vel.y, STOMP_BOUNCE);
        assert!(player.jumping);
        assert!(matches!(events.as_slice(), [TickEvent::Stomped { .. }]));
    }

    #[test]
    fn side_contact_with_enemy_is_a_hit() {
        let mut enemy = Enemy::new(60.0, 480.0, 2.0);
        let mut player = player_at(50.0, 470.0);
        player.vel.y = 0.0;
        let t = tuning();

        let events = player.tick(&[], std::slice::from_mut(&mut enemy), &t, None);
        assert!(!enemy.defeated);
        assert!(events.contains(&TickEvent::Hit));
    }

    #[test]
    fn defeated_enemy_ignored_by_collision() {
        let mut enemy = Enemy::new(50.0, 480.0, 2.0);
        enemy.defeated = true;
        let mut player = player_at(50.0, 470.0);
        let t = tuning();

        let events = player.tick(&[], std::slice::from_mut(&mut enemy), &t, None);
        assert!(events.is_empty());
    }

    #[test]
    fn fall_below_field_emits_fell() {
        let mut player = player_at(50.0, FALL_LIMIT + 1.0);
        let t = tuning();
        let events = player.tick(&[], &mut [], &t, None);
        assert!(events.contains(&TickEvent::Fell));
    }

    #[test]
    fn run_cycle_advances_only_while_moving() {
        let mut player = player_at(50.0, 480.0);
        let t = tuning();
        player.move_right(&t);
        // 0.15 per tick: the 7th tick crosses 1.0 and advances the frame
        for _ in 0..7 {
            player.tick(&[], &mut [], &t, None);
        }
        assert_eq!(player.anim_frame, 1);

        player.stop();
        player.tick(&[], &mut [], &t, None);
        assert_eq!(player.anim_frame, 0);
    }

    #[test]
    fn moving_platform_never_leaves_range() {
        let mut platform = Platform::new(300.0, 400.0, 120.0, 20.0, PlatformKind::Moving);
        for _ in 0..1000 {
            platform.tick();
            let offset = (platform.rect.pos.x - platform.origin_x).abs();
            assert!(
                offset <= platform.move_range,
                "platform left oscillation range: offset {offset}"
            );
        }
    }

    #[test]
    fn static_platform_does_not_move() {
        let mut platform = Platform::new(300.0, 400.0, 120.0, 20.0, PlatformKind::Normal);
        for _ in 0..100 {
            platform.tick();
        }
        assert_eq!(platform.rect.pos.x, 300.0);
    }

    #[test]
    fn enemy_oscillates_and_reverses() {
        let mut enemy = Enemy::new(200.0, 518.0, 2.0);
        let mut reversed = false;
        for _ in 0..500 {
            enemy.tick();
            let offset = (enemy.rect.pos.x - enemy.origin_x).abs();
            assert!(offset <= enemy.move_range);
            if enemy.direction < 0.0 {
                reversed = true;
            }
        }
        assert!(reversed, "enemy should reverse at the range boundary");
    }

    #[test]
    fn defeated_enemy_is_frozen() {
        let mut enemy = Enemy::new(200.0, 518.0, 2.0);
        enemy.defeated = true;
        let x = enemy.rect.pos.x;
        let counter = enemy.anim_counter;
        for _ in 0..50 {
            enemy.tick();
        }
        assert_eq!(enemy.rect.pos.x, x);
        assert_eq!(enemy.anim_counter, counter);
    }
}
