//! Endless terrain generation
//!
//! A chunk is a fixed-width horizontal slice of world content generated as one
//! atomic unit: a walked ground line with difficulty-scaled gaps, a set of
//! rejection-sampled floating platforms, and enemies seated on those surfaces.
//!
//! The generator owns a seeded PCG stream so the entire terrain sequence of a
//! session reproduces from a single `u64`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Enemy, Platform, PlatformKind};
use crate::consts::*;

/// One chunk's worth of freshly generated entities
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.enemies.is_empty()
    }
}

/// Rejection-sampling attempt budget per placed platform or enemy.
/// Exhausting it yields a sparser chunk, never an error.
const PLACE_ATTEMPTS: u32 = 30;

/// Procedural chunk generator with a deterministic RNG stream
#[derive(Debug, Clone)]
pub struct ChunkGenerator {
    rng: Pcg32,
}

impl ChunkGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate the chunk starting at `start_x` for the given difficulty tier.
    ///
    /// `existing` is the live platform set from this and earlier chunks; new
    /// placements are rejected against it so terrain never overlaps across
    /// chunk boundaries. The batch is appended by the caller; generation
    /// itself never removes anything.
    pub fn generate(&mut self, start_x: f32, difficulty: u32, existing: &[Platform]) -> Batch {
        let mut batch = Batch::default();
        self.ground_line(start_x, difficulty, &mut batch);
        self.floating_platforms(start_x, difficulty, existing, &mut batch);
        self.enemies(start_x, difficulty, existing, &mut batch);
        log::debug!(
            "chunk at {start_x}: {} platforms, {} enemies (difficulty {difficulty})",
            batch.platforms.len(),
            batch.enemies.len(),
        );
        batch
    }

    /// Walk the ground line: alternate segments and gaps until the chunk edge.
    ///
    /// The first segment starts flush at `start_x` with no leading gap and at
    /// least 200 length, so every chunk boundary offers a safe landing zone.
    /// Segments are truncated at the chunk edge; the next chunk's first
    /// segment abuts there, keeping ground continuous across the seam.
    fn ground_line(&mut self, start_x: f32, difficulty: u32, batch: &mut Batch) {
        let d = difficulty as f32;
        let end_x = start_x + CHUNK_WIDTH;
        let mut cursor = start_x;
        let mut first = true;

        while cursor < end_x {
            let mut len: f32 = self.rng.random_range(120.0..260.0);
            if first {
                len = len.max(200.0);
            }
            len = len.min(end_x - cursor);
            batch.platforms.push(Platform::new(
                cursor,
                GROUND_TOP,
                len,
                GROUND_HEIGHT,
                PlatformKind::Normal,
            ));
            cursor += len;
            first = false;

            cursor += self
                .rng
                .random_range(40.0 + 6.0 * d..140.0 + 8.0 * d);
        }
    }

    /// Scatter floating platforms, rejecting any that would overlap placed
    /// terrain (6px padding). Attempt-budget exhaustion just places fewer.
    fn floating_platforms(
        &mut self,
        start_x: f32,
        difficulty: u32,
        existing: &[Platform],
        batch: &mut Batch,
    ) {
        let d = difficulty as f32;
        let end_x = start_x + CHUNK_WIDTH;
        let requested = 3 + self.rng.random_range(0..3) + (difficulty / 2) as usize;
        let moving_chance = f64::from(0.3 + 0.05 * d).min(1.0);

        for _ in 0..requested {
            for _ in 0..PLACE_ATTEMPTS {
                let w = self.rng.random_range(80.0..180.0);
                let x = self.rng.random_range(start_x + 80.0..end_x - 80.0 - w);
                let y = self.rng.random_range(240.0..460.0);
                let kind = if self.rng.random_bool(moving_chance) {
                    PlatformKind::Moving
                } else {
                    PlatformKind::Normal
                };
                let candidate = Platform::new(x, y, w, FLOAT_HEIGHT, kind);

                let clear = existing
                    .iter()
                    .chain(batch.platforms.iter())
                    .all(|p| !candidate.rect.overlaps(&p.rect, 6.0));
                if clear {
                    batch.platforms.push(candidate);
                    break;
                }
            }
        }
    }

    /// Seat enemies on ground segments (70%) or floating platforms (30%).
    ///
    /// An enemy must stand fully on its supporting surface and its box (1px
    /// padding) may not touch any other platform; attempts with no qualifying
    /// surface under the sampled x are skipped.
    fn enemies(
        &mut self,
        start_x: f32,
        difficulty: u32,
        existing: &[Platform],
        batch: &mut Batch,
    ) {
        let d = difficulty as f32;
        let end_x = start_x + CHUNK_WIDTH;
        let requested = 2 + self.rng.random_range(0..3) + (0.8 * d).floor() as usize;

        for _ in 0..requested {
            for _ in 0..PLACE_ATTEMPTS {
                let x = self.rng.random_range(start_x..end_x - ENEMY_SIZE);
                let want_ground = self.rng.random_bool(0.7);

                let support = if want_ground {
                    batch
                        .platforms
                        .iter()
                        .position(|p| is_ground(p) && seats_on(p, x))
                } else {
                    let candidates: Vec<usize> = batch
                        .platforms
                        .iter()
                        .enumerate()
                        .filter(|&(_, p)| !is_ground(p) && seats_on(p, x))
                        .map(|(i, _)| i)
                        .collect();
                    if candidates.is_empty() {
                        None
                    } else {
                        Some(candidates[self.rng.random_range(0..candidates.len())])
                    }
                };
                let Some(support) = support else {
                    continue;
                };

                let top = batch.platforms[support].rect.top();
                let speed = 2.0 + 0.25 * d + self.rng.random_range(0.0..0.5);
                let enemy = Enemy::new(x, top - ENEMY_SIZE, speed);

                let blocked = batch
                    .platforms
                    .iter()
                    .enumerate()
                    .any(|(i, p)| i != support && enemy.rect.overlaps(&p.rect, 1.0))
                    || existing.iter().any(|p| enemy.rect.overlaps(&p.rect, 1.0));
                if !blocked {
                    batch.enemies.push(enemy);
                    break;
                }
            }
        }
    }
}

fn is_ground(platform: &Platform) -> bool {
    platform.rect.top() == GROUND_TOP
}

/// Whether an enemy placed at `x` would stand fully on `platform`
fn seats_on(platform: &Platform, x: f32) -> bool {
    x >= platform.rect.left() && x + ENEMY_SIZE <= platform.rect.right()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_reproduces_chunk() {
        let a = ChunkGenerator::new(42).generate(0.0, 0, &[]);
        let b = ChunkGenerator::new(42).generate(0.0, 0, &[]);
        assert_eq!(a.platforms.len(), b.platforms.len());
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.rect, pb.rect);
            assert_eq!(pa.kind, pb.kind);
        }
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.rect, eb.rect);
            assert_eq!(ea.speed, eb.speed);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = ChunkGenerator::new(1).generate(0.0, 0, &[]);
        let b = ChunkGenerator::new(2).generate(0.0, 0, &[]);
        let same = a.platforms.len() == b.platforms.len()
            && a.platforms
                .iter()
                .zip(&b.platforms)
                .all(|(pa, pb)| pa.rect == pb.rect);
        assert!(!same, "different seeds should produce different terrain");
    }

    #[test]
    fn first_ground_segment_is_safe_landing_zone() {
        for seed in 0..50 {
            let batch = ChunkGenerator::new(seed).generate(0.0, 0, &[]);
            let first = batch
                .platforms
                .iter()
                .find(|&p| is_ground(p))
                .expect("chunk must contain ground");
            assert_eq!(first.rect.left(), 0.0, "seed {seed}: leading gap");
            assert!(
                first.rect.size.x >= 200.0,
                "seed {seed}: first segment too short: {}",
                first.rect.size.x
            );
        }
    }

    #[test]
    fn ground_stays_inside_chunk() {
        for seed in 0..50 {
            let batch = ChunkGenerator::new(seed).generate(900.0, 3, &[]);
            for p in batch.platforms.iter().filter(|&p| is_ground(p)) {
                assert!(p.rect.left() >= 900.0);
                assert!(p.rect.right() <= 900.0 + CHUNK_WIDTH + 1e-3);
            }
        }
    }

    #[test]
    fn enemies_sit_exactly_on_a_surface() {
        for seed in 0..50 {
            let batch = ChunkGenerator::new(seed).generate(0.0, 2, &[]);
            for enemy in &batch.enemies {
                let seated = batch.platforms.iter().any(|p| {
                    p.rect.top() == enemy.rect.bottom() && seats_on(p, enemy.rect.left())
                });
                assert!(seated, "seed {seed}: enemy not seated on any surface");
            }
        }
    }

    #[test]
    fn difficulty_widens_gaps() {
        // Mean gap at difficulty 6 must exceed the difficulty-0 mean; sample
        // across many seeds to wash out variance.
        let mean_gap = |difficulty: u32| -> f32 {
            let mut total = 0.0;
            let mut count = 0;
            for seed in 0..40 {
                let batch = ChunkGenerator::new(seed).generate(0.0, difficulty, &[]);
                let grounds: Vec<_> = batch.platforms.iter().filter(|&p| is_ground(p)).collect();
                for pair in grounds.windows(2) {
                    total += pair[1].rect.left() - pair[0].rect.right();
                    count += 1;
                }
            }
            total / count as f32
        };
        assert!(mean_gap(6) > mean_gap(0));
    }

    #[test]
    fn difficulty_speeds_up_enemies() {
        let batch = ChunkGenerator::new(7).generate(0.0, 6, &[]);
        for enemy in &batch.enemies {
            assert!(enemy.speed >= 2.0 + 0.25 * 6.0);
        }
    }

    proptest! {
        #[test]
        fn no_platform_overlaps_another(seed in 0u64..500, difficulty in 0u32..=6) {
            let mut generator = ChunkGenerator::new(seed);
            let mut all: Vec<Platform> = Vec::new();
            // Three consecutive chunks, each rejecting against what exists
            for i in 0..3 {
                let batch = generator.generate(i as f32 * CHUNK_WIDTH, difficulty, &all);
                all.extend(batch.platforms);
            }
            for (i, a) in all.iter().enumerate() {
                for b in &all[i + 1..] {
                    prop_assert!(
                        !a.rect.overlaps(&b.rect, 0.0),
                        "platforms overlap: {:?} vs {:?}",
                        a.rect,
                        b.rect
                    );
                }
            }
        }

        #[test]
        fn enemies_clear_of_foreign_platforms(seed in 0u64..200) {
            let batch = ChunkGenerator::new(seed).generate(0.0, 4, &[]);
            for enemy in &batch.enemies {
                let touching = batch
                    .platforms
                    .iter()
                    .filter(|p| enemy.rect.overlaps(&p.rect, 1.0))
                    .count();
                // At most the supporting surface itself registers under padding
                prop_assert!(touching <= 1);
            }
        }
    }
}
