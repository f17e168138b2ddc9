//! Planar overlap relaxation accelerated by a uniform spatial hash.
//!
//! Cards are treated as discs of a fixed radius in the xy plane. Each pass
//! buckets every card into square cells twice the radius wide, then only
//! compares cards in the same or an adjacent cell, so a pass costs O(N) for
//! bounded local density.

use glam::{Vec2, Vec3};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Integer cell coordinates of the spatial hash.
pub type CellKey = (i32, i32);

/// Tunables for [`resolve_collisions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    /// Relaxation passes to run.
    pub iterations: u32,
    /// Fraction of the overlap corrected per pass.
    pub softness: f32,
    /// Upper bound on the push factor for a single pair.
    pub max_push: f32,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            iterations: 6,
            softness: 0.6,
            max_push: 0.08,
        }
    }
}

/// What a call to [`resolve_collisions`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionReport {
    /// Passes actually run.
    pub iterations: u32,
    /// Candidate pairs examined across all passes.
    pub pairs_checked: usize,
    /// Pairs that overlapped and were pushed apart.
    pub pairs_pushed: usize,
}

/// Uniform grid of card indices keyed by integer cell coordinates.
#[derive(Debug, Default)]
pub struct SpatialHash {
    cell_size: f32,
    cells: FxHashMap<CellKey, Vec<usize>>,
}

impl SpatialHash {
    /// Empty hash with the given cell edge length.
    #[must_use]
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    /// Cell containing `position` (x and y only).
    #[must_use]
    pub fn cell_of(&self, position: Vec3) -> CellKey {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    /// Clear and re-bucket every position, reusing bucket allocations.
    pub fn rebuild(&mut self, positions: &[Vec3]) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (index, position) in positions.iter().enumerate() {
            let key = self.cell_of(*position);
            self.cells.entry(key).or_default().push(index);
        }
    }

    /// Indices bucketed in `cell`.
    #[must_use]
    pub fn bucket(&self, cell: CellKey) -> &[usize] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Push overlapping cards apart in the xy plane.
///
/// Runs exactly `params.iterations` passes. Within a pass every unordered
/// pair is visited at most once: the hash is built at the start of the pass
/// and each index lives in exactly one cell, so scanning the 3x3
/// neighbourhood of `i` and keeping only `j > i` never repeats a pair.
/// Coincident cards are separated along a random planar direction.
pub fn resolve_collisions<R: Rng + ?Sized>(
    positions: &mut [Vec3],
    radius: f32,
    params: &CollisionParams,
    rng: &mut R,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    if radius.is_nan() || radius <= 0.0 || positions.len() < 2 {
        return report;
    }

    let min_distance = radius * 2.0;
    let mut grid = SpatialHash::new(min_distance);

    for _ in 0..params.iterations {
        report.iterations += 1;
        grid.rebuild(positions);

        for i in 0..positions.len() {
            let (cx, cy) = grid.cell_of(positions[i]);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    // keys saturate at the i32 edges; skip what overflows
                    let (Some(nx), Some(ny)) =
                        (cx.checked_add(dx), cy.checked_add(dy))
                    else {
                        continue;
                    };
                    for &j in grid.bucket((nx, ny)) {
                        if j <= i {
                            continue;
                        }
                        report.pairs_checked += 1;
                        if separate_pair(
                            positions,
                            i,
                            j,
                            min_distance,
                            params,
                            rng,
                        ) {
                            report.pairs_pushed += 1;
                        }
                    }
                }
            }
        }
    }

    log::trace!(
        "collision relax: {} passes, {} pairs checked, {} pushed",
        report.iterations,
        report.pairs_checked,
        report.pairs_pushed
    );
    report
}

/// Push cards `i` and `j` apart if they overlap. Returns whether they did.
fn separate_pair<R: Rng + ?Sized>(
    positions: &mut [Vec3],
    i: usize,
    j: usize,
    min_distance: f32,
    params: &CollisionParams,
    rng: &mut R,
) -> bool {
    let mut delta = positions[i].truncate() - positions[j].truncate();
    let mut distance = delta.length();
    while distance <= f32::EPSILON {
        delta = Vec2::new(
            rng.random_range(-0.5..0.5),
            rng.random_range(-0.5..0.5),
        );
        distance = delta.length();
    }
    if distance >= min_distance {
        return false;
    }

    let push = (params.softness * (min_distance - distance) / distance * 0.5)
        .min(params.max_push);
    let shift = (delta * push).extend(0.0);
    positions[i] += shift;
    positions[j] -= shift;
    true
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn planar_distance(a: Vec3, b: Vec3) -> f32 {
        a.truncate().distance(b.truncate())
    }

    #[test]
    fn overlapping_pair_separates() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut positions = vec![Vec3::ZERO, Vec3::new(1.3, 0.0, 0.5)];
        let report = resolve_collisions(
            &mut positions,
            0.7,
            &CollisionParams::default(),
            &mut rng,
        );
        assert_eq!(report.iterations, 6);
        assert!(planar_distance(positions[0], positions[1]) >= 1.4 - 0.01);
        // depth is untouched
        assert_eq!(positions[1].z, 0.5);
        // pushed symmetrically about the starting midpoint
        let mid = (positions[0].x + positions[1].x) / 2.0;
        assert!((mid - 0.65).abs() < 1e-5);
    }

    #[test]
    fn coincident_cards_are_split() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut positions = vec![Vec3::ONE; 2];
        let _ = resolve_collisions(
            &mut positions,
            0.5,
            &CollisionParams::default(),
            &mut rng,
        );
        assert!(planar_distance(positions[0], positions[1]) > 0.0);
        assert!(positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn separated_cards_are_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let apart = vec![Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)];
        let mut positions = apart.clone();
        let report = resolve_collisions(
            &mut positions,
            0.7,
            &CollisionParams::default(),
            &mut rng,
        );
        assert_eq!(positions, apart);
        assert_eq!(report.pairs_pushed, 0);
    }

    #[test]
    fn runs_exactly_the_requested_passes() {
        let mut rng = StdRng::seed_from_u64(1);
        for iterations in [0, 1, 6, 11] {
            let mut positions: Vec<Vec3> = (0..200)
                .map(|i| {
                    Vec3::new((i % 20) as f32 * 0.3, (i / 20) as f32 * 0.3, 0.0)
                })
                .collect();
            let params = CollisionParams {
                iterations,
                ..CollisionParams::default()
            };
            let report =
                resolve_collisions(&mut positions, 0.7, &params, &mut rng);
            assert_eq!(report.iterations, iterations);
        }
    }

    #[test]
    fn push_per_pass_is_capped() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut positions = vec![Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)];
        let params = CollisionParams {
            iterations: 1,
            softness: 1.0,
            max_push: 0.08,
        };
        let _ = resolve_collisions(&mut positions, 0.7, &params, &mut rng);
        // shift per card = delta * max_push
        assert!((positions[0].x - (-0.1 * 0.08)).abs() < 1e-6);
        assert!((positions[1].x - (0.1 + 0.1 * 0.08)).abs() < 1e-6);
    }

    #[test]
    fn hash_buckets_by_floor() {
        let mut grid = SpatialHash::new(1.0);
        grid.rebuild(&[Vec3::new(0.5, 0.5, 9.0), Vec3::new(-0.5, 0.5, 0.0)]);
        assert_eq!(grid.bucket((0, 0)), &[0]);
        assert_eq!(grid.bucket((-1, 0)), &[1]);
        assert!(grid.bucket((4, 4)).is_empty());
    }

    #[test]
    fn degenerate_inputs_are_no_ops() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut one = vec![Vec3::ZERO];
        let params = CollisionParams::default();
        let report = resolve_collisions(&mut one, 0.7, &params, &mut rng);
        assert_eq!(report, CollisionReport::default());

        let mut two = vec![Vec3::ZERO; 2];
        let report = resolve_collisions(&mut two, 0.0, &params, &mut rng);
        assert_eq!(report.iterations, 0);
        assert_eq!(two, vec![Vec3::ZERO; 2]);
    }

    #[test]
    fn tiny_radius_does_not_overflow_cell_keys() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut positions = vec![
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(-5.0, -7.0, 0.0),
        ];
        let before = positions.clone();
        let report = resolve_collisions(
            &mut positions,
            1e-9,
            &CollisionParams::default(),
            &mut rng,
        );
        assert_eq!(report.pairs_pushed, 0);
        assert_eq!(positions, before);
    }
}
