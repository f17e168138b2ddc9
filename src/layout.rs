//! Grid layout planning and formation bounds.
//!
//! The grid is both the default arrangement and the rest reference that the
//! float, ripple, flip, fountain and ring formations offset from.

use glam::Vec3;

use crate::options::LayoutOptions;

/// Minimum formation box size, applied after scaling the grid extents.
const MIN_BOUNDS_SIZE: Vec3 = Vec3::new(6.0, 3.5, 1.8);
/// Growth applied to the grid extents when deriving formation bounds.
const BOUNDS_GROWTH: f32 = 1.2;

/// Planned grid arrangement for a deck.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    /// Card centers, row-major, centered on the origin in the z = 0 plane.
    pub positions: Vec<Vec3>,
    /// Number of rows used.
    pub rows: u32,
    /// Columns used (at least one).
    pub columns: u32,
    /// Full width from the left edge of the first column to the right edge
    /// of the last.
    pub width: f32,
    /// Full height from the top edge of the first row to the bottom edge of
    /// the last.
    pub height: f32,
}

impl GridLayout {
    /// Formation bounds derived from the grid extents.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let size = Vec3::new(
            self.width * BOUNDS_GROWTH,
            self.height * BOUNDS_GROWTH,
            0.0,
        )
        .max(MIN_BOUNDS_SIZE);
        Bounds::from_size(size)
    }

    /// Number of cards laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Compute the grid layout for `count` cards.
///
/// Pure function of the count and options; a zero column count is treated
/// as one column.
#[must_use]
pub fn compute_grid_layout(
    count: usize,
    options: &LayoutOptions,
) -> GridLayout {
    let columns = options.columns.max(1);
    let rows = (count as u32).div_ceil(columns);
    let col_mid = (columns - 1) as f32 / 2.0;
    let row_mid = (rows.max(1) - 1) as f32 / 2.0;

    let positions = (0..count)
        .map(|index| {
            let col = (index % columns as usize) as f32;
            let row = (index / columns as usize) as f32;
            Vec3::new(
                (col - col_mid) * options.spacing_x,
                (row_mid - row) * options.spacing_y,
                0.0,
            )
        })
        .collect();

    GridLayout {
        positions,
        rows,
        columns,
        width: (columns - 1) as f32 * options.spacing_x + options.card_width,
        height: (rows.max(1) - 1) as f32 * options.spacing_y
            + options.card_height,
    }
}

/// Half-extent box used to randomize per-card offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Half the box size along each axis.
    pub half_extents: Vec3,
}

impl Bounds {
    /// Bounds from half extents.
    #[must_use]
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Bounds from a full box size.
    #[must_use]
    pub fn from_size(size: Vec3) -> Self {
        Self {
            half_extents: size / 2.0,
        }
    }

    /// Full box size.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_options() -> LayoutOptions {
        LayoutOptions::default()
    }

    #[test]
    fn full_deck_is_four_rows_of_thirteen() {
        let grid = compute_grid_layout(52, &deck_options());
        assert_eq!(grid.rows, 4);
        assert_eq!(grid.len(), 52);
        // centered on the origin
        let sum: Vec3 = grid.positions.iter().copied().sum();
        assert!(sum.length() < 1e-3);
        // first card is top-left, last is bottom-right
        assert!((grid.positions[0].x + 6.0 * 1.02).abs() < 1e-5);
        assert!((grid.positions[0].y - 1.5 * 1.45).abs() < 1e-5);
        assert!((grid.positions[51].x - 6.0 * 1.02).abs() < 1e-5);
        assert!((grid.positions[51].y + 1.5 * 1.45).abs() < 1e-5);
    }

    #[test]
    fn extents_cover_outer_card_edges() {
        let grid = compute_grid_layout(52, &deck_options());
        assert!((grid.width - (12.0 * 1.02 + 1.0)).abs() < 1e-5);
        assert!((grid.height - (3.0 * 1.45 + 1.4)).abs() < 1e-5);
    }

    #[test]
    fn partial_last_row() {
        let grid = compute_grid_layout(14, &deck_options());
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.positions[13].y, -0.5 * 1.45);
        assert_eq!(grid.positions[13].x, grid.positions[0].x);
    }

    #[test]
    fn empty_and_single_card() {
        let empty = compute_grid_layout(0, &deck_options());
        assert!(empty.is_empty());
        assert_eq!(empty.rows, 0);
        assert!((empty.height - 1.4).abs() < 1e-6);

        let one = compute_grid_layout(1, &deck_options());
        assert_eq!(one.positions[0], Vec3::new(-6.0 * 1.02, 0.0, 0.0));
    }

    #[test]
    fn zero_columns_behaves_like_one() {
        let options = LayoutOptions {
            columns: 0,
            ..deck_options()
        };
        let grid = compute_grid_layout(3, &options);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 3);
        assert!(grid.positions.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn bounds_have_a_floor() {
        let single_column = LayoutOptions {
            columns: 1,
            ..deck_options()
        };
        let small = compute_grid_layout(1, &single_column).bounds();
        assert_eq!(small.size(), MIN_BOUNDS_SIZE);

        // one card still spans all thirteen planned columns
        let one = compute_grid_layout(1, &deck_options()).bounds();
        assert!((one.size().x - (12.0 * 1.02 + 1.0) * 1.2).abs() < 1e-4);
        assert_eq!(one.size().y, MIN_BOUNDS_SIZE.y);

        let full = compute_grid_layout(52, &deck_options()).bounds();
        assert!((full.size().x - (12.0 * 1.02 + 1.0) * 1.2).abs() < 1e-4);
        assert_eq!(full.size().z, 1.8);
    }
}
