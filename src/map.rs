//! Tile grid map.
//!
//! The world is a fixed grid of solid/empty cells. Everything that needs to
//! know whether a point is inside a wall (the ray march, movement collision)
//! asks this module; nothing else reads the grid directly.
//!
//! # Bounds policy
//!
//! World coordinates outside the authored footprint read as solid. Rays
//! therefore terminate at the map edge and the player can never leave the
//! grid, without any out-of-range indexing.

/// World units per tile edge, shared by the map and the movement code.
pub const TILE_SIZE: f32 = 80.0;

const DEFAULT_WIDTH: usize = 8;
const DEFAULT_HEIGHT: usize = 8;

// Built-in level: a solid border around a handful of interior obstacles.
#[rustfmt::skip]
const DEFAULT_LEVEL: [u8; DEFAULT_WIDTH * DEFAULT_HEIGHT] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 1, 1, 1, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 1,
    1, 1, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 1, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// A fixed grid of solid/empty cells addressed by `(column, row)`.
///
/// Cells are stored row-major (`row * width + column`) and are immutable
/// after construction.
pub struct TileMap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl TileMap {
    /// Creates a map from row-major cell data (0 = empty, anything else
    /// counts as solid).
    ///
    /// # Panics
    /// Panics in debug builds if `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "Cell data size doesn't match dimensions"
        );
        Self {
            cells,
            width,
            height,
        }
    }

    /// The built-in level.
    pub fn default_level() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_LEVEL.to_vec())
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at `(col, row)`; out-of-range cells read as solid.
    pub fn cell(&self, col: isize, row: isize) -> u8 {
        if col < 0 || row < 0 || col >= self.width as isize || row >= self.height as isize {
            return 1;
        }
        self.cells[row as usize * self.width + col as usize]
    }

    /// Whether the world-space point lies inside a solid cell.
    ///
    /// Coordinates map to a cell by dividing by [`TILE_SIZE`] and flooring,
    /// so negative coordinates fall outside the grid rather than aliasing
    /// onto column or row zero.
    pub fn is_solid(&self, world_x: f32, world_y: f32) -> bool {
        let col = (world_x / TILE_SIZE).floor() as isize;
        let row = (world_y / TILE_SIZE).floor() as isize;
        self.cell(col, row) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_dimensions() {
        let map = TileMap::default_level();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 8);
    }

    #[test]
    fn border_cells_are_solid() {
        let map = TileMap::default_level();
        // Centers of the four corner tiles.
        assert!(map.is_solid(40.0, 40.0));
        assert!(map.is_solid(600.0, 40.0));
        assert!(map.is_solid(40.0, 600.0));
        assert!(map.is_solid(600.0, 600.0));
    }

    #[test]
    fn interior_cells_match_the_grid() {
        let map = TileMap::default_level();
        // (1, 1) is open, (3, 2) is one of the interior obstacles.
        assert!(!map.is_solid(120.0, 120.0));
        assert!(map.is_solid(3.5 * TILE_SIZE, 2.5 * TILE_SIZE));
    }

    #[test]
    fn tile_boundary_flips_at_the_exact_edge() {
        let map = TileMap::default_level();
        // Row 2 has an obstacle starting at column 3 (world x = 240).
        assert!(!map.is_solid(239.9, 200.0));
        assert!(map.is_solid(240.0, 200.0));
    }

    #[test]
    fn out_of_range_coordinates_are_solid() {
        let map = TileMap::default_level();
        assert!(map.is_solid(-0.1, 120.0));
        assert!(map.is_solid(120.0, -5.0));
        assert!(map.is_solid(8.0 * TILE_SIZE, 120.0));
        assert!(map.is_solid(120.0, 1e6));
    }

    #[test]
    fn cell_addressing_is_row_major() {
        let map = TileMap::new(3, 2, vec![0, 1, 0, 1, 0, 1]);
        assert_eq!(map.cell(1, 0), 1);
        assert_eq!(map.cell(0, 1), 1);
        assert_eq!(map.cell(1, 1), 0);
    }

    #[test]
    fn out_of_range_cells_read_as_solid() {
        let map = TileMap::new(2, 2, vec![0, 0, 0, 0]);
        assert_eq!(map.cell(-1, 0), 1);
        assert_eq!(map.cell(0, -1), 1);
        assert_eq!(map.cell(2, 0), 1);
        assert_eq!(map.cell(0, 2), 1);
    }
}
