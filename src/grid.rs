use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::color::Rgba;

/// Side length of the etching surface.
pub const GRID_DIMENSION: usize = 32;

/// Upper bound of the stroke magnitude control.
pub const MAX_MAGNITUDE: usize = 24;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid data has {got} cells, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Row/column delta, row 0 at the top.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The three directions a stroke may continue in: anything except
    /// doubling straight back.
    fn continuations(self) -> [Direction; 3] {
        match self {
            Direction::Up => [Direction::Up, Direction::Left, Direction::Right],
            Direction::Right => [Direction::Right, Direction::Up, Direction::Down],
            Direction::Down => [Direction::Down, Direction::Left, Direction::Right],
            Direction::Left => [Direction::Left, Direction::Up, Direction::Down],
        }
    }

    /// Direction from `from` to `to` when they are direct neighbours.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let dr = to.0 as i64 - from.0 as i64;
        let dc = to.1 as i64 - from.1 as i64;
        match (dr, dc) {
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// The etching surface: a fixed-size square grid of colours, a pen
/// position, and the brush settings. All mutation goes through the
/// operations below; nothing here knows about rendering.
#[derive(Debug)]
pub struct GridModel {
    dimension: usize,
    cells: Vec<Rgba>,
    cursor: Option<(usize, usize)>,
    brush: Rgba,
    magnitude: usize,
    rng: StdRng,
}

impl GridModel {
    pub fn new(dimension: usize, fill: Rgba, brush: Rgba) -> Self {
        Self::with_rng(dimension, fill, brush, StdRng::from_entropy())
    }

    /// Deterministic construction for tests: strokes replay exactly for
    /// a given seed.
    pub fn with_seed(dimension: usize, fill: Rgba, brush: Rgba, seed: u64) -> Self {
        Self::with_rng(dimension, fill, brush, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dimension: usize, fill: Rgba, brush: Rgba, rng: StdRng) -> Self {
        Self {
            dimension,
            cells: vec![fill; dimension * dimension],
            cursor: None,
            brush,
            magnitude: 1,
            rng,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn brush(&self) -> Rgba {
        self.brush
    }

    pub fn magnitude(&self) -> usize {
        self.magnitude
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Rgba> {
        if row < self.dimension && col < self.dimension {
            Some(self.cells[row * self.dimension + col])
        } else {
            None
        }
    }

    fn paint(&mut self, row: usize, col: usize) {
        self.cells[row * self.dimension + col] = self.brush;
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.dimension && (col as usize) < self.dimension
    }

    /// Establishes the pen position. Only the first selection counts;
    /// once a cursor exists this is a no-op.
    pub fn select_start(&mut self, coord: (usize, usize)) -> bool {
        if self.cursor.is_some() || coord.0 >= self.dimension || coord.1 >= self.dimension {
            return false;
        }
        self.paint(coord.0, coord.1);
        self.cursor = Some(coord);
        true
    }

    /// Paints a stroke starting one cell away in `direction` and returns
    /// the painted coordinates. `None` when no pen position exists yet.
    ///
    /// The stroke wanders: after the first cell, each of the remaining
    /// `magnitude - 1` cells steps in a random direction that never
    /// doubles straight back. The walk is generated without looking at
    /// the grid edges; cells that fall outside are dropped afterwards,
    /// and the pen lands on the last surviving cell in generation order.
    /// A stroke whose cells all fall outside leaves the pen where it was.
    pub fn try_move(&mut self, direction: Direction) -> Option<Vec<(usize, usize)>> {
        let cursor = self.cursor?;
        let path = self.generate_path(cursor, direction);
        let painted: Vec<(usize, usize)> = path
            .into_iter()
            .filter(|&(row, col)| self.in_bounds(row, col))
            .map(|(row, col)| (row as usize, col as usize))
            .collect();
        for &(row, col) in &painted {
            self.paint(row, col);
        }
        if let Some(&last) = painted.last() {
            self.cursor = Some(last);
        }
        Some(painted)
    }

    fn generate_path(&mut self, from: (usize, usize), direction: Direction) -> Vec<(i64, i64)> {
        let (dr, dc) = direction.delta();
        let mut pos = (from.0 as i64 + dr, from.1 as i64 + dc);
        let mut path = Vec::with_capacity(self.magnitude);
        path.push(pos);
        let continuations = direction.continuations();
        for _ in 1..self.magnitude {
            let step = continuations[self.rng.gen_range(0..continuations.len())];
            let (dr, dc) = step.delta();
            pos = (pos.0 + dr, pos.1 + dc);
            path.push(pos);
        }
        path
    }

    /// A tap on the grid. Before any selection it establishes the pen
    /// position; afterwards a tap on one of the four direct neighbours
    /// strokes in that direction, and any other tap is ignored.
    pub fn tap_cell(&mut self, coord: (usize, usize)) -> Option<Vec<(usize, usize)>> {
        match self.cursor {
            None => {
                if self.select_start(coord) {
                    Some(vec![coord])
                } else {
                    None
                }
            }
            Some(cursor) => {
                let direction = Direction::between(cursor, coord)?;
                self.try_move(direction)
            }
        }
    }

    /// Changes the brush and recolours the pen cell in place.
    pub fn set_brush_color(&mut self, color: Rgba) {
        self.brush = color;
        if let Some((row, col)) = self.cursor {
            self.paint(row, col);
        }
    }

    pub fn set_stroke_magnitude(&mut self, magnitude: usize) {
        self.magnitude = magnitude.clamp(1, MAX_MAGNITUDE);
    }

    /// Replaces every cell with `fill` and lifts the pen.
    pub fn reset(&mut self, fill: Rgba) {
        for cell in &mut self.cells {
            *cell = fill;
        }
        self.cursor = None;
    }

    /// Copy of the surface, row-major, for saving.
    pub fn snapshot(&self) -> Vec<Rgba> {
        self.cells.clone()
    }

    /// Wholesale replacement of the surface. The pen is lifted so the
    /// next tap re-establishes a starting point on the loaded picture.
    pub fn load(&mut self, cells: Vec<Rgba>) -> Result<(), GridError> {
        let expected = self.dimension * self.dimension;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                got: cells.len(),
            });
        }
        self.cells = cells;
        self.cursor = None;
        Ok(())
    }
}
