use std::fmt;

use crate::error::{Error, Result};

pub const DEAD: char = '▅';
pub const ALIVE: char = '○';

/// Relative positions of the eight cells around a cell.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),

    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Dead => DEAD,
            Cell::Alive => ALIVE,
        }
    }

    /// Applies the four transition rules to a cell with `n` live neighbours.
    pub fn next(self, n: u8) -> Cell {
        match (self, n) {
            // underpopulation
            (Cell::Alive, 0..=1) => Cell::Dead,
            // survival
            (Cell::Alive, 2..=3) => Cell::Alive,
            // overpopulation
            (Cell::Alive, _) => Cell::Dead,
            // reproduction
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }
}

/// Position of a cell, `row` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Converts raw user input into a coordinate on a board of `size`.
    ///
    /// Rejects the pair when either component falls outside `[0, size)`.
    pub fn checked(row: i64, col: i64, size: usize) -> Result<Self> {
        let fits = |v: i64| usize::try_from(v).ok().filter(|&v| v < size);
        match (fits(row), fits(col)) {
            (Some(r), Some(c)) => Ok(Coord::new(r, c)),
            _ => Err(Error::OutOfBounds { row, col, size }),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square board of cells. Its size never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    size: usize,
    data: Vec<Vec<Cell>>,
}

impl Field {

    /// Creates a `size × size` board with every cell dead.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::NonPositiveSize(0));
        }
        Ok(Self::blank(size))
    }

    /// Creates a board and brings every coordinate in `seed` to life.
    pub fn seeded(size: usize, seed: &[Coord]) -> Result<Self> {
        let mut field = Self::new(size)?;
        for &at in seed {
            if !field.contains(at) {
                return Err(Error::OutOfBounds {
                    row: at.row as i64,
                    col: at.col as i64,
                    size,
                });
            }
            field.set_alive(at);
        }
        Ok(field)
    }

    fn blank(size: usize) -> Self {
        Field {
            size,
            data: vec![vec![Cell::Dead; size]; size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn data(&self) -> &[Vec<Cell>] {
        &self.data
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    #[inline]
    pub fn cell(&self, at: Coord) -> Cell {
        self.data[at.row][at.col]
    }

    #[inline]
    fn get(&self, i: isize, j: isize) -> Option<Cell> {
        let i = usize::try_from(i).ok()?;
        let j = usize::try_from(j).ok()?;
        self.data.get(i)?.get(j).copied()
    }

    /// Brings a single cell to life.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the board.
    pub fn set_alive(&mut self, at: Coord) {
        assert!(
            self.contains(at),
            "coordinate {at} is out of bounds for size {}",
            self.size
        );
        self.data[at.row][at.col] = Cell::Alive;
    }

    pub fn has_any_alive(&self) -> bool {
        self.data.iter().flatten().any(|c| c.is_alive())
    }

    pub fn population(&self) -> usize {
        self.data.iter().flatten().filter(|c| c.is_alive()).count()
    }

    /// Returns an independent copy of the board.
    #[inline]
    pub fn snapshot(&self) -> Field {
        self.clone()
    }

    /// Counts live cells among the up to eight neighbours of `at`.
    /// The board does not wrap; positions past an edge are skipped.
    pub fn live_neighbors(&self, at: Coord) -> u8 {
        let (i, j) = (at.row as isize, at.col as isize);
        NEIGHBOURS
            .iter()
            .filter_map(|&(di, dj)| self.get(i + di, j + dj))
            .filter(|c| c.is_alive())
            .count() as u8
    }

    /// State of `at` in the next generation.
    #[inline]
    pub fn next_state(&self, at: Coord) -> Cell {
        self.cell(at).next(self.live_neighbors(at))
    }

    /// Computes the next generation into a fresh board.
    ///
    /// `self` is borrowed immutably for the whole pass, so every cell is
    /// evaluated against the previous generation.
    pub fn step(&self) -> Field {
        let mut next = Self::blank(self.size);
        for (i, row) in next.data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.next_state(Coord::new(i, j));
            }
        }
        debug_assert_eq!(next.size, self.size);
        next
    }

    /// Formats the board as one line of glyphs per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
