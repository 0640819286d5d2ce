use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;
use tracing::trace;

use crate::cell::Cell;
use crate::error::GridError;
use crate::error::GridResult;
use crate::error::ParseError;
use crate::rules::State;

/// One snapshot of the board.
///
/// Cells are stored row by row, the cell at `(x, y)` lives at index `y * width + x`. Once a
/// generation is built its cell states never change, only the neighbor statistics cached on its
/// cells are refreshed when the successor is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    width: usize,
    height: usize,
    age: usize,
    cells: Vec<Cell>,
}

impl Generation {
    /// Create an all-dead generation of age 0
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        check_dimensions(width, height)?;

        Ok(Self::filled(width, height, 0, |_, _| State::Dead))
    }

    /// Create a generation of age 0 from states given row by row
    pub fn from_states<I>(width: usize, height: usize, states: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = State>,
    {
        check_dimensions(width, height)?;

        let states: Vec<State> = states.into_iter().collect();
        let expected = width * height;

        if states.len() != expected {
            return Err(GridError::StateCount {
                expected,
                got: states.len(),
            });
        }

        Ok(Self::filled(width, height, 0, |x, y| states[y * width + x]))
    }

    /// Create an age 0 generation where every cell is independently alive with probability 1/2.
    pub fn random(width: usize, height: usize) -> GridResult<Self> {
        let mut generation = Self::new(width, height)?;
        generation.populate_random();

        Ok(generation)
    }

    fn filled<F>(width: usize, height: usize, age: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> State,
    {
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::with_state(x, y, f(x, y)));
            }
        }

        Self {
            width,
            height,
            age,
            cells,
        }
    }

    /// Replace every cell with a fresh one that is alive or dead with equal probability
    pub fn populate_random(&mut self) {
        self.populate_random_with(&mut rand::thread_rng());
    }

    /// Like [`Generation::populate_random`], but draws from the given random number generator.
    pub fn populate_random_with<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::filled(self.width, self.height, self.age, |_, _| {
            State::from(rng.gen_bool(0.5))
        });

        trace!(alive = self.count_alive_cells(), "populated random generation");
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn age(&self) -> usize {
        self.age
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells.get(y * self.width + x)
    }

    /// Cell states, row by row
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.cells.iter().map(|c| c.state)
    }

    pub fn count_alive_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.count_alive_cells() == 0
    }

    /// Human readable form of the generation, see the [`fmt::Display`] implementation.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Compute the next generation.
    ///
    /// Every cell of `self` gets its alive neighbors recounted (and cached on the cell), then the
    /// B3/S23 rule decides the state of the cell at the same position in the returned generation.
    /// The result shares nothing with `self`.
    pub fn compute_successor(&mut self) -> Generation {
        let neighbors: Vec<_> = self
            .cells
            .iter()
            .map(|c| c.count_alive_neighbors(&self.cells).1)
            .collect();

        for (cell, alive) in self.cells.iter_mut().zip(neighbors) {
            cell.record_neighbors(alive);
        }

        let width = self.width;
        let cells = &self.cells;

        let next = Self::filled(self.width, self.height, self.age + 1, |x, y| {
            let current = &cells[y * width + x];
            current.state.next(current.alive_neighbor_count)
        });

        debug!(
            age = next.age,
            alive = next.count_alive_cells(),
            "computed generation"
        );

        next
    }
}

fn check_dimensions(width: usize, height: usize) -> GridResult<()> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }

    Ok(())
}

/// ```notrust
/// Generation age: 1
/// 010
/// 010
/// 010
///
/// Cells alive: 3
/// ```
impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation age: {}", self.age)?;

        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.state.glyph())?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Cells alive: {}", self.count_alive_cells())
    }
}

/// Parse rows of `0` and `1`. Surrounding whitespace and blank lines are ignored, so patterns can
/// be written as indented raw strings.
impl FromStr for Generation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(ParseError::Empty);
        };

        let width = first.chars().count();
        let height = rows.len();
        let mut states = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(ParseError::RaggedRow {
                    y,
                    expected: width,
                    got,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let Some(state) = State::from_glyph(glyph) else {
                    return Err(ParseError::InvalidGlyph { glyph, x, y });
                };

                states.push(state);
            }
        }

        Ok(Self::filled(width, height, 0, |x, y| states[y * width + x]))
    }
}
