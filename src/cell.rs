use crate::rules::State;

/// Coordinates of a cell. `(0, 0)` is the top left corner, `x` grows to the right and `y` grows
/// downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance of exactly one, so the 8 surrounding positions. There is no wraparound,
    /// so positions on the edge of a grid simply have fewer of them.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);

        dx.max(dy) == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: Position,

    pub state: State,

    /// Number of neighbors that were alive the last time they were counted.
    ///
    /// Only meaningful after [`Cell::record_neighbors`].
    pub alive_neighbor_count: usize,

    /// Positions of the neighbors that were alive the last time they were counted.
    pub alive_neighbors: Vec<Position>,
}

impl Cell {
    /// A new dead cell
    pub fn new(x: usize, y: usize) -> Self {
        Self::with_state(x, y, State::Dead)
    }

    pub fn with_state(x: usize, y: usize, state: State) -> Self {
        Self {
            pos: Position::new(x, y),
            state,
            alive_neighbor_count: 0,
            alive_neighbors: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn x(&self) -> usize {
        self.pos.x
    }

    pub fn y(&self) -> usize {
        self.pos.y
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn is_adjacent_to(&self, other: &Cell) -> bool {
        self.pos.is_adjacent_to(&other.pos)
    }

    /// Scan every cell in `cells` and return how many adjacent ones are alive, together with their
    /// positions.
    ///
    /// This walks the whole slice for every call, so a full generation step is quadratic in the
    /// number of cells.
    pub fn count_alive_neighbors(&self, cells: &[Cell]) -> (usize, Vec<Position>) {
        let alive: Vec<Position> = cells
            .iter()
            .filter(|c| self.is_adjacent_to(c))
            .filter(|c| c.is_alive())
            .map(Cell::position)
            .collect();

        (alive.len(), alive)
    }

    /// Store the result of [`Cell::count_alive_neighbors`] on the cell
    pub fn record_neighbors(&mut self, alive: Vec<Position>) {
        self.alive_neighbor_count = alive.len();
        self.alive_neighbors = alive;
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use super::Position;
    use crate::rules::State;

    fn block(w: usize, h: usize, state: State) -> Vec<Cell> {
        (0..h)
            .flat_map(|y| (0..w).map(move |x| Cell::with_state(x, y, state)))
            .collect()
    }

    #[test]
    fn adjacency_excludes_self() {
        let p = Position::new(1, 1);

        assert!(!p.is_adjacent_to(&p));
        assert!(p.is_adjacent_to(&Position::new(0, 0)));
        assert!(p.is_adjacent_to(&Position::new(2, 1)));
        assert!(!p.is_adjacent_to(&Position::new(3, 1)));
    }

    #[test]
    fn corner_has_three_neighbors() {
        let cells = block(3, 3, State::Alive);
        let corner = &cells[0];

        let (count, alive) = corner.count_alive_neighbors(&cells);

        assert_eq!(count, 3);
        assert_eq!(
            alive,
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn center_has_eight_neighbors() {
        let cells = block(3, 3, State::Alive);

        assert_eq!(cells[4].count_alive_neighbors(&cells).0, 8);
    }

    #[test]
    fn dead_neighbors_are_not_counted() {
        let mut cells = block(3, 3, State::Dead);
        cells[1].state = State::Alive;

        let mut center = cells[4].clone();
        let (count, alive) = center.count_alive_neighbors(&cells);
        center.record_neighbors(alive);

        assert_eq!(count, 1);
        assert_eq!(center.alive_neighbor_count, 1);
        assert_eq!(center.alive_neighbors, vec![Position::new(1, 0)]);
    }
}
