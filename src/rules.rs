/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// Whether a cell is alive or dead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Alive,
    #[default]
    Dead,
}

impl State {
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    /// The state this cell takes in the next generation, given how many of its neighbors are
    /// currently alive.
    pub fn next(self, alive_neighbors: usize) -> State {
        B3S23.apply(self, alive_neighbors)
    }

    pub fn glyph(self) -> char {
        match self {
            State::Alive => '1',
            State::Dead => '0',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<State> {
        match glyph {
            '1' => Some(State::Alive),
            '0' => Some(State::Dead),
            _ => None,
        }
    }
}

impl From<bool> for State {
    fn from(alive: bool) -> Self {
        if alive { State::Alive } else { State::Dead }
    }
}

/// # Representation
/// Birth and survival neighbor counts are packed into one word
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `n` of either half means "`n` alive neighbors". For instance b3s23 is
/// ```notrust
/// 0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// Only [`B3S23`] is ever built, the rule is not configurable.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl RuleSet {
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    fn apply(&self, state: State, alive_neighbors: usize) -> State {
        // A cell never has more than 8 neighbors
        if alive_neighbors > 8 {
            return State::Dead;
        }

        let n = 1u16 << alive_neighbors;

        let mask = match state {
            State::Dead => self.births(),
            State::Alive => self.survivals(),
        };

        State::from(n & mask == n)
    }
}
