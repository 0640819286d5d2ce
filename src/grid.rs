use rand::Rng;
use tracing::debug;
use tracing::info;

use crate::error::GridError;
use crate::error::GridResult;
use crate::generation::Generation;

/// Where a run currently stands.
///
/// ```notrust
/// Empty -> Seeded -> Stepping -> Stepping -> ... -> Extinct
///                 \           \
///                  `-----------`-> UserStopped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No generation yet
    Empty,

    /// Generation 0 exists
    Seeded,

    /// At least one successor has been appended
    Stepping,

    /// The newest generation has no alive cells
    Extinct,

    /// The driver ended the run
    UserStopped,
}

impl Phase {
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Extinct | Phase::UserStopped)
    }
}

/// A single simulation run: every generation computed so far, oldest first.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    generations: Vec<Generation>,
    phase: Phase,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            generations: Vec::new(),
            phase: Phase::Empty,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed the run with a random generation 0.
    ///
    /// A grid can only be seeded once, see [`Grid::seed`].
    pub fn init_random(&mut self) -> GridResult<&Generation> {
        self.init_random_with(&mut rand::thread_rng())
    }

    pub fn init_random_with<R: Rng>(&mut self, rng: &mut R) -> GridResult<&Generation> {
        let mut generation = Generation::new(self.width, self.height)?;
        generation.populate_random_with(rng);

        self.seed(generation)
    }

    /// Seed the run with the given generation 0
    pub fn seed(&mut self, generation: Generation) -> GridResult<&Generation> {
        if self.phase != Phase::Empty {
            return Err(GridError::AlreadySeeded);
        }

        self.check_dimensions(&generation)?;

        info!(
            width = self.width,
            height = self.height,
            alive = generation.count_alive_cells(),
            "seeded grid"
        );

        self.phase = Phase::Seeded;
        self.generations.push(generation);

        self.latest()
    }

    /// Append a successor computed by the caller.
    ///
    /// Moves the run to [`Phase::Extinct`] when the new generation has no alive cells.
    pub fn push(&mut self, generation: Generation) -> GridResult<&Generation> {
        match self.phase {
            Phase::Empty => return Err(GridError::NotSeeded),
            phase if phase.is_finished() => return Err(GridError::RunFinished { phase }),
            _ => {}
        }

        self.check_dimensions(&generation)?;

        self.phase = if generation.is_extinct() {
            info!(age = generation.age(), "all cells are dead");
            Phase::Extinct
        } else {
            Phase::Stepping
        };

        self.generations.push(generation);

        self.latest()
    }

    /// Compute the successor of the newest generation and append it
    pub fn step(&mut self) -> GridResult<&Generation> {
        if self.phase.is_finished() {
            return Err(GridError::RunFinished { phase: self.phase });
        }

        let next = self
            .generations
            .last_mut()
            .ok_or(GridError::NotSeeded)?
            .compute_successor();

        self.push(next)
    }

    /// End the run on behalf of the user. Stopping an already finished run changes nothing.
    pub fn stop(&mut self) {
        if self.phase.is_finished() {
            return;
        }

        debug!(generations = self.generations.len(), "run stopped");
        self.phase = Phase::UserStopped;
    }

    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    pub fn generation(&self, index: usize) -> GridResult<&Generation> {
        self.generations
            .get(index)
            .ok_or(GridError::GenerationOutOfRange {
                index,
                len: self.generations.len(),
            })
    }

    pub fn latest(&self) -> GridResult<&Generation> {
        self.generations.last().ok_or(GridError::NotSeeded)
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    fn check_dimensions(&self, generation: &Generation) -> GridResult<()> {
        let got = generation.dimensions();
        let expected = (self.width, self.height);

        if got != expected {
            return Err(GridError::DimensionMismatch { expected, got });
        }

        Ok(())
    }
}
