use std::io;
use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Stylize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::generation::Generation;
use crate::grid::Grid;

pub const CONTINUE_PROMPT: &str = "Do you want to continue? [Y/N]";
pub const RESTART_PROMPT: &str = "Do you want to start a new game [Y/N]?";
pub const EXTINCT_MESSAGE: &str = "Everyone is dead :(";

/// How each run gets its first generation
#[derive(Debug)]
pub enum Seed {
    Random(StdRng),

    /// Every run starts from a copy of this generation
    Pattern(Generation),
}

/// How a single run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user declined to continue, or input ran out
    Stopped { generations: usize },

    /// Every cell died
    Extinct { generations: usize, restart: bool },
}

/// Console front end: shows each generation, asks whether to go on, and starts over after an
/// extinction when asked to.
pub struct Driver<R, W> {
    config: Config,
    seed: Seed,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            config,
            seed: Seed::Random(StdRng::from_entropy()),
            input,
            output,
        }
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Play runs until the user is done. Returns how many runs were played.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        let mut runs = 0;

        loop {
            runs += 1;
            info!(run = runs, "starting run");

            match self.run_once()? {
                RunOutcome::Extinct { restart: true, .. } => continue,
                outcome => {
                    info!(?outcome, "finished");
                    return Ok(runs);
                }
            }
        }
    }

    /// Play a single run on a fresh grid
    pub fn run_once(&mut self) -> anyhow::Result<RunOutcome> {
        let mut grid = Grid::new(self.config.height, self.config.width)?;

        match &mut self.seed {
            Seed::Random(rng) => grid.init_random_with(rng)?,
            Seed::Pattern(generation) => grid.seed(generation.clone())?,
        };

        loop {
            self.show(grid.latest()?)?;

            let next = grid.step()?;
            let alive = next.count_alive_cells();
            debug!(age = next.age(), alive, "stepped");

            if alive == 0 {
                self.show(next)?;
                queue!(
                    self.output,
                    style::PrintStyledContent(EXTINCT_MESSAGE.red()),
                    style::Print("\n"),
                )?;

                let restart = matches!(self.ask(RESTART_PROMPT)?.as_deref(), Some("Y" | "y"));

                return Ok(RunOutcome::Extinct {
                    generations: grid.len(),
                    restart,
                });
            }

            match self.ask(CONTINUE_PROMPT)?.as_deref() {
                None | Some("N" | "n") => {
                    grid.stop();

                    return Ok(RunOutcome::Stopped {
                        generations: grid.len(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    fn show(&mut self, generation: &Generation) -> io::Result<()> {
        queue!(self.output, style::Print(generation))?;
        self.output.flush()
    }

    /// Print `prompt` and read one line of input. Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        queue!(self.output, style::Print(prompt), style::Print("\n"))?;
        self.output.flush().context("Failed to write prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;

        if n == 0 {
            debug!("input exhausted");
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
