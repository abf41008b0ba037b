use std::{
    io::Write,
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{ Clear, ClearType },
};
use tracing::{ debug, info };

use crate::{
    error::Result,
    proc::Field,
};

pub const EXTINCT_MESSAGE: &str = "Simulation over.";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Where the simulation stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Seeded,
    Running,
    /// No live cells remain. Terminal.
    Extinct,
    /// The generation cap was reached while cells were still alive.
    Halted,
}

/// Drives a board from its seed to extinction, printing every generation.
pub struct App {
    field: Field,
    phase: Phase,
    epoch: u64,
    delay: Duration,
    maxgen: Option<u64>,
    clear: bool,
}

impl App {

    #[inline]
    pub fn new(field: Field) -> Self {
        App {
            field,
            phase: Phase::Seeded,
            epoch: 0,
            delay: DEFAULT_DELAY,
            maxgen: None,
            clear: false,
        }
    }

    /// Pause between printing one generation and computing the next.
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Stop after `maxgen` epochs even if cells are still alive.
    #[inline]
    pub fn with_maxgen(mut self, maxgen: Option<u64>) -> Self {
        self.maxgen = maxgen;
        self
    }

    /// Clear the terminal before each render instead of scrolling.
    #[inline]
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    fn capped(&self) -> bool {
        self.maxgen.is_some_and(|m| self.epoch >= m)
    }

    /// Computes one generation and replaces the current board with it.
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Extinct {
            return self.phase;
        }
        self.epoch += 1;
        self.field = self.field.step();
        self.phase = if self.field.has_any_alive() {
            Phase::Running
        } else {
            Phase::Extinct
        };
        debug!(epoch = self.epoch, population = self.field.population(), "generation computed");
        self.phase
    }

    /// Prints the seeded board, then every generation until extinction
    /// or the generation cap. A board seeded with no live cells is
    /// extinct before the first epoch.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Phase> {
        info!(size = self.field.size(), population = self.field.population(), "simulation seeded");
        self.draw(out)?;

        if !self.field.has_any_alive() {
            return self.finish(out);
        }
        self.phase = Phase::Running;

        loop {
            if self.capped() {
                self.phase = Phase::Halted;
                info!(epoch = self.epoch, "generation cap reached");
                return Ok(self.phase);
            }
            if self.epoch > 0 {
                sleep(self.delay);
            }
            let phase = self.advance();
            self.draw(out)?;
            if phase == Phase::Extinct {
                return self.finish(out);
            }
        }
    }

    fn finish<W: Write>(&mut self, out: &mut W) -> Result<Phase> {
        self.phase = Phase::Extinct;
        info!(epoch = self.epoch, "population extinct");
        queue!(out, Print(EXTINCT_MESSAGE), Print('\n'))?;
        out.flush()?;
        Ok(self.phase)
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.clear {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        if self.epoch > 0 {
            queue!(out, Print(format!("Epoch: {}\n", self.epoch)))?;
        }
        print_field(out, &self.field)
    }
}

/// Writes a board as rows of glyphs.
pub fn print_field<W: Write>(out: &mut W, field: &Field) -> Result<()> {
    queue!(out, Print(field.render()))?;
    out.flush()?;
    Ok(())
}

fn sleep(t: Duration) {
    if !t.is_zero() {
        thread::sleep(t)
    }
}
