use crate::config::WINDOW_TITLE;
use crate::grid::Grid;
use crate::rules::{GameRules, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Paused,
    Running,
}

/// User-level actions, whether they come from the keyboard or the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Step,
    Clear,
    Stamp(Pattern),
}

/// Owns the grid together with the generation counter and the run mode.
pub struct Session {
    grid: Grid,
    rules: GameRules,
    generation: u64,
    mode: Mode,
}

impl Session {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rules: GameRules::default(),
            generation: 1,
            mode: Mode::Paused,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleRunning => self.toggle_running(),
            Command::Step => {
                self.step_once();
            }
            Command::Clear => self.clear(),
            Command::Stamp(pattern) => self.stamp_centered(pattern),
        }
    }

    /// Flips the cell at `(x, y)` regardless of mode. Returns `false` when
    /// the position is outside the grid.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> bool {
        let toggled = self.grid.toggle(x, y);
        if toggled {
            log::debug!("Toggled cell ({}, {}) -> {}", x, y, self.grid.get(x, y));
        }
        toggled
    }

    pub fn toggle_running(&mut self) {
        self.mode = match self.mode {
            Mode::Paused => Mode::Running,
            Mode::Running => Mode::Paused,
        };
        log::info!("Simulation {:?} at generation {}", self.mode, self.generation);
    }

    /// Advances exactly one generation, but only while paused. Returns
    /// whether a step happened.
    pub fn step_once(&mut self) -> bool {
        if self.is_running() {
            log::debug!("Ignoring single step while running");
            return false;
        }
        self.advance();
        true
    }

    /// Called once per frame; advances one generation while running.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.advance();
        }
    }

    /// Kills every cell, resets the generation counter and pauses.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 1;
        self.mode = Mode::Paused;
        log::info!("Grid cleared");
    }

    pub fn stamp_centered(&mut self, pattern: Pattern) {
        let (w, h) = pattern.extent();
        let x = (self.grid.width() as i64 - w) / 2;
        let y = (self.grid.height() as i64 - h) / 2;
        self.grid.stamp(pattern, x, y);
        log::info!("Placed {} at ({}, {})", pattern.name(), x, y);
    }

    fn advance(&mut self) {
        self.grid = self.grid.step(&self.rules);
        self.generation += 1;
        log::debug!("Generation {}", self.generation);
    }

    pub fn title(&self) -> String {
        let mode = match self.mode {
            Mode::Paused => "Paused",
            Mode::Running => "Simulating",
        };
        format!("{} - {} | Generation: {}", WINDOW_TITLE, mode, self.generation)
    }
}
