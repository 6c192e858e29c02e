use std::fmt;
use std::str::FromStr;

use crate::rules::{GameRules, Pattern};

/// Fixed-size grid of cells, stored row-major. Positions outside the grid
/// are permanently dead; there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Returns whether the cell at `(x, y)` is alive. Out-of-bounds reads are dead.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i])
    }

    /// Sets the cell at `(x, y)`. Returns `false` if the position is outside the grid.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flips the cell at `(x, y)`. Returns `false` if the position is outside the grid.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Number of live cells among the 8 positions surrounding `(x, y)`.
    pub fn live_neighbors(&self, x: i64, y: i64) -> u32 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && self.get(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Computes the next generation. All cells, border included, are
    /// evaluated against this grid, so updates are simultaneous.
    pub fn step(&self, rules: &GameRules) -> Grid {
        let mut next = Grid::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbors = self.live_neighbors(x as i64, y as i64);
                next.cells[idx] = rules.next_state(self.cells[idx], neighbors);
            }
        }
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Brings the cells of `pattern` to life with its top-left corner at
    /// `(x, y)`. Cells falling outside the grid are dropped.
    pub fn stamp(&mut self, pattern: Pattern, x: i64, y: i64) {
        for &(dx, dy) in pattern.cells() {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid picture is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unexpected character {0:?}; use 'o' for alive and '.' for dead")]
    BadCell(char),
}

/// Parses an ASCII picture: one line per row, `o` alive, `.` dead.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = lines.first().ok_or(ParseGridError::Empty)?.chars().count();

        let mut grid = Grid::new(width, lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::RaggedRow { row: y, expected: width, found });
            }
            for (x, c) in line.chars().enumerate() {
                let alive = match c {
                    'o' | 'O' => true,
                    '.' => false,
                    other => return Err(ParseGridError::BadCell(other)),
                };
                grid.set(x as i64, y as i64, alive);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "o" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    fn step(g: &Grid) -> Grid {
        g.step(&GameRules::default())
    }

    #[test]
    fn test_empty_is_fixed_point() {
        let g = Grid::new(8, 6);
        assert_eq!(step(&g), g);
    }

    #[test]
    fn test_lone_cell_dies() {
        let g = grid(
            "
            ...
            .o.
            ...
            ",
        );
        assert_eq!(step(&g), Grid::new(3, 3));
    }

    #[test]
    fn test_block_is_still_life() {
        let g = grid(
            "
            ....
            .oo.
            .oo.
            ....
            ",
        );
        assert_eq!(step(&g), g);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        // Border cells see out-of-bounds neighbors as dead.
        let g = grid(
            "
            oo..
            oo..
            ....
            ",
        );
        assert_eq!(step(&g), g);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let horizontal = grid(
            "
            .....
            .....
            .ooo.
            .....
            .....
            ",
        );
        let vertical = grid(
            "
            .....
            ..o..
            ..o..
            ..o..
            .....
            ",
        );
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
        assert_eq!(step(&step(&horizontal)), horizontal);
    }

    #[test]
    fn test_blinker_on_border_is_clipped() {
        // No wraparound: the vertical phase loses its off-grid cell.
        let g = grid(
            "
            ooo
            ...
            ",
        );
        let expected = grid(
            "
            .o.
            .o.
            ",
        );
        assert_eq!(step(&g), expected);
    }

    #[test]
    fn test_step_is_simultaneous() {
        // Sequential in-place updates would give a different answer here.
        let g = grid(
            "
            o..
            o..
            o..
            ",
        );
        let expected = grid(
            "
            ...
            oo.
            ...
            ",
        );
        assert_eq!(step(&g), expected);
        assert_eq!(g.population(), 3, "step must not mutate its input");
    }

    #[test]
    fn test_step_matches_rule_for_every_cell() {
        let g = grid(
            "
            o.oo.o
            .oo..o
            o.o.oo
            ..ooo.
            o....o
            ",
        );
        let next = step(&g);
        for y in 0..g.height() as i64 {
            for x in 0..g.width() as i64 {
                let n = g.live_neighbors(x, y);
                let expected = if g.get(x, y) { n == 2 || n == 3 } else { n == 3 };
                assert_eq!(next.get(x, y), expected, "cell ({x}, {y}) with {n} neighbors");
            }
        }
    }

    #[test]
    fn test_neighbors_at_corner() {
        let g = grid(
            "
            ooo
            ooo
            ooo
            ",
        );
        assert_eq!(g.live_neighbors(0, 0), 3);
        assert_eq!(g.live_neighbors(1, 0), 5);
        assert_eq!(g.live_neighbors(1, 1), 8);
        assert_eq!(g.live_neighbors(-1, -1), 1);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut g = Grid::new(4, 3);
        assert!(!g.get(-1, 0));
        assert!(!g.get(4, 0));
        assert!(!g.get(0, 3));
        assert!(!g.toggle(4, 0));
        assert!(!g.set(0, -1, true));
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut g = Grid::new(4, 3);
        assert!(g.toggle(2, 1));
        assert!(g.get(2, 1));
        assert!(g.toggle(2, 1));
        assert_eq!(g, Grid::new(4, 3));
    }

    #[test]
    fn test_stamp_clips_at_border() {
        let mut g = Grid::new(4, 4);
        g.stamp(Pattern::Glider, 2, 2);
        let expected = grid(
            "
            ....
            ....
            ...o
            ....
            ",
        );
        assert_eq!(g, expected);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut g = Grid::new(8, 8);
        g.stamp(Pattern::Glider, 1, 1);
        let mut moved = Grid::new(8, 8);
        moved.stamp(Pattern::Glider, 2, 2);

        let mut current = g;
        for _ in 0..4 {
            current = step(&current);
        }
        assert_eq!(current, moved);
    }

    #[test]
    fn test_clear() {
        let mut g = grid("oo\no.");
        g.clear();
        assert_eq!(g.population(), 0);
        assert_eq!((g.width(), g.height()), (2, 2));
    }

    #[test]
    fn test_display_round_trips_picture() {
        let picture = "o..\n.oo";
        assert_eq!(grid(picture).to_string(), picture);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "oo\no".parse::<Grid>(),
            Err(ParseGridError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
        assert_eq!("o#".parse::<Grid>(), Err(ParseGridError::BadCell('#')));
    }
}
