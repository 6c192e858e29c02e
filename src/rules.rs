//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the rule used to compute the next state of a cell
//! and the catalogue of well-known patterns that can be stamped onto a grid.
mod patterns;

pub use patterns::Pattern;

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u32,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u32,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules (B3/S23)
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    /// State of a cell in the next generation, given its current state and
    /// its number of live neighbors.
    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        if alive {
            (self.survival_min..=self.survival_max).contains(&neighbors)
        } else {
            neighbors == self.birth_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rule_table() {
        let rules = GameRules::default();
        for neighbors in 0..=8 {
            let survives = matches!(neighbors, 2 | 3);
            let born = neighbors == 3;
            assert_eq!(rules.next_state(true, neighbors), survives, "alive, {neighbors} neighbors");
            assert_eq!(rules.next_state(false, neighbors), born, "dead, {neighbors} neighbors");
        }
    }

    #[test]
    fn test_two_neighbors_keeps_state() {
        let rules = GameRules::default();
        assert!(rules.next_state(true, 2));
        assert!(!rules.next_state(false, 2));
    }
}
