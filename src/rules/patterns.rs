/// Predefined patterns that can be stamped onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small stationary pattern
    Block,
    /// A period-2 oscillator
    Blinker,
    /// A period-2 oscillator
    Toad,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// Emits a glider every 30 generations
    GosperGliderGun,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::GosperGliderGun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Glider => "Glider",
            Pattern::LightweightSpaceship => "Lightweight spaceship",
            Pattern::GosperGliderGun => "Gosper glider gun",
        }
    }

    /// Live cells as `(x, y)` offsets from the pattern's top-left corner.
    pub fn cells(&self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Toad => &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            Pattern::Glider => &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (0, 4), (1, 4),
                (0, 5), (1, 5),

                // Left ship
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Right ship
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right block
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        }
    }

    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (i64, i64) {
        let cells = self.cells();
        let w = cells.iter().map(|&(x, _)| x).max().unwrap_or(-1) + 1;
        let h = cells.iter().map(|&(_, y)| y).max().unwrap_or(-1) + 1;
        (w, h)
    }
}
