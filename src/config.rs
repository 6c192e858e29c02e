use std::time::Duration;

// Grid
pub const GRID_WIDTH: usize = 200;
pub const GRID_HEIGHT: usize = 150;

// Window
pub const WINDOW_TITLE: &str = "Game of Life";
pub const WINDOW_HEIGHT: u32 = 1000;
pub const WINDOW_WIDTH: u32 = (WINDOW_HEIGHT as usize * GRID_WIDTH / GRID_HEIGHT) as u32;

// Colors (RGB)
pub const CELL_COLOR: [u8; 3] = [255, 100, 0];
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
/// Opacity of the preview cell drawn under the cursor.
pub const PREVIEW_ALPHA: u8 = 100;

/// Target time between frames (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
