use crate::session::Command;
use crate::state::State;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton},
    keyboard::{Key, NamedKey},
};

/// Maps a pressed key to a command. Auto-repeat keeps stepping but never
/// flips the run mode or clears again.
pub fn command_for_key(key: &Key, repeat: bool) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Space) if !repeat => Some(Command::ToggleRunning),
        Key::Named(NamedKey::Enter) => Some(Command::Step),
        Key::Named(NamedKey::Delete) if !repeat => Some(Command::Clear),
        _ => None,
    }
}

/// Converts a window position into grid coordinates. Positions that fall
/// outside the grid (or a degenerate window) yield `None`.
pub fn screen_to_cell(
    position: PhysicalPosition<f64>,
    window_size: PhysicalSize<u32>,
    grid_width: usize,
    grid_height: usize,
) -> Option<(i64, i64)> {
    if window_size.width == 0 || window_size.height == 0 || position.x < 0.0 || position.y < 0.0 {
        return None;
    }
    let cell_w = window_size.width as f64 / grid_width as f64;
    let cell_h = window_size.height as f64 / grid_height as f64;

    let x = (position.x / cell_w).floor() as i64;
    let y = (position.y / cell_h).floor() as i64;
    if x >= grid_width as i64 || y >= grid_height as i64 {
        return None;
    }
    Some((x, y))
}

pub fn handle_keyboard_input(state: &mut State, event: &KeyEvent) {
    if event.state != ElementState::Pressed {
        return;
    }
    if let Some(command) = command_for_key(&event.logical_key, event.repeat) {
        state.session.apply(command);
    }
}

pub fn handle_mouse_input(state: &mut State, button: MouseButton, element_state: ElementState) {
    if button != MouseButton::Left || element_state != ElementState::Pressed {
        return;
    }
    if let Some((x, y)) = state.hovered_cell() {
        state.session.toggle_cell(x, y);
    }
}

pub fn handle_cursor_move(state: &mut State, position: PhysicalPosition<f64>) {
    state.cursor_pos = Some(position);
}

pub fn handle_cursor_left(state: &mut State) {
    state.cursor_pos = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> PhysicalSize<u32> {
        PhysicalSize::new(400, 300)
    }

    #[test]
    fn test_screen_to_cell_scales_by_cell_size() {
        // 400x300 window over a 200x150 grid: each cell is 2x2 pixels.
        let cell = |x, y| screen_to_cell(PhysicalPosition::new(x, y), window(), 200, 150);
        assert_eq!(cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(cell(1.9, 1.9), Some((0, 0)));
        assert_eq!(cell(2.0, 3.5), Some((1, 1)));
        assert_eq!(cell(399.9, 299.9), Some((199, 149)));
    }

    #[test]
    fn test_screen_to_cell_rejects_outside() {
        let cell = |x, y| screen_to_cell(PhysicalPosition::new(x, y), window(), 200, 150);
        assert_eq!(cell(400.0, 10.0), None);
        assert_eq!(cell(10.0, 300.0), None);
        assert_eq!(cell(-0.5, 10.0), None);
        assert_eq!(
            screen_to_cell(PhysicalPosition::new(1.0, 1.0), PhysicalSize::new(0, 0), 200, 150),
            None
        );
    }

    #[test]
    fn test_screen_to_cell_non_integer_cell_size() {
        // 1333 px over 200 columns: cells are 6.665 px wide.
        let size = PhysicalSize::new(1333, 1000);
        assert_eq!(screen_to_cell(PhysicalPosition::new(6.6, 0.0), size, 200, 150), Some((0, 0)));
        assert_eq!(screen_to_cell(PhysicalPosition::new(6.7, 0.0), size, 200, 150), Some((1, 0)));
        assert_eq!(screen_to_cell(PhysicalPosition::new(1332.0, 999.0), size, 200, 150), Some((199, 149)));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(&Key::Named(NamedKey::Space), false), Some(Command::ToggleRunning));
        assert_eq!(command_for_key(&Key::Named(NamedKey::Enter), false), Some(Command::Step));
        assert_eq!(command_for_key(&Key::Named(NamedKey::Delete), false), Some(Command::Clear));
        assert_eq!(command_for_key(&Key::Named(NamedKey::Escape), false), None);
        assert_eq!(command_for_key(&Key::Character("s".into()), false), None);
    }

    #[test]
    fn test_key_repeat() {
        assert_eq!(command_for_key(&Key::Named(NamedKey::Enter), true), Some(Command::Step));
        assert_eq!(command_for_key(&Key::Named(NamedKey::Space), true), None);
        assert_eq!(command_for_key(&Key::Named(NamedKey::Delete), true), None);
    }
}
