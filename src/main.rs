// Declare modules directly in the binary crate root
pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;
pub mod session;
pub mod state;
pub mod ui;

use crate::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::state::State;

use anyhow::Context;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};
use std::sync::Arc;
use std::time::Instant;

async fn run(event_loop: EventLoop<()>, window: Arc<Window>) -> anyhow::Result<()> {
    let mut state = State::new(window).await?;

    event_loop.run(move |event, window_target| {
        match event {
            Event::WindowEvent { window_id, ref event }
                if window_id == state.window.id() =>
            {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // Resizes and close requests are handled even if egui wants them
                let consumed_by_egui = response.consumed
                    && !matches!(event, WindowEvent::Resized(_) | WindowEvent::CloseRequested);

                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        log::info!("Close requested, exiting at generation {}", state.session.generation());
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        input::handle_keyboard_input(&mut state, event);
                    }
                    WindowEvent::MouseInput { state: element_state, button, .. } => {
                        input::handle_mouse_input(&mut state, *button, *element_state);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input::handle_cursor_move(&mut state, *position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input::handle_cursor_left(&mut state);
                    }
                    WindowEvent::RedrawRequested => {
                        let output_frame = match state.update_and_render() {
                            Ok(frame) => frame,
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of GPU memory, exiting.");
                                window_target.exit();
                                return;
                            }
                            Err(e) => {
                                // Lost/Outdated surfaces were reconfigured in update_and_render
                                log::warn!("Skipping frame due to surface {:?}", e);
                                state.window.request_redraw();
                                return;
                            }
                        };
                        state.render_overlay(output_frame);
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                if state.clock.is_due(Instant::now()) {
                    state.window.request_redraw();
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(state.clock.deadline()));
            }
            _ => ()
        }
    })?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new().context("failed to create event loop")?;

    let window = Arc::new(WindowBuilder::new()
        .with_title(format!("{} - Paused", WINDOW_TITLE))
        .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?);

    pollster::block_on(run(event_loop, window))
}
