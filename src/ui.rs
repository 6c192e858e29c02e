use crate::rules::Pattern;
use crate::session::{Command, Mode, Session};
use egui;

/// Draws the menu button and, when open, the side panel. Returns the
/// commands the user triggered this frame.
pub fn draw_menu(ctx: &egui::Context, menu_open: &mut bool, session: &Session) -> Vec<Command> {
    let mut commands = Vec::new();

    // Use an Area for the menu button, positioned top-left
    egui::Area::new(egui::Id::new("menu_button_area"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(5.0, 5.0))
        .show(ctx, |ui| {
            if ui.button("☰").clicked() {
                *menu_open = !*menu_open;
            }
        });

    if !*menu_open {
        return commands;
    }

    // Semi-transparent so the grid stays visible underneath
    let panel_frame = egui::Frame {
        fill: egui::Color32::from_rgba_unmultiplied(25, 25, 25, 100),
        ..egui::Frame::side_top_panel(&ctx.style())
    };

    egui::SidePanel::left("side_panel")
        .frame(panel_frame)
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(24.0);
            ui.heading("Simulation");
            ui.separator();

            let mode = match session.mode() {
                Mode::Paused => "Paused",
                Mode::Running => "Simulating",
            };
            ui.label(format!("Mode: {}", mode));
            ui.label(format!("Generation: {}", session.generation()));
            ui.label(format!("Live Cells: {}", session.grid().population()));
            ui.label(format!("Grid: {}x{}", session.grid().width(), session.grid().height()));
            ui.separator();

            let run_label = if session.is_running() { "Pause (Space)" } else { "Run (Space)" };
            if ui.button(run_label).clicked() {
                commands.push(Command::ToggleRunning);
            }
            if ui.add_enabled(!session.is_running(), egui::Button::new("Step (Enter)")).clicked() {
                commands.push(Command::Step);
            }
            if ui.button("Clear (Delete)").clicked() {
                commands.push(Command::Clear);
            }
            ui.separator();

            ui.label("Place Pattern:");
            for pattern in Pattern::ALL {
                if ui.button(pattern.name()).clicked() {
                    commands.push(Command::Stamp(pattern));
                }
            }
        });

    commands
}
