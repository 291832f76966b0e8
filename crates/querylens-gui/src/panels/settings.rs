use querylens_core::notice::Notice;
use querylens_core::settings::DatabaseType;

use crate::app::QueryLensApp;
use crate::messages::WorkerCommand;
use crate::panels::helpers::enum_combo;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    if !app.ui_state.settings.open {
        return;
    }

    let mut open = true;
    let mut submit = false;
    egui::Window::new("Database Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let form = &mut app.ui_state.settings;
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Database");
                    ui.text_edit_singleline(&mut form.db_path)
                        .on_hover_text("SQLite file path or PostgreSQL connection string");
                    ui.end_row();

                    ui.label("Type");
                    enum_combo(ui, "", &mut form.db_type, &DatabaseType::ALL);
                    ui.end_row();

                    ui.label("Model");
                    ui.add(egui::TextEdit::singleline(&mut form.model).hint_text("server default"));
                    ui.end_row();
                });

            ui.add_space(8.0);
            let enabled = form.is_valid() && app.ui_state.running.is_none();
            if ui.add_enabled(enabled, egui::Button::new("Apply")).clicked() {
                submit = true;
            }
        });

    if submit {
        let settings = app.ui_state.settings.to_settings();
        app.ui_state.settings.open = false;
        app.ui_state
            .set_notice(Notice::info(format!("Switching to {}", settings.db_path)));
        app.send_command(WorkerCommand::UpdateSettings { settings });
        return;
    }
    app.ui_state.settings.open = open;
}
