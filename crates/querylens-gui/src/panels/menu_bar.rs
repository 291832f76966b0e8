use querylens_core::notice::Notice;

use crate::app::QueryLensApp;
use crate::messages::WorkerCommand;
use crate::workers;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_save = app.ui_state.result_image.is_some();
                if ui
                    .add_enabled(can_save, egui::Button::new("Save Plot As...").shortcut_text(ctx.format_shortcut(&save_shortcut)))
                    .clicked()
                {
                    ui.close();
                    save_plot(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Database", |ui| {
                let busy = app.ui_state.is_busy();
                if ui.add_enabled(!busy, egui::Button::new("Show Schema")).clicked() {
                    ui.close();
                    app.send_command(WorkerCommand::FetchSchema);
                }
                if ui.add_enabled(!busy, egui::Button::new("Describe")).clicked() {
                    ui.close();
                    app.send_command(WorkerCommand::Describe);
                }

                ui.separator();

                if ui.button("Settings...").clicked() {
                    ui.close();
                    app.ui_state.settings.open = true;
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_plot(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn save_plot(ctx: &egui::Context, app: &mut QueryLensApp) {
    let Some(image) = app.ui_state.result_image.as_ref() else {
        app.ui_state.set_notice(Notice::info("No plot to save"));
        return;
    };

    let bytes = image.fetched.bytes.clone();
    let extension = image.extension();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(extension.to_uppercase(), &[extension])
            .set_file_name(format!("plot.{extension}"))
            .save_file()
        else {
            return;
        };

        let message = match std::fs::write(&path, &bytes) {
            Ok(()) => format!("Saved: {}", path.display()),
            Err(e) => format!("ERROR: Failed to save {}: {e}", path.display()),
        };
        workers::send_log(&result_tx, &ctx, message);
    });
}
