use querylens_core::notice::NoticeLevel;

use crate::app::QueryLensApp;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: four lines tall, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(action) = app.ui_state.running {
                ui.spinner();
                ui.label(format!("{action}..."));
                ui.separator();
            }

            if let Some(notice) = &app.ui_state.notice {
                let color = match notice.level {
                    NoticeLevel::Info => ui.visuals().text_color(),
                    NoticeLevel::Error => ui.visuals().warn_fg_color,
                    NoticeLevel::Alert => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, &notice.text);
                ui.separator();
            }

            if app.preview.viewport.is_active() {
                let scale = app.preview.viewport.transform().scale;
                ui.label(format!("Zoom: {:.0}%", scale * 100.0));
                ui.separator();
            }
            ui.label(format!("Server: {}", app.config.base_url()));
        });

        ui.add_space(2.0);
    });
}
