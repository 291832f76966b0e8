use querylens_core::config::ImageFormat;

use crate::app::QueryLensApp;
use crate::panels::helpers::enum_combo;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    egui::TopBottomPanel::top("question_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let busy = app.ui_state.is_busy();

            // Room left for the buttons and the format combo.
            let width = (ui.available_width() - 260.0).max(120.0);
            let edit = ui.add_sized(
                [width, 24.0],
                egui::TextEdit::singleline(&mut app.ui_state.question)
                    .hint_text("Ask a question about your data"),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if (ui.add_enabled(!busy, egui::Button::new("Ask")).clicked() || submitted) && !busy {
                let question = app.ui_state.question.clone();
                app.ask(question);
            }

            if ui
                .add_enabled(!busy, egui::Button::new("Random"))
                .on_hover_text(format!("{} example questions cached", app.preview.questions.len()))
                .clicked()
            {
                app.ask_random();
            }

            enum_combo(ui, "Format", &mut app.format, &[ImageFormat::Svg, ImageFormat::Png]);
        });
        ui.add_space(4.0);
    });
}
