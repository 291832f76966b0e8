use querylens_core::geometry::vec2;
use querylens_core::preview::{fitted_size, Sizing};
use querylens_core::result_view::RegionVisibility;

use crate::app::QueryLensApp;
use crate::panels::helpers::table_grid;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.preview.results.artifact().is_none() {
            show_placeholder(ui, app.ui_state.is_busy());
            return;
        }

        toolbar(ui, app);
        ui.separator();

        let RegionVisibility { image, table } = app.preview.results.visibility();
        if image && show_image(ui, app) {
            app.open_result_preview();
        }
        if table {
            if let Some(table) = app.preview.results.artifact().and_then(|a| a.table.as_ref()) {
                table_grid(ui, "result_table", table);
            }
        }
    });
}

fn toolbar(ui: &mut egui::Ui, app: &mut QueryLensApp) {
    ui.horizontal(|ui| {
        ui.strong(format!("Showing: {}", app.preview.results.mode()));

        let toggle = egui::Button::new(format!("Show {}", app.preview.results.indicator()));
        if ui.add_enabled(app.preview.results.can_toggle(), toggle).clicked() {
            app.toggle_result_view();
        }

        if ui.button("Open in Preview").clicked() {
            app.open_result_preview();
        }
    });
}

/// Returns `true` when the plot was double-clicked.
fn show_image(ui: &mut egui::Ui, app: &QueryLensApp) -> bool {
    let has_ref = app
        .preview
        .results
        .artifact()
        .is_some_and(|a| a.has_image());

    let Some(image) = app.ui_state.result_image.as_ref() else {
        ui.centered_and_justified(|ui| {
            if has_ref && app.ui_state.is_busy() {
                ui.spinner();
            } else {
                ui.weak("No plot for this result");
            }
        });
        return false;
    };

    let available = ui.available_size();
    let size = fitted_size(
        Sizing::Contain,
        image.natural,
        vec2(available.x, available.y),
    );
    ui.centered_and_justified(|ui| {
        ui.add(
            egui::Image::new(&image.texture)
                .fit_to_exact_size(egui::vec2(size.x, size.y))
                .sense(egui::Sense::click()),
        )
        .on_hover_text("Double-click to open in preview")
        .double_clicked()
    })
    .inner
}

fn show_placeholder(ui: &mut egui::Ui, busy: bool) {
    ui.centered_and_justified(|ui| {
        let text = if busy {
            "Waiting for the server..."
        } else {
            "Ask a question to begin"
        };
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
