use querylens_core::artifact::TableArtifact;

/// Show a ComboBox for enum selection. Returns `true` if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_label(label)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

/// Scrollable striped grid of a table artifact.
pub(crate) fn table_grid(ui: &mut egui::Ui, id: &str, table: &TableArtifact) {
    if table.columns.is_empty() {
        ui.weak("No rows");
        return;
    }

    egui::ScrollArea::both()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new(id).striped(true).show(ui, |ui| {
                for column in &table.columns {
                    ui.strong(column);
                }
                ui.end_row();

                for row in 0..table.row_count() {
                    for column in &table.columns {
                        ui.label(table.cell_text(row, column));
                    }
                    ui.end_row();
                }
            });
        });
}
