use querylens_core::geometry::vec2;
use querylens_core::preview::{fitted_size, ModalHost};
use querylens_core::transform::{InputEvent, InputKind};

use crate::app::QueryLensApp;
use crate::convert;
use crate::host::EguiHost;
use crate::panels::helpers::table_grid;

pub fn show(ctx: &egui::Context, app: &mut QueryLensApp) {
    if !app.host.is_modal_open() {
        return;
    }

    let mut open = true;
    egui::Window::new(app.host.title().to_string())
        .id(egui::Id::new("preview_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([900.0, 650.0])
        .show(ctx, |ui| {
            if let Some(table) = app.host.scroll_body() {
                table_grid(ui, "preview_table", table);
            } else {
                toolbar(ui, app);
                ui.separator();
                show_viewport(ui, app);
            }
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    let text_focused = ctx.memory(|m| m.focused().is_some());
    if should_close(open, escape, text_focused) {
        app.preview.close_preview(&mut app.host);
    }
}

fn toolbar(ui: &mut egui::Ui, app: &mut QueryLensApp) {
    ui.horizontal(|ui| {
        if ui.button("Recenter").clicked() {
            app.preview.recenter(&mut app.host);
        }
        ui.label(format!("{:.0}%", app.host.transform().scale * 100.0));
        if let Some(content) = app.host.content() {
            ui.separator();
            ui.weak(content.element.kind.to_string());
        }
    });
}

fn show_viewport(ui: &mut egui::Ui, app: &mut QueryLensApp) {
    let rect = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
    app.host.set_body_rect(convert::rect(rect));

    for event in collect_events(ui, &response, &app.host) {
        app.preview.handle_input(&mut app.host, event);
    }

    paint(ui, rect, &app.host);
}

/// Translate this frame's egui input into engine events, only for the kinds
/// that currently have a live listener. Wheel, press and double-click must
/// land on the body; move and release are taken from anywhere.
fn collect_events(ui: &egui::Ui, response: &egui::Response, host: &EguiHost) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if host.is_listening(InputKind::Wheel) && response.hovered() {
        let (delta, pos) = ui.input(|i| (i.smooth_scroll_delta.y, i.pointer.hover_pos()));
        if let (true, Some(pos)) = (delta != 0.0, pos) {
            // egui reports wheel-up as positive; the engine zooms in on negative.
            events.push(InputEvent::Wheel {
                position: convert::pos(pos),
                delta_y: -delta,
            });
        }
    }

    if host.is_listening(InputKind::PointerDown)
        && response.drag_started_by(egui::PointerButton::Primary)
    {
        if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
            events.push(InputEvent::PointerDown {
                position: convert::pos(pos),
            });
        }
    }

    if host.is_listening(InputKind::PointerMove) {
        let moved = ui.input(|i| {
            (i.pointer.delta() != egui::Vec2::ZERO)
                .then(|| i.pointer.latest_pos())
                .flatten()
        });
        if let Some(pos) = moved {
            events.push(InputEvent::PointerMove {
                position: convert::pos(pos),
            });
        }
    }

    if host.is_listening(InputKind::PointerUp) && ui.input(|i| i.pointer.primary_released()) {
        events.push(InputEvent::PointerUp);
    }

    if host.is_listening(InputKind::DoubleClick) && response.double_clicked() {
        events.push(InputEvent::DoubleClick);
    }

    events
}

fn paint(ui: &egui::Ui, rect: egui::Rect, host: &EguiHost) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

    let Some(content) = host.content() else {
        return;
    };

    let Some(texture) = content.texture.as_ref() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            content.error.as_deref().unwrap_or("Nothing to show"),
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(160),
        );
        return;
    };

    let t = host.transform();
    let fitted = fitted_size(
        content.element.sizing,
        content.natural,
        vec2(rect.width(), rect.height()),
    );
    let center = rect.center() + egui::vec2(t.translate_x, t.translate_y);
    let img_rect =
        egui::Rect::from_center_size(center, egui::vec2(fitted.x, fitted.y) * t.scale);

    painter.image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Escape belongs to a focused widget (question bar, settings fields) when
/// there is one.
fn should_close(window_open: bool, escape: bool, widget_focused: bool) -> bool {
    !window_open || (escape && !widget_focused)
}
