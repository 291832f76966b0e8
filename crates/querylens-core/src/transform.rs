//! Scale + translation view transform and the pure input handlers that
//! update it.
//!
//! Content is laid out centered in its container, so the translation is an
//! offset of the content center from the container center. A content point
//! `p` (relative to the content center, unscaled) lands at container-local
//! position `center_offset + translate + p * scale`.

use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::geometry::{vec2, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn translation(&self) -> Vec2 {
        vec2(self.translate_x, self.translate_y)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Project a content point into container-local coordinates.
    pub fn content_to_local(&self, point: Vec2, center_offset: Vec2) -> Vec2 {
        center_offset + self.translation() + point * self.scale
    }

    /// Inverse of [`content_to_local`](Self::content_to_local).
    pub fn local_to_content(&self, local: Vec2, center_offset: Vec2) -> Vec2 {
        (local - center_offset - self.translation()) / self.scale
    }

    fn with_translation(self, t: Vec2) -> Self {
        Self {
            translate_x: t.x,
            translate_y: t.y,
            ..self
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Zoom around `anchor` (container-local) so the content point under it stays
/// put. Positive `delta_y` zooms out, matching wheel conventions.
pub fn zoom_at(
    transform: ViewTransform,
    delta_y: f32,
    anchor: Vec2,
    center_offset: Vec2,
    sensitivity: f32,
) -> ViewTransform {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return transform;
    }

    let factor = (-delta_y * sensitivity).exp();
    let new_scale = clamp_scale(transform.scale * factor);
    if new_scale == transform.scale {
        return transform;
    }

    let ratio = new_scale / transform.scale;
    let rel = anchor - center_offset - transform.translation();
    let translation = transform.translation() + rel * (1.0 - ratio);

    ViewTransform {
        scale: new_scale,
        ..transform.with_translation(translation)
    }
}

/// Shift the content by a pointer delta. Scale is untouched.
pub fn pan(transform: ViewTransform, delta: Vec2) -> ViewTransform {
    if !delta.is_finite() {
        return transform;
    }
    transform.with_translation(transform.translation() + delta)
}

pub fn recenter() -> ViewTransform {
    ViewTransform::IDENTITY
}

/// Scale at which content of `natural` size fits entirely inside `container`.
pub fn fit_scale(natural: Vec2, container: Vec2) -> f32 {
    if natural.x <= 0.0 || natural.y <= 0.0 || container.x <= 0.0 || container.y <= 0.0 {
        return 1.0;
    }
    (container.x / natural.x).min(container.y / natural.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Wheel,
    PointerDown,
    PointerMove,
    PointerUp,
    DoubleClick,
}

impl InputKind {
    pub const ALL: [InputKind; 5] = [
        InputKind::Wheel,
        InputKind::PointerDown,
        InputKind::PointerMove,
        InputKind::PointerUp,
        InputKind::DoubleClick,
    ];
}

/// Input delivered to the engine. Positions are in surface coordinates, the
/// same space as the container rectangle passed to [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Wheel { position: Vec2, delta_y: f32 },
    PointerDown { position: Vec2 },
    PointerMove { position: Vec2 },
    PointerUp,
    DoubleClick,
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::Wheel { .. } => InputKind::Wheel,
            InputEvent::PointerDown { .. } => InputKind::PointerDown,
            InputEvent::PointerMove { .. } => InputKind::PointerMove,
            InputEvent::PointerUp => InputKind::PointerUp,
            InputEvent::DoubleClick => InputKind::DoubleClick,
        }
    }
}

/// Transform plus the in-progress drag, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineState {
    pub transform: ViewTransform,
    /// Last pointer position seen during a drag.
    pub drag_from: Option<Vec2>,
}

impl EngineState {
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }
}

/// Advance the engine by one event. `frame` is the container rectangle as it
/// is *now*, so anchors stay correct after the container resizes.
pub fn step(state: EngineState, event: InputEvent, frame: Rect, sensitivity: f32) -> EngineState {
    match event {
        InputEvent::Wheel { position, delta_y } => EngineState {
            transform: zoom_at(
                state.transform,
                delta_y,
                frame.to_local(position),
                frame.center_offset(),
                sensitivity,
            ),
            ..state
        },
        InputEvent::PointerDown { position } => EngineState {
            drag_from: Some(position),
            ..state
        },
        InputEvent::PointerMove { position } => match state.drag_from {
            Some(from) => EngineState {
                transform: pan(state.transform, position - from),
                drag_from: Some(position),
            },
            None => state,
        },
        InputEvent::PointerUp => EngineState {
            drag_from: None,
            ..state
        },
        InputEvent::DoubleClick => EngineState {
            transform: recenter(),
            drag_from: None,
        },
    }
}
