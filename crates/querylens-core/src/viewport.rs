//! Viewport lifecycle: wrap content, own the active transform, and keep the
//! set of input listeners in step with the session.

use std::fmt::Debug;

use tracing::debug;

use crate::consts::DEFAULT_WHEEL_SENSITIVITY;
use crate::geometry::Rect;
use crate::transform::{self, EngineState, InputEvent, InputKind, ViewTransform};

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Only events over the viewport container.
    Element,
    /// Events anywhere on the input surface.
    Global,
}

/// Pointer-move and pointer-up are global so a drag keeps tracking after the
/// pointer leaves the container, and still ends when released outside it.
pub fn listener_scope(kind: InputKind) -> ListenerScope {
    match kind {
        InputKind::PointerMove | InputKind::PointerUp => ListenerScope::Global,
        InputKind::Wheel | InputKind::PointerDown | InputKind::DoubleClick => {
            ListenerScope::Element
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// Platform side of a viewport: node reparenting, transform application and
/// event subscription.
pub trait ViewportHost {
    type Container: Clone + Debug;
    type Content;
    type Wrapper;

    /// Current bounds of the container in surface coordinates, or `None` if
    /// the container no longer exists.
    fn container_rect(&self, container: &Self::Container) -> Option<Rect>;

    /// Move `content` into a positioning wrapper inside `container`.
    fn wrap(&mut self, container: &Self::Container, content: Self::Content) -> Self::Wrapper;

    /// Remove the wrapper and put its content back where it came from.
    fn unwrap(&mut self, wrapper: Self::Wrapper);

    fn apply_transform(&mut self, wrapper: &Self::Wrapper, transform: &ViewTransform);

    fn listen(
        &mut self,
        container: &Self::Container,
        scope: ListenerScope,
        kind: InputKind,
    ) -> ListenerHandle;

    fn unlisten(&mut self, handle: ListenerHandle);
}

pub struct ViewportSession<H: ViewportHost> {
    container: H::Container,
    wrapper: H::Wrapper,
    state: EngineState,
    listeners: Vec<ListenerHandle>,
}

impl<H: ViewportHost> ViewportSession<H> {
    pub fn container(&self) -> &H::Container {
        &self.container
    }

    pub fn wrapper(&self) -> &H::Wrapper {
        &self.wrapper
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }
}

/// Owner of the single active [`ViewportSession`].
pub struct ViewportController<H: ViewportHost> {
    session: Option<ViewportSession<H>>,
    sensitivity: f32,
}

impl<H: ViewportHost> Default for ViewportController<H> {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_SENSITIVITY)
    }
}

impl<H: ViewportHost> ViewportController<H> {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            session: None,
            sensitivity,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ViewportSession<H>> {
        self.session.as_ref()
    }

    /// Active transform, identity when idle.
    pub fn transform(&self) -> ViewTransform {
        self.session
            .as_ref()
            .map(|s| s.state.transform)
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.state.is_dragging())
    }

    pub fn live_listener_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.listeners.len())
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Start a session for `content` inside `container`. Any active session is
    /// torn down first.
    pub fn mount(&mut self, host: &mut H, container: H::Container, content: H::Content) {
        if self.session.is_some() {
            debug!("Replacing active viewport session");
            self.teardown(host);
        }

        let wrapper = host.wrap(&container, content);
        host.apply_transform(&wrapper, &ViewTransform::IDENTITY);

        let listeners = InputKind::ALL
            .iter()
            .map(|&kind| host.listen(&container, listener_scope(kind), kind))
            .collect();

        debug!(?container, "Viewport session mounted");
        self.session = Some(ViewportSession {
            container,
            wrapper,
            state: EngineState::default(),
            listeners,
        });
    }

    /// Back to identity; listeners stay live.
    pub fn reset(&mut self, host: &mut H) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.state = EngineState::default();
        host.apply_transform(&session.wrapper, &ViewTransform::IDENTITY);
    }

    pub fn teardown(&mut self, host: &mut H) {
        let Some(session) = self.session.take() else {
            return;
        };
        for handle in session.listeners {
            host.unlisten(handle);
        }
        host.unwrap(session.wrapper);
        debug!(container = ?session.container, "Viewport session torn down");
    }

    /// Feed one input event through the transform engine. Returns `false`
    /// when no session is active or the event could not be applied.
    pub fn handle(&mut self, host: &mut H, event: InputEvent) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let frame = host.container_rect(&session.container);
        let frame = match (frame, event.kind()) {
            (Some(rect), _) => rect,
            (None, InputKind::Wheel) => {
                debug!("Wheel event without container bounds ignored");
                return false;
            }
            (None, _) => Rect::ZERO,
        };

        let next = transform::step(session.state, event, frame, self.sensitivity);
        if next.transform != session.state.transform {
            host.apply_transform(&session.wrapper, &next.transform);
        }
        session.state = next;
        true
    }
}
