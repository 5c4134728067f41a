//! Scoped event listener registration.
//!
//! A mounted deck owns its listeners: [`Listeners::mount`] registers one per
//! [`EventKind`] and dropping the guard removes every one of them, however
//! the owner goes away.
//!
//! This is the reference for how `static/slides.js` registers and tears down
//! its window listeners (the `listeners` table and its `pagehide` handler):
//! the same five events, with the same passive flags.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Wheel,
    KeyDown,
    TouchStart,
    TouchEnd,
    Scroll,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Wheel,
        EventKind::KeyDown,
        EventKind::TouchStart,
        EventKind::TouchEnd,
        EventKind::Scroll,
    ];

    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Wheel => "wheel",
            EventKind::KeyDown => "keydown",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchEnd => "touchend",
            EventKind::Scroll => "scroll",
        }
    }

    /// Listeners that may call `preventDefault()` must not be passive.
    pub fn passive(self) -> bool {
        !matches!(self, EventKind::Wheel | EventKind::KeyDown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Something listeners can be attached to (a window, a document).
pub trait EventTarget {
    fn add_listener(&mut self, kind: EventKind, passive: bool) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);
}

/// RAII guard over the listeners of one mounted deck.
pub struct Listeners<'t, T: EventTarget> {
    target: &'t mut T,
    ids: Vec<ListenerId>,
}

impl<'t, T: EventTarget> Listeners<'t, T> {
    pub fn mount(target: &'t mut T) -> Self {
        let ids = EventKind::ALL
            .iter()
            .map(|&kind| target.add_listener(kind, kind.passive()))
            .collect();
        trace!("deck listeners mounted");
        Self { target, ids }
    }

    pub fn ids(&self) -> &[ListenerId] {
        &self.ids
    }
}

impl<T: EventTarget> Drop for Listeners<'_, T> {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.target.remove_listener(id);
        }
        trace!("deck listeners removed");
    }
}
