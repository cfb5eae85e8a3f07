//! Headless [`PlatformAdapter`] that dispatches synthetic events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::platform::{
    ListenerGuard, PlatformAdapter, PlatformEvent, PlatformEventKind, PlatformHandler,
};

type ListenerList = RefCell<Vec<(u64, PlatformEventKind, PlatformHandler)>>;

pub struct SimulatedPlatform {
    width: Cell<f64>,
    listeners: Rc<ListenerList>,
    next_id: Cell<u64>,
}

impl SimulatedPlatform {
    pub fn new(width: f64) -> Self {
        Self {
            width: Cell::new(width),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(1),
        }
    }

    pub fn resize(&self, width: f64) {
        self.width.set(width);
        self.dispatch(PlatformEvent::Resize { width });
    }

    pub fn move_pointer(&self, x: f64, y: f64) {
        self.dispatch(PlatformEvent::PointerMove { x, y });
    }

    pub fn listener_count(&self, kind: PlatformEventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .count()
    }

    fn dispatch(&self, event: PlatformEvent) {
        let kind = event.kind();
        let handlers: Vec<PlatformHandler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl PlatformAdapter for SimulatedPlatform {
    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn listen(&self, kind: PlatformEventKind, handler: PlatformHandler) -> ListenerGuard {
        let id = self.next_id.get();
        self.next_id.set(id.saturating_add(1));
        self.listeners.borrow_mut().push((id, kind, handler));
        let listeners = Rc::downgrade(&self.listeners);
        ListenerGuard::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners
                    .borrow_mut()
                    .retain(|(listener_id, _, _)| *listener_id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_guard_unregisters() {
        let platform = SimulatedPlatform::new(1024.0);
        let hits = Rc::new(Cell::new(0u32));
        let hits_for_handler = hits.clone();
        let guard = platform.listen(
            PlatformEventKind::Resize,
            Rc::new(move |_: PlatformEvent| hits_for_handler.set(hits_for_handler.get() + 1)),
        );
        platform.resize(500.0);
        drop(guard);
        platform.resize(900.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(platform.listener_count(PlatformEventKind::Resize), 0);
        assert_eq!(platform.viewport_width(), 900.0);
    }
}
