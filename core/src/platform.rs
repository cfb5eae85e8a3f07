use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformEventKind {
    Resize,
    PointerMove,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlatformEvent {
    Resize { width: f64 },
    PointerMove { x: f64, y: f64 },
}

impl PlatformEvent {
    pub fn kind(&self) -> PlatformEventKind {
        match self {
            PlatformEvent::Resize { .. } => PlatformEventKind::Resize,
            PlatformEvent::PointerMove { .. } => PlatformEventKind::PointerMove,
        }
    }
}

pub type PlatformHandler = Rc<dyn Fn(PlatformEvent)>;

/// Keeps a listener registered; dropping it unregisters.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// The window-level events and measurements the page reacts to.
pub trait PlatformAdapter {
    fn viewport_width(&self) -> f64;
    fn listen(&self, kind: PlatformEventKind, handler: PlatformHandler) -> ListenerGuard;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    WindowUnavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::WindowUnavailable => write!(f, "no window available"),
        }
    }
}

impl std::error::Error for PlatformError {}
