use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use linkhub_core::{
    ListenerGuard, PlatformAdapter, PlatformError, PlatformEvent, PlatformEventKind,
    PlatformHandler,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Window};

/// `window`-backed adapter; listeners are passive and live as long as their guard.
pub(crate) struct BrowserPlatform {
    window: Window,
}

impl BrowserPlatform {
    pub(crate) fn new() -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::WindowUnavailable)?;
        Ok(Self { window })
    }
}

fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

impl PlatformAdapter for BrowserPlatform {
    fn viewport_width(&self) -> f64 {
        inner_width(&self.window)
    }

    fn listen(&self, kind: PlatformEventKind, handler: PlatformHandler) -> ListenerGuard {
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        };
        let listener = match kind {
            PlatformEventKind::Resize => {
                let window = self.window.clone();
                EventListener::new_with_options(&self.window, "resize", options, move |_| {
                    handler(PlatformEvent::Resize {
                        width: inner_width(&window),
                    });
                })
            }
            PlatformEventKind::PointerMove => EventListener::new_with_options(
                &self.window,
                "mousemove",
                options,
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        handler(PlatformEvent::PointerMove {
                            x: event.client_x() as f64,
                            y: event.client_y() as f64,
                        });
                    }
                },
            ),
        };
        ListenerGuard::new(move || drop(listener))
    }
}

pub(crate) fn seeded_rng() -> SmallRng {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let clock = js_sys::Date::now() as u64;
    SmallRng::seed_from_u64((noise << 32) ^ clock)
}
