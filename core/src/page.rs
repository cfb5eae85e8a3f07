use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;

use crate::particle::{self, Particle, DESKTOP_PARTICLE_COUNT, MOBILE_PARTICLE_COUNT};
use crate::platform::{ListenerGuard, PlatformAdapter, PlatformEvent, PlatformEventKind};
use crate::viewport::{PointerPosition, ViewportMode, MOBILE_BREAKPOINT_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub breakpoint_px: f64,
    pub mobile_particles: usize,
    pub desktop_particles: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            mobile_particles: MOBILE_PARTICLE_COUNT,
            desktop_particles: DESKTOP_PARTICLE_COUNT,
        }
    }
}

impl PageConfig {
    pub fn particle_count(&self, mode: ViewportMode) -> usize {
        match mode {
            ViewportMode::Mobile => self.mobile_particles,
            ViewportMode::Desktop => self.desktop_particles,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageSnapshot {
    pub mode: ViewportMode,
    pub pointer: PointerPosition,
    /// Where the glow should sit; `None` while the follower is suppressed.
    pub follower: Option<PointerPosition>,
    pub particles: Rc<[Particle]>,
    /// Regenerations caused by mode changes since mount.
    pub particle_generation: u32,
}

pub type ChangeHook = Rc<dyn Fn(PageSnapshot)>;

struct PageState {
    platform: Rc<dyn PlatformAdapter>,
    config: PageConfig,
    rng: SmallRng,
    mode: ViewportMode,
    pointer: PointerPosition,
    particles: Rc<[Particle]>,
    particle_generation: u32,
    resize_listener: Option<ListenerGuard>,
    pointer_listener: Option<ListenerGuard>,
    change_hook: Option<ChangeHook>,
}

impl PageState {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            mode: self.mode,
            pointer: self.pointer,
            follower: (!self.mode.is_mobile()).then_some(self.pointer),
            particles: self.particles.clone(),
            particle_generation: self.particle_generation,
        }
    }

    fn regenerate(&mut self) {
        let count = self.config.particle_count(self.mode);
        self.particles = particle::generate(count, &mut self.rng).into();
    }

    fn sync_pointer_listener(&mut self, state: &Weak<RefCell<PageState>>) {
        if self.mode.is_mobile() {
            self.pointer_listener = None;
            return;
        }
        if self.pointer_listener.is_some() {
            return;
        }
        let state = state.clone();
        self.pointer_listener = Some(self.platform.listen(
            PlatformEventKind::PointerMove,
            Rc::new(move |event| handle_event(&state, event)),
        ));
    }

    fn release_listeners(&mut self) {
        self.pointer_listener = None;
        self.resize_listener = None;
    }
}

/// Owns viewport mode, pointer position and particles for one page view.
///
/// Listeners registered on the platform hold only weak references, so
/// dropping the `LinkHub` tears everything down.
pub struct LinkHub {
    state: Rc<RefCell<PageState>>,
}

impl LinkHub {
    pub fn mount(platform: Rc<dyn PlatformAdapter>, config: PageConfig, rng: SmallRng) -> Self {
        let mode = ViewportMode::from_width(platform.viewport_width(), config.breakpoint_px);
        let state = Rc::new(RefCell::new(PageState {
            platform: platform.clone(),
            config,
            rng,
            mode,
            pointer: PointerPosition::default(),
            particles: Rc::from(Vec::new()),
            particle_generation: 0,
            resize_listener: None,
            pointer_listener: None,
            change_hook: None,
        }));
        let weak = Rc::downgrade(&state);
        {
            let mut page = state.borrow_mut();
            page.regenerate();
            let weak_for_resize = weak.clone();
            page.resize_listener = Some(platform.listen(
                PlatformEventKind::Resize,
                Rc::new(move |event| handle_event(&weak_for_resize, event)),
            ));
            page.sync_pointer_listener(&weak);
        }
        Self { state }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn mode(&self) -> ViewportMode {
        self.state.borrow().mode
    }

    /// Installs the hook and immediately replays the current snapshot to it.
    pub fn set_change_hook(&self, hook: Option<ChangeHook>) {
        let snapshot = {
            let mut page = self.state.borrow_mut();
            page.change_hook = hook.clone();
            page.snapshot()
        };
        if let Some(hook) = hook {
            hook(snapshot);
        }
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for LinkHub {
    fn drop(&mut self) {
        let mut page = self.state.borrow_mut();
        page.change_hook = None;
        page.release_listeners();
    }
}

fn handle_event(state: &Weak<RefCell<PageState>>, event: PlatformEvent) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let notify = {
        let Ok(mut page) = state.try_borrow_mut() else {
            return;
        };
        let changed = match event {
            PlatformEvent::Resize { width } => {
                let next = ViewportMode::from_width(width, page.config.breakpoint_px);
                if next == page.mode {
                    false
                } else {
                    page.mode = next;
                    page.particle_generation = page.particle_generation.saturating_add(1);
                    page.regenerate();
                    page.sync_pointer_listener(&Rc::downgrade(&state));
                    true
                }
            }
            PlatformEvent::PointerMove { x, y } => {
                if page.mode.is_mobile() {
                    false
                } else {
                    page.pointer = PointerPosition::new(x, y);
                    true
                }
            }
        };
        if changed {
            page.change_hook.clone().map(|hook| (hook, page.snapshot()))
        } else {
            None
        }
    };
    if let Some((hook, snapshot)) = notify {
        hook(snapshot);
    }
}
