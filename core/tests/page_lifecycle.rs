use std::cell::RefCell;
use std::rc::Rc;

use linkhub_core::sim::SimulatedPlatform;
use linkhub_core::{
    LinkHub, PageConfig, PageSnapshot, PlatformAdapter, PlatformEventKind, PointerPosition,
    ViewportMode,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn mount(width: f64) -> (Rc<SimulatedPlatform>, LinkHub) {
    let platform = Rc::new(SimulatedPlatform::new(width));
    let adapter: Rc<dyn PlatformAdapter> = platform.clone();
    let hub = LinkHub::mount(adapter, PageConfig::default(), SmallRng::seed_from_u64(42));
    (platform, hub)
}

fn record(hub: &LinkHub) -> Rc<RefCell<Vec<PageSnapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    hub.set_change_hook(Some(Rc::new(move |snapshot: PageSnapshot| {
        sink.borrow_mut().push(snapshot)
    })));
    seen
}

#[test]
fn mode_transitions_regenerate_particles() {
    let (platform, hub) = mount(1024.0);
    let mut modes = vec![hub.mode()];
    let mut counts = vec![hub.snapshot().particles.len()];

    for width in [500.0, 1024.0] {
        platform.resize(width);
        let snapshot = hub.snapshot();
        modes.push(snapshot.mode);
        counts.push(snapshot.particles.len());
    }

    assert_eq!(
        modes,
        vec![ViewportMode::Desktop, ViewportMode::Mobile, ViewportMode::Desktop]
    );
    assert_eq!(counts, vec![25, 8, 25]);
    assert_eq!(hub.snapshot().particle_generation, 2);
}

#[test]
fn resize_within_mode_keeps_particles() {
    let (platform, hub) = mount(1280.0);
    let before = hub.snapshot();
    platform.resize(1100.0);
    platform.resize(800.0);
    let after = hub.snapshot();
    assert_eq!(after.particle_generation, 0);
    assert!(Rc::ptr_eq(&before.particles, &after.particles));
}

#[test]
fn pointer_tracks_only_on_desktop() {
    let (platform, hub) = mount(1024.0);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 1);

    platform.move_pointer(120.0, 48.0);
    let snapshot = hub.snapshot();
    assert_eq!(snapshot.pointer, PointerPosition::new(120.0, 48.0));
    assert_eq!(snapshot.follower, Some(PointerPosition::new(120.0, 48.0)));

    platform.resize(500.0);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 0);
    platform.move_pointer(10.0, 10.0);
    let snapshot = hub.snapshot();
    assert_eq!(snapshot.pointer, PointerPosition::new(120.0, 48.0));
    assert_eq!(snapshot.follower, None);

    platform.resize(1024.0);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 1);
    platform.move_pointer(300.0, 200.0);
    assert_eq!(hub.snapshot().pointer, PointerPosition::new(300.0, 200.0));
}

#[test]
fn mobile_mount_never_registers_pointer_listener() {
    let (platform, hub) = mount(375.0);
    assert_eq!(hub.mode(), ViewportMode::Mobile);
    assert_eq!(hub.snapshot().particles.len(), 8);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 0);
    platform.move_pointer(50.0, 50.0);
    assert_eq!(hub.snapshot().pointer, PointerPosition::default());
}

#[test]
fn hook_sees_every_state_change() {
    let (platform, hub) = mount(1024.0);
    let seen = record(&hub);
    assert_eq!(seen.borrow().len(), 1);

    platform.move_pointer(1.0, 2.0);
    platform.resize(900.0);
    platform.resize(400.0);
    platform.move_pointer(3.0, 4.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].pointer, PointerPosition::new(1.0, 2.0));
    assert_eq!(seen[2].mode, ViewportMode::Mobile);
    assert_eq!(seen[2].particles.len(), 8);
}

#[test]
fn unmount_releases_listeners() {
    let (platform, hub) = mount(1024.0);
    let seen = record(&hub);
    assert_eq!(platform.listener_count(PlatformEventKind::Resize), 1);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 1);

    hub.unmount();
    assert_eq!(platform.listener_count(PlatformEventKind::Resize), 0);
    assert_eq!(platform.listener_count(PlatformEventKind::PointerMove), 0);

    platform.resize(320.0);
    platform.move_pointer(9.0, 9.0);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn custom_config_changes_counts_and_breakpoint() {
    let platform = Rc::new(SimulatedPlatform::new(1000.0));
    let config = PageConfig {
        breakpoint_px: 1200.0,
        mobile_particles: 3,
        desktop_particles: 40,
    };
    let hub = LinkHub::mount(platform.clone(), config, SmallRng::seed_from_u64(1));
    assert_eq!(hub.mode(), ViewportMode::Mobile);
    assert_eq!(hub.snapshot().particles.len(), 3);
    platform.resize(1200.0);
    assert_eq!(hub.snapshot().particles.len(), 40);
}
