pub mod catalog;
pub mod page;
pub mod particle;
pub mod platform;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod viewport;

pub use catalog::{
    Platform, ProfileInfo, SocialChannel, LINK_REL, LINK_TARGET, NAV_LABEL, PROFILE,
    SOCIAL_CHANNELS,
};
pub use page::{ChangeHook, LinkHub, PageConfig, PageSnapshot};
pub use particle::{gradient_for, GradientStyle, Particle, ParticleStyle};
pub use platform::{
    ListenerGuard, PlatformAdapter, PlatformError, PlatformEvent, PlatformEventKind,
    PlatformHandler,
};
pub use viewport::{PointerPosition, ViewportMode, MOBILE_BREAKPOINT_PX};
