use std::cell::Cell;
use std::rc::Rc;

use linkhub_core::catalog::button_animation_delay_ms;
use linkhub_core::{
    gradient_for, LinkHub, PageConfig, PageSnapshot, Particle, ParticleStyle, PointerPosition,
    SocialChannel, ViewportMode, LINK_REL, LINK_TARGET, NAV_LABEL, PROFILE, SOCIAL_CHANNELS,
};
use web_sys::Event;
use yew::prelude::*;

use crate::config;
use crate::icons::{external_link_icon, platform_icon};
use crate::platform::{seeded_rng, BrowserPlatform};

const FOLLOWER_OFFSET_PX: f64 = 192.0;
const AVATAR_MOBILE_PX: u32 = 64;
const AVATAR_DESKTOP_PX: u32 = 96;

fn avatar_size(mode: ViewportMode) -> u32 {
    match mode {
        ViewportMode::Mobile => AVATAR_MOBILE_PX,
        ViewportMode::Desktop => AVATAR_DESKTOP_PX,
    }
}

fn particle_style(particle: &Particle, mode: ViewportMode) -> String {
    let style = ParticleStyle::for_mode(mode);
    format!(
        "left: {x}%; top: {y}%; width: {size}px; height: {size}px; opacity: {opacity}; \
         background: {background}; animation: {name} {duration}s linear {delay}s infinite;",
        x = particle.x,
        y = particle.y,
        size = style.size_px,
        opacity = style.opacity,
        background = gradient_for(particle.id).css(),
        name = particle.animation_name(),
        duration = particle.duration,
        delay = particle.delay,
    )
}

fn button_style(channel: &SocialChannel, index: usize) -> String {
    format!(
        "--from: {}; --to: {}; --shadow: {}; animation-delay: {}ms;",
        channel.colors.from,
        channel.colors.to,
        channel.colors.shadow,
        button_animation_delay_ms(index)
    )
}

#[function_component(BackgroundOverlays)]
fn background_overlays() -> Html {
    html! {
        <div class="overlays" aria-hidden="true">
            <div class="overlay overlay-top" />
            <div class="overlay overlay-bottom-right" />
            <div class="overlay overlay-center" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PointerFollowerProps {
    position: Option<PointerPosition>,
}

#[function_component(PointerFollower)]
fn pointer_follower(props: &PointerFollowerProps) -> Html {
    let Some(position) = props.position else {
        return html! {};
    };
    let style = format!(
        "transform: translate({}px, {}px);",
        position.x - FOLLOWER_OFFSET_PX,
        position.y - FOLLOWER_OFFSET_PX
    );
    html! { <div class="pointer-follower" aria-hidden="true" style={style} /> }
}

#[derive(Properties, PartialEq)]
struct ParticleDotProps {
    particle: Particle,
    mode: ViewportMode,
}

#[function_component(ParticleDot)]
fn particle_dot(props: &ParticleDotProps) -> Html {
    let style = particle_style(&props.particle, props.mode);
    html! { <div class="particle" aria-hidden="true" style={style} /> }
}

#[derive(Properties, PartialEq)]
struct ProfileHeaderProps {
    mode: ViewportMode,
    avatar_src: AttrValue,
}

#[function_component(ProfileHeader)]
fn profile_header(props: &ProfileHeaderProps) -> Html {
    let avatar_failed = use_state(|| false);
    let size = avatar_size(props.mode).to_string();
    let on_avatar_error = {
        let avatar_failed = avatar_failed.clone();
        let src = props.avatar_src.clone();
        Callback::from(move |_: Event| {
            gloo::console::warn!("avatar failed to load, using fallback", src.to_string());
            avatar_failed.set(true);
        })
    };
    let avatar = if *avatar_failed {
        html! {
            <span class="avatar avatar-fallback" role="img" aria-label={PROFILE.avatar_alt}>
                { PROFILE.monogram() }
            </span>
        }
    } else {
        html! {
            <img
                class="avatar"
                src={props.avatar_src.clone()}
                alt={PROFILE.avatar_alt}
                width={size.clone()}
                height={size}
                onerror={on_avatar_error}
            />
        }
    };
    html! {
        <header class="profile">
            <div class="avatar-frame">
                <div class="avatar-ring" aria-hidden="true" />
                { avatar }
            </div>
            <div class="profile-text">
                <h1 class="profile-name">{ PROFILE.name }</h1>
                <p class="profile-title">{ PROFILE.title }</p>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SocialButtonProps {
    channel: SocialChannel,
    index: usize,
}

#[function_component(SocialButton)]
fn social_button(props: &SocialButtonProps) -> Html {
    let channel = &props.channel;
    html! {
        <a
            class={classes!("social-button", format!("social-{}", channel.platform))}
            href={channel.url}
            target={LINK_TARGET}
            rel={LINK_REL}
            aria-label={channel.aria_label()}
            style={button_style(channel, props.index)}
        >
            <span class="social-sheen" aria-hidden="true" />
            <span class="social-body">
                <span class="social-lead">
                    <span class="social-icon">{ platform_icon(channel.platform) }</span>
                    <span class="social-name">{ channel.name }</span>
                </span>
                <span class="social-trail">{ external_link_icon() }</span>
            </span>
        </a>
    }
}

fn mount_effects(snapshot: UseStateHandle<Option<PageSnapshot>>) -> Option<LinkHub> {
    let platform = match BrowserPlatform::new() {
        Ok(platform) => platform,
        Err(err) => {
            gloo::console::error!("effects disabled:", err.to_string());
            return None;
        }
    };
    let hub = LinkHub::mount(Rc::new(platform), PageConfig::default(), seeded_rng());
    gloo::console::log!("viewport mode", hub.mode().as_str());
    let last_mode = Rc::new(Cell::new(hub.mode()));
    hub.set_change_hook(Some(Rc::new(move |next: PageSnapshot| {
        if last_mode.replace(next.mode) != next.mode {
            gloo::console::log!(
                "viewport mode",
                next.mode.as_str(),
                format!("{} particles", next.particles.len())
            );
        }
        snapshot.set(Some(next));
    })));
    Some(hub)
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let snapshot = use_state(|| None::<PageSnapshot>);
    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let hub = mount_effects(snapshot);
            move || drop(hub)
        });
    }

    let current = (*snapshot).clone();
    let mode = current
        .as_ref()
        .map(|current| current.mode)
        .unwrap_or_default();
    let follower = current.as_ref().and_then(|current| current.follower);
    let particles: Rc<[Particle]> = current
        .map(|current| current.particles)
        .unwrap_or_else(|| Rc::from(Vec::new()));

    let particle_nodes = use_memo((mode, particles), |(mode, particles)| {
        particles
            .iter()
            .map(|particle| {
                html! {
                    <ParticleDot
                        key={particle.id.to_string()}
                        particle={*particle}
                        mode={*mode}
                    />
                }
            })
            .collect::<Html>()
    });
    let social_buttons = use_memo((), |_| {
        SOCIAL_CHANNELS
            .iter()
            .enumerate()
            .map(|(index, channel)| {
                html! { <SocialButton key={channel.key(index)} channel={*channel} {index} /> }
            })
            .collect::<Html>()
    });

    html! {
        <div class={classes!("page", format!("page-{}", mode.as_str()))}>
            <BackgroundOverlays />
            <PointerFollower position={follower} />
            { (*particle_nodes).clone() }
            <main class="page-center">
                <section class="card">
                    <div class="card-sheen" aria-hidden="true" />
                    <div class="card-content">
                        <ProfileHeader {mode} avatar_src={config::avatar_src()} />
                        <nav class="social-list" role="navigation" aria-label={NAV_LABEL}>
                            { (*social_buttons).clone() }
                        </nav>
                    </div>
                </section>
            </main>
        </div>
    }
}
