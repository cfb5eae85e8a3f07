use linkhub_core::Platform;
use yew::prelude::*;

// Simplified glyphs on a 24x24 grid, drawn with currentColor.
fn glyph(class: &'static str, body: Html) -> Html {
    html! {
        <svg
            class={classes!("icon", class)}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            { body }
        </svg>
    }
}

pub(crate) fn platform_icon(platform: Platform) -> Html {
    match platform {
        Platform::Twitch => glyph(
            "icon-twitch",
            html! {
                <>
                    <path d="M4 3h16v11l-4 4h-4l-3 3v-3H4z" />
                    <path d="M11 8v4M16 8v4" />
                </>
            },
        ),
        Platform::Instagram => glyph(
            "icon-instagram",
            html! {
                <>
                    <rect x="3" y="3" width="18" height="18" rx="5" />
                    <circle cx="12" cy="12" r="4" />
                    <circle cx="17.5" cy="6.5" r="0.5" />
                </>
            },
        ),
        Platform::TikTok => glyph(
            "icon-tiktok",
            html! {
                <path d="M14 3v11.5a3.5 3.5 0 1 1-3.5-3.5M14 3c0 2.8 2.2 5 5 5" />
            },
        ),
        Platform::Discord => glyph(
            "icon-discord",
            html! {
                <>
                    <path d="M7 6c3-1.3 7-1.3 10 0 1.8 2.7 2.8 5.7 3 9-1.6 1.3-3.3 2.2-5 2.7l-1-1.7M7 6C5.2 8.7 4.2 11.7 4 15c1.6 1.3 3.3 2.2 5 2.7l1-1.7" />
                    <circle cx="9.5" cy="12" r="1" />
                    <circle cx="14.5" cy="12" r="1" />
                </>
            },
        ),
        Platform::YouTube => glyph(
            "icon-youtube",
            html! {
                <>
                    <rect x="2" y="5" width="20" height="14" rx="4" />
                    <path d="M10 9l5 3-5 3z" />
                </>
            },
        ),
    }
}

pub(crate) fn external_link_icon() -> Html {
    glyph(
        "icon-external",
        html! {
            <>
                <path d="M15 3h6v6" />
                <path d="M10 14L21 3" />
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            </>
        },
    )
}
