use linkhub_core::PROFILE;

/// Avatar source, overridable at build time (Trunk exposes `TRUNK_PUBLIC_*`).
pub(crate) fn avatar_src() -> &'static str {
    option_env!("LINKHUB_AVATAR_SRC")
        .or(option_env!("TRUNK_PUBLIC_LINKHUB_AVATAR_SRC"))
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .unwrap_or(PROFILE.avatar_src)
}
