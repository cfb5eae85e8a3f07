use std::path::Path;

use linkhub_core::PROFILE;

const INDEX_HTML: &str = include_str!("../../index.html");

#[test]
fn avatar_asset_ships_with_the_site() {
    let file_name = PROFILE.avatar_src.trim_start_matches('/');
    let asset = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../assets")
        .join(file_name);
    let bytes = std::fs::read(&asset).unwrap_or_else(|err| {
        panic!("avatar {} missing: {err}", asset.display());
    });
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

    let directive = format!(r#"rel="copy-file" href="assets/{file_name}""#);
    assert!(
        INDEX_HTML.contains(&directive),
        "index.html does not copy {file_name} into the build"
    );
}
