use std::fs;

#[test]
fn readme_mentions_every_workspace_crate() {
    let root = env!("CARGO_MANIFEST_DIR");
    let cargo = fs::read_to_string(format!("{root}/Cargo.toml")).expect("Failed to read Cargo.toml");
    let readme = fs::read_to_string(format!("{root}/README.md")).expect("Failed to read README.md");

    for krate in ["langsniff-core", "langsniff-cli"] {
        assert!(
            cargo.contains(&format!("crates/{krate}")),
            "Cargo.toml workspace members must include crates/{krate}"
        );
        assert!(
            readme.contains(krate),
            "README.md must mention {krate} to match workspace membership"
        );
    }
}

#[test]
fn readme_lists_every_language_tag() {
    let root = env!("CARGO_MANIFEST_DIR");
    let readme = fs::read_to_string(format!("{root}/README.md")).expect("Failed to read README.md");

    for tag in langsniff_core::LanguageTag::ALL {
        assert!(
            readme.contains(&format!("`{}`", tag)),
            "README.md must list the `{tag}` language tag"
        );
    }
}
