//! Every `t!("…")` key referenced from `src/` must exist in the fallback locale.
//!
//! Only direct literal first arguments are detected; `fl!` calls and dynamically built
//! ids are not. The `fl!` macro checks those at compile time anyway.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_FTL: &str = "i18n/en-US/oddsboard-ui.ftl";

fn fallback_keys(crate_root: &Path) -> BTreeSet<String> {
    let content = fs::read_to_string(crate_root.join(FALLBACK_FTL)).expect("fallback FTL readable");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

fn referenced_keys(content: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    content
        .match_indices(NEEDLE)
        .filter_map(|(pos, _)| {
            let rest = &content[pos + NEEDLE.len()..];
            let key = &rest[..rest.find('"')?];
            key.chars().all(valid_key_char).then(|| key.to_string())
        })
        .collect()
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let known = fallback_keys(&crate_root);
    assert!(!known.is_empty(), "No message keys parsed from {FALLBACK_FTL}");

    let referenced: BTreeSet<String> = rust_sources(&crate_root.join("src"))
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|content| referenced_keys(&content))
        .collect();
    assert!(referenced.contains("state-unavailable"));

    let missing: Vec<&String> = referenced.difference(&known).collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback: {missing:?}"
    );

    let unused: Vec<&String> = known.difference(&referenced).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in Rust sources: {unused:?}");
    }
}
