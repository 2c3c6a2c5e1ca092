// tests/no_http_outside_gsheets.rs
// Fails if HTTP client calls leak outside the gsheets module. The UI and the
// staff systems must stay pure over the cached table; every network access
// goes through `SheetsClient`.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/gsheets/") || p.contains("\\gsheets\\")
}

#[test]
fn reqwest_is_confined_to_the_gsheets_module() {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no source files found; run from the crate root");

    let mut offenders = Vec::new();
    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        if content.contains("reqwest::") {
            offenders.push(file);
        }
    }

    assert!(
        offenders.is_empty(),
        "direct reqwest usage outside src/gsheets/: {:?}",
        offenders
    );
}
