use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=ABSPATH_COMMIT_HASH");
    watch_git_head(Path::new(".git"));

    let commit = std::env::var("ABSPATH_COMMIT_HASH")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_short_hash)
        .unwrap_or_default();

    println!("cargo:rustc-env=ABSPATH_COMMIT_HASH={}", commit);
}

/// Rerun when the checked-out branch moves, not only when HEAD switches branch.
/// Missing files are not watched, otherwise cargo reruns this script every build.
fn watch_git_head(git_dir: &Path) {
    let head = git_dir.join("HEAD");
    if !head.is_file() {
        return;
    }
    println!("cargo:rerun-if-changed={}", head.display());

    let Ok(contents) = fs::read_to_string(&head) else {
        return;
    };
    if let Some(reference) = contents.trim().strip_prefix("ref: ") {
        let ref_file = git_dir.join(reference);
        if ref_file.is_file() {
            println!("cargo:rerun-if-changed={}", ref_file.display());
        }
    }
    // branches without a loose ref file live here after `git gc`
    let packed = git_dir.join("packed-refs");
    if packed.is_file() {
        println!("cargo:rerun-if-changed={}", packed.display());
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
