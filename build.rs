//! Passes build metadata to the crate as `SPROUT_BUILD_*` environment
//! variables, read back with `env!` in `src/build_info.rs`.

use std::env;
use std::process::Command;

/// Trimmed stdout of a successful git invocation.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    // Release pipelines pin these; local builds ask git and the clock
    let commit = env::var("SPROUT_COMMIT")
        .ok()
        .or_else(|| git(&["rev-parse", "--short=7", "HEAD"]))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|changes| !changes.is_empty());

    let date = env::var("SPROUT_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("cargo:rustc-env=SPROUT_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=SPROUT_BUILD_DATE={}", date);
    println!(
        "cargo:rustc-env=SPROUT_BUILD_DIRTY={}",
        if dirty { "1" } else { "0" }
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=SPROUT_COMMIT");
    println!("cargo:rerun-if-env-changed=SPROUT_BUILD_DATE");
}
