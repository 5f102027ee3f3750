use std::process::Command;

fn main() {
    // Get git commit hash, if this is a git checkout at all
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    // Set as environment variable for compile time
    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", git_hash);

    // Rerun if .git/HEAD changes
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}
