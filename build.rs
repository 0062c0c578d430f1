use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    // The platform-header override is read with `option_env!`, so the crate
    // must be recompiled when it changes.
    println!("cargo:rerun-if-env-changed=DLCONFIG_HAVE_WINDOWS_H");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=DLCONFIG_BUILD_UNIX_OVERRIDE");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let git_full = git_full_hash().or_else(env_git_hash_full);
    if let Some(hash) = git_full.as_deref() {
        println!("cargo:rustc-env=DLCONFIG_GIT_HASH_FULL={hash}");
    }
    if let Some(hash) = git_short_hash().or_else(|| git_full.as_deref().and_then(shorten_hash)) {
        println!("cargo:rustc-env=DLCONFIG_GIT_HASH={hash}");
    }

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=DLCONFIG_BUILD_PROFILE={profile}");
    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=DLCONFIG_BUILD_TARGET={target}");
    }

    let timestamp = stable_build_unix_timestamp();
    println!("cargo:rustc-env=DLCONFIG_BUILD_UNIX={timestamp}");
}

fn stable_build_unix_timestamp() -> String {
    if let Ok(value) = env::var("DLCONFIG_BUILD_UNIX_OVERRIDE") {
        if value.parse::<u64>().is_ok() {
            return value;
        }
    }
    if let Ok(value) = env::var("SOURCE_DATE_EPOCH") {
        if value.parse::<u64>().is_ok() {
            return value;
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or_else(|_| "0".into(), |duration| duration.as_secs().to_string())
}

fn git_full_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn env_git_hash_full() -> Option<String> {
    let hash = env::var("GITHUB_SHA").ok()?;
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
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
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn shorten_hash(hash: &str) -> Option<String> {
    let trimmed = hash.trim();
    if trimmed.len() < 7 {
        return None;
    }
    Some(trimmed.chars().take(8).collect())
}
