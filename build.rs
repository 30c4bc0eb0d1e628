fn main() {
    emit_version_name();
    emit_version_code();
}

fn emit_version_name() {
    // 1. If FLORIS_VERSION_NAME is already set (e.g., by CI), use it as-is
    println!("cargo:rerun-if-env-changed=FLORIS_VERSION_NAME");
    if let Ok(v) = std::env::var("FLORIS_VERSION_NAME") {
        if !v.is_empty() {
            println!("cargo:rustc-env=FLORIS_VERSION_NAME={v}");
            return;
        }
    }

    // 2. Try VERSION file (used by release builds to override git describe)
    println!("cargo:rerun-if-changed=VERSION");
    if let Ok(v) = std::fs::read_to_string("VERSION") {
        let v = v.trim();
        let v = v.strip_prefix('v').unwrap_or(v);
        if !v.is_empty() {
            println!("cargo:rustc-env=FLORIS_VERSION_NAME={v}");
            return;
        }
    }

    // 3. Try git describe
    if let Some(version) = git(&["describe", "--tags", "--always", "--dirty"]) {
        // Strip 'v' prefix (e.g., "v0.4.0" -> "0.4.0")
        let version = version.strip_prefix('v').unwrap_or(&version);
        println!("cargo:rustc-env=FLORIS_VERSION_NAME={version}");
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/tags");
        println!("cargo:rerun-if-changed=.git/packed-refs");
        return;
    }

    // 4. Fallback to Cargo.toml version
    println!(
        "cargo:rustc-env=FLORIS_VERSION_NAME={}",
        std::env::var("CARGO_PKG_VERSION").unwrap_or_default()
    );
}

fn emit_version_code() {
    // Version code must be a plain integer, anything else is skipped
    println!("cargo:rerun-if-env-changed=FLORIS_VERSION_CODE");
    if let Ok(v) = std::env::var("FLORIS_VERSION_CODE") {
        if v.trim().parse::<u32>().is_ok() {
            println!("cargo:rustc-env=FLORIS_VERSION_CODE={}", v.trim());
            return;
        }
    }

    println!("cargo:rerun-if-changed=VERSION_CODE");
    if let Ok(v) = std::fs::read_to_string("VERSION_CODE") {
        if v.trim().parse::<u32>().is_ok() {
            println!("cargo:rustc-env=FLORIS_VERSION_CODE={}", v.trim());
            return;
        }
    }

    // Number of commits on HEAD grows monotonically between releases
    if let Some(count) = git(&["rev-list", "--count", "HEAD"]) {
        if count.parse::<u32>().is_ok() {
            println!("cargo:rustc-env=FLORIS_VERSION_CODE={count}");
            return;
        }
    }

    println!("cargo:rustc-env=FLORIS_VERSION_CODE=0");
}

fn git(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!out.is_empty()).then_some(out)
}
