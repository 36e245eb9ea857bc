//! Cross-process determinism lock.
//!
//! Spawns the `solve_fixture` binary under 4 environment variants
//! and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    for key in [
        "ucs_digest=sha256:",
        "astar_digest=sha256:",
        "inspection_digest=sha256:",
        "unbounded_digest=sha256:",
        "bounded_digest=sha256:",
        "graph_cost=",
    ] {
        assert!(baseline.contains(key), "baseline output missing {key}");
    }

    // Variant 2: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 4: spurious env vars, including verbose logging.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYFIND_NOISE", "should_not_matter"),
            ("RUST_LOG", "trace"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars"
    );
}

#[test]
fn fixture_ucs_and_astar_agree_on_cost() {
    let out = run_variant(&workspace_root(), &[]);
    let field = |key: &str| -> String {
        out.lines()
            .find_map(|l| l.strip_prefix(&format!("{key}=")).map(str::to_string))
            .unwrap_or_else(|| panic!("missing {key}"))
    };
    let ucs_expanded: u64 = field("ucs_expanded").parse().unwrap();
    let astar_expanded: u64 = field("astar_expanded").parse().unwrap();
    assert!(ucs_expanded > 0 && astar_expanded > 0);
    assert!(!field("ucs_actions").is_empty());
    // Plateau moves make the bounded policy far more successful on 8-queens.
    let unbounded: u64 = field("unbounded_successes").parse().unwrap();
    let bounded: u64 = field("bounded_successes").parse().unwrap();
    assert!(bounded > unbounded, "bounded {bounded} <= unbounded {unbounded}");
}
