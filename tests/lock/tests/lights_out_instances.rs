//! Lights-out instance files end to end: load, solve, replay.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use wayfind_harness::loading::{load_lights_out, InstanceError};
use wayfind_harness::report::Report;
use wayfind_harness::runner::solve;
use wayfind_harness::worlds::lights_out::Toggle;
use wayfind_search::contract::StateSpace;
use wayfind_search::policy::BestFirstPolicy;
use wayfind_search::replay::replay_actions;
use wayfind_search::search::{best_first_search, uniform_cost_search};

fn write_instance(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    path
}

#[test]
fn single_lit_cell_solved_with_one_toggle() {
    let dir = TempDir::new().unwrap();
    let world = load_lights_out(&write_instance(&dir, "one.txt", "1 1\n1\n")).unwrap();

    let result = uniform_cost_search(&world).unwrap();
    assert_eq!(result.stats.expanded, 2);
    let path = result.path.unwrap();
    assert_eq!(path.actions, vec![Toggle { row: 0, col: 0 }]);
    assert_eq!(path.cost, 3);
}

#[test]
fn dark_cell_is_solved_without_actions() {
    let dir = TempDir::new().unwrap();
    let world = load_lights_out(&write_instance(&dir, "dark.txt", "1 1\n0\n")).unwrap();

    let result = uniform_cost_search(&world).unwrap();
    assert_eq!(result.stats.expanded, 1);
    let path = result.path.unwrap();
    assert!(path.is_empty());
    assert_eq!(path.cost, 0);
}

#[test]
fn every_policy_solves_3x3_and_replays() {
    let dir = TempDir::new().unwrap();
    let world = load_lights_out(&write_instance(
        &dir,
        "grid.txt",
        "3 3\n1 0 1\n0 1 0\n1 0 1\n",
    ))
    .unwrap();

    let optimal = uniform_cost_search(&world).unwrap().path.unwrap().cost;
    for policy in [
        BestFirstPolicy::uniform_cost(),
        BestFirstPolicy::astar(),
        BestFirstPolicy::greedy(),
        BestFirstPolicy::weighted(1, 5),
    ] {
        let path = best_first_search(&world, &policy).unwrap().path.unwrap();
        let replay = replay_actions(&world, &path.actions).unwrap();
        assert_eq!(replay.cost, path.cost);
        assert!(world.is_goal(replay.states.last().unwrap()));
        if policy == BestFirstPolicy::astar() {
            // Lit-cell count is admissible.
            assert_eq!(path.cost, optimal);
        }
        assert!(path.cost >= optimal);
    }
}

#[test]
fn astar_expands_no_more_than_ucs_on_4x4() {
    let dir = TempDir::new().unwrap();
    let world = load_lights_out(&write_instance(
        &dir,
        "grid.txt",
        "4 4\n1 1 0 0\n1 0 0 0\n0 0 0 1\n0 0 1 1\n",
    ))
    .unwrap();
    let ucs = solve(&world, &BestFirstPolicy::uniform_cost()).unwrap();
    let astar = solve(&world, &BestFirstPolicy::astar()).unwrap();
    assert_eq!(
        ucs.solution.as_ref().map(|s| s.cost),
        astar.solution.as_ref().map(|s| s.cost)
    );
    assert!(astar.expanded() < ucs.expanded());
    assert_ne!(ucs.digest(), astar.digest());
}

#[test]
fn malformed_files_are_rejected_before_search() {
    let dir = TempDir::new().unwrap();
    let cases: [(&str, fn(&InstanceError) -> bool); 6] = [
        ("", |e| matches!(e, InstanceError::Empty)),
        ("2\n", |e| matches!(e, InstanceError::MissingDimension { .. })),
        ("2 2\n1 0\n", |e| matches!(e, InstanceError::TooFewRows { .. })),
        ("1 2\n1 0 1\n", |e| matches!(e, InstanceError::TooManyColumns { .. })),
        ("1 1\n3\n", |e| matches!(e, InstanceError::InvalidLight { .. })),
        ("1 1\n0\n1\n", |e| matches!(e, InstanceError::TooManyRows { .. })),
    ];
    for (i, (text, check)) in cases.iter().enumerate() {
        let path = write_instance(&dir, &format!("bad{i}.txt"), text);
        let err = load_lights_out(&path).unwrap_err();
        assert!(check(&err), "case {i} ({text:?}) gave {err}");
    }
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let err = load_lights_out(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, InstanceError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}
