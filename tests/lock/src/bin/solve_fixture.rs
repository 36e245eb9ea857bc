//! Binary that runs fixed instances through both engines and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: key=value lines (see source for format).

use lock_tests::random_graph::RandomGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfind_harness::loading::parse_lights_out;
use wayfind_harness::report::Report;
use wayfind_harness::runner::{inspect, run_trials, solve, DEFAULT_WALK_LENGTH, DEFAULT_WALK_SEED};
use wayfind_harness::worlds::queens::Queens;
use wayfind_search::policy::{BestFirstPolicy, HillClimbingPolicy};
use wayfind_search::search::best_first_search;

const LIGHTS_OUT_3X3: &str = "3 3\n1 1 0\n1 0 0\n0 0 1\n";

fn main() {
    let world = parse_lights_out(LIGHTS_OUT_3X3).expect("fixture instance parses");

    let ucs = solve(&world, &BestFirstPolicy::uniform_cost()).expect("ucs run failed");
    let astar = solve(&world, &BestFirstPolicy::astar()).expect("astar run failed");
    let ucs_solution = ucs.solution.as_ref().expect("ucs found no solution");

    let mut rng = StdRng::seed_from_u64(DEFAULT_WALK_SEED);
    let inspection = inspect(&world, DEFAULT_WALK_LENGTH, &mut rng);

    let queens = Queens::default();
    let unbounded = run_trials(
        &queens,
        HillClimbingPolicy::Unbounded,
        200,
        &mut StdRng::seed_from_u64(1),
    )
    .expect("unbounded trials failed");
    let bounded = run_trials(
        &queens,
        HillClimbingPolicy::bounded_default(),
        200,
        &mut StdRng::seed_from_u64(1),
    )
    .expect("bounded trials failed");

    let graph = RandomGraph::generate(&mut StdRng::seed_from_u64(77), 40, 0.08, 0..=20, 0.1);
    let graph_result =
        best_first_search(&graph, &BestFirstPolicy::uniform_cost()).expect("graph search failed");

    println!("ucs_digest={}", ucs.digest());
    println!("ucs_expanded={}", ucs.expanded());
    println!("ucs_cost={}", ucs_solution.cost);
    println!("ucs_actions={}", ucs_solution.actions.join(";"));
    println!("astar_digest={}", astar.digest());
    println!("astar_expanded={}", astar.expanded());
    println!("inspection_digest={}", inspection.digest());
    println!("unbounded_digest={}", unbounded.digest());
    println!("unbounded_successes={}", unbounded.successes);
    println!("bounded_digest={}", bounded.digest());
    println!("bounded_successes={}", bounded.successes);
    println!(
        "graph_cost={}",
        graph_result
            .path
            .map_or_else(|| "none".to_string(), |p| p.cost.to_string())
    );
    println!("graph_expanded={}", graph_result.stats.expanded);
}
