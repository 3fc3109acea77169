//! Solve a random knapsack twice: cold, then seeded with the first optimum.
//!
//! ```text
//! cargo run --example warm_start -- <number of items> <limit of knapsack>
//! ```

use std::process;

use u_knapsack::instance::{generate, InstanceConfig};
use u_knapsack::solve;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage: {} <number of items>  <limit of knapsack>", args[0]);
        process::exit(1);
    }
    let (items, limit) = match (args[1].parse::<usize>(), args[2].parse::<i64>()) {
        (Ok(items), Ok(limit)) => (items, limit),
        _ => {
            println!("Usage: {} <number of items>  <limit of knapsack>", args[0]);
            process::exit(1);
        }
    };

    let base = match generate(&InstanceConfig::new(items, limit)) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    // Same values and weights for both instances.
    let first = base.clone().with_name("knapsack1");
    let second = base.with_name("knapsack2");

    let cold = solve(&first, None);
    println!("Optimal solution found:");
    println!(
        "  objective = {}, weight = {} / {}, nodes = {}",
        cold.objective(),
        cold.solution().weight,
        first.capacity(),
        cold.result.stats.nodes_explored
    );

    println!("second time");
    let warm = solve(&second, Some(cold.solution()));
    if let Some(report) = warm.warm_start {
        if report.feasible {
            println!("The initial solution satisfies all constraints.");
        } else {
            println!("The initial solution does not satisfy the constraints.");
        }
        if report.stored {
            println!("successfully");
        }
    }

    println!("Optimal solution found:");
    println!(
        "  objective = {}, weight = {} / {}, nodes = {}",
        warm.objective(),
        warm.solution().weight,
        second.capacity(),
        warm.result.stats.nodes_explored
    );
}
