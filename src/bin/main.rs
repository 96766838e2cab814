use std::process::exit;

use clap::{Parser, ValueEnum};

use relp_tableau::algorithm::OptimizationResult;
use relp_tableau::algorithm::simplex::logic::Solver;
use relp_tableau::algorithm::simplex::settings::Settings;
use relp_tableau::algorithm::simplex::tableau::Tableau;
use relp_tableau::algorithm::simplex::trace::Snapshot;
use relp_tableau::error::InputError;

/// Solves a small linear program with the tableau simplex method, printing every iteration.
///
/// Set `RUST_LOG=debug` (or `trace`) for the solver's log output.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Problem to solve
    #[arg(long, value_enum, default_value_t = Problem::Worked)]
    problem: Problem,
    /// Maximum number of pivots
    #[arg(long)]
    iteration_limit: Option<usize>,
    /// Pivot elements closer to zero than this are rejected
    #[arg(long, allow_negative_numbers = true)]
    epsilon: Option<f64>,
}

/// Built-in problems.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Problem {
    /// maximize 2x1 - x2 + 3x3 + x4 s.t. 2x1 + x2 - 3x3 = 10, x1 + x3 + x4 = 7,
    /// -3x1 - 2x3 + x5 = 4, starting from basis (x3, x4, x5)
    Worked,
    /// maximize x1 s.t. x1 - x2 + x3 = 1, starting from basis (x3)
    Unbounded,
}

impl Problem {
    fn tableau(self) -> Result<Tableau<f64>, InputError> {
        match self {
            Problem::Worked => Tableau::from_data(
                vec![
                    vec![2_f64, 1_f64, -3_f64, 0_f64, 0_f64, 10_f64],
                    vec![1_f64, 0_f64, 1_f64, 1_f64, 0_f64, 7_f64],
                    vec![-3_f64, 0_f64, -2_f64, 0_f64, 1_f64, 4_f64],
                    vec![-2_f64, -1_f64, 3_f64, 1_f64, 0_f64, 0_f64],
                ],
                vec![2, 3, 4],
            ),
            Problem::Unbounded => Tableau::from_data(
                vec![
                    vec![1_f64, -1_f64, 1_f64, 1_f64],
                    vec![1_f64, 0_f64, 0_f64, 0_f64],
                ],
                vec![2],
            ),
        }
    }
}

fn print_snapshot(snapshot: &Snapshot<f64>) {
    println!("\nIteration {}", snapshot.iteration);
    println!("Tableau:");
    print!("{}", snapshot.tableau);
    if let Some(entering) = snapshot.entering {
        println!("Entering variable: x{}", entering + 1);
    }
    if let Some(leaving) = snapshot.leaving {
        println!("Leaving variable: x{}", leaving + 1);
    }
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let tableau = match opts.problem.tableau() {
        Ok(tableau) => tableau,
        Err(error) => {
            eprintln!("Invalid problem: {}", error);
            exit(1);
        },
    };

    let mut settings = Settings::default();
    if let Some(limit) = opts.iteration_limit {
        settings = settings.with_iteration_limit(limit);
    }
    if let Some(epsilon) = opts.epsilon {
        settings = settings.with_epsilon(epsilon);
    }

    let mut solver = Solver::new(tableau, settings);
    let outcome = loop {
        match solver.step() {
            Ok(state) if state.is_terminal() => break Ok(()),
            Ok(_) => {},
            Err(error) => break Err(error),
        }
    };

    for snapshot in solver.trace() {
        print_snapshot(snapshot);
    }
    if let Err(error) = outcome {
        eprintln!("Solver stopped: {}", error);
        exit(1);
    }

    match solver.result() {
        Some(OptimizationResult::FiniteOptimum(solution)) => {
            println!("Optimal solution found.");
            println!("\nOptimal Solution:");
            println!("{}", solution);
        },
        Some(OptimizationResult::Unbounded { entering_column }) => {
            println!("Unbounded solution, x{} can be increased indefinitely.", entering_column + 1);
        },
        None => exit(1),
    }
}
