//! # Log output of the solver
//!
//! A separate test binary, such that the process wide logger can be installed here.
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use relp_tableau::algorithm::OptimizationResult;
use relp_tableau::algorithm::simplex::logic::Solver;
use relp_tableau::algorithm::simplex::settings::Settings;
use relp_tableau::algorithm::simplex::tableau::Tableau;

struct Recorder {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder { records: Mutex::new(Vec::new()) };

fn take_warnings() -> Vec<String> {
    RECORDER.records.lock().unwrap()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

#[test]
fn warns_about_non_canonical_start() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // The column of x3 is not a unit column
    let tableau = Tableau::from_data(
        vec![
            vec![2_f64, 1_f64, -3_f64, 0_f64, 0_f64, 10_f64],
            vec![1_f64, 0_f64, 1_f64, 1_f64, 0_f64, 7_f64],
            vec![-3_f64, 0_f64, -2_f64, 0_f64, 1_f64, 4_f64],
            vec![-2_f64, -1_f64, 3_f64, 1_f64, 0_f64, 0_f64],
        ],
        vec![2, 3, 4],
    ).unwrap();
    let report = Solver::new(tableau, Settings::default()).solve().unwrap();

    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("x3 in row 0 is not a unit column"));
    // Still solved
    match report.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_eq!(solution.values(), &[0_f64, 0_f64, 7_f64, 0_f64, 18_f64]);
        },
        OptimizationResult::Unbounded { .. } => panic!("problem is bounded"),
    }

    // A canonical start is not reported
    let tableau = Tableau::from_data(
        vec![
            vec![1_f64, 1_f64, 1_f64, 4_f64],
            vec![3_f64, 2_f64, 0_f64, 0_f64],
        ],
        vec![2],
    ).unwrap();
    Solver::new(tableau, Settings::default()).solve().unwrap();
    assert!(take_warnings().is_empty());

    // Neither is a start that is checked with an invalid tolerance
    let tableau = Tableau::from_data(
        vec![
            vec![1_f64, 1_f64, 2_f64, 4_f64],
            vec![3_f64, 2_f64, 0_f64, 0_f64],
        ],
        vec![2],
    ).unwrap();
    assert!(Solver::new(tableau, Settings::default().with_epsilon(f64::NAN)).solve().is_err());
    assert!(take_warnings().is_empty());
}
