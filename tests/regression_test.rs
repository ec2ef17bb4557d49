//! Regression tests for known edge cases

use euler_bench::core::{BenchmarkRunner, Error, Experiment, ExperimentTable, Opaque};
use std::cell::Cell;

#[test]
fn test_equal_times_keep_recording_order() {
    let runner = BenchmarkRunner::new().unwrap();
    let mut table = ExperimentTable::new(&runner);
    for (i, ms) in [5.0, 2.0, 5.0, 1.0].into_iter().enumerate() {
        table.push(Experiment::new(format!("experiment{i}"), 0, ms));
    }

    let order: Vec<&str> = table.ranked_by_time().into_iter().map(Experiment::name).collect();
    assert_eq!(order, ["experiment3", "experiment1", "experiment0", "experiment2"]);
}

#[test]
fn test_non_positive_iterations_rejected() {
    let runner = BenchmarkRunner::new().unwrap();
    let calls = Cell::new(0u32);
    let wrapped = Opaque::new(|| {
        calls.set(calls.get() + 1);
        1
    });

    for iterations in [0, -1] {
        let err = runner.run(&wrapped, iterations).unwrap_err();
        assert!(matches!(err, Error::InvalidIterations(n) if n == iterations));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_render_rounds_to_four_places() {
    let runner = BenchmarkRunner::new().unwrap();
    let mut table = ExperimentTable::new(&runner);
    table.push(Experiment::new("foo", 42, 3.141_59));

    let line = &table.render()[0];
    assert!(line.starts_with("foo "));
    assert!(line.contains(" 42 "));
    assert!(line.ends_with("3.1416"));
    assert_eq!(line.find(" 42"), Some(30));
}
