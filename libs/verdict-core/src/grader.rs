//! Grader - Scoring Logic
//!
//! **Core Responsibility:**
//! Run a solution against a task's test cases and count passes.
//!
//! **Critical Properties:**
//! - Knows nothing about how solutions execute (the engine's job)
//! - Pure per call: same (solution, task, engine) → same submission
//! - No I/O, no shared state
//!
//! **Comparison Rules:**
//! - Exact string equality: case-sensitive, no trimming
//! - A mismatch is a normal outcome (`passed = false`), not an error

use anyhow::Result;
use tracing::{debug, info};

use crate::types::{ExecutionResult, Solution, Submission, Task, TestCase};

/// Execution strategy seam.
///
/// The engine knows HOW a solution turns an input into an output; the grader
/// only compares outputs. Implementations must return synchronously and must
/// not block.
pub trait ExecutionEngine {
    fn run(&self, solution: &Solution, input: &str) -> String;
}

/// Reference engine: echoes the test input back as the output.
///
/// Stands in for real execution; a production deployment supplies its own
/// [`ExecutionEngine`] with whatever sandboxing contract it needs.
pub struct EchoEngine;

impl ExecutionEngine for EchoEngine {
    fn run(&self, _solution: &Solution, input: &str) -> String {
        input.to_string()
    }
}

/// Evaluate a single test case under the given engine.
///
/// Returns a result with `actual_output` set and `passed` derived from exact
/// equality with the expected output.
pub fn evaluate<E: ExecutionEngine + ?Sized>(
    engine: &E,
    solution: &Solution,
    case: &TestCase,
) -> ExecutionResult {
    let actual = engine.run(solution, &case.input);
    let passed = actual == case.expected_output;
    ExecutionResult {
        actual_output: Some(actual),
        passed,
    }
}

/// Grade a solution against every test case of a task, in suite order.
///
/// Pre-allocates one placeholder result per case, fills each slot exactly
/// once, and returns the finished submission. An empty suite yields an empty
/// submission with `total_passed == 0`.
pub fn grade_submission<E: ExecutionEngine + ?Sized>(
    engine: &E,
    solution: &Solution,
    task: &Task,
) -> Result<Submission> {
    let suite = task.suite();
    let mut submission = Submission::new(task.id, solution.clone(), suite.len());

    for (index, case) in suite.cases().iter().enumerate() {
        let result = evaluate(engine, solution, case);
        debug!(
            task_id = %task.id,
            index,
            passed = result.passed,
            "graded test case"
        );
        submission.record(index, result)?;
    }

    info!(
        task_id = %task.id,
        test_count = suite.len(),
        total_passed = submission.total_passed(),
        "submission graded"
    );
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestSuite;
    use std::sync::Arc;
    use uuid::Uuid;

    /// Helper to create a test case
    fn make_test_case(input: &str, expected: &str) -> TestCase {
        TestCase::new(input, expected)
    }

    /// Helper to create a task from raw (input, expected) pairs
    fn make_task(pairs: &[(&str, &str)]) -> Task {
        let cases = pairs
            .iter()
            .map(|(input, expected)| make_test_case(input, expected))
            .collect();
        Task::new(Uuid::new_v4(), "task", Arc::new(TestSuite::new(cases)))
    }

    #[test]
    fn evaluate_pass_through_match() {
        let result = evaluate(&EchoEngine, &Solution::new("code"), &make_test_case("abc", "abc"));
        assert!(result.passed);
        assert_eq!(result.actual_output.as_deref(), Some("abc"));
    }

    #[test]
    fn evaluate_pass_through_mismatch() {
        let result = evaluate(&EchoEngine, &Solution::new("code"), &make_test_case("abc", "xyz"));
        assert!(!result.passed);
        assert_eq!(result.actual_output.as_deref(), Some("abc"));
    }

    #[test]
    fn evaluate_is_case_sensitive() {
        let result = evaluate(&EchoEngine, &Solution::new("code"), &make_test_case("Hello", "hello"));
        assert!(!result.passed);
    }

    #[test]
    fn evaluate_does_not_trim() {
        let result = evaluate(&EchoEngine, &Solution::new("code"), &make_test_case("abc\n", "abc"));
        assert!(!result.passed);
        assert_eq!(result.actual_output.as_deref(), Some("abc\n"));
    }

    #[test]
    fn grade_preserves_suite_order() {
        let task = make_task(&[("a", "a"), ("b", "x"), ("c", "c")]);
        let submission = grade_submission(&EchoEngine, &Solution::new("code"), &task).unwrap();

        assert_eq!(submission.results().len(), 3);
        assert_eq!(submission.results()[0].actual_output.as_deref(), Some("a"));
        assert_eq!(submission.results()[1].actual_output.as_deref(), Some("b"));
        assert_eq!(submission.results()[2].actual_output.as_deref(), Some("c"));
        assert!(submission.results()[0].passed);
        assert!(!submission.results()[1].passed);
        assert!(submission.results()[2].passed);
    }

    #[test]
    fn grade_counts_passes() {
        let task = make_task(&[("1", "1"), ("2", "wrong"), ("3", "3"), ("4", "no")]);
        let submission = grade_submission(&EchoEngine, &Solution::new("code"), &task).unwrap();

        assert_eq!(submission.total_passed(), 2);
        let passed = submission.results().iter().filter(|r| r.passed).count();
        assert_eq!(submission.total_passed(), passed);
    }

    #[test]
    fn grade_empty_suite() {
        let task = make_task(&[]);
        let submission = grade_submission(&EchoEngine, &Solution::new("code"), &task).unwrap();

        assert!(submission.results().is_empty());
        assert_eq!(submission.total_passed(), 0);
    }

    #[test]
    fn grade_is_idempotent() {
        let task = make_task(&[("a", "a"), ("b", "c")]);
        let solution = Solution::new("code");

        let first = grade_submission(&EchoEngine, &solution, &task).unwrap();
        let second = grade_submission(&EchoEngine, &solution, &task).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn grade_records_task_and_solution() {
        let task = make_task(&[("a", "a")]);
        let solution = Solution::new("print(input())");
        let submission = grade_submission(&EchoEngine, &solution, &task).unwrap();

        assert_eq!(submission.task_id, task.id);
        assert_eq!(submission.solution, solution);
    }

    #[test]
    fn custom_engine_is_pluggable() {
        struct UpperEngine;
        impl ExecutionEngine for UpperEngine {
            fn run(&self, _solution: &Solution, input: &str) -> String {
                input.to_uppercase()
            }
        }

        let task = make_task(&[("abc", "ABC"), ("abc", "abc")]);
        let submission = grade_submission(&UpperEngine, &Solution::new("code"), &task).unwrap();

        assert!(submission.results()[0].passed);
        assert!(!submission.results()[1].passed);
        assert_eq!(submission.total_passed(), 1);
    }

    #[test]
    fn engine_works_through_trait_object() {
        let engine: &dyn ExecutionEngine = &EchoEngine;
        let result = evaluate(engine, &Solution::new("code"), &make_test_case("x", "x"));
        assert!(result.passed);
    }
}
