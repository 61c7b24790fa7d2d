use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single (input, expected output) pair.
///
/// `note` is an optional author annotation shown alongside the input in
/// reports; it never affects grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Render the input for display, prefixed with the note when one is set.
    pub fn describe(&self) -> String {
        match &self.note {
            Some(note) => format!("Description: {}, Input: {}", note, self.input),
            None => self.input.clone(),
        }
    }
}

/// An ordered collection of test cases.
///
/// `bonus_cases` inflates the count shown to users (e.g. hidden tests a task
/// advertises without shipping). Grading always iterates the real cases, so
/// the bonus never produces an out-of-range result slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    cases: Vec<TestCase>,
    bonus_cases: u32,
}

impl TestSuite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self {
            cases,
            bonus_cases: 0,
        }
    }

    pub fn with_bonus(cases: Vec<TestCase>, bonus_cases: u32) -> Self {
        Self { cases, bonus_cases }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of real, gradeable cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Count advertised to users: real cases plus the bonus adjustment.
    pub fn reported_count(&self) -> usize {
        self.cases.len() + self.bonus_cases as usize
    }
}

/// A problem statement bound to a test suite.
///
/// Suites are shared by reference: several task values (e.g. variants of the
/// same problem with different wording) can point at one suite allocation.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub details: Option<String>,
    suite: Arc<TestSuite>,
}

impl Task {
    pub fn new(id: Uuid, description: impl Into<String>, suite: Arc<TestSuite>) -> Self {
        Self {
            id,
            description: description.into(),
            details: None,
            suite,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn suite_handle(&self) -> Arc<TestSuite> {
        Arc::clone(&self.suite)
    }

    /// Description with the optional details annotation appended.
    pub fn display_description(&self) -> String {
        match &self.details {
            Some(details) => format!("{} | Details: {}", self.description, details),
            None => self.description.clone(),
        }
    }

    /// Copy of this task sharing the same suite allocation.
    pub fn shallow_clone(&self) -> Self {
        self.clone()
    }

    /// Copy of this task with a structurally independent suite.
    pub fn deep_clone(&self) -> Self {
        Self {
            id: self.id,
            description: self.description.clone(),
            details: self.details.clone(),
            suite: Arc::new(TestSuite::clone(&self.suite)),
        }
    }
}

/// A submitted solution artifact. Opaque to the grader; only the execution
/// engine interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub source_code: String,
}

impl Solution {
    pub fn new(source_code: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
        }
    }
}

/// Outcome of running one test case. Defaults to the empty placeholder state
/// (`actual_output` unset, not passed) used to pre-allocate submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub actual_output: Option<String>,
    pub passed: bool,
}

/// One solution's graded results against a task's suite.
///
/// Built before grading with placeholder results; each slot is written
/// exactly once via [`Submission::record`], which keeps `total_passed` in
/// sync with the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub task_id: Uuid,
    pub solution: Solution,
    results: Vec<ExecutionResult>,
    total_passed: usize,
}

impl Submission {
    pub fn new(task_id: Uuid, solution: Solution, test_count: usize) -> Self {
        Self {
            task_id,
            solution,
            results: vec![ExecutionResult::default(); test_count],
            total_passed: 0,
        }
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn total_passed(&self) -> usize {
        self.total_passed
    }

    /// Store the result for the test case at `index`.
    ///
    /// Fails on an out-of-range index or a slot that was already recorded.
    /// A placeholder slot is recognised by its unset `actual_output`, so a
    /// result without an actual output is rejected: recording it would leave
    /// the slot indistinguishable from an unrecorded one.
    pub fn record(&mut self, index: usize, result: ExecutionResult) -> Result<()> {
        let len = self.results.len();
        let Some(slot) = self.results.get_mut(index) else {
            bail!("result index {index} out of range for {len} test cases");
        };
        if slot.actual_output.is_some() {
            bail!("result for test case {index} already recorded");
        }
        if result.actual_output.is_none() {
            bail!("result for test case {index} has no actual output");
        }
        if result.passed {
            self.total_passed += 1;
        }
        *slot = result;
        Ok(())
    }
}
