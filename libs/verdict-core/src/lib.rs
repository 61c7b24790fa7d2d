//! Core types and grading logic for Verdict, a miniature submission grader.
//!
//! The crate is split along the same boundary as a real judge: [`types`]
//! holds the data model, [`grader`] holds the scoring pass behind a
//! pluggable [`grader::ExecutionEngine`], and [`suite`] builds shareable
//! test suites.

pub mod grader;
pub mod suite;
pub mod types;

pub use grader::{evaluate, grade_submission, EchoEngine, ExecutionEngine};
pub use suite::SuiteFactory;
pub use types::{ExecutionResult, Solution, Submission, Task, TestCase, TestSuite};
