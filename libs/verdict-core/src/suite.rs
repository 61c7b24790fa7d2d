// Suite construction with a build counter owned by the factory,
// not a process-wide static.

use std::sync::Arc;

use crate::types::{TestCase, TestSuite};

/// Builds shareable test suites and counts how many it has built.
#[derive(Debug, Default)]
pub struct SuiteFactory {
    created: u64,
}

impl SuiteFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a suite ready for sharing across tasks.
    pub fn build(&mut self, cases: Vec<TestCase>) -> Arc<TestSuite> {
        self.created += 1;
        Arc::new(TestSuite::new(cases))
    }

    /// Build a suite whose reported count is inflated by `bonus_cases`.
    pub fn build_with_bonus(&mut self, cases: Vec<TestCase>, bonus_cases: u32) -> Arc<TestSuite> {
        self.created += 1;
        Arc::new(TestSuite::with_bonus(cases, bonus_cases))
    }

    /// Total suites built by this factory.
    pub fn total_created(&self) -> u64 {
        self.created
    }
}
