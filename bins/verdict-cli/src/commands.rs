// CLI commands: load task definitions from JSON, grade solutions, report.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use verdict_core::{grade_submission, EchoEngine, Solution, Submission, Task, TestCase, TestSuite};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseFile {
    pub input: String,
    pub expected_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskFile {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub bonus_cases: u32,
    pub tests: Vec<TestCaseFile>,
}

impl TaskFile {
    fn into_task(self) -> Task {
        let cases = self
            .tests
            .into_iter()
            .map(|t| {
                let case = TestCase::new(t.input, t.expected_output);
                match t.note {
                    Some(note) => case.with_note(note),
                    None => case,
                }
            })
            .collect();
        let suite = Arc::new(TestSuite::with_bonus(cases, self.bonus_cases));
        let task = Task::new(Uuid::new_v4(), self.description, suite);
        match self.details {
            Some(details) => task.with_details(details),
            None => task,
        }
    }
}

/// Load a task definition from a JSON file
fn load_task(path: &Path) -> Result<Task> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file: {}", path.display()))?;
    let task_file: TaskFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse task file: {}", path.display()))?;
    Ok(task_file.into_task())
}

/// Load a solution source file
fn load_solution(path: &Path) -> Result<Solution> {
    let source_code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read solution file: {}", path.display()))?;
    Ok(Solution::new(source_code))
}

/// Grade a solution against a task and print a per-test report
pub fn grade(task_path: &Path, solution_path: &Path) -> Result<()> {
    let task = load_task(task_path)?;
    let solution = load_solution(solution_path)?;

    info!(task_id = %task.id, test_count = task.suite().len(), "grading submission");

    let submission = grade_submission(&EchoEngine, &solution, &task)?;
    print_report(&task, &submission);
    Ok(())
}

fn print_report(task: &Task, submission: &Submission) {
    println!("→ Grading \"{}\"", task.display_description());
    println!("  Test cases: {}", task.suite().len());
    println!();

    for (index, (case, result)) in task
        .suite()
        .cases()
        .iter()
        .zip(submission.results())
        .enumerate()
    {
        if result.passed {
            println!("  Test {} ✓ Output matched", index + 1);
        } else {
            println!("  Test {} ✗ Output mismatch", index + 1);
            println!("    Case:     {}", case.describe());
            println!("    Expected: \"{}\"", case.expected_output);
            println!(
                "    Got:      \"{}\"",
                result.actual_output.as_deref().unwrap_or("")
            );
        }
    }

    println!();
    println!("→ Grading complete");
    println!(
        "  Passed: {} / {}",
        submission.total_passed(),
        submission.results().len()
    );
}

/// Print a task's decorated description and reported test count
pub fn show(task_path: &Path) -> Result<()> {
    let task = load_task(task_path)?;
    println!("Description: {}", task.display_description());
    println!("Test count:  {}", task.suite().reported_count());
    Ok(())
}

/// Write a sample task definition into `path`
pub fn init(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;

    let sample = TaskFile {
        description: "Echo the input".to_string(),
        details: Some("The reference engine echoes each input back.".to_string()),
        bonus_cases: 0,
        tests: vec![
            TestCaseFile {
                input: "hello".to_string(),
                expected_output: "hello".to_string(),
                note: Some("matching case".to_string()),
            },
            TestCaseFile {
                input: "abc".to_string(),
                expected_output: "xyz".to_string(),
                note: Some("mismatching case".to_string()),
            },
        ],
    };

    let target = path.join("task.json");
    let json_content =
        serde_json::to_string_pretty(&sample).context("Failed to serialize sample task")?;
    fs::write(&target, json_content)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("✓ Wrote sample task to {}", target.display());
    Ok(())
}
