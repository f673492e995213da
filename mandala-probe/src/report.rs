//! Pass/fail log and end-of-run summary.

use serde::Serialize;

pub const RULE: &str = "============================================================";

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub test: String,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    results: Vec<TestResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print and keep a result.
    pub fn record(&mut self, test: &str, success: bool, message: impl Into<String>, details: Option<String>) {
        let message = message.into();
        let status = if success { "✅ PASS" } else { "❌ FAIL" };
        println!("{} {}: {}", status, test, message);
        if let Some(details) = &details {
            println!("   Details: {}", details);
        }
        tracing::debug!(test, success, "{}", message);

        self.results.push(TestResult {
            test: test.to_string(),
            success,
            message,
            details,
        });
    }

    pub fn pass(&mut self, test: &str, message: impl Into<String>) {
        self.record(test, true, message, None);
    }

    pub fn fail(&mut self, test: &str, message: impl Into<String>) {
        self.record(test, false, message, None);
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Percentage of passing checks, `None` when nothing ran.
    pub fn success_rate(&self) -> Option<f64> {
        (self.total() > 0).then(|| self.passed() as f64 / self.total() as f64 * 100.0)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Print the summary block; true when no check failed.
    pub fn summary(&self) -> bool {
        println!("\n{}", RULE);
        println!("📊 TEST SUMMARY");
        println!("{}", RULE);

        println!("Total Tests: {}", self.total());
        println!("✅ Passed: {}", self.passed());
        println!("❌ Failed: {}", self.failed());
        match self.success_rate() {
            Some(rate) => println!("Success Rate: {:.1}%", rate),
            None => println!("No tests run"),
        }

        if self.failed() > 0 {
            println!("\n🔍 Failed Tests:");
            for result in self.failures() {
                println!("  • {}: {}", result.test, result.message);
            }
        }

        self.failed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_rate() {
        let mut report = Report::new();
        report.pass("A", "ok");
        report.record("B", false, "broken", Some("HTTP 500".into()));
        report.pass("C", "ok");

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(format!("{:.1}", report.success_rate().unwrap()), "66.7");
        assert_eq!(report.failures().next().unwrap().details.as_deref(), Some("HTTP 500"));
        assert!(!report.summary());
    }

    #[test]
    fn test_empty_report_succeeds() {
        let report = Report::new();
        assert_eq!(report.success_rate(), None);
        assert!(report.summary());
    }
}
