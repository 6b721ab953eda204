use crate::ports::outbound::ReportLog;

/// StderrReportLog adapter writing status lines to stderr
///
/// Keeps stdout free for the `payload` subcommand.
pub struct StderrReportLog;

impl StderrReportLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrReportLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLog for StderrReportLog {
    fn info(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
