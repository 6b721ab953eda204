/// Console adapters
mod stderr_report_log;

pub use stderr_report_log::StderrReportLog;
