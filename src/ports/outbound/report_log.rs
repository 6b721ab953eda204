/// ReportLog port - the plain-text log sink for status reporting
pub trait ReportLog {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
