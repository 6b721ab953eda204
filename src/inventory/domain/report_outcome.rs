/// Classification of the collector's HTTP status.
///
/// None of these fail the build; they only decide which line is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// 200
    Created,
    /// 400
    InvalidRequest,
    /// 401
    Unauthorized,
    /// 404
    ServiceNotFound,
    /// Anything else, with the status message the server sent
    Other { code: u16, message: String },
}

impl ReportOutcome {
    const LOG_PREFIX: &'static str = "Inventory Collector";

    pub fn from_status(code: u16, message: impl Into<String>) -> Self {
        match code {
            200 => ReportOutcome::Created,
            400 => ReportOutcome::InvalidRequest,
            401 => ReportOutcome::Unauthorized,
            404 => ReportOutcome::ServiceNotFound,
            _ => ReportOutcome::Other {
                code,
                message: message.into(),
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ReportOutcome::Created => 200,
            ReportOutcome::InvalidRequest => 400,
            ReportOutcome::Unauthorized => 401,
            ReportOutcome::ServiceNotFound => 404,
            ReportOutcome::Other { code, .. } => *code,
        }
    }

    /// The single log line describing this outcome
    pub fn log_message(&self) -> String {
        match self {
            ReportOutcome::Created => format!(
                "{} - successfully added inventory item",
                Self::LOG_PREFIX
            ),
            ReportOutcome::InvalidRequest => format!("{} - invalid request", Self::LOG_PREFIX),
            ReportOutcome::Unauthorized => {
                format!("{} - unauthorized request", Self::LOG_PREFIX)
            }
            ReportOutcome::ServiceNotFound => {
                format!("{} - service not found", Self::LOG_PREFIX)
            }
            ReportOutcome::Other { code, message } => format!("{} {}", code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_known_codes() {
        assert_eq!(ReportOutcome::from_status(200, "OK"), ReportOutcome::Created);
        assert_eq!(
            ReportOutcome::from_status(400, "Bad Request"),
            ReportOutcome::InvalidRequest
        );
        assert_eq!(
            ReportOutcome::from_status(401, "Unauthorized"),
            ReportOutcome::Unauthorized
        );
        assert_eq!(
            ReportOutcome::from_status(404, "Not Found"),
            ReportOutcome::ServiceNotFound
        );
    }

    #[test]
    fn test_from_status_other_codes_keep_code_and_message() {
        let outcome = ReportOutcome::from_status(503, "Service Unavailable");
        assert_eq!(
            outcome,
            ReportOutcome::Other {
                code: 503,
                message: "Service Unavailable".to_string()
            }
        );
        assert_eq!(outcome.status_code(), 503);
        assert_eq!(outcome.log_message(), "503 Service Unavailable");
    }

    #[test]
    fn test_other_2xx_is_not_created() {
        let outcome = ReportOutcome::from_status(201, "Created");
        assert_ne!(outcome, ReportOutcome::Created);
        assert_eq!(outcome.log_message(), "201 Created");
    }

    #[test]
    fn test_log_messages() {
        assert_eq!(
            ReportOutcome::Created.log_message(),
            "Inventory Collector - successfully added inventory item"
        );
        assert_eq!(
            ReportOutcome::InvalidRequest.log_message(),
            "Inventory Collector - invalid request"
        );
        assert!(ReportOutcome::Unauthorized
            .log_message()
            .contains("unauthorized"));
        assert_eq!(
            ReportOutcome::ServiceNotFound.log_message(),
            "Inventory Collector - service not found"
        );
    }

    #[test]
    fn test_status_code_round_trips_for_known_outcomes() {
        for code in [200, 400, 401, 404] {
            assert_eq!(ReportOutcome::from_status(code, "").status_code(), code);
        }
    }
}
