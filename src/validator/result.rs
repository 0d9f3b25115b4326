use crate::errors::errors::Error;

pub const SUCCESS_MESSAGE: &str = "NO ERROR(S) FOUND";
pub const FAILURE_MESSAGE: &str = "ERROR";

/// The verdict for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub failing_line: Option<u32>,
    pub reason: Option<String>,
    pub error: Option<Error>,
}

impl ValidationResult {
    pub fn success() -> Self {
        ValidationResult {
            ok: true,
            failing_line: None,
            reason: None,
            error: None,
        }
    }

    pub fn failure(error: Error) -> Self {
        ValidationResult {
            ok: false,
            failing_line: Some(error.get_line()),
            reason: Some(error.to_string()),
            error: Some(error),
        }
    }

    pub fn message(&self) -> &'static str {
        if self.ok {
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        }
    }

    pub fn error_name(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.get_error_name())
    }
}

impl<T> From<&Result<T, Error>> for ValidationResult {
    fn from(outcome: &Result<T, Error>) -> Self {
        match outcome {
            Ok(_) => ValidationResult::success(),
            Err(error) => ValidationResult::failure(error.clone()),
        }
    }
}
