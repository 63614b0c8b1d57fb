#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    InternalServerError,
}

#[derive(Debug, serde::Serialize)]
pub struct Error {
    pub error_code: ErrorCode,
    pub user_feedback: &'static str,
}

impl Error {
    pub fn new(error_code: ErrorCode, user_feedback: &'static str) -> Self {
        Self {
            error_code,
            user_feedback,
        }
    }

    pub fn bad_request(user_feedback: &'static str) -> Self {
        Self::new(ErrorCode::BadRequest, user_feedback)
    }

    pub fn not_found(user_feedback: &'static str) -> Self {
        Self::new(ErrorCode::NotFound, user_feedback)
    }

    /// Logs the underlying storage failure and hides it behind `user_feedback`.
    pub fn internal(user_feedback: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |err| {
            log::error!(error:? = err; "{}", user_feedback);
            Self::new(ErrorCode::InternalServerError, user_feedback)
        }
    }
}
