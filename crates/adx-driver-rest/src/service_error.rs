use reqwest::StatusCode;
use serde::Deserialize;

/// Non-success answer from the cluster.
#[derive(Debug)]
pub(crate) struct ServiceError {
    status: StatusCode,
    code: Option<String>,
    message: String,
}

#[derive(Deserialize)]
struct Body {
    error: Detail,
}

#[derive(Deserialize)]
struct Detail {
    code: Option<String>,
    message: Option<String>,

    /// Longer, user facing message. Preferred over `message` when present.
    #[serde(rename = "@message")]
    detailed_message: Option<String>,
}

impl ServiceError {
    pub(crate) fn from_body(status: StatusCode, body: &str) -> ServiceError {
        match serde_json::from_str::<Body>(body) {
            Ok(Body { error }) => ServiceError {
                status,
                code: error.code,
                message: error
                    .detailed_message
                    .or(error.message)
                    .unwrap_or_default(),
            },
            Err(_) => ServiceError {
                status,
                code: None,
                message: body.trim().to_string(),
            },
        }
    }
}

impl std::error::Error for ServiceError {}

impl core::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cluster responded with {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
