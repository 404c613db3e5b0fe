use serde::Deserialize;

/// Failure payload of the portfolio backend: either a single `message` or a
/// validator-style `errors` list whose entries carry a `msg`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FailureBody {
    pub message: Option<String>,
    pub errors: Option<Vec<ValidationIssue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationIssue {
    pub msg: String,
}

impl FailureBody {
    /// One user-facing line: `message` wins, then the first validation
    /// issue, then a bare status fallback.
    pub fn into_message(self, status: u16) -> String {
        if let Some(message) = self.message.filter(|m| !m.is_empty()) {
            return message;
        }

        if let Some(issue) = self.errors.into_iter().flatten().next() {
            return issue.msg;
        }

        format!("HTTP error! status: {status}")
    }
}

/// Failure of one backend call, as every gateway port reports it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-2xx status; the text is what the
    /// view should show.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// Decode a non-2xx response into a `Rejected` error.
pub async fn rejection(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    let body = response.json::<FailureBody>().await.unwrap_or_default();

    GatewayError::Rejected {
        status,
        message: body.into_message(status),
    }
}
