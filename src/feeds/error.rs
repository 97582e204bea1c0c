//! Error handling for the feeds module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure from the underlying HTTP client.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-success HTTP status, with the response body as context.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The market-data response omitted one of the tracked coins.
    #[error("Market data response is missing coin '{coin_id}'")]
    MissingCoin { coin_id: &'static str },
}

impl FeedError {
    pub async fn from_response(response: reqwest::Response) -> FeedError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        FeedError::Http { status, message }
    }

    /// Classify the error and determine the appropriate log level
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Rate limiting - low priority
            FeedError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            FeedError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Authentication errors - critical
            FeedError::Http { status, .. } if *status == 401 => LogLevel::Error,
            FeedError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Malformed or incomplete payloads - critical
            FeedError::MissingCoin { .. } => LogLevel::Error,
            FeedError::Reqwest(e) if e.is_decode() => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_classified_as_debug() {
        let error = FeedError::Http {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(error.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_server_errors_classified_as_warn() {
        for status in [500, 502, 503, 599] {
            let error = FeedError::Http {
                status,
                message: "Server Error".to_string(),
            };
            assert_eq!(error.log_level(), LogLevel::Warn);
        }
    }

    #[test]
    fn test_auth_errors_classified_as_error() {
        for status in [401, 403] {
            let error = FeedError::Http {
                status,
                message: "Unauthorized".to_string(),
            };
            assert_eq!(error.log_level(), LogLevel::Error);
        }
    }

    #[test]
    fn test_missing_coin_classified_as_error() {
        let error = FeedError::MissingCoin { coin_id: "bitcoin" };
        assert_eq!(error.log_level(), LogLevel::Error);
        assert!(error.to_string().contains("bitcoin"));
    }

    #[test]
    fn test_other_http_errors_classified_as_warn() {
        let error = FeedError::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(error.log_level(), LogLevel::Warn);
    }
}
