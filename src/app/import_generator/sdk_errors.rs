//! AWS SDK error categorization for exit diagnostics.
//!
//! The AWS SDK retries transient failures internally; this tool does not add
//! application-level retries and aborts on the first error that surfaces.
//! Categorizing the error string still pays off for the final log line, since
//! the anyhow chain around an SDK error is verbose and the operator mostly
//! wants to know "throttled", "no network", or "no permissions".

/// Coarse category of a failed AWS call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rate limited by the service.
    Throttled,
    /// Connectivity problem between this host and AWS.
    Network,
    /// Credentials are missing, invalid, or not authorized.
    AccessDenied,
    /// Anything else, with the extracted error code when one is present.
    Other { code: String },
}

impl ErrorCategory {
    /// Short operator-facing label for the final diagnostic line.
    pub fn user_message(&self) -> String {
        match self {
            ErrorCategory::Throttled => "rate limited".to_string(),
            ErrorCategory::Network => "network error".to_string(),
            ErrorCategory::AccessDenied => "access denied".to_string(),
            ErrorCategory::Other { code } => code.clone(),
        }
    }
}

/// Categorize an anyhow-wrapped SDK error by its message patterns.
pub fn categorize_error(error: &anyhow::Error) -> ErrorCategory {
    // The Display form of a wrapped SDK error often collapses to
    // "service error"; the Debug form keeps the error code.
    let error_str = error.to_string();
    if error_str.contains("service error") {
        categorize_error_string(&format!("{:?}", error))
    } else {
        categorize_error_string(&error_str)
    }
}

/// Categorize an error based on its string representation.
pub fn categorize_error_string(error_str: &str) -> ErrorCategory {
    if error_str.contains("Throttling")
        || error_str.contains("TooManyRequestsException")
        || error_str.contains("RequestLimitExceeded")
        || error_str.contains("RateExceeded")
    {
        return ErrorCategory::Throttled;
    }

    if error_str.contains("DispatchFailure")
        || error_str.contains("connection")
        || error_str.contains("Connection")
        || error_str.contains("timed out")
        || error_str.contains("dns error")
    {
        return ErrorCategory::Network;
    }

    if error_str.contains("AccessDenied")
        || error_str.contains("UnauthorizedOperation")
        || error_str.contains("AuthFailure")
        || error_str.contains("InvalidClientTokenId")
        || error_str.contains("ExpiredToken")
        || error_str.contains("no credentials")
        || error_str.contains("NoCredentials")
    {
        return ErrorCategory::AccessDenied;
    }

    ErrorCategory::Other {
        code: extract_error_code(error_str).unwrap_or_else(|| "error".to_string()),
    }
}

/// Extract an AWS-style error code (`SomethingException: message`) if present.
fn extract_error_code(error_str: &str) -> Option<String> {
    if let Some(pos) = error_str.find(':') {
        let prefix = error_str[..pos].trim();
        if prefix.ends_with("Exception") || prefix.ends_with("Error") {
            let code = prefix.rsplit("::").next().unwrap_or(prefix);
            if !code.is_empty() && code.len() < 50 {
                return Some(code.to_string());
            }
        }
    }
    None
}
