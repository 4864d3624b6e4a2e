use super::*;

use reqwest::{Client, Method, StatusCode};

use crate::cli_ui::Severity;

/// Result of one request attempt. Connection-level failures are a reportable
/// outcome, not an error; anything else bubbles up as `Error`.
#[derive(Debug)]
pub enum HttpResult {
    Success(StatusCode),
    ConnectionFailure,
}

/// One line of human-readable output plus the severity used to color it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub severity: Severity,
}

/// Status codes with a dedicated message. Everything else falls through to the
/// generic "returned status code" line.
const STATUS_TABLE: &[(u16, Severity, &str)] = &[
    (200, Severity::Success, "is reachable with status code 200 (OK)."),
    (
        301,
        Severity::Warning,
        "has moved permanently with status code 301 (Moved Permanently).",
    ),
    (302, Severity::Warning, "found with status code 302 (Found)."),
    (
        403,
        Severity::Error,
        "access is forbidden with status code 403 (Forbidden).",
    ),
    (404, Severity::Error, "not found with status code 404 (Not Found)."),
    (
        500,
        Severity::Error,
        "encountered an internal server error with status code 500 (Internal Server Error).",
    ),
];

/// Check the reachability of a site with a single GET or POST request.
///
/// Exactly one attempt is made, with the client's default redirect and timeout
/// behavior. The outcome never affects the process exit code.
pub async fn check_site(config: &Config) -> Result<Outcome, Error> {
    let method = match parse_method(&config.check_type) {
        Some(method) => method,
        None => {
            return Ok(Outcome {
                text: "Invalid connectivity type. Please choose 'GET' or 'POST'.".to_string(),
                severity: Severity::Error,
            })
        }
    };

    let url = normalize_url(&config.url, config.use_ssl);
    debug!("checking {} with a {} request", &url, &method);

    match dispatch(method, &url).await? {
        HttpResult::Success(status) => Ok(classify_status(&url, status)),
        HttpResult::ConnectionFailure => Ok(Outcome {
            text: format!("Site {} is unreachable.", url),
            severity: Severity::Error,
        }),
    }
}

/// Ensure the URL starts with http:// or https://
pub fn normalize_url(url: &str, use_ssl: bool) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        let scheme = if use_ssl { "https" } else { "http" };
        format!("{}://{}", scheme, url)
    }
}

fn parse_method(check_type: &str) -> Option<Method> {
    match check_type.to_uppercase().as_str() {
        "GET" => Some(Method::GET),
        "POST" => Some(Method::POST),
        _ => None,
    }
}

/// Perform the request, folding connection-level errors into `HttpResult`.
async fn dispatch(method: Method, url: &str) -> Result<HttpResult, Error> {
    match Client::new().request(method, url).send().await {
        Ok(response) => Ok(HttpResult::Success(response.status())),
        Err(e) if e.is_connect() => {
            warn!("connection failed: {:?}", e);
            Ok(HttpResult::ConnectionFailure)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn classify_status(url: &str, status: StatusCode) -> Outcome {
    for (code, severity, detail) in STATUS_TABLE {
        if status.as_u16() == *code {
            return Outcome {
                text: format!("Site {} {}", url, detail),
                severity: *severity,
            };
        }
    }

    Outcome {
        text: format!("Site {} returned status code {}.", url, status.as_u16()),
        severity: Severity::Warning,
    }
}
