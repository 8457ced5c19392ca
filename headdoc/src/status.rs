//! HTTP status reporting and the fallback error page
//!
//! The document model only reports [`ValidationError`]s. Turning one into a
//! status line and a minimal page, and deciding to stop the response, happens
//! here at the boundary.

use crate::error::ValidationError;
use crate::escape::escape_html;

/// Status codes and their reason phrases
pub const REASON_PHRASES: [(u16, &str); 41] = [
    (100, "Continue"),
    (101, "Switching Protocols"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
];

/// Look up the reason phrase for a status code
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    REASON_PHRASES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, phrase)| *phrase)
}

/// Status line for a response, e.g. `HTTP/1.1 404 Not Found`
///
/// Codes missing from the table get an empty reason phrase.
pub fn status_line(code: u16) -> String {
    match reason_phrase(code) {
        Some(phrase) => format!("HTTP/1.1 {} {}", code, phrase),
        None => format!("HTTP/1.1 {}", code),
    }
}

/// Minimal error response: status plus a page with a heading and a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    /// HTTP status code
    pub status: u16,
    /// Message shown under the heading
    pub message: String,
}

impl ErrorPage {
    /// Create an error page
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Status line for this page
    pub fn status_line(&self) -> String {
        status_line(self.status)
    }

    /// Heading text: the reason phrase, or `Error` for unlisted codes
    pub fn heading(&self) -> &'static str {
        reason_phrase(self.status).unwrap_or("Error")
    }

    /// Render the page body
    pub fn render(&self) -> String {
        let heading = escape_html(self.heading());
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n");
        output.push_str("<html>\n");
        output.push_str(&format!(
            "<head><title>{} {}</title></head>\n",
            self.status, heading
        ));
        output.push_str("<body>\n");
        output.push_str(&format!("<h1>{}</h1>\n", heading));
        output.push_str(&format!("<p>{}</p>\n", escape_html(&self.message)));
        output.push_str("</body>\n");
        output.push_str("</html>\n");
        output
    }
}

impl From<&ValidationError> for ErrorPage {
    fn from(err: &ValidationError) -> Self {
        Self::new(500, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_phrases() {
        assert_eq!(reason_phrase(200), Some("OK"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(503), Some("Service Unavailable"));
        assert_eq!(reason_phrase(299), None);
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(301), "HTTP/1.1 301 Moved Permanently");
        assert_eq!(status_line(599), "HTTP/1.1 599");
    }

    #[test]
    fn test_error_page_from_validation_error() {
        let err = ValidationError::CoreContainer {
            key: "title".to_string(),
        };
        let page = ErrorPage::from(&err);
        assert_eq!(page.status, 500);
        assert_eq!(page.status_line(), "HTTP/1.1 500 Internal Server Error");

        let html = page.render();
        assert!(html.contains("<h1>Internal Server Error</h1>"));
        assert!(html.contains("<p>Core container &#39;title&#39; cannot be removed</p>"));
    }

    #[test]
    fn test_error_page_unknown_status() {
        let page = ErrorPage::new(599, "<oops>");
        assert!(page.render().contains("<h1>Error</h1>"));
        assert!(page.render().contains("<p>&lt;oops&gt;</p>"));
    }
}
