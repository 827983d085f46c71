use notifications_api::{add_pagination, ApiResponse};
use serde_json::Value;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Pretty,
    Json,
}

pub fn print_response(resp: &ApiResponse, format: &OutputFormat) {
    match format_response(resp, format) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints "Page x of y" to stderr when the listing carries pagination hints.
pub fn print_pagination_summary(listing: &Value) {
    if let Some(summary) = pagination_summary(listing) {
        eprintln!("{}", summary);
    }
}

fn format_response(resp: &ApiResponse, format: &OutputFormat) -> serde_json::Result<String> {
    let Some(value) = resp else {
        return Ok("(no content)".to_string());
    };
    match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Json => serde_json::to_string(value),
    }
}

fn pagination_summary(listing: &Value) -> Option<String> {
    let paged = add_pagination(listing.clone()).ok()?;
    let page_num = paged.get("page_num")?.as_i64()?;
    let total_pages = paged.get("total_pages")?.as_i64()?;
    let total = paged.get("total").and_then(Value::as_i64).unwrap_or(0);
    Some(format!(
        "Page {} of {} ({} total)",
        page_num, total_pages, total
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_content_is_labelled() {
        assert_eq!(
            format_response(&None, &OutputFormat::Pretty).unwrap(),
            "(no content)"
        );
    }

    #[test]
    fn test_json_is_compact() {
        let resp = Some(json!({"id": "a", "status": "sent"}));
        assert_eq!(
            format_response(&resp, &OutputFormat::Json).unwrap(),
            r#"{"id":"a","status":"sent"}"#
        );
    }

    #[test]
    fn test_pretty_is_indented() {
        let resp = Some(json!({"id": "a"}));
        let text = format_response(&resp, &OutputFormat::Pretty).unwrap();
        assert!(text.contains("\n  \"id\": \"a\""));
    }

    #[test]
    fn test_summary_for_paginated_listing() {
        let listing = json!({
            "notifications": [],
            "total": 120,
            "page_size": 50,
            "links": {"next": "/notifications?page=3"}
        });
        assert_eq!(
            pagination_summary(&listing).unwrap(),
            "Page 2 of 3 (120 total)"
        );
    }

    #[test]
    fn test_no_summary_for_unpaginated_payload() {
        assert!(pagination_summary(&json!({"notifications": []})).is_none());
    }
}
