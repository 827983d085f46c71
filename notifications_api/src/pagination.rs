//! Page metadata for listing responses.

use serde_json::Value;

use crate::Error;

/// Adds `page_num` and `total_pages` to a paginated listing response.
///
/// The current page is recovered from the `links` hints, whose URLs end in
/// `page=<n>`: the page before `next`, or the page after `prev`. When
/// neither hint exists the listing fits on one page and both values are 1.
pub fn add_pagination(mut data: Value) -> Result<Value, Error> {
    let page_size = match data.get("page_size") {
        Some(v) => v.as_f64().ok_or_else(|| {
            Error::InvalidArgument(format!("page_size is not a number: {}", v))
        })?,
        None => {
            return Err(Error::InvalidArgument(format!(
                "Cannot add pagination to unpaginated data {}",
                data
            )))
        }
    };
    if page_size <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "page_size must be positive, got {}",
            page_size
        )));
    }

    let links = data.get("links");
    let next = links.and_then(|l| l.get("next")).and_then(Value::as_str);
    let prev = links.and_then(|l| l.get("prev")).and_then(Value::as_str);

    let (page_num, total_pages) = match (next, prev) {
        (None, None) => (1, 1),
        (next, prev) => {
            let total = data
                .get("total")
                .and_then(Value::as_f64)
                .ok_or_else(|| Error::InvalidArgument("total is missing or not a number".to_string()))?;
            let total_pages = (total / page_size).ceil() as i64;
            let page_num = match next {
                Some(link) => page_from_link(link)? - 1,
                None => page_from_link(prev.unwrap_or_default())? + 1,
            };
            (page_num, total_pages)
        }
    };

    if let Some(obj) = data.as_object_mut() {
        obj.insert("page_num".to_string(), Value::from(page_num));
        obj.insert("total_pages".to_string(), Value::from(total_pages));
    }
    Ok(data)
}

fn page_from_link(link: &str) -> Result<i64, Error> {
    link.rsplit('=')
        .next()
        .and_then(|n| n.parse::<i64>().ok())
        .ok_or_else(|| Error::InvalidArgument(format!("no page number in link {}", link)))
}
