use serde::{Deserialize, Serialize};

use crate::errors::REQUEST_ERROR_MESSAGE;

/// One entry of the `errors` list the API returns with a failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorEntry {
    pub error: String,
    pub message: String,
}

impl ApiErrorEntry {
    /// Entry used when the server body carries no usable `errors` list.
    pub fn generic() -> Self {
        Self {
            error: "HTTPError".to_string(),
            message: REQUEST_ERROR_MESSAGE.to_string(),
        }
    }
}
