//! User agent sent with every request.

/// Client name reported to the API.
pub const CLIENT_NAME: &str = "notifications-rust-client";

/// Returns `<client-name>/<crate-version>`.
pub fn get_user_agent() -> String {
    format!("{}/{}", CLIENT_NAME, env!("CARGO_PKG_VERSION"))
}
