//! Client for a notifications API: signed requests, SMS/email/letter
//! sending, notification lookup and template access.

mod client;
mod errors;
mod notifications;
mod pagination;
pub mod query;
pub mod token;
pub mod types;
mod user_agent;
pub use self::client::{ApiResponse, Client, ClientConfig};
pub use self::errors::{Error, HttpError, RawResponse, REQUEST_ERROR_MESSAGE};
pub use self::pagination::add_pagination;
pub use self::query::{NotificationQuery, Query, TemplateQuery};
pub use self::user_agent::{get_user_agent, CLIENT_NAME};
pub use reqwest::Method;
