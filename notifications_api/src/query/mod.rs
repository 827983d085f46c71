mod common;
pub use self::common::Query;

mod notification;
pub use self::notification::NotificationQuery;

mod template;
pub use self::template::TemplateQuery;
