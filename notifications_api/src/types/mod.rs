mod error_entry;
pub use self::error_entry::ApiErrorEntry;

mod notification;
pub use self::notification::{
    LetterNotification, NotificationRequest, Personalisation, TemplateType,
};

mod template;
pub use self::template::TemplatePreviewRequest;
