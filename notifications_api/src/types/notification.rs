use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder values substituted into a template.
pub type Personalisation = BTreeMap<String, serde_json::Value>;

/// Body for sending an SMS or email notification.
///
/// `personalisation` is dropped when absent or empty so the API never
/// receives an empty object.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub to: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalisation: Option<Personalisation>,
}

impl NotificationRequest {
    pub fn new(to: &str, template_id: &str, personalisation: Option<Personalisation>) -> Self {
        Self {
            to: to.to_string(),
            template: template_id.to_string(),
            personalisation: personalisation.filter(|p| !p.is_empty()),
        }
    }
}

/// Body for sending a letter. The address lives in the personalisation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LetterNotification {
    pub template: String,
    pub personalisation: Personalisation,
}

impl LetterNotification {
    pub fn new(template_id: &str, personalisation: Personalisation) -> Self {
        Self {
            template: template_id.to_string(),
            personalisation,
        }
    }
}

/// Kind of template a notification was sent with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Sms,
    Email,
    Letter,
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateType::Sms => "sms",
            TemplateType::Email => "email",
            TemplateType::Letter => "letter",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TemplateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sms" => Ok(TemplateType::Sms),
            "email" => Ok(TemplateType::Email),
            "letter" => Ok(TemplateType::Letter),
            other => Err(format!("unknown template type: {}", other)),
        }
    }
}
