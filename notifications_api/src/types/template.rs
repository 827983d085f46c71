use serde::Serialize;

use super::Personalisation;

/// Body of `POST /v2/template/{id}/preview`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TemplatePreviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalisation: Option<Personalisation>,
}

impl TemplatePreviewRequest {
    pub fn new(personalisation: Option<Personalisation>) -> Self {
        Self {
            personalisation: personalisation.filter(|p| !p.is_empty()),
        }
    }
}
