use super::Query;

/// Filters for `GET /notifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub status: Option<String>,
    pub template_type: Option<String>,
}

impl Query for NotificationQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref status) = self.status {
            params.push(("status".to_string(), status.clone()));
        }
        if let Some(ref template_type) = self.template_type {
            params.push(("template_type".to_string(), template_type.clone()));
        }

        params
    }
}

impl NotificationQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_template_type(mut self, template_type: &str) -> Self {
        self.template_type = Some(template_type.to_string());
        self
    }
}
