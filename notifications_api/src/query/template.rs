use crate::types::TemplateType;

use super::Query;

/// Filters for `GET /v2/templates`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateQuery {
    pub template_type: Option<TemplateType>,
}

impl Query for TemplateQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        match self.template_type {
            Some(template_type) => vec![("type".to_string(), template_type.to_string())],
            None => Vec::new(),
        }
    }
}

impl TemplateQuery {
    pub fn with_template_type(mut self, template_type: TemplateType) -> Self {
        self.template_type = Some(template_type);
        self
    }
}
