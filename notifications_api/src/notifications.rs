//! Notification and template operations.
//!
//! Each call builds its payload or query and hands it to
//! [`Client::request`](crate::Client::request) unchanged, so results and
//! errors are exactly those of the signed client.

use crate::{
    client::ApiResponse,
    query::{NotificationQuery, Query, TemplateQuery},
    types::{
        LetterNotification, NotificationRequest, Personalisation, TemplatePreviewRequest,
        TemplateType,
    },
    Client, Error,
};

impl Client {
    /// Sends an SMS using the template `template_id`.
    pub async fn send_sms(
        &self,
        to: &str,
        template_id: &str,
        personalisation: Option<Personalisation>,
    ) -> Result<ApiResponse, Error> {
        let notification = NotificationRequest::new(to, template_id, personalisation);
        self.post("/notifications/sms", &notification).await
    }

    /// Sends an email using the template `template_id`.
    pub async fn send_email(
        &self,
        to: &str,
        template_id: &str,
        personalisation: Option<Personalisation>,
    ) -> Result<ApiResponse, Error> {
        let notification = NotificationRequest::new(to, template_id, personalisation);
        self.post("/notifications/email", &notification).await
    }

    /// Sends a letter. The address lines are part of `personalisation`.
    pub async fn send_letter(
        &self,
        template_id: &str,
        personalisation: Personalisation,
    ) -> Result<ApiResponse, Error> {
        let notification = LetterNotification::new(template_id, personalisation);
        self.post("/notifications/letter", &notification).await
    }

    /// Fetches a single notification by id.
    pub async fn get_notification(&self, id: &str) -> Result<ApiResponse, Error> {
        self.get(&format!("/notifications/{}", id), &[]).await
    }

    /// Lists notifications, optionally filtered by status and template type.
    pub async fn list_notifications(
        &self,
        status: Option<&str>,
        template_type: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let mut query = NotificationQuery::default();
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query = query.with_status(status);
        }
        if let Some(template_type) = template_type.filter(|t| !t.is_empty()) {
            query = query.with_template_type(template_type);
        }
        self.list_notifications_with(&query).await
    }

    /// Lists notifications matching a prepared query.
    pub async fn list_notifications_with(
        &self,
        query: &NotificationQuery,
    ) -> Result<ApiResponse, Error> {
        self.get("/notifications", &query.to_query_pairs()).await
    }

    /// Fetches the latest version of a template.
    pub async fn get_template(&self, template_id: &str) -> Result<ApiResponse, Error> {
        self.get(&format!("/v2/template/{}", template_id), &[]).await
    }

    /// Fetches a specific version of a template.
    pub async fn get_template_version(
        &self,
        template_id: &str,
        version: u32,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("/v2/template/{}/version/{}", template_id, version),
            &[],
        )
        .await
    }

    /// Lists templates, optionally only those of one type.
    pub async fn get_all_templates(
        &self,
        template_type: Option<TemplateType>,
    ) -> Result<ApiResponse, Error> {
        let query = TemplateQuery { template_type };
        self.get("/v2/templates", &query.to_query_pairs()).await
    }

    /// Renders a template with the given personalisation without sending it.
    pub async fn post_template_preview(
        &self,
        template_id: &str,
        personalisation: Option<Personalisation>,
    ) -> Result<ApiResponse, Error> {
        let preview = TemplatePreviewRequest::new(personalisation);
        self.post(&format!("/v2/template/{}/preview", template_id), &preview)
            .await
    }
}
