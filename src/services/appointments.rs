use async_trait::async_trait;

use crate::models::AppointmentPayload;

/// Creates calendar appointments in the CRM. The response body is returned
/// without interpretation.
#[async_trait]
pub trait AppointmentClient: Send + Sync {
    async fn create_appointment(
        &self,
        auth_token: &str,
        payload: &AppointmentPayload,
    ) -> anyhow::Result<serde_json::Value>;
}
