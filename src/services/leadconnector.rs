use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

use super::appointments::AppointmentClient;
use super::contacts::ContactResolver;
use crate::models::{AppointmentPayload, ContactLookup, ContactOptions, ContactRequest};

pub const CONTACTS_API_VERSION: &str = "2021-07-28";
pub const APPOINTMENTS_API_VERSION: &str = "2021-04-15";

const CONTACTS_PATH: &str = "/contacts/";
const APPOINTMENTS_PATH: &str = "/calendars/events/appointments";

/// REST client for the LeadConnector CRM. Holds no credentials of its own;
/// every call carries the caller's token.
pub struct LeadConnectorClient {
    base_url: String,
    client: reqwest::Client,
}

impl LeadConnectorClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    // Single attempt. The HTTP status is not inspected; whatever JSON comes back is returned.
    async fn post_json<B>(
        &self,
        path: &str,
        version: &str,
        auth_token: &str,
        body: &B,
    ) -> anyhow::Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth_token)
            .header("Version", version)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, path, "CRM request failed"))
            .with_context(|| format!("failed to call CRM {path}"))?;

        let status = resp.status();
        tracing::debug!(path, status = %status, "CRM responded");

        resp.json::<Value>()
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, path, status = %status, "CRM returned a non-JSON body")
            })
            .with_context(|| format!("failed to parse CRM response from {path} ({status})"))
    }
}

#[async_trait]
impl ContactResolver for LeadConnectorClient {
    async fn resolve_contact(
        &self,
        phone: &str,
        location_id: &str,
        auth_token: &str,
        options: &ContactOptions,
    ) -> anyhow::Result<ContactLookup> {
        let body = ContactRequest {
            phone,
            location_id,
            options,
        };

        let raw = self
            .post_json(CONTACTS_PATH, CONTACTS_API_VERSION, auth_token, &body)
            .await?;

        Ok(ContactLookup::from_response(raw))
    }
}

#[async_trait]
impl AppointmentClient for LeadConnectorClient {
    async fn create_appointment(
        &self,
        auth_token: &str,
        payload: &AppointmentPayload,
    ) -> anyhow::Result<Value> {
        self.post_json(APPOINTMENTS_PATH, APPOINTMENTS_API_VERSION, auth_token, payload)
            .await
    }
}
