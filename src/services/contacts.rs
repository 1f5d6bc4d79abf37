use async_trait::async_trait;

use crate::models::{ContactLookup, ContactOptions};

/// Finds or creates the CRM contact that owns a phone number.
#[async_trait]
pub trait ContactResolver: Send + Sync {
    /// `auth_token` is the caller's `Authorization` header value, forwarded as-is.
    async fn resolve_contact(
        &self,
        phone: &str,
        location_id: &str,
        auth_token: &str,
        options: &ContactOptions,
    ) -> anyhow::Result<ContactLookup>;
}
