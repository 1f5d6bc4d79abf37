use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::appointments::AppointmentClient;
use crate::services::contacts::ContactResolver;
use crate::services::leadconnector::LeadConnectorClient;

pub struct AppState {
    pub contacts: Arc<dyn ContactResolver>,
    pub appointments: Arc<dyn AppointmentClient>,
}

impl AppState {
    /// Wires both CRM collaborators to one LeadConnector client at the configured base URL.
    pub fn from_config(config: &AppConfig) -> Self {
        let crm = Arc::new(LeadConnectorClient::new(config.crm_base_url.clone()));
        Self {
            contacts: crm.clone(),
            appointments: crm,
        }
    }
}
