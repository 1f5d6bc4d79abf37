use serde::Serialize;
use serde_json::Value;

use super::booking::ContactOptions;

/// Body of the CRM find-or-create contact call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest<'a> {
    pub phone: &'a str,
    pub location_id: &'a str,
    #[serde(flatten)]
    pub options: &'a ContactOptions,
}

/// Outcome of a contact lookup: either a concrete contact id or the CRM's
/// response passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactLookup {
    Resolved { contact_id: String },
    Unresolved(Value),
}

impl ContactLookup {
    /// Normalizes the three shapes the CRM answers with, first match wins:
    ///
    /// 1. duplicate match: `meta.matchingField` together with `meta.contactId`
    /// 2. created or returned contact: `contact.id`
    /// 3. anything else is kept as-is, unless it already carries a top-level
    ///    `contactId`, which is taken as the id
    ///
    /// A `matchingField` without a `contactId` falls through to rule 2.
    pub fn from_response(raw: Value) -> Self {
        let meta = raw.get("meta");
        let matched = meta
            .and_then(|m| m.get("matchingField"))
            .is_some_and(is_truthy);

        if matched {
            if let Some(id) = meta.and_then(|m| m.get("contactId")).and_then(id_string) {
                return Self::Resolved { contact_id: id };
            }
        }

        if let Some(id) = raw
            .get("contact")
            .and_then(|c| c.get("id"))
            .and_then(id_string)
        {
            return Self::Resolved { contact_id: id };
        }

        if let Some(id) = raw.get("contactId").and_then(id_string) {
            return Self::Resolved { contact_id: id };
        }

        Self::Unresolved(raw)
    }

    pub fn contact_id(&self) -> Option<&str> {
        match self {
            Self::Resolved { contact_id } => Some(contact_id),
            Self::Unresolved(_) => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if is_truthy(value) => Some(n.to_string()),
        _ => None,
    }
}
