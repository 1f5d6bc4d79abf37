use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Inbound booking body as the caller sent it. Every field is optional at this
/// stage so that validation can report all missing fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "present_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub calendar_id: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "supplied_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "supplied_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "supplied_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "supplied_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "supplied_string")]
    pub title: Option<String>,
}

/// A booking whose required fields are all present.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub phone: String,
    pub location_id: String,
    pub calendar_id: String,
    pub start_time: String,
    pub contact: ContactOptions,
    pub title: Option<String>,
}

/// Optional identity fields forwarded to the contact lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub calendar_id: String,
    pub location_id: String,
    pub contact_id: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl BookingRequest {
    /// Reads a booking out of any JSON value. Anything other than an object
    /// carries no fields.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "booking body did not map onto request fields");
            Self::default()
        })
    }

    pub fn validate(self) -> Result<Booking, AppError> {
        let missing: Vec<&'static str> = [
            ("phone", self.phone.is_none()),
            ("locationId", self.location_id.is_none()),
            ("calendarId", self.calendar_id.is_none()),
            ("startTime", self.start_time.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (self.phone, self.location_id, self.calendar_id, self.start_time) {
            (Some(phone), Some(location_id), Some(calendar_id), Some(start_time)) => Ok(Booking {
                phone,
                location_id,
                calendar_id,
                start_time,
                contact: ContactOptions {
                    first_name: self.first_name,
                    last_name: self.last_name,
                    email: self.email,
                    name: self.name,
                },
                title: self.title,
            }),
            _ => Err(AppError::MissingFields(missing)),
        }
    }
}

impl AppointmentPayload {
    pub fn new(booking: &Booking, contact_id: String) -> Self {
        Self {
            calendar_id: booking.calendar_id.clone(),
            location_id: booking.location_id.clone(),
            contact_id,
            start_time: booking.start_time.clone(),
            title: booking.title.clone(),
        }
    }
}

// Required fields: non-empty strings and non-zero numbers count as present.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

// Optional fields: any supplied string, empty included, or number is kept.
fn supplied_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
