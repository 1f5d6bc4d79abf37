use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AppointmentPayload, BookingRequest, ContactLookup};
use crate::state::AppState;

/// Books an appointment for the caller.
///
/// Steps, each of which may end the request early:
/// 1. require `Authorization: Bearer <token>` (401)
/// 2. parse the body as JSON (400)
/// 3. check phone, locationId, calendarId and startTime are present (400)
/// 4. find or create the contact by phone (404 when no id comes back)
/// 5. create the appointment and relay the CRM's answer, honouring an
///    embedded `statusCode`
///
/// The token is never checked here; the CRM is the authority and receives the
/// header value unchanged.
pub async fn handle_booking(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response, AppError> {
    let request_id = Uuid::new_v4();

    let Some(auth_token) = bearer_authorization(headers) else {
        tracing::warn!(%request_id, "missing or malformed Authorization header");
        return Err(AppError::Unauthorized);
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(%request_id, error = %e, "booking body is not valid JSON");
        AppError::InvalidJson
    })?;

    let booking = BookingRequest::from_json(value)
        .validate()
        .inspect_err(|e| tracing::warn!(%request_id, error = %e, "booking request rejected"))?;

    tracing::info!(
        %request_id,
        location_id = %booking.location_id,
        calendar_id = %booking.calendar_id,
        start_time = %booking.start_time,
        "booking request accepted"
    );

    let lookup = state
        .contacts
        .resolve_contact(
            &booking.phone,
            &booking.location_id,
            auth_token,
            &booking.contact,
        )
        .await?;

    let contact_id = match lookup {
        ContactLookup::Resolved { contact_id } => contact_id,
        ContactLookup::Unresolved(raw) => {
            tracing::warn!(%request_id, response = %raw, "CRM did not yield a contact id");
            return Err(AppError::ContactNotFound);
        }
    };

    tracing::info!(%request_id, %contact_id, "contact resolved");

    let payload = AppointmentPayload::new(&booking, contact_id);
    let result = state
        .appointments
        .create_appointment(auth_token, &payload)
        .await?;

    let status = appointment_status(&result)?;
    if status.is_success() {
        tracing::info!(%request_id, status = status.as_u16(), "appointment created");
    } else {
        tracing::warn!(%request_id, status = status.as_u16(), response = %result, "CRM rejected appointment");
    }

    Ok((status, Json(result)).into_response())
}

fn bearer_authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| v.starts_with("Bearer "))
}

/// 200 unless the CRM embedded its own `statusCode` in the body.
fn appointment_status(result: &Value) -> Result<StatusCode, AppError> {
    let Some(code) = result.get("statusCode") else {
        return Ok(StatusCode::OK);
    };

    let numeric = match code {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u16::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    numeric
        .filter(|c| (200..=599).contains(c))
        .and_then(|c| u16::try_from(c).ok())
        .and_then(|c| StatusCode::from_u16(c).ok())
        .ok_or_else(|| {
            AppError::Upstream(anyhow::anyhow!(
                "appointment response carried an unusable statusCode: {code}"
            ))
        })
}
