use serde::{de, Deserialize, Deserializer};
use crate::domain::models::{customer::GuestContact, stay::StayRequest};
use crate::error::AppError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    #[serde(default, deserialize_with = "count_or_numeric_text")]
    pub guests: Option<i64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub room_id: Option<String>,
}

impl AvailabilityRequest {
    pub fn stay(&self) -> Result<StayRequest, AppError> {
        StayRequest::parse(self.checkin.as_deref(), self.checkout.as_deref(), self.guests)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub room_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    #[serde(default, deserialize_with = "count_or_numeric_text")]
    pub guests: Option<i64>,
}

/// Fully validated booking input.
pub struct ValidatedBooking {
    pub room_id: String,
    pub stay: StayRequest,
    pub contact: GuestContact,
}

impl TryFrom<CreateBookingRequest> for ValidatedBooking {
    type Error = AppError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let room_id = req.room_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::InvalidRequest("roomId is required".into()))?;
        let stay = StayRequest::parse(req.checkin.as_deref(), req.checkout.as_deref(), req.guests)?;
        let contact = GuestContact::new(req.name.as_deref(), req.email.as_deref(), req.phone.as_deref())?;

        Ok(Self { room_id, stay, contact })
    }
}

/// Form inputs arrive as strings (`"2"`); API clients send numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Text(String),
}

/// Blank text means "not given" so the caller's default applies.
fn count_or_numeric_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected a whole number, got {raw:?}")))
        }
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Int(n) => n.to_string(),
        Scalar::Text(text) => text,
    }))
}
