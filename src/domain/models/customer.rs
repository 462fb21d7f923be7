use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;

/// Guest details captured on a booking. Blank email/phone values are
/// normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl GuestContact {
    pub fn new(name: Option<&str>, email: Option<&str>, phone: Option<&str>) -> Result<Self, AppError> {
        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(AppError::InvalidRequest("Guest name is required".into()));
        }

        Ok(Self {
            name: name.to_string(),
            email: trimmed(email),
            phone: trimmed(phone),
        })
    }

    /// Identity used by the customer directory. Email wins over phone so two
    /// guests sharing a phone number but not an email stay separate records.
    pub fn directory_key(&self) -> Option<String> {
        if let Some(email) = &self.email {
            return Some(format!("email:{}", email.to_lowercase()));
        }
        self.phone.as_ref().map(|phone| {
            let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
            format!("phone:{digits}")
        })
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(skip_serializing)]
    pub contact_key: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(contact_key: String, contact: &GuestContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            contact_key,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            note: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites contact fields with whatever the latest booking supplied.
    pub fn absorb(&mut self, contact: &GuestContact) {
        self.name = contact.name.clone();
        if contact.email.is_some() {
            self.email = contact.email.clone();
        }
        if contact.phone.is_some() {
            self.phone = contact.phone.clone();
        }
        self.updated_at = Utc::now();
    }
}
