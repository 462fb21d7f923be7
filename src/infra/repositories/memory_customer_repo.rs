use crate::domain::{models::customer::{Customer, GuestContact}, ports::CustomerDirectory};
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;

#[derive(Default)]
pub struct MemoryCustomerRepo {
    by_key: DashMap<String, Customer>,
}

impl MemoryCustomerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerDirectory for MemoryCustomerRepo {
    async fn upsert(&self, contact_key: &str, contact: &GuestContact) -> Result<Customer, AppError> {
        let entry = self.by_key
            .entry(contact_key.to_string())
            .and_modify(|existing| existing.absorb(contact))
            .or_insert_with(|| Customer::new(contact_key.to_string(), contact));
        Ok(entry.value().clone())
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let mut all: Vec<Customer> = self.by_key.iter().map(|c| c.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
