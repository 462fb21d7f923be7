use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: i32,
    #[serde(alias = "price")]
    pub price_per_night: i64,
}

impl Room {
    pub fn new(id: &str, name: &str, capacity: i32, price_per_night: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            capacity,
            price_per_night,
        }
    }

    pub fn sleeps(&self, guests: i32) -> bool {
        self.capacity >= guests
    }
}
