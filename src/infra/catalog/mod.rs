use std::collections::HashSet;
use std::path::Path;
use anyhow::{bail, Context};
use async_trait::async_trait;
use crate::domain::{models::room::Room, ports::RoomCatalog};
use crate::error::AppError;

/// Room list fixed at startup, either built in or read from a JSON file.
pub struct StaticRoomCatalog {
    rooms: Vec<Room>,
}

impl StaticRoomCatalog {
    pub fn new(rooms: Vec<Room>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if room.id.trim().is_empty() {
                bail!("room with empty id in catalog");
            }
            if !seen.insert(room.id.as_str()) {
                bail!("duplicate room id {:?} in catalog", room.id);
            }
            if room.capacity < 1 {
                bail!("room {:?} must sleep at least one guest", room.id);
            }
            if room.price_per_night < 0 {
                bail!("room {:?} has a negative nightly price", room.id);
            }
        }
        Ok(Self { rooms })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading room catalog {}", path.display()))?;
        let rooms: Vec<Room> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing room catalog {}", path.display()))?;
        Self::new(rooms)
    }

    pub fn default_rooms() -> Vec<Room> {
        vec![
            Room::new("101", "Deluxe King", 2, 199),
            Room::new("102", "Deluxe Twin", 2, 189),
            Room::new("201", "Family Suite", 4, 329),
            Room::new("301", "Presidential Suite", 4, 899),
        ]
    }
}

impl Default for StaticRoomCatalog {
    fn default() -> Self {
        Self { rooms: Self::default_rooms() }
    }
}

#[async_trait]
impl RoomCatalog for StaticRoomCatalog {
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        Ok(self.rooms.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError> {
        Ok(self.rooms.iter().find(|r| r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_catalogs() {
        assert!(StaticRoomCatalog::new(vec![Room::new("1", "A", 2, 10), Room::new("1", "B", 2, 10)]).is_err());
        assert!(StaticRoomCatalog::new(vec![Room::new("1", "A", 0, 10)]).is_err());
        assert!(StaticRoomCatalog::new(vec![Room::new("1", "A", 2, -1)]).is_err());
        assert!(StaticRoomCatalog::new(vec![Room::new(" ", "A", 2, 10)]).is_err());
        assert!(StaticRoomCatalog::new(StaticRoomCatalog::default_rooms()).is_ok());
    }

    #[test]
    fn test_json_accepts_price_alias() {
        let rooms: Vec<Room> = serde_json::from_str(
            r#"[{"id":"7","name":"Loft","capacity":3,"price":250},
                {"id":"8","name":"Attic","capacity":1,"pricePerNight":90}]"#,
        ).unwrap();
        assert_eq!(rooms[0].price_per_night, 250);
        assert_eq!(rooms[1].price_per_night, 90);
    }

    #[tokio::test]
    async fn test_lookup() {
        let catalog = StaticRoomCatalog::default();
        assert_eq!(catalog.list().await.unwrap().len(), 4);
        assert_eq!(catalog.find_by_id("201").await.unwrap().unwrap().capacity, 4);
        assert!(catalog.find_by_id("999").await.unwrap().is_none());
    }
}
