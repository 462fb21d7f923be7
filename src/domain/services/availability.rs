use chrono::NaiveDate;
use crate::domain::models::{booking::Booking, room::Room};

/// Half-open `[start, end)` overlap: a checkout on day X and a checkin on
/// day X share no night.
pub fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start < b_end && b_start < a_end
}

pub fn count_nights(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
    (checkout - checkin).num_days()
}

pub fn stay_total(nights: i64, price_per_night: i64) -> Option<i64> {
    nights.checked_mul(price_per_night)
}

/// Rooms able to host `guests`, optionally narrowed to one room id.
/// Catalog order is preserved.
pub fn candidate_rooms(rooms: Vec<Room>, guests: i32, room_id: Option<&str>) -> Vec<Room> {
    rooms
        .into_iter()
        .filter(|r| room_id.is_none_or(|id| r.id == id))
        .filter(|r| r.sleeps(guests))
        .collect()
}

pub fn has_conflict(existing: &[Booking], room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> bool {
    existing.iter().any(|b| b.conflicts_with(room_id, checkin, checkout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        booking::NewBookingParams, customer::GuestContact, stay::StayRequest,
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(room: &Room, checkin: &str, checkout: &str) -> Booking {
        let stay = StayRequest::new(date(checkin), date(checkout), 1).unwrap();
        let contact = GuestContact::new(Some("Guest"), None, None).unwrap();
        Booking::new(NewBookingParams { room, stay: &stay, contact: &contact }).unwrap()
    }

    #[test]
    fn test_overlap_is_half_open() {
        let (a, b, c, d) = (date("2024-01-01"), date("2024-01-04"), date("2024-01-06"), date("2024-01-08"));
        assert!(!overlaps(a, b, b, c), "back-to-back stays must not overlap");
        assert!(!overlaps(b, c, a, b));
        assert!(overlaps(a, c, b, d));
        assert!(overlaps(a, d, b, c), "containment overlaps");
        assert!(overlaps(a, b, a, b), "identical ranges overlap");
        assert!(!overlaps(a, b, c, d));
    }

    #[test]
    fn test_nights_and_total() {
        let nights = count_nights(date("2024-01-01"), date("2024-01-04"));
        assert_eq!(nights, 3);
        assert_eq!(stay_total(nights, 199), Some(597));
        assert_eq!(stay_total(i64::MAX, 2), None);
    }

    #[test]
    fn test_candidate_rooms_filters_capacity_and_id() {
        let rooms = vec![
            Room::new("101", "Deluxe King", 2, 199),
            Room::new("201", "Family Suite", 4, 329),
        ];

        let ids = |v: Vec<Room>| v.into_iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(candidate_rooms(rooms.clone(), 2, None)), vec!["101", "201"]);
        assert_eq!(ids(candidate_rooms(rooms.clone(), 3, None)), vec!["201"]);
        assert_eq!(ids(candidate_rooms(rooms.clone(), 3, Some("101"))), Vec::<String>::new());
        assert_eq!(ids(candidate_rooms(rooms.clone(), 1, Some("101"))), vec!["101"]);
        assert!(candidate_rooms(rooms, 1, Some("999")).is_empty());
    }

    #[test]
    fn test_conflict_is_scoped_to_room() {
        let king = Room::new("101", "Deluxe King", 2, 199);
        let twin = Room::new("102", "Deluxe Twin", 2, 189);
        let existing = vec![booking(&king, "2024-05-01", "2024-05-05")];

        assert!(has_conflict(&existing, "101", date("2024-05-04"), date("2024-05-06")));
        assert!(!has_conflict(&existing, "101", date("2024-05-05"), date("2024-05-06")));
        assert!(!has_conflict(&existing, "102", date("2024-05-01"), date("2024-05-05")));
        assert!(!has_conflict(&[booking(&twin, "2024-05-01", "2024-05-05")], "101", date("2024-05-01"), date("2024-05-05")));
    }
}
