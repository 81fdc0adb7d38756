//! Conversion from trip-search DTOs to domain types.

use tracing::trace;

use crate::domain::{SeatInfoMap, SeatType, SeatTypeInfo, TrainModel};

use super::types::{TrainItem, TripSearchResponse};

/// Find the target train in a search response.
pub fn find_train<'a>(
    response: &'a TripSearchResponse,
    model: &TrainModel,
) -> Option<&'a TrainItem> {
    response
        .trains()
        .iter()
        .find(|t| t.train_model.as_deref().is_some_and(|m| model.matches(m)))
}

/// Build a full seat map for one train.
///
/// Every recognised seat type gets a record; those missing from the
/// response stay zero. Unrecognised seat types are skipped, and a later
/// entry for the same type replaces an earlier one.
pub fn convert_train(train: &TrainItem) -> SeatInfoMap {
    let mut map = SeatInfoMap::zeroed();

    for item in train.seat_types.as_deref().unwrap_or(&[]) {
        let Some(seat) = SeatType::from_wire(&item.seat_type) else {
            trace!(seat_type = %item.seat_type, "Ignoring unrecognised seat type");
            continue;
        };

        let counts = item.seat_counts.unwrap_or_default();
        let fare = item.fare.as_ref().and_then(|f| f.amount()).unwrap_or(0.0);

        map.set(seat, SeatTypeInfo::new(counts.online, counts.offline, fare));
    }

    map
}

/// Extract seat availability for `model`, or `None` if the train is absent.
pub fn extract_seat_info(
    response: &TripSearchResponse,
    model: &TrainModel,
) -> Option<SeatInfoMap> {
    find_train(response, model).map(convert_train)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(s: &str) -> TrainModel {
        TrainModel::parse(s).unwrap()
    }

    fn response(json: &str) -> TripSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn picks_matching_train() {
        let resp = response(
            r#"{"data": {"trains": [
                {"train_model": "701", "seat_types": [
                    {"type": "SHULOV", "seat_counts": {"online": 9, "offline": 9}, "fare": 100}
                ]},
                {"train_model": "707", "seat_types": [
                    {"type": "SHULOV", "seat_counts": {"online": 2, "offline": 1}, "fare": 350}
                ]}
            ]}}"#,
        );

        let map = extract_seat_info(&resp, &model("707")).unwrap();
        assert_eq!(map.get(SeatType::Shulov), SeatTypeInfo::new(2, 1, 350.0));
    }

    #[test]
    fn absent_train_is_none() {
        let resp = response(r#"{"data": {"trains": [{"train_model": "701"}]}}"#);
        assert!(extract_seat_info(&resp, &model("707")).is_none());

        let resp = response(r#"{"data": {"trains": []}}"#);
        assert!(extract_seat_info(&resp, &model("707")).is_none());
    }

    #[test]
    fn train_without_model_never_matches() {
        let resp = response(r#"{"data": {"trains": [{"trip_number": "X"}]}}"#);
        assert!(find_train(&resp, &model("707")).is_none());
    }

    #[test]
    fn absent_seat_types_are_zero() {
        let resp = response(
            r#"{"data": {"trains": [{"train_model": "707", "seat_types": [
                {"type": "S_CHAIR", "seat_counts": {"online": 5, "offline": 0}, "fare": "250"}
            ]}]}}"#,
        );

        let map = extract_seat_info(&resp, &model("707")).unwrap();
        for (seat, info) in map.iter() {
            if seat == SeatType::SecondChair {
                assert_eq!(info, SeatTypeInfo::new(5, 0, 250.0));
            } else {
                assert_eq!(info, SeatTypeInfo::ZERO, "{seat} should be zero");
            }
        }
    }

    #[test]
    fn train_with_no_seat_list_is_all_zero() {
        let resp =
            response(r#"{"data": {"trains": [{"train_model": "707", "seat_types": null}]}}"#);
        let map = extract_seat_info(&resp, &model("707")).unwrap();
        assert_eq!(map, SeatInfoMap::zeroed());
    }

    #[test]
    fn unknown_seat_types_ignored() {
        let resp = response(
            r#"{"data": {"trains": [{"train_model": "707", "seat_types": [
                {"type": "BUSINESS", "seat_counts": {"online": 5, "offline": 5}, "fare": 9000}
            ]}]}}"#,
        );

        let map = extract_seat_info(&resp, &model("707")).unwrap();
        assert_eq!(map.total_seats(), 0);
    }

    #[test]
    fn later_duplicate_wins() {
        let resp = response(
            r#"{"data": {"trains": [{"train_model": "707", "seat_types": [
                {"type": "SHULOV", "seat_counts": {"online": 1, "offline": 0}, "fare": 10},
                {"type": "SHULOV", "seat_counts": {"online": 3, "offline": 0}, "fare": 20}
            ]}]}}"#,
        );

        let map = extract_seat_info(&resp, &model("707")).unwrap();
        assert_eq!(map.get(SeatType::Shulov), SeatTypeInfo::new(3, 0, 20.0));
    }

    #[test]
    fn missing_counts_and_fare_default_to_zero() {
        let resp = response(
            r#"{"data": {"trains": [{"train_model": "707", "seat_types": [
                {"type": "SHOVAN"}
            ]}]}}"#,
        );

        let map = extract_seat_info(&resp, &model("707")).unwrap();
        assert_eq!(map.get(SeatType::Shovan), SeatTypeInfo::ZERO);
    }
}
