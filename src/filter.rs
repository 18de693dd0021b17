// Filter engine: free-text search over a catalog's searchable fields
use tracing::debug;

use crate::inventory::{Bookable, Flight, Hotel, Room};

// Fields a free-text query is matched against
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;
}

impl Searchable for Hotel {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }
}

impl Searchable for Flight {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.airline.as_str(),
            self.flight_number.as_str(),
            self.departure_city.as_str(),
            self.arrival_city.as_str(),
        ]
    }
}

impl Searchable for Room {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.bed_type.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    // Inclusive ceiling on the unit price
    pub max_price: Option<u32>,
}

impl FilterCriteria {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_price: None,
        }
    }
}

// Case-insensitive substring match on any searchable field.
// The empty query matches everything.
pub fn matches<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    item.searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

// Keep the entities matching `query`, in their original order
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }

    let filtered: Vec<T> = items
        .iter()
        .filter(|item| matches(*item, query))
        .cloned()
        .collect();

    debug!(
        query,
        total = items.len(),
        matched = filtered.len(),
        "catalog filtered"
    );
    filtered
}

// Query plus price ceiling
pub fn filter_with<T: Searchable + Bookable + Clone>(
    items: &[T],
    criteria: &FilterCriteria,
) -> Vec<T> {
    let mut filtered = Vec::new();

    for item in items {
        if !criteria
            .max_price
            .map_or(true, |max| item.unit_price() <= max)
        {
            continue;
        }

        if !matches(item, &criteria.query) {
            continue;
        }

        filtered.push(item.clone());
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fixtures::hotel;
    use crate::seed;
    use proptest::prelude::*;
    use test_case::test_case;

    fn ids<T: Bookable>(items: &[T]) -> Vec<&str> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_filter_hotels_by_city() {
        let hotels = seed::hotels().unwrap();
        let result = filter(&hotels, "上海");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
        assert!(result[0].location.contains("上海市浦东新区"));
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let hotels = seed::hotels().unwrap();
        let result = filter(&hotels, "");
        assert_eq!(result.as_slice(), hotels.items());
    }

    #[test_case("酒店", vec!["1", "3", "4", "5"]; "#1 name substring")]
    #[test_case("市", vec!["1", "2", "3", "4", "5"]; "#2 location substring")]
    #[test_case("度假", vec!["2"]; "#3 single name match")]
    #[test_case("巴黎", vec![]; "#4 no match")]
    fn test_filter_sample_hotels(query: &str, expected_ids: Vec<&str>) {
        let hotels = seed::hotels().unwrap();
        let result = filter(&hotels, query);
        assert_eq!(ids(&result), expected_ids);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let hotels = vec![
            hotel("1", "Grand Plaza", "Shanghai", 500),
            hotel("2", "Harbour Inn", "Sanya", 300),
        ];

        assert_eq!(ids(&filter(&hotels, "GRAND")), vec!["1"]);
        assert_eq!(ids(&filter(&hotels, "sanya")), vec!["2"]);
        assert_eq!(ids(&filter(&hotels, "A")), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_flights_and_rooms() {
        let flights = seed::flights().unwrap();
        assert_eq!(ids(&filter(&flights, "mu")), vec!["1", "5"]);

        let rooms = seed::rooms().unwrap();
        assert_eq!(ids(&filter(&rooms, "单人床")), vec!["3", "4"]);
    }

    #[test_case(FilterCriteria { query: String::new(), max_price: Some(600) },
        vec!["3", "5"]; "#1 price ceiling only")]
    #[test_case(FilterCriteria { query: "酒店".to_string(), max_price: Some(688) },
        vec!["1", "3", "5"]; "#2 ceiling is inclusive")]
    #[test_case(FilterCriteria::query("三亚"),
        vec!["2"]; "#3 query only")]
    #[test_case(FilterCriteria { query: "三亚".to_string(), max_price: Some(1000) },
        vec![]; "#4 combined filters")]
    fn test_filter_with_criteria(criteria: FilterCriteria, expected_ids: Vec<&str>) {
        let hotels = seed::hotels().unwrap();
        let result = filter_with(&hotels, &criteria);
        assert_eq!(ids(&result), expected_ids);
    }

    fn arb_hotels() -> impl Strategy<Value = Vec<Hotel>> {
        prop::collection::vec(("[a-dA-D]{1,6}", "[a-dA-D]{1,6}"), 0..30).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, location))| hotel(&i.to_string(), &name, &location, 100))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filter_keeps_exactly_matching_entries(
            hotels in arb_hotels(),
            query in "[a-dA-D]{0,2}",
        ) {
            let result = filter(&hotels, &query);
            let needle = query.to_lowercase();
            let hit = |h: &Hotel| {
                h.name.to_lowercase().contains(&needle)
                    || h.location.to_lowercase().contains(&needle)
            };

            for h in &result {
                prop_assert!(hit(h));
            }
            for h in hotels.iter().filter(|h| !result.contains(*h)) {
                prop_assert!(!hit(h));
            }

            // Order preserved
            let expected: Vec<&Hotel> = hotels.iter().filter(|h| hit(*h)).collect();
            let actual: Vec<&Hotel> = result.iter().collect();
            prop_assert_eq!(expected, actual);
        }
    }
}
