//! Derived computations over the loaded event list.
//!
//! Everything here is pure: the dashboard recomputes these wholesale each
//! time the event list changes.

use crate::models::EventRecord;
use std::collections::BTreeMap;

/// Aggregate totals shown in the summary panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_revenue: f64,
    pub transactions: usize,
    /// Total revenue / transaction count, rounded to 2 decimals.
    pub average_spend: f64,
}

fn parse_or_zero(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(0.0)
}

pub fn compute_summary(events: &[EventRecord]) -> Summary {
    let total_revenue: f64 = events
        .iter()
        .map(|event| parse_or_zero(&event.total_revenue))
        .sum();
    let transactions = events.len();
    let average_spend = if transactions > 0 {
        ((total_revenue / transactions as f64) * 100.0).round() / 100.0
    } else {
        0.0
    };

    Summary {
        total_revenue,
        transactions,
        average_spend,
    }
}

/// One count per product occurrence across all events, keyed by product
/// name. Events whose product list failed to parse are skipped.
pub fn product_distribution(events: &[EventRecord]) -> Vec<(String, u64)> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        let Some(products) = event.products_sold.names() else {
            continue;
        };
        for product in products {
            *totals.entry(product.clone()).or_insert(0) += 1;
        }
    }
    totals.into_iter().collect()
}

/// Sales volume summed into a 24-slot array indexed by sale hour. Events
/// with a non-numeric or out-of-range hour are skipped; a non-numeric
/// volume counts as 0.
pub fn hourly_totals(events: &[EventRecord]) -> [f64; 24] {
    let mut totals = [0.0; 24];
    for event in events {
        let Ok(hour) = event.sale_hour.trim().parse::<usize>() else {
            continue;
        };
        if hour >= totals.len() {
            continue;
        }
        totals[hour] += parse_or_zero(&event.sales_volume);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductsSold;

    fn record(products: &str, volume: &str, hour: &str, revenue: &str) -> EventRecord {
        EventRecord {
            id: 1,
            event_name: "Test".to_string(),
            event_date_from: "2026-01-01".to_string(),
            event_date_to: "2026-01-01".to_string(),
            venue_name: "The Crown".to_string(),
            operating_hours: String::new(),
            products_sold: ProductsSold::parse(products),
            sales_volume: volume.to_string(),
            price_per_unit: String::new(),
            total_revenue: revenue.to_string(),
            sale_hour: hour.to_string(),
            payment_method: "Cash".to_string(),
        }
    }

    #[test]
    fn summary_of_empty_list_is_zero() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.transactions, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_spend, 0.0);
    }

    #[test]
    fn summary_counts_every_event_and_ignores_bad_revenue() {
        let events = vec![
            record("[]", "", "0", "100.50"),
            record("[]", "", "0", "not a number"),
            record("[]", "", "0", "49.50"),
        ];
        let summary = compute_summary(&events);
        assert_eq!(summary.transactions, 3);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.average_spend, 50.0);
    }

    #[test]
    fn average_spend_rounds_to_two_decimals() {
        let events = vec![
            record("[]", "", "0", "10.00"),
            record("[]", "", "0", "10.00"),
            record("[]", "", "0", "10.01"),
        ];
        let summary = compute_summary(&events);
        assert_eq!(summary.average_spend, 10.0);
    }

    #[test]
    fn hourly_totals_accumulate_per_hour() {
        let events = vec![
            record("[]", "12", "5", ""),
            record("[]", "3", "5", ""),
            record("[]", "bad", "5", ""),
        ];
        let totals = hourly_totals(&events);
        assert_eq!(totals[5], 15.0);
        for (hour, total) in totals.iter().enumerate() {
            if hour != 5 {
                assert_eq!(*total, 0.0);
            }
        }
    }

    #[test]
    fn hourly_totals_skip_invalid_hours() {
        let events = vec![record("[]", "10", "24", ""), record("[]", "10", "noon", "")];
        assert_eq!(hourly_totals(&events), [0.0; 24]);
    }

    #[test]
    fn distribution_tallies_occurrences() {
        let events = vec![
            record(r#"["Guinness", "Madri"]"#, "", "0", ""),
            record(r#"["Guinness"]"#, "", "0", ""),
        ];
        let distribution = product_distribution(&events);
        assert_eq!(
            distribution,
            vec![("Guinness".to_string(), 2), ("Madri".to_string(), 1)]
        );
    }

    #[test]
    fn distribution_skips_unparseable_product_lists() {
        let events = vec![
            record("not json", "", "0", ""),
            record(r#"["Peroni"]"#, "", "0", ""),
        ];
        let distribution = product_distribution(&events);
        assert_eq!(distribution, vec![("Peroni".to_string(), 1)]);
    }
}
