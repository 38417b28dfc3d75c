//! Form draft
//!
//! Transient input state for one new event, reset to defaults after a
//! successful submit.

use crate::models::{PaymentMethod, SaveEventRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub event_name: String,
    pub event_date_from: String,
    pub event_date_to: String,
    pub venue_name: String,
    pub operating_hours: String,
    pub selected_products: Vec<String>,
    pub sales_volume: String,
    pub price_per_unit: String,
    pub sale_hour: String,
    pub payment_method: PaymentMethod,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl EventDraft {
    pub fn is_selected(&self, product: &str) -> bool {
        self.selected_products.iter().any(|p| p == product)
    }

    /// Adds or removes the product from the selection set.
    pub fn toggle_product(&mut self, product: &str) {
        if self.is_selected(product) {
            self.deselect(product);
        } else {
            self.selected_products.push(product.to_string());
        }
    }

    pub fn deselect(&mut self, product: &str) {
        self.selected_products.retain(|p| p != product);
    }

    /// Swaps `old` for `new` in the selection set, preserving order.
    pub fn replace_selection(&mut self, old: &str, new: &str) {
        for slot in &mut self.selected_products {
            if slot == old {
                *slot = new.to_string();
            }
        }
    }

    /// Total revenue = volume x price rounded to 2 decimals, when both
    /// fields hold numbers.
    pub fn total_revenue(&self) -> Option<f64> {
        let volume = self.sales_volume.trim().parse::<f64>().ok()?;
        let price = self.price_per_unit.trim().parse::<f64>().ok()?;
        Some(round2(volume * price))
    }

    /// The read-only total shown in the form: "" until both inputs parse.
    pub fn total_revenue_display(&self) -> String {
        match self.total_revenue() {
            Some(total) => format!("{:.2}", total),
            None => String::new(),
        }
    }

    /// Builds the save-event payload from the current field values.
    pub fn to_request(&self) -> SaveEventRequest {
        SaveEventRequest {
            event_name: self.event_name.clone(),
            event_date_from: self.event_date_from.clone(),
            event_date_to: self.event_date_to.clone(),
            venue_name: self.venue_name.clone(),
            operating_hours: self.operating_hours.clone(),
            selected_products: self.selected_products.clone(),
            sales_volume: self.sales_volume.trim().parse().ok(),
            price_per_unit: self.price_per_unit.trim().parse().ok(),
            total_revenue: self.total_revenue(),
            sale_hour: self.sale_hour.clone(),
            payment_method: self.payment_method,
        }
    }

    /// Back to defaults: empty fields, empty selection, Cash.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_cash_and_empty_fields() {
        let draft = EventDraft::default();
        assert_eq!(draft.payment_method, PaymentMethod::Cash);
        assert!(draft.event_name.is_empty());
        assert!(draft.selected_products.is_empty());
        assert_eq!(draft.total_revenue_display(), "");
    }

    #[test]
    fn total_revenue_requires_both_inputs() {
        let mut draft = EventDraft {
            sales_volume: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.total_revenue_display(), "");

        draft.price_per_unit = "2.5".to_string();
        assert_eq!(draft.total_revenue_display(), "25.00");
        assert_eq!(draft.total_revenue(), Some(25.0));

        draft.sales_volume = "abc".to_string();
        assert_eq!(draft.total_revenue_display(), "");
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut draft = EventDraft::default();
        draft.toggle_product("Madri");
        assert!(draft.is_selected("Madri"));
        draft.toggle_product("Madri");
        assert!(!draft.is_selected("Madri"));
    }

    #[test]
    fn replace_selection_swaps_in_place() {
        let mut draft = EventDraft::default();
        draft.toggle_product("Fosters");
        draft.toggle_product("Madri");
        draft.replace_selection("Fosters", "Heineken");
        assert_eq!(
            draft.selected_products,
            ["Heineken".to_string(), "Madri".to_string()]
        );
    }

    #[test]
    fn request_carries_parsed_numbers() {
        let draft = EventDraft {
            event_name: "Quiz Night".to_string(),
            sales_volume: "10".to_string(),
            price_per_unit: "2.5".to_string(),
            sale_hour: "20".to_string(),
            ..Default::default()
        };
        let request = draft.to_request();
        assert_eq!(request.sales_volume, Some(10.0));
        assert_eq!(request.price_per_unit, Some(2.5));
        assert_eq!(request.total_revenue, Some(25.0));
    }

    #[test]
    fn unparseable_numbers_become_null() {
        let draft = EventDraft {
            sales_volume: "lots".to_string(),
            ..Default::default()
        };
        let request = draft.to_request();
        assert_eq!(request.sales_volume, None);
        assert_eq!(request.total_revenue, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = EventDraft {
            event_name: "Quiz Night".to_string(),
            selected_products: vec!["Madri".to_string()],
            payment_method: PaymentMethod::Card,
            ..Default::default()
        };
        draft.reset();
        assert_eq!(draft, EventDraft::default());
    }
}
