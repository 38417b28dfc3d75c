//! Wire types for the sales backend.
//!
//! `GET /api/get-events` returns loosely typed rows: numeric fields may be
//! JSON numbers or strings depending on how the record entered the system,
//! and the product list is a JSON-text column. Everything is normalized at
//! deserialization so the rest of the crate never re-parses per render.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Product list of an event record, parsed once at ingestion.
///
/// Rows whose `products_sold` column is not valid JSON keep the raw text
/// for display but are excluded from chart aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsSold {
    Parsed(Vec<String>),
    Raw(String),
}

impl ProductsSold {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(products) => ProductsSold::Parsed(products),
            Err(_) => ProductsSold::Raw(raw.to_string()),
        }
    }

    /// Product names, if the source text was a valid JSON array.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            ProductsSold::Parsed(products) => Some(products),
            ProductsSold::Raw(_) => None,
        }
    }

    /// Human-readable form for the events table.
    pub fn display(&self) -> String {
        match self {
            ProductsSold::Parsed(products) => products.join(", "),
            ProductsSold::Raw(raw) => raw.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for ProductsSold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ProductsSold::parse(&raw))
    }
}

impl Default for ProductsSold {
    fn default() -> Self {
        ProductsSold::Parsed(Vec::new())
    }
}

/// Accepts a JSON string, number, or null and yields its text form.
fn stringly<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// One persisted sales/venue entry as returned by `GET /api/get-events`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: i64,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_date_from: String,
    #[serde(default)]
    pub event_date_to: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub operating_hours: String,
    #[serde(default)]
    pub products_sold: ProductsSold,
    #[serde(default, deserialize_with = "stringly")]
    pub sales_volume: String,
    #[serde(default, deserialize_with = "stringly")]
    pub price_per_unit: String,
    #[serde(default, deserialize_with = "stringly")]
    pub total_revenue: String,
    #[serde(default, deserialize_with = "stringly")]
    pub sale_hour: String,
    #[serde(default)]
    pub payment_method: String,
}

/// How a sale was paid for.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Contactless,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Contactless,
    ];

    /// Next method in the form's selector cycle.
    pub fn next(self) -> Self {
        match self {
            PaymentMethod::Cash => PaymentMethod::Card,
            PaymentMethod::Card => PaymentMethod::Contactless,
            PaymentMethod::Contactless => PaymentMethod::Cash,
        }
    }
}

/// Payload for `POST /api/save-event`, field names exactly as the backend
/// expects them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveEventRequest {
    pub event_name: String,
    pub event_date_from: String,
    pub event_date_to: String,
    pub venue_name: String,
    pub operating_hours: String,
    pub selected_products: Vec<String>,
    pub sales_volume: Option<f64>,
    pub price_per_unit: Option<f64>,
    pub total_revenue: Option<f64>,
    pub sale_hour: String,
    pub payment_method: PaymentMethod,
}

/// `{"message": ...}` body the backend returns for mutations and errors.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_string_and_number_fields() {
        let json = r#"{
            "id": 7,
            "event_name": "Summer Fest",
            "event_date_from": "2026-06-01",
            "event_date_to": "2026-06-03",
            "venue_name": "The Crown",
            "operating_hours": "12:00 PM - 11:00 PM",
            "products_sold": "[\"Guinness\", \"Peroni\"]",
            "sales_volume": 120.5,
            "price_per_unit": "4.20",
            "total_revenue": 506.1,
            "sale_hour": 18,
            "payment_method": "Card"
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.sales_volume, "120.5");
        assert_eq!(record.price_per_unit, "4.20");
        assert_eq!(record.sale_hour, "18");
        assert_eq!(
            record.products_sold.names().unwrap(),
            ["Guinness".to_string(), "Peroni".to_string()]
        );
    }

    #[test]
    fn keeps_unparseable_product_text_raw() {
        let products = ProductsSold::parse("not json");
        assert_eq!(products, ProductsSold::Raw("not json".to_string()));
        assert!(products.names().is_none());
        assert_eq!(products.display(), "not json");
    }

    #[test]
    fn save_request_serializes_camel_case() {
        let request = SaveEventRequest {
            event_name: "Quiz Night".to_string(),
            event_date_from: "2026-02-01".to_string(),
            event_date_to: "2026-02-01".to_string(),
            venue_name: "The Crown".to_string(),
            operating_hours: String::new(),
            selected_products: vec!["Madri".to_string()],
            sales_volume: Some(10.0),
            price_per_unit: Some(2.5),
            total_revenue: Some(25.0),
            sale_hour: "20".to_string(),
            payment_method: PaymentMethod::Contactless,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["eventName"], "Quiz Night");
        assert_eq!(value["selectedProducts"][0], "Madri");
        assert_eq!(value["paymentMethod"], "Contactless");
        assert_eq!(value["totalRevenue"], 25.0);
    }

    #[test]
    fn payment_method_cycle_wraps() {
        assert_eq!(PaymentMethod::Cash.next(), PaymentMethod::Card);
        assert_eq!(PaymentMethod::Contactless.next(), PaymentMethod::Cash);
    }
}
