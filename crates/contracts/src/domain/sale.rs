use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Recorded sale with its line items. The server computes the
/// authoritative total; [`compute_total`] reproduces the formula for the
/// client-side preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub client_id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub sale_date: NaiveDateTime,
    pub total_amount: f64,
    #[serde(default)]
    pub discount_applied: f64,
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub stock_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity_sold: i32,
    pub unit_price_at_sale: f64,
    #[serde(default)]
    pub subtotal: Option<f64>,
}

/// Payload for `POST /api/sales`. Sales are immutable once recorded, so
/// there is no update variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub client_id: Option<i64>,
    pub user_id: Option<i64>,
    /// Percentage taken off the item total, 0..=100.
    pub discount_applied: f64,
    pub payment_method: String,
    pub items: Vec<SaleItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemDto {
    pub stock_id: i64,
    pub quantity: i32,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_none() {
            return Err("Client is required".into());
        }
        if self.payment_method.trim().is_empty() {
            return Err("Payment method is required".into());
        }
        if self.items.is_empty() {
            return Err("At least one item is required".into());
        }
        if self.items.iter().any(|i| i.quantity <= 0) {
            return Err("Item quantities must be positive".into());
        }
        if !(0.0..=100.0).contains(&self.discount_applied) {
            return Err("Discount must be between 0 and 100".into());
        }
        Ok(())
    }
}

/// Sum of `unit_price * quantity` over the lines, minus the percentage
/// discount. Mirrors what the server stores in `totalAmount`.
pub fn compute_total(lines: &[(f64, i32)], discount_percent: f64) -> f64 {
    let subtotal: f64 = lines.iter().map(|(price, qty)| price * *qty as f64).sum();
    if discount_percent > 0.0 {
        subtotal - subtotal * discount_percent / 100.0
    } else {
        subtotal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_applies_percentage_discount() {
        let total = compute_total(&[(100.0, 1), (50.0, 1)], 10.0);
        assert_eq!(format!("{total:.2}"), "135.00");
    }

    #[test]
    fn total_without_discount_is_plain_sum() {
        assert_eq!(compute_total(&[(19.99, 2)], 0.0), 39.98);
        assert_eq!(compute_total(&[], 0.0), 0.0);
    }

    #[test]
    fn validate_requires_client_and_items() {
        let mut dto = SaleDto {
            payment_method: "cash".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err("Client is required".to_string()));

        dto.client_id = Some(1);
        assert_eq!(
            dto.validate(),
            Err("At least one item is required".to_string())
        );

        dto.items.push(SaleItemDto {
            stock_id: 4,
            quantity: 2,
        });
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn sale_parses_server_timestamps() {
        let json = r#"{
            "id": 1,
            "clientId": 2,
            "saleDate": "2024-01-15T10:30:00",
            "totalAmount": 135.0,
            "discountApplied": 10.0,
            "paymentMethod": "card",
            "items": [
                {"stockId": 4, "quantitySold": 1, "unitPriceAtSale": 100.0},
                {"stockId": 5, "quantitySold": 1, "unitPriceAtSale": 50.0}
            ]
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.items.len(), 2);
        assert_eq!(sale.sale_date.to_string(), "2024-01-15 10:30:00");
    }
}
