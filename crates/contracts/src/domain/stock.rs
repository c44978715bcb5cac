use serde::{Deserialize, Serialize};

/// Stock line: a batch of one product held at a location. The server may
/// embed resolved display names; the client still falls back to its own
/// lists when they are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub quantity: i32,
    pub cost_price: Option<f64>,
    pub selling_price: f64,
    pub location: String,
}

impl StockDto {
    pub fn from_record(s: &Stock) -> Self {
        Self {
            id: Some(s.id),
            product_id: Some(s.product_id),
            supplier_id: s.supplier_id,
            quantity: s.quantity,
            cost_price: s.cost_price,
            selling_price: s.selling_price,
            location: s.location.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.is_none() {
            return Err("Product is required".into());
        }
        if self.quantity < 0 {
            return Err("Quantity cannot be negative".into());
        }
        if self.selling_price < 0.0 {
            return Err("Selling price cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_product() {
        let dto = StockDto::default();
        assert_eq!(dto.validate(), Err("Product is required".to_string()));
    }

    #[test]
    fn embedded_names_are_optional_on_the_wire() {
        let json = r#"{"id":3,"productId":1,"quantity":4,"sellingPrice":12.5}"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.product_name, None);
        assert_eq!(stock.selling_price, 12.5);
    }
}
