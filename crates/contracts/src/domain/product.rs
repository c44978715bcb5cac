use serde::{Deserialize, Serialize};

/// Catalogue product as served by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
}

/// Create/update payload for a product. `id` is `None` for a new record;
/// the same struct backs the modal form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

impl ProductDto {
    pub fn from_record(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            price: p.price,
            quantity: p.quantity,
            category_id: p.category_id,
            supplier_id: p.supplier_id,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        if self.quantity < 0 {
            return Err("Quantity cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_name() {
        let dto = ProductDto {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn dto_round_trips_record_fields() {
        let record = Product {
            id: 7,
            name: "Widget".into(),
            sku: Some("W-001".into()),
            description: None,
            price: 9.99,
            quantity: 5,
            category_id: Some(2),
            supplier_id: None,
        };
        let dto = ProductDto::from_record(&record);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.sku, "W-001");
        assert_eq!(dto.description, "");
        assert_eq!(dto.category_id, Some(2));
    }
}
