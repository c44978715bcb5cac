use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Aggregate payload of `GET /api/dashboard`: collection counts, inventory
/// value totals and a recent-products sub-list. Every field defaults so a
/// partial payload still parses and only the missing stats stay at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_categories: u64,
    #[serde(default)]
    pub total_suppliers: u64,
    #[serde(default)]
    pub total_stock_items: u64,
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default)]
    pub total_clients: u64,
    /// Σ cost_price × quantity over all stock lines.
    #[serde(default)]
    pub total_inventory_value: f64,
    /// Σ selling_price × quantity over all stock lines.
    #[serde(default)]
    pub potential_sales_value: f64,
    /// Stock lines with quantity below 10.
    #[serde(default)]
    pub low_stock_items: u64,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_parses_with_defaults() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalProducts": 12, "lowStockItems": 3}"#).unwrap();
        assert_eq!(stats.total_products, 12);
        assert_eq!(stats.low_stock_items, 3);
        assert_eq!(stats.total_sales, 0);
        assert!(stats.products.is_empty());
    }
}
