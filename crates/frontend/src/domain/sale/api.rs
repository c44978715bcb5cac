use contracts::domain::sale::{Sale, SaleDto};

use crate::shared::api;

pub async fn fetch_sales() -> Result<Vec<Sale>, String> {
    api::get_json("/sales").await
}

/// Sales are immutable once recorded: create only, never PUT.
pub async fn create_sale(dto: &SaleDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("sales", None);
    api::send_json(method, &path, dto).await
}

pub async fn delete_sale(id: i64) -> Result<(), String> {
    api::delete(&format!("/sales/{id}")).await
}
