use contracts::domain::stock::{Stock, StockDto};

use crate::shared::api;

pub async fn fetch_stocks() -> Result<Vec<Stock>, String> {
    api::get_json("/stocks").await
}

pub async fn save_stock(dto: &StockDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("stocks", dto.id);
    api::send_json(method, &path, dto).await
}

pub async fn delete_stock(id: i64) -> Result<(), String> {
    api::delete(&format!("/stocks/{id}")).await
}
