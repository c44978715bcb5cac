use contracts::domain::product::{Product, ProductDto};

use crate::shared::api;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    api::get_json("/products").await
}

/// POST for a new product, PUT when the dto carries an id.
pub async fn save_product(dto: &ProductDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("products", dto.id);
    api::send_json(method, &path, dto).await
}

pub async fn delete_product(id: i64) -> Result<(), String> {
    api::delete(&format!("/products/{id}")).await
}
