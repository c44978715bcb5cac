use contracts::domain::category::{Category, CategoryDto};

use crate::shared::api;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    api::get_json("/categories").await
}

pub async fn save_category(dto: &CategoryDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("categories", dto.id);
    api::send_json(method, &path, dto).await
}

pub async fn delete_category(id: i64) -> Result<(), String> {
    api::delete(&format!("/categories/{id}")).await
}
