use contracts::domain::supplier::{Supplier, SupplierDto};

use crate::shared::api;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    api::get_json("/suppliers").await
}

pub async fn save_supplier(dto: &SupplierDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("suppliers", dto.id);
    api::send_json(method, &path, dto).await
}

pub async fn delete_supplier(id: i64) -> Result<(), String> {
    api::delete(&format!("/suppliers/{id}")).await
}
