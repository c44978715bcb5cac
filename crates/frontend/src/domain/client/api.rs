use contracts::domain::client::{Client, ClientDto};

use crate::shared::api;

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    api::get_json("/clients").await
}

pub async fn save_client(dto: &ClientDto) -> Result<(), String> {
    let (method, path) = api::write_endpoint("clients", dto.id);
    api::send_json(method, &path, dto).await
}

pub async fn delete_client(id: i64) -> Result<(), String> {
    api::delete(&format!("/clients/{id}")).await
}
