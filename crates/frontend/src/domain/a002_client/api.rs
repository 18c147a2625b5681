use contracts::domain::a002_client::{Client, CreateClientDto, UpdateClientDto};

use crate::shared::api_utils::{get_json, post_json, put_json, ApiError};

pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    get_json("/client/").await
}

/// Returns the stored client, id included.
pub async fn create_client(dto: &CreateClientDto) -> Result<Client, ApiError> {
    post_json("/client/", dto).await
}

pub async fn update_client(dto: &UpdateClientDto) -> Result<Client, ApiError> {
    put_json("/client/", dto).await
}
