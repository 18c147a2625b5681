use contracts::domain::a001_product::{CreateProductDto, Product, UpdateProductDto};

use crate::shared::api_utils::{get_json, post_json_unit, put_json_unit, ApiError};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/product/").await
}

pub async fn create_product(dto: &CreateProductDto) -> Result<(), ApiError> {
    post_json_unit("/product", dto).await
}

pub async fn update_product(dto: &UpdateProductDto) -> Result<(), ApiError> {
    put_json_unit("/product", dto).await
}
