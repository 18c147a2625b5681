use contracts::system::users::{Employee, UpdateRoleDto};

use crate::shared::api_utils::{get_json, put_json_unit, ApiError};

/// Every employee known to the backend.
pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    get_json("/user/users").await
}

pub async fn update_role(dto: &UpdateRoleDto) -> Result<(), ApiError> {
    put_json_unit("/user/update", dto).await
}
