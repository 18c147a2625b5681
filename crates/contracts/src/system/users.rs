use serde::{Deserialize, Serialize};

use crate::shared::lenient::string_from_any;
use crate::system::roles::Role;

/// Row of `GET /user/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "string_from_any")]
    pub employe_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: Role,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.family_name).trim().to_string()
    }
}

/// Body of `PUT /user/update`. The endpoint takes `dict[str, str]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoleDto {
    pub employe_id: String,
    pub rol: String,
}

impl UpdateRoleDto {
    pub fn new(employe_id: impl Into<String>, role: Role) -> Self {
        Self {
            employe_id: employe_id.into(),
            rol: role.code().to_string(),
        }
    }
}

/// Default view of the users list: case-insensitive name filter, sorted by name.
pub fn visible_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<Employee> = employees
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    rows.sort_by_key(|e| e.name.to_lowercase());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, name: &str, rol: Role) -> Employee {
        Employee {
            employe_id: id.into(),
            name: name.into(),
            family_name: String::new(),
            email: format!("{id}@example.com"),
            rol,
        }
    }

    #[test]
    fn update_body_sends_role_as_string() {
        let dto = UpdateRoleDto::new("42", Role::WarehouseManager);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"employe_id": "42", "rol": "4"}));
    }

    #[test]
    fn filters_and_sorts_by_name() {
        let list = vec![
            emp("1", "marta", Role::Manager),
            emp("2", "Alberto", Role::Unassigned),
            emp("3", "Martín", Role::Commercial),
        ];
        let names: Vec<String> = visible_employees(&list, "MAR")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["marta", "Martín"]);

        let all = visible_employees(&list, "  ");
        assert_eq!(all[0].name, "Alberto");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn decodes_numeric_ids_and_roles() {
        let json = r#"[{"employe_id": 7, "name": "Eva", "family_name": "Gil", "email": "e@x", "rol": 1}]"#;
        let rows: Vec<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].employe_id, "7");
        assert_eq!(rows[0].rol, Role::Administrator);
        assert_eq!(rows[0].full_name(), "Eva Gil");
    }
}
