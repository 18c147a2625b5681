use contracts::system::users::Employee;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<Employee>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub selected_id: Option<String>,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            selected_id: None,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
