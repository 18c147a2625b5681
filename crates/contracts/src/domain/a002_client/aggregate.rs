use serde::{Deserialize, Serialize};

use crate::domain::common::PickOption;
use crate::shared::lenient::string_from_any;
use crate::shared::validation::ValidationError;

/// Customer company (`GET /client/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "clientID", deserialize_with = "string_from_any")]
    pub client_id: String,
    #[serde(rename = "CompanyName", default)]
    pub company_name: String,
    #[serde(rename = "CIF", default, deserialize_with = "string_from_any")]
    pub cif: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub phone: String,
    #[serde(default)]
    pub contact: String,
}

impl Client {
    pub fn matches_company(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.company_name.to_lowercase().contains(&needle)
    }

    pub fn to_pick_option(&self) -> PickOption {
        PickOption::new(self.client_id.clone(), self.company_name.clone())
    }
}

/// Body of `POST /client/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateClientDto {
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "CIF")]
    pub cif: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub contact: String,
}

/// Body of `PUT /client/`. Company name and CIF are fixed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateClientDto {
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub contact: String,
}

/// Raw text of the client modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub company_name: String,
    pub cif: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub contact: String,
}

impl ClientForm {
    pub fn from_client(client: &Client) -> Self {
        Self {
            company_name: client.company_name.clone(),
            cif: client.cif.clone(),
            address: client.address.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            contact: client.contact.clone(),
        }
    }

    pub fn validate_new(&self) -> Result<CreateClientDto, ValidationError> {
        let fields = [
            &self.company_name,
            &self.cif,
            &self.address,
            &self.email,
            &self.phone,
            &self.contact,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::IncompleteForm);
        }
        let cif = digits(&self.cif, "CIF")?;
        self.check_contact_fields()?;
        Ok(CreateClientDto {
            company_name: self.company_name.trim().to_string(),
            cif,
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            contact: self.contact.trim().to_string(),
        })
    }

    pub fn validate_update(&self, current: &Client) -> Result<UpdateClientDto, ValidationError> {
        let fields = [&self.address, &self.email, &self.phone, &self.contact];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::IncompleteForm);
        }
        self.check_contact_fields()?;
        Ok(UpdateClientDto {
            client_id: current.client_id.clone(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            contact: self.contact.trim().to_string(),
        })
    }

    fn check_contact_fields(&self) -> Result<(), ValidationError> {
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        digits(&self.phone, "Teléfono")?;
        Ok(())
    }
}

/// The backend stores phone and CIF as integers.
fn digits(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::NotAnInteger(field))
    }
}

/// Replace the row with the same id, or append it.
pub fn upsert_client(list: &mut Vec<Client>, client: Client) {
    match list.iter_mut().find(|c| c.client_id == client.client_id) {
        Some(existing) => *existing = client,
        None => list.push(client),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ClientForm {
        ClientForm {
            company_name: "ACME".into(),
            cif: "12345678".into(),
            address: "C/ Mayor 1".into(),
            email: "compras@acme.es".into(),
            phone: "600111222".into(),
            contact: "Lucía".into(),
        }
    }

    fn client() -> Client {
        serde_json::from_str(
            r#"{"clientID":"3","CompanyName":"ACME","CIF":12345678,"address":"C/ Mayor 1",
                "email":"a@acme.es","phone":600111222,"contact":"Lucía"}"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_numeric_columns_as_text() {
        let c = client();
        assert_eq!(c.cif, "12345678");
        assert_eq!(c.phone, "600111222");
        assert!(c.matches_company("acm"));
    }

    #[test]
    fn create_requires_every_field() {
        let mut f = form();
        f.contact = " ".into();
        assert_eq!(f.validate_new(), Err(ValidationError::IncompleteForm));
        assert_eq!(
            ValidationError::IncompleteForm.to_string(),
            "Por favor, completa todos los campos."
        );
    }

    #[test]
    fn create_body_uses_backend_keys() {
        let json = serde_json::to_value(form().validate_new().unwrap()).unwrap();
        assert_eq!(json["CompanyName"], "ACME");
        assert_eq!(json["CIF"], "12345678");
        assert!(json.get("clientID").is_none());
    }

    #[test]
    fn checks_email_and_phone() {
        let mut f = form();
        f.email = "acme.es".into();
        assert_eq!(f.validate_new(), Err(ValidationError::InvalidEmail));
        let mut f = form();
        f.phone = "600-111".into();
        assert_eq!(f.validate_new(), Err(ValidationError::NotAnInteger("Teléfono")));
    }

    #[test]
    fn update_ignores_company_and_cif() {
        let current = client();
        let mut f = ClientForm::from_client(&current);
        f.company_name.clear();
        f.cif.clear();
        f.address = "C/ Nueva 2".into();
        let dto = f.validate_update(&current).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["clientID"], "3");
        assert_eq!(json["address"], "C/ Nueva 2");
        assert!(json.get("CompanyName").is_none());
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let mut list = vec![client()];
        let mut changed = client();
        changed.contact = "Pablo".into();
        upsert_client(&mut list, changed);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].contact, "Pablo");

        let mut other = client();
        other.client_id = "4".into();
        upsert_client(&mut list, other);
        assert_eq!(list.len(), 2);
    }
}
