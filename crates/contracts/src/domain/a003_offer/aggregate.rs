use serde::{Deserialize, Serialize};

use crate::domain::common::{DocumentKind, DocumentLine, SalesDocument};
use crate::shared::lenient::{self, f64_from_any, string_from_any};

/// Commercial offer (`GET /offer/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "offerID", deserialize_with = "string_from_any")]
    pub offer_id: String,
    #[serde(rename = "employeID", default, deserialize_with = "string_from_any")]
    pub employee_id: String,
    #[serde(rename = "employeName", default)]
    pub employee_name: String,
    #[serde(rename = "clientID", default, deserialize_with = "string_from_any")]
    pub client_id: String,
    #[serde(rename = "clientName", default)]
    pub client_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "totalPrice", default, deserialize_with = "f64_from_any")]
    pub total_price: f64,
    #[serde(default)]
    pub products: Vec<DocumentLine>,
}

impl SalesDocument for Offer {
    fn kind() -> DocumentKind {
        DocumentKind::Offer
    }
    fn id(&self) -> &str {
        &self.offer_id
    }
    fn employee_name(&self) -> &str {
        &self.employee_name
    }
    fn client_name(&self) -> &str {
        &self.client_name
    }
    fn date(&self) -> &str {
        &self.date
    }
    fn total_price(&self) -> f64 {
        self.total_price
    }
    fn lines(&self) -> &[DocumentLine] {
        &self.products
    }
}

/// `{id, quantity}` entry of an offer body. The endpoint binds
/// `list[dict[str, str]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferLineDto {
    pub id: String,
    #[serde(with = "lenient::as_string")]
    pub quantity: i64,
}

/// Body of `POST /offer/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOfferDto {
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub products: Vec<OfferLineDto>,
}

/// Body of `PUT /offer/`. The client of an offer cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOfferDto {
    #[serde(rename = "offerID")]
    pub offer_id: String,
    pub products: Vec<OfferLineDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_offer_rows() {
        let json = r#"[{
            "offerID": 12, "employeID": "109", "employeName": "Luis",
            "clientID": "3", "clientName": "ACME", "date": "2024-05-02",
            "totalPrice": 120.5,
            "products": [{"id": 1, "name": "Tornillo", "quantity": 4}]
        }]"#;
        let offers: Vec<Offer> = serde_json::from_str(json).unwrap();
        let offer = &offers[0];
        assert_eq!(offer.id(), "12");
        assert_eq!(offer.client_name(), "ACME");
        assert_eq!(offer.lines().len(), 1);
        assert_eq!(offer.pdf_filename(), "12_2024-05-02.pdf");
        assert_eq!(offer.pdf_path(), "/offer/pdf?offerID=12");
    }

    #[test]
    fn create_body_shape() {
        let dto = CreateOfferDto {
            client_id: "3".into(),
            products: vec![OfferLineDto { id: "8".into(), quantity: 2 }],
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"clientID": "3", "products": [{"id": "8", "quantity": "2"}]})
        );
    }
}
