use serde::{Deserialize, Serialize};

use crate::domain::common::{DocumentKind, DocumentLine, SalesDocument};
use crate::shared::lenient::{f64_from_any, string_from_any};

/// Delivery note (albarán), converted from an order (`GET /deliverynote/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryNote {
    #[serde(rename = "DeliveryNoteID", deserialize_with = "string_from_any")]
    pub delivery_note_id: String,
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

impl SalesDocument for DeliveryNote {
    fn kind() -> DocumentKind {
        DocumentKind::DeliveryNote
    }
    fn id(&self) -> &str {
        &self.delivery_note_id
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

/// Body of `POST /deliverynote/`: turn an order into a delivery note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOrderRequest {
    #[serde(rename = "orderID")]
    pub order_id: String,
}

impl ConvertOrderRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_capitalised_id_key() {
        let json = r#"{"DeliveryNoteID": "5", "employeID": "1", "employeName": "Eva",
            "clientID": "3", "clientName": "ACME", "date": "2024-06-11",
            "totalPrice": 10, "products": [{"id": 2, "name": "Tuerca", "quantity": 3}]}"#;
        let note: DeliveryNote = serde_json::from_str(json).unwrap();
        assert_eq!(note.id(), "5");
        assert_eq!(note.lines()[0].quantity, 3);
        assert_eq!(note.pdf_filename(), "albaran_5.pdf");
        assert_eq!(note.pdf_path(), "/deliverynote/pdf?deliveryNoteID=5");
    }

    #[test]
    fn conversion_body() {
        let body = serde_json::to_value(ConvertOrderRequest::new("31")).unwrap();
        assert_eq!(body, serde_json::json!({"orderID": "31"}));
    }
}
