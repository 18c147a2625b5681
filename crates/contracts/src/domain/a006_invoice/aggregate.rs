use serde::{Deserialize, Serialize};

use crate::domain::common::{DocumentKind, DocumentLine, SalesDocument};
use crate::shared::lenient::{f64_from_any, string_from_any};

/// Invoice, converted from a delivery note (`GET /invoice/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "invoiceID", deserialize_with = "string_from_any")]
    pub invoice_id: String,
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

impl SalesDocument for Invoice {
    fn kind() -> DocumentKind {
        DocumentKind::Invoice
    }
    fn id(&self) -> &str {
        &self.invoice_id
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

/// Body of `POST /invoice/`: turn a delivery note into an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertDeliveryNoteRequest {
    #[serde(rename = "DeliveryNoteID")]
    pub delivery_note_id: String,
}

impl ConvertDeliveryNoteRequest {
    pub fn new(delivery_note_id: impl Into<String>) -> Self {
        Self {
            delivery_note_id: delivery_note_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_names_pdf() {
        let json = r#"[{"invoiceID": 77, "clientName": "ACME", "date": "2024-06-12T08:00:00",
            "totalPrice": 12.5}]"#;
        let invoices: Vec<Invoice> = serde_json::from_str(json).unwrap();
        assert_eq!(invoices[0].id(), "77");
        assert!(invoices[0].lines().is_empty());
        assert_eq!(invoices[0].pdf_filename(), "factura_77.pdf");
        assert_eq!(DocumentKind::Invoice.next(), None);
    }

    #[test]
    fn conversion_body_uses_capitalised_key() {
        let body = serde_json::to_value(ConvertDeliveryNoteRequest::new("5")).unwrap();
        assert_eq!(body, serde_json::json!({"DeliveryNoteID": "5"}));
    }
}
