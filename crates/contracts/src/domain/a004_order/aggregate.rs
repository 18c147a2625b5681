use serde::{Deserialize, Serialize};

use crate::domain::common::{DocumentKind, DocumentLine, SalesDocument};
use crate::shared::lenient::{f64_from_any, string_from_any};

/// Customer order, converted from an offer (`GET /order/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderID", deserialize_with = "string_from_any")]
    pub order_id: String,
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

impl SalesDocument for Order {
    fn kind() -> DocumentKind {
        DocumentKind::Order
    }
    fn id(&self) -> &str {
        &self.order_id
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

/// Body of `POST /order/`: turn an offer into an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOfferRequest {
    #[serde(rename = "offerID")]
    pub offer_id: String,
}

impl ConvertOfferRequest {
    pub fn new(offer_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_names_pdf() {
        let json = r#"{"orderID": "31", "employeID": 1, "employeName": "Eva",
            "clientID": 3, "clientName": "ACME", "date": "2024-06-10",
            "totalPrice": "99.90", "products": []}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id(), "31");
        assert_eq!(order.total_price(), 99.9);
        assert_eq!(order.pdf_filename(), "pedido_31.pdf");
        assert_eq!(order.pdf_path(), "/order/pdf?orderID=31");
    }

    #[test]
    fn conversion_body() {
        let body = serde_json::to_value(ConvertOfferRequest::new("12")).unwrap();
        assert_eq!(body, serde_json::json!({"offerID": "12"}));
    }
}
