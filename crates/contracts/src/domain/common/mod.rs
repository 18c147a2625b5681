//! Pieces shared by the four sales documents (offer, order, delivery note,
//! invoice): product lines, the `SalesDocument` view and PDF naming.

use serde::{Deserialize, Serialize};

use crate::shared::date_range::DateRange;
use crate::shared::lenient::{i64_from_any, string_from_any};

/// Product line of a sales document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    #[serde(default, deserialize_with = "string_from_any")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "i64_from_any")]
    pub quantity: i64,
}

/// `{id, label}` pair fed to a select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickOption {
    pub id: String,
    pub label: String,
}

impl PickOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Offer,
    Order,
    DeliveryNote,
    Invoice,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "Oferta",
            DocumentKind::Order => "Pedido",
            DocumentKind::DeliveryNote => "Albarán",
            DocumentKind::Invoice => "Factura",
        }
    }

    /// Collection endpoint (`GET` list, `POST` create or convert).
    pub fn endpoint(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "/offer/",
            DocumentKind::Order => "/order/",
            DocumentKind::DeliveryNote => "/deliverynote/",
            DocumentKind::Invoice => "/invoice/",
        }
    }

    pub fn pdf_endpoint(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "/offer/pdf",
            DocumentKind::Order => "/order/pdf",
            DocumentKind::DeliveryNote => "/deliverynote/pdf",
            DocumentKind::Invoice => "/invoice/pdf",
        }
    }

    pub fn pdf_query_key(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "offerID",
            DocumentKind::Order => "orderID",
            DocumentKind::DeliveryNote => "deliveryNoteID",
            DocumentKind::Invoice => "invoiceID",
        }
    }

    /// Name given to the downloaded PDF. Offers carry their date, the
    /// rest a Spanish prefix.
    pub fn pdf_filename(&self, id: &str, date: &str) -> String {
        match self {
            DocumentKind::Offer => format!("{}_{}.pdf", id, date),
            DocumentKind::Order => format!("pedido_{}.pdf", id),
            DocumentKind::DeliveryNote => format!("albaran_{}.pdf", id),
            DocumentKind::Invoice => format!("factura_{}.pdf", id),
        }
    }

    /// Document this one converts into.
    pub fn next(&self) -> Option<DocumentKind> {
        match self {
            DocumentKind::Offer => Some(DocumentKind::Order),
            DocumentKind::Order => Some(DocumentKind::DeliveryNote),
            DocumentKind::DeliveryNote => Some(DocumentKind::Invoice),
            DocumentKind::Invoice => None,
        }
    }
}

/// Read-only view over the header and lines every sales document shares.
pub trait SalesDocument {
    fn kind() -> DocumentKind;
    fn id(&self) -> &str;
    fn employee_name(&self) -> &str;
    fn client_name(&self) -> &str;
    fn date(&self) -> &str;
    fn total_price(&self) -> f64;
    fn lines(&self) -> &[DocumentLine];

    fn pdf_filename(&self) -> String {
        Self::kind().pdf_filename(self.id(), self.date())
    }

    /// Path and query of the PDF download for this document.
    fn pdf_path(&self) -> String {
        let kind = Self::kind();
        format!(
            "{}?{}={}",
            kind.pdf_endpoint(),
            kind.pdf_query_key(),
            urlencoding::encode(self.id())
        )
    }
}

/// Keep the documents whose date falls inside `range`.
pub fn filter_by_date<T: SalesDocument + Clone>(docs: &[T], range: &DateRange) -> Vec<T> {
    docs.iter()
        .filter(|d| range.contains(d.date()))
        .cloned()
        .collect()
}

/// Find a document by id.
pub fn find_by_id<'a, T: SalesDocument>(docs: &'a [T], id: &str) -> Option<&'a T> {
    docs.iter().find(|d| d.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Sample {
        id: String,
        date: String,
        products: Vec<DocumentLine>,
    }

    impl SalesDocument for Sample {
        fn kind() -> DocumentKind {
            DocumentKind::Order
        }
        fn id(&self) -> &str {
            &self.id
        }
        fn employee_name(&self) -> &str {
            "Ana"
        }
        fn client_name(&self) -> &str {
            "ACME"
        }
        fn date(&self) -> &str {
            &self.date
        }
        fn total_price(&self) -> f64 {
            10.0
        }
        fn lines(&self) -> &[DocumentLine] {
            &self.products
        }
    }

    fn sample(id: &str, date: &str) -> Sample {
        Sample {
            id: id.into(),
            date: date.into(),
            products: vec![],
        }
    }

    #[test]
    fn pipeline_order() {
        assert_eq!(DocumentKind::Offer.next(), Some(DocumentKind::Order));
        assert_eq!(DocumentKind::Order.next(), Some(DocumentKind::DeliveryNote));
        assert_eq!(DocumentKind::DeliveryNote.next(), Some(DocumentKind::Invoice));
        assert_eq!(DocumentKind::Invoice.next(), None);
    }

    #[test]
    fn pdf_names() {
        assert_eq!(DocumentKind::Offer.pdf_filename("12", "2024-05-01"), "12_2024-05-01.pdf");
        assert_eq!(DocumentKind::Order.pdf_filename("3", "x"), "pedido_3.pdf");
        assert_eq!(DocumentKind::DeliveryNote.pdf_filename("4", "x"), "albaran_4.pdf");
        assert_eq!(DocumentKind::Invoice.pdf_filename("5", "x"), "factura_5.pdf");
    }

    #[test]
    fn pdf_path_encodes_id() {
        assert_eq!(sample("7", "").pdf_path(), "/order/pdf?orderID=7");
        assert_eq!(sample("a b/c", "").pdf_path(), "/order/pdf?orderID=a%20b%2Fc");
    }

    #[test]
    fn line_quantities_are_lenient() {
        let line: DocumentLine =
            serde_json::from_str(r#"{"id": 1, "name": "Tornillo", "quantity": "4"}"#).unwrap();
        assert_eq!(line.id, "1");
        assert_eq!(line.quantity, 4);
    }

    #[test]
    fn filters_by_inclusive_range() {
        let docs = vec![
            sample("1", "2024-05-01"),
            sample("2", "2024-05-15"),
            sample("3", "2024-06-01"),
        ];
        let range = DateRange::from_inputs("2024-05-01", "2024-05-15");
        let ids: Vec<String> = filter_by_date(&docs, &range).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(find_by_id(&docs, "3").map(|d| d.date.as_str()), Some("2024-06-01"));
    }
}
