//! Editing state of the offer editor, shared by create and edit.

use super::aggregate::{CreateOfferDto, Offer, OfferLineDto, UpdateOfferDto};
use crate::domain::common::PickOption;
use crate::shared::lenient;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferDraft {
    pub client: Option<PickOption>,
    pub lines: Vec<DraftLine>,
}

impl OfferDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an existing offer. Lines without an id are matched to the
    /// catalog by product name.
    pub fn from_offer(offer: &Offer, catalog: &[PickOption]) -> Self {
        let lines = offer
            .products
            .iter()
            .map(|line| {
                let product_id = if line.id.trim().is_empty() {
                    catalog
                        .iter()
                        .find(|opt| opt.label == line.name)
                        .map(|opt| opt.id.clone())
                        .unwrap_or_default()
                } else {
                    line.id.clone()
                };
                DraftLine {
                    product_id,
                    name: line.name.clone(),
                    quantity: line.quantity,
                }
            })
            .collect();
        Self {
            client: Some(PickOption::new(
                offer.client_id.clone(),
                offer.client_name.clone(),
            )),
            lines,
        }
    }

    pub fn set_client(&mut self, client: Option<PickOption>) {
        self.client = client;
    }

    pub fn contains_product(&self, product: &PickOption) -> bool {
        self.lines
            .iter()
            .any(|l| l.product_id == product.id || l.name == product.label)
    }

    pub fn add_line(&mut self, product: &PickOption, quantity: &str) -> Result<(), ValidationError> {
        let quantity = positive_quantity(quantity)?;
        if self.contains_product(product) {
            return Err(ValidationError::DuplicateProduct);
        }
        self.lines.push(DraftLine {
            product_id: product.id.clone(),
            name: product.label.clone(),
            quantity,
        });
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<DraftLine, ValidationError> {
        if index >= self.lines.len() {
            return Err(ValidationError::UnknownLine);
        }
        Ok(self.lines.remove(index))
    }

    /// Change a line quantity. Invalid input leaves the line untouched.
    pub fn set_quantity(&mut self, index: usize, quantity: &str) -> Result<(), ValidationError> {
        let quantity = positive_quantity(quantity)?;
        let line = self
            .lines
            .get_mut(index)
            .ok_or(ValidationError::UnknownLine)?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_create_dto(&self) -> Result<CreateOfferDto, ValidationError> {
        let client = match &self.client {
            Some(c) if !self.lines.is_empty() => c,
            _ => return Err(ValidationError::MissingClientOrLines),
        };
        Ok(CreateOfferDto {
            client_id: client.id.clone(),
            products: self.line_dtos()?,
        })
    }

    pub fn to_update_dto(&self, offer_id: &str) -> Result<UpdateOfferDto, ValidationError> {
        if self.lines.is_empty() {
            return Err(ValidationError::NoLines);
        }
        Ok(UpdateOfferDto {
            offer_id: offer_id.to_string(),
            products: self.line_dtos()?,
        })
    }

    fn line_dtos(&self) -> Result<Vec<OfferLineDto>, ValidationError> {
        if self.lines.iter().any(|l| l.quantity <= 0) {
            return Err(ValidationError::NonPositiveLine);
        }
        Ok(self
            .lines
            .iter()
            .map(|l| OfferLineDto {
                id: l.product_id.clone(),
                quantity: l.quantity,
            })
            .collect())
    }
}

fn positive_quantity(raw: &str) -> Result<i64, ValidationError> {
    match lenient::parse_integer(raw) {
        Some(q) if q > 0 => Ok(q),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::DocumentLine;

    fn bolt() -> PickOption {
        PickOption::new("8", "Tornillo")
    }

    fn nut() -> PickOption {
        PickOption::new("9", "Tuerca")
    }

    #[test]
    fn add_line_validates_quantity_and_duplicates() {
        let mut draft = OfferDraft::new();
        assert_eq!(draft.add_line(&bolt(), "0"), Err(ValidationError::InvalidQuantity));
        assert_eq!(draft.add_line(&bolt(), ""), Err(ValidationError::InvalidQuantity));
        assert_eq!(draft.add_line(&bolt(), "dos"), Err(ValidationError::InvalidQuantity));
        draft.add_line(&bolt(), "3").unwrap();
        assert_eq!(draft.add_line(&bolt(), "1"), Err(ValidationError::DuplicateProduct));
        draft.add_line(&nut(), " 5 ").unwrap();
        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[1].quantity, 5);
    }

    #[test]
    fn set_quantity_keeps_old_value_on_error() {
        let mut draft = OfferDraft::new();
        draft.add_line(&bolt(), "3").unwrap();
        assert_eq!(draft.set_quantity(0, "-1"), Err(ValidationError::InvalidQuantity));
        assert_eq!(draft.lines[0].quantity, 3);
        draft.set_quantity(0, "7").unwrap();
        assert_eq!(draft.lines[0].quantity, 7);
        assert_eq!(draft.set_quantity(4, "1"), Err(ValidationError::UnknownLine));
    }

    #[test]
    fn remove_line_by_index() {
        let mut draft = OfferDraft::new();
        draft.add_line(&bolt(), "1").unwrap();
        draft.add_line(&nut(), "1").unwrap();
        let removed = draft.remove_line(0).unwrap();
        assert_eq!(removed.name, "Tornillo");
        assert_eq!(draft.lines[0].name, "Tuerca");
        assert_eq!(draft.remove_line(3), Err(ValidationError::UnknownLine));
    }

    #[test]
    fn create_needs_client_and_lines() {
        let mut draft = OfferDraft::new();
        assert_eq!(draft.to_create_dto(), Err(ValidationError::MissingClientOrLines));
        draft.add_line(&bolt(), "2").unwrap();
        assert_eq!(draft.to_create_dto(), Err(ValidationError::MissingClientOrLines));
        draft.set_client(Some(PickOption::new("3", "ACME")));
        let dto = draft.to_create_dto().unwrap();
        assert_eq!(dto.client_id, "3");
        assert_eq!(dto.products, vec![OfferLineDto { id: "8".into(), quantity: 2 }]);
    }

    #[test]
    fn edit_resolves_missing_ids_by_name() {
        let offer = Offer {
            offer_id: "12".into(),
            employee_id: "1".into(),
            employee_name: "Luis".into(),
            client_id: "3".into(),
            client_name: "ACME".into(),
            date: "2024-05-02".into(),
            total_price: 10.0,
            products: vec![
                DocumentLine { id: String::new(), name: "Tuerca".into(), quantity: 2 },
                DocumentLine { id: "8".into(), name: "Tornillo".into(), quantity: 0 },
            ],
        };
        let mut draft = OfferDraft::from_offer(&offer, &[bolt(), nut()]);
        assert_eq!(draft.lines[0].product_id, "9");
        assert_eq!(draft.client.as_ref().map(|c| c.id.as_str()), Some("3"));

        assert_eq!(draft.to_update_dto("12"), Err(ValidationError::NonPositiveLine));
        draft.set_quantity(1, "4").unwrap();
        let dto = draft.to_update_dto("12").unwrap();
        assert_eq!(dto.offer_id, "12");
        assert_eq!(dto.products.len(), 2);

        draft.lines.clear();
        assert_eq!(draft.to_update_dto("12"), Err(ValidationError::NoLines));
    }
}
