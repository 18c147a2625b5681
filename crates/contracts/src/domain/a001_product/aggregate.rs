use serde::{Deserialize, Serialize};

use crate::domain::common::PickOption;
use crate::shared::lenient::{self, f64_from_any, i64_from_any, string_from_any};
use crate::shared::validation::ValidationError;

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product (`GET /product/`). The backend sends every column as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productId", deserialize_with = "string_from_any")]
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "i64_from_any")]
    pub stock: i64,
    #[serde(rename = "maxStock", deserialize_with = "i64_from_any")]
    pub max_stock: i64,
    #[serde(rename = "minStock", deserialize_with = "i64_from_any")]
    pub min_stock: i64,
    #[serde(rename = "purchasePrice", deserialize_with = "f64_from_any")]
    pub purchase_price: f64,
    #[serde(rename = "sellPrice", deserialize_with = "f64_from_any")]
    pub sell_price: f64,
}

impl Product {
    pub fn matches_name(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.name.to_lowercase().contains(&needle)
    }

    /// Below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    pub fn to_pick_option(&self) -> PickOption {
        PickOption::new(self.product_id.clone(), self.name.clone())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `POST /product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductDto {
    pub name: String,
    pub description: String,
    #[serde(with = "lenient::as_string")]
    pub stock: i64,
    #[serde(rename = "maxStock", with = "lenient::as_string")]
    pub max_stock: i64,
    #[serde(rename = "minStock", with = "lenient::as_string")]
    pub min_stock: i64,
    #[serde(rename = "purchasePrice", with = "lenient::as_string")]
    pub purchase_price: f64,
    #[serde(rename = "sellPrice", with = "lenient::as_string")]
    pub sell_price: f64,
}

/// Body of `PUT /product`. Name and description are carried over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProductDto {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "lenient::as_string")]
    pub stock: i64,
    #[serde(rename = "maxStock", with = "lenient::as_string")]
    pub max_stock: i64,
    #[serde(rename = "minStock", with = "lenient::as_string")]
    pub min_stock: i64,
    #[serde(rename = "purchasePrice", with = "lenient::as_string")]
    pub purchase_price: f64,
    #[serde(rename = "sellPrice", with = "lenient::as_string")]
    pub sell_price: f64,
}

// ============================================================================
// Form
// ============================================================================

/// Raw text of the product modal inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub stock: String,
    pub max_stock: String,
    pub min_stock: String,
    pub purchase_price: String,
    pub sell_price: String,
}

struct Quantities {
    stock: i64,
    max_stock: i64,
    min_stock: i64,
    purchase_price: f64,
    sell_price: f64,
}

impl ProductForm {
    /// Prefill the editable fields from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            stock: product.stock.to_string(),
            max_stock: product.max_stock.to_string(),
            min_stock: product.min_stock.to_string(),
            purchase_price: product.purchase_price.to_string(),
            sell_price: product.sell_price.to_string(),
        }
    }

    pub fn validate_new(&self) -> Result<CreateProductDto, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Nombre"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::Required("Descripción"));
        }
        let q = self.quantities()?;
        Ok(CreateProductDto {
            name: name.to_string(),
            description: description.to_string(),
            stock: q.stock,
            max_stock: q.max_stock,
            min_stock: q.min_stock,
            purchase_price: q.purchase_price,
            sell_price: q.sell_price,
        })
    }

    pub fn validate_update(&self, current: &Product) -> Result<UpdateProductDto, ValidationError> {
        let q = self.quantities()?;
        Ok(UpdateProductDto {
            product_id: current.product_id.clone(),
            name: current.name.clone(),
            description: current.description.clone(),
            stock: q.stock,
            max_stock: q.max_stock,
            min_stock: q.min_stock,
            purchase_price: q.purchase_price,
            sell_price: q.sell_price,
        })
    }

    fn quantities(&self) -> Result<Quantities, ValidationError> {
        let stock = integer_field(&self.stock, "Stock")?;
        let max_stock = integer_field(&self.max_stock, "Stock máximo")?;
        let min_stock = integer_field(&self.min_stock, "Stock mínimo")?;
        let purchase_price = price_field(&self.purchase_price, "Precio de compra")?;
        let sell_price = price_field(&self.sell_price, "Precio de venta")?;

        if min_stock > max_stock {
            return Err(ValidationError::MinAboveMax);
        }
        if stock < min_stock || stock > max_stock {
            return Err(ValidationError::StockOutOfRange);
        }
        Ok(Quantities {
            stock,
            max_stock,
            min_stock,
            purchase_price,
            sell_price,
        })
    }
}

fn integer_field(raw: &str, field: &'static str) -> Result<i64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    let value = lenient::parse_integer(raw).ok_or(ValidationError::NotAnInteger(field))?;
    if value < 0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}

fn price_field(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    let value = lenient::parse_decimal(raw).ok_or(ValidationError::NotANumber(field))?;
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Tornillo M4".into(),
            description: "Caja de 100".into(),
            stock: "20".into(),
            max_stock: "50".into(),
            min_stock: "5".into(),
            purchase_price: "1,20".into(),
            sell_price: "2.5".into(),
        }
    }

    fn product() -> Product {
        serde_json::from_str(
            r#"{"productId":"8","name":"Tuerca","description":"M4","stock":"10",
                "maxStock":"40","minStock":"2","purchasePrice":"0.3","sellPrice":"0.9"}"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_string_columns() {
        let p = product();
        assert_eq!(p.product_id, "8");
        assert_eq!(p.max_stock, 40);
        assert_eq!(p.sell_price, 0.9);
        assert!(!p.is_low_stock());
        assert!(p.matches_name("TUER"));
        assert!(!p.matches_name("tornillo"));
    }

    #[test]
    fn create_body_sends_strings() {
        let dto = form().validate_new().unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["stock"], "20");
        assert_eq!(json["purchasePrice"], "1.2");
        assert_eq!(json["sellPrice"], "2.5");
        assert_eq!(json["name"], "Tornillo M4");
    }

    #[test]
    fn create_requires_name_and_description() {
        let mut f = form();
        f.name = "  ".into();
        assert_eq!(f.validate_new(), Err(ValidationError::Required("Nombre")));
        let mut f = form();
        f.description.clear();
        assert_eq!(f.validate_new(), Err(ValidationError::Required("Descripción")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let mut f = form();
        f.stock = "2.5".into();
        assert_eq!(f.validate_new(), Err(ValidationError::NotAnInteger("Stock")));

        let mut f = form();
        f.sell_price = "-1".into();
        assert_eq!(f.validate_new(), Err(ValidationError::Negative("Precio de venta")));

        let mut f = form();
        f.purchase_price = "gratis".into();
        assert_eq!(f.validate_new(), Err(ValidationError::NotANumber("Precio de compra")));
    }

    #[test]
    fn enforces_stock_bounds() {
        let mut f = form();
        f.min_stock = "60".into();
        assert_eq!(f.validate_new(), Err(ValidationError::MinAboveMax));

        let mut f = form();
        f.stock = "51".into();
        assert_eq!(f.validate_new(), Err(ValidationError::StockOutOfRange));
    }

    #[test]
    fn update_keeps_name_and_description() {
        let current = product();
        let mut f = ProductForm::from_product(&current);
        f.name = "Otro".into();
        f.stock = "12".into();
        let dto = f.validate_update(&current).unwrap();
        assert_eq!(dto.product_id, "8");
        assert_eq!(dto.name, "Tuerca");
        assert_eq!(dto.description, "M4");
        assert_eq!(dto.stock, 12);
    }
}
