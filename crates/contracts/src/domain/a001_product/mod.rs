pub mod aggregate;

pub use aggregate::{CreateProductDto, Product, ProductForm, UpdateProductDto};
