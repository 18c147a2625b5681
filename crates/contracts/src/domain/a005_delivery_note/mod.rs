pub mod aggregate;

pub use aggregate::{ConvertOrderRequest, DeliveryNote};
