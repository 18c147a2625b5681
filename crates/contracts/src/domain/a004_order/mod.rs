pub mod aggregate;

pub use aggregate::{ConvertOfferRequest, Order};
