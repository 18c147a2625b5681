pub mod aggregate;

pub use aggregate::{ConvertDeliveryNoteRequest, Invoice};
