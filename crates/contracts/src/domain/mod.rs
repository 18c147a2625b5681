//! Sales-pipeline aggregates as exposed by the SellControl REST API

pub mod a001_product;
pub mod a002_client;
pub mod a003_offer;
pub mod a004_order;
pub mod a005_delivery_note;
pub mod a006_invoice;
pub mod common;
