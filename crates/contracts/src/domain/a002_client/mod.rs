pub mod aggregate;

pub use aggregate::{upsert_client, Client, ClientForm, CreateClientDto, UpdateClientDto};
