mod payload_builder;
mod request_factory;

pub use payload_builder::{InventoryPayload, PayloadBuilder};
pub use request_factory::{CollectorRequest, CollectorRequestFactory};
