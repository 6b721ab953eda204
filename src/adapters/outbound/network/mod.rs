/// Network adapters for the inventory collector
mod http_collector_client;

pub use http_collector_client::HttpCollectorClient;
