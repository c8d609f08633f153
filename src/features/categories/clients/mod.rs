mod product_service_client;

pub use product_service_client::ProductServiceClient;
