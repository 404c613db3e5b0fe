pub mod auth_gateway_http;
pub mod token_store_file;
