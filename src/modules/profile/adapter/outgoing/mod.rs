pub mod profile_gateway_http;
