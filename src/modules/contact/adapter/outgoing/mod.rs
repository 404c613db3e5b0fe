pub mod contact_gateway_http;
