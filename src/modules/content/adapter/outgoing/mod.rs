pub mod console_prompt;
pub mod resource_gateway_http;
