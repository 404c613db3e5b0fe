pub mod confirm_prompt;
pub mod resource_gateway;

pub use confirm_prompt::ConfirmPrompt;
pub use resource_gateway::ResourceGateway;
