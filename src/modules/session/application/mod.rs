pub mod ports;
pub mod session_state;
pub mod use_cases;
