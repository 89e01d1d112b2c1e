pub mod agent_modal;
pub mod navbar;
pub mod signup;
