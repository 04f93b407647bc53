pub mod authentication;
pub mod inject_user_agent;
