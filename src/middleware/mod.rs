pub mod bearer_auth;
pub mod token;
pub mod unauthorized_rewrite;
