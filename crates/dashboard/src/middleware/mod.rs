pub mod guard;
pub mod session;
pub mod upload;
pub mod validate;
