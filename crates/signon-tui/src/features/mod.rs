pub mod code;
pub mod login;
