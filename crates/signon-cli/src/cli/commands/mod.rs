pub mod config;
pub mod signin;
