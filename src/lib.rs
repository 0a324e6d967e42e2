pub mod cli;
pub mod configuration;
pub mod custom_int;
pub mod error;
pub mod helpers;
pub mod printer;
pub mod provider;
pub mod types;
