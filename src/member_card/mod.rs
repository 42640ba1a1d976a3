pub mod configuration;
pub mod error;
pub mod manager;
pub mod observer;
mod request;
mod response;
pub mod session_store;
