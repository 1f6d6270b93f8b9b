pub mod admin;
pub mod client;
pub mod document;
pub mod error;
pub mod executor;
pub mod request;
pub mod response;
