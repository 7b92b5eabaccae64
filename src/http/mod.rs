mod client;
mod request;


pub use client::build_client;
pub use request::{RequestSpec, execute};
