mod client;
mod summary;

pub use client::{create, Client, ClientImpl, Error, MockClient, Result};
pub use summary::{render, request_summary};
