mod client;
mod collection;
mod error_response;

pub use client::{GraphClient, GraphError};

#[cfg(test)]
pub(crate) use client::test_support;
