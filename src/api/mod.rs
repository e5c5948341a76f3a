//! Content API client module

mod client;
mod traits;
mod types;

pub use client::ApiClient;
pub use traits::ContentApi;
pub use types::*;

#[cfg(test)]
pub use traits::MockContentApi;
