pub mod client;
pub mod error;
pub mod fetcher;

pub use client::ApiClient;
pub use error::FetchError;
pub use fetcher::Fetcher;
