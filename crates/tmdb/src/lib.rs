mod client;
mod error;
mod genres;
mod movies;
mod retry;
pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use movies::{MovieEndpoint, MovieQuery};
pub use retry::RetryPolicy;

pub type Result<T> = std::result::Result<T, TmdbError>;
