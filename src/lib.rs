//! FairPlay listening insights service
//!
//! Computes listening-bias statistics over a user's play history and ranks
//! track recommendations that favor novel artists and genre affinity. The
//! analysis core is a pair of pure functions over normalized track records;
//! records come either from the caller or live from the Spotify Web API
//! through an explicitly connected session.

pub mod analysis;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;

pub use analysis::{analyze, recommend, PopularityTier};
pub use config::AppConfig;
pub use error::{AppError, Result};
