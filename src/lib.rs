//! Five-card poker hand parsing and classification.

pub mod cards;
pub mod cli;
pub mod config;

pub use cards::{compare_hands, Card, CardError, Hand, HandError, Kind, Rank, Rules, Suit};
pub use config::{Config, ConfigError, OutputFormat};
