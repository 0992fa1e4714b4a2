pub mod client;
pub mod error;
pub mod models;

pub use client::{WeatherClient, WeatherConfig};
pub use error::{Result, WeatherError};
