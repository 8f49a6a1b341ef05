//! # Concierge Weather Tools Extension
//!
//! Tools here are flagged as requiring confirmation: the host must obtain
//! human approval before running them.
//!
//! ## Tools
//!
//! - `get_weather_information`: Report the weather for a city

pub mod extension;
pub mod weather;

pub use extension::WeatherToolsExtension;
pub use weather::GetWeatherInformationTool;
