//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and its payload models
//! - The view contract, renderer and error presenter
//! - [`Widget`], which runs a lookup from input to rendered view
//!
//! It is used by `widget-cli`, but any other front end can drive it by
//! implementing [`View`].

pub mod aqi;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod render;
pub mod view;
pub mod widget;

pub use aqi::AqiCategory;
pub use config::{AirQualityMode, Config};
pub use error::{FailureKind, FetchError};
pub use model::{AirQualityPayload, WeatherPayload, WeatherQuery};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use view::{Field, MemoryView, View, ViewState};
pub use widget::{LookupOutcome, Widget, WidgetOptions};
