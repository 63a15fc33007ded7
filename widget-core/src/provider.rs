use crate::{
    Config, FetchError, WeatherQuery,
    model::{AirQualityPayload, Coord, WeatherPayload},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// One attempt at the current weather for `query`.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherPayload, FetchError>;

    /// One attempt at the current air-quality reading at `coord`.
    async fn air_quality(&self, coord: Coord) -> Result<AirQualityPayload, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.require_api_key()?;
    Ok(OpenWeatherProvider::new(api_key.to_owned(), config.base_url.clone()))
}
