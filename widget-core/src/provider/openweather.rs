use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    FetchError, WeatherQuery,
    model::{AirQualityPayload, Coord, WeatherPayload},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = check_status(status, res.text().await.map_err(FetchError::from))?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherPayload, FetchError> {
        let payload: WeatherPayload = self
            .get_json("/data/2.5/weather", &[("q", query.city()), ("units", "metric")])
            .await?;

        if payload.weather.is_empty() {
            return Err(FetchError::Incomplete("weather[0]"));
        }

        Ok(payload)
    }

    async fn air_quality(&self, coord: Coord) -> Result<AirQualityPayload, FetchError> {
        let lat = coord.lat.to_string();
        let lon = coord.lon.to_string();

        let payload: AirQualityPayload = self
            .get_json("/data/2.5/air_pollution", &[("lat", lat.as_str()), ("lon", lon.as_str())])
            .await?;

        if payload.list.is_empty() {
            return Err(FetchError::Incomplete("list[0]"));
        }

        Ok(payload)
    }
}

/// A non-success status wins over whatever happened while reading the body.
fn check_status(
    status: StatusCode,
    body: Result<String, FetchError>,
) -> Result<String, FetchError> {
    if status.is_success() {
        return body;
    }

    match &body {
        Ok(text) => warn!(
            status = status.as_u16(),
            body = %truncate_body(text),
            "OpenWeather request failed"
        ),
        Err(err) => warn!(
            status = status.as_u16(),
            error = %err,
            "OpenWeather request failed; body unreadable"
        ),
    }
    Err(FetchError::Status(status.as_u16()))
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let p = OpenWeatherProvider::new("KEY".into(), "https://example.test/".into());
        assert_eq!(p.base_url(), "https://example.test");
    }

    #[test]
    fn status_wins_over_unreadable_body() {
        let body = Err(FetchError::Incomplete("body"));
        let err = check_status(StatusCode::UNAUTHORIZED, body).unwrap_err();

        assert!(matches!(err, FetchError::Status(401)));
    }

    #[test]
    fn success_passes_body_through() {
        let body = check_status(StatusCode::OK, Ok("{}".to_string())).unwrap();
        assert_eq!(body, "{}");

        let err = check_status(StatusCode::OK, Err(FetchError::Incomplete("body"))).unwrap_err();
        assert!(matches!(err, FetchError::Incomplete("body")));
    }

    #[tokio::test]
    async fn unreachable_host_keeps_key_out_of_error() {
        let p = OpenWeatherProvider::new("SECRET_KEY_123".into(), "http://127.0.0.1:1".into());
        let query = WeatherQuery::new("London").unwrap();

        let err = p.current_weather(&query).await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().contains("SECRET_KEY_123"));
        assert!(!format!("{err:?}").contains("SECRET_KEY_123"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
