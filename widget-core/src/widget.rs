//! Ties the provider, renderer and error presenter together.
//!
//! Each lookup takes a ticket from a shared counter. If a newer lookup has
//! started by the time a response arrives, the response is dropped so a slow
//! request can never overwrite the view of a later one.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    FetchError, WeatherQuery,
    config::{AirQualityMode, Config},
    error::FailureKind,
    model::{AirQualityPayload, WeatherPayload},
    presenter, render,
    provider::WeatherProvider,
    view::{View, ViewState},
};

/// What a single lookup ended up doing to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Rendered,
    Failed(FailureKind),
    /// A newer lookup started first; the view was left alone.
    Superseded,
    /// Blank input; nothing was fetched.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub default_city: String,
    pub air_quality: AirQualityMode,
}

impl From<&Config> for WidgetOptions {
    fn from(cfg: &Config) -> Self {
        Self { default_city: cfg.default_city.clone(), air_quality: cfg.air_quality }
    }
}

#[derive(Debug)]
pub struct Widget<V> {
    provider: Arc<dyn WeatherProvider>,
    view: Arc<Mutex<V>>,
    options: WidgetOptions,
    latest: AtomicU64,
}

impl<V: View> Widget<V> {
    pub fn new(provider: Arc<dyn WeatherProvider>, view: V, options: WidgetOptions) -> Self {
        Self { provider, view: Arc::new(Mutex::new(view)), options, latest: AtomicU64::new(0) }
    }

    /// Shared handle to the view, for reading what was rendered.
    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    /// Initial load: one lookup for the configured default city.
    pub async fn on_load(&self) -> LookupOutcome {
        info!(city = %self.options.default_city, "loading default city");
        self.search(&self.options.default_city).await
    }

    /// Search for free-text input. Blank input is ignored.
    pub async fn search(&self, input: &str) -> LookupOutcome {
        match WeatherQuery::new(input) {
            Some(query) => self.lookup(&query).await,
            None => {
                debug!("ignoring blank search input");
                LookupOutcome::Ignored
            }
        }
    }

    /// Fetch weather for `query` and update the view.
    pub async fn lookup(&self, query: &WeatherQuery) -> LookupOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut view = self.view.lock().await;
            presenter::clear_error(&mut *view);
            view.set_state(ViewState::Idle);
        }

        let result = self.fetch(query).await;

        let mut view = self.view.lock().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            if let Err(err) = &result {
                warn!(city = query.city(), ticket, error = %err, "superseded weather lookup failed");
            }
            debug!(city = query.city(), ticket, "discarding superseded response");
            return LookupOutcome::Superseded;
        }

        match result {
            Ok((weather, air_quality)) => {
                let country = weather.sys.country.as_str();
                render::render(
                    &mut *view,
                    &weather.name,
                    Some(country),
                    country,
                    &weather,
                    &air_quality,
                );
                LookupOutcome::Rendered
            }
            Err(err) => {
                error!(city = query.city(), error = %err, "weather lookup failed");
                presenter::show_error(&mut *view, &err.user_message());
                LookupOutcome::Failed(err.kind())
            }
        }
    }

    async fn fetch(
        &self,
        query: &WeatherQuery,
    ) -> Result<(WeatherPayload, AirQualityPayload), FetchError> {
        let weather = self.provider.current_weather(query).await?;
        let air_quality = self.air_quality_for(&weather).await;
        Ok((weather, air_quality))
    }

    async fn air_quality_for(&self, weather: &WeatherPayload) -> AirQualityPayload {
        if self.options.air_quality == AirQualityMode::Placeholder {
            return AirQualityPayload::placeholder();
        }

        let Some(coord) = weather.coord else {
            warn!(city = %weather.name, "no coordinates in weather response; using placeholder air quality");
            return AirQualityPayload::placeholder();
        };

        match self.provider.air_quality(coord).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(city = %weather.name, error = %err, "air quality lookup failed; using placeholder");
                AirQualityPayload::placeholder()
            }
        }
    }
}
