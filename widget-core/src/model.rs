use serde::{Deserialize, Serialize};

/// A single lookup: a trimmed, non-empty city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let city = raw.trim();
        if city.is_empty() {
            return None;
        }
        Some(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Body of `GET /data/2.5/weather`. Only the fields the widget reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub name: String,
    pub sys: Sys,
    pub dt: i64,
    /// Shift in seconds from UTC for the city.
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub coord: Option<Coord>,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

impl WeatherPayload {
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

/// Body of `GET /data/2.5/air_pollution`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityPayload {
    pub list: Vec<AirQualityEntry>,
}

impl AirQualityPayload {
    /// Index 0 with every component zeroed; rendered when no real reading is available.
    pub fn placeholder() -> Self {
        Self { list: vec![AirQualityEntry::placeholder()] }
    }

    /// First entry, or the placeholder entry when the list is empty.
    pub fn current(&self) -> AirQualityEntry {
        self.list.first().cloned().unwrap_or_else(AirQualityEntry::placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityEntry {
    pub main: AqiMain,
    pub components: Components,
}

impl AirQualityEntry {
    fn placeholder() -> Self {
        Self { main: AqiMain { aqi: 0 }, components: Components::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiMain {
    pub aqi: i64,
}

/// Pollutant concentrations in μg/m3.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
}
