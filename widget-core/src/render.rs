//! Maps fetched payloads onto the weather card.
//!
//! Every write is an overwrite, so rendering the same payloads twice leaves
//! the view exactly as one render would.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::{
    aqi,
    model::{AirQualityPayload, WeatherPayload},
    view::{Field, View, ViewState},
};

pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
pub const STATUS_BASE_CLASS: &str = "status-indicator";

pub fn render<V: View + ?Sized>(
    view: &mut V,
    city_name: &str,
    state: Option<&str>,
    country: &str,
    weather: &WeatherPayload,
    air_quality: &AirQualityPayload,
) {
    view.set_text(Field::CityName, city_name);
    view.set_text(Field::CountryState, &location_line(state, country));
    view.set_text(
        Field::CurrentTime,
        &format!("Local Time: {}", local_time(weather.dt, weather.timezone)),
    );
    view.set_text(Field::Temperature, &format_temperature(weather.main.temp));

    let (description, icon) = weather
        .primary_condition()
        .map(|c| (c.description.as_str(), c.icon.as_str()))
        .unwrap_or_default();
    view.set_text(Field::Condition, &capitalize_first(description));
    view.set_image(Field::WeatherIcon, &icon_url(icon));

    let entry = air_quality.current();
    let category = aqi::category(Some(entry.main.aqi));

    view.set_text(Field::AqiScore, &entry.main.aqi.to_string());
    view.set_text(Field::AqiStatus, category.name);
    if category.style_tag.is_empty() {
        view.set_classes(Field::AqiStatus, &[STATUS_BASE_CLASS]);
    } else {
        view.set_classes(Field::AqiStatus, &[STATUS_BASE_CLASS, category.style_tag]);
    }

    let c = entry.components;
    for (field, value) in [
        (Field::Pm25, c.pm2_5),
        (Field::Pm10, c.pm10),
        (Field::Co, c.co),
        (Field::No2, c.no2),
        (Field::O3, c.o3),
    ] {
        view.set_text(field, &format!("{value:.2}"));
    }

    view.set_state(ViewState::Content);
}

/// `"{country}, {state}"`, or just the country when there is no distinct state.
pub fn location_line(state: Option<&str>, country: &str) -> String {
    match state {
        Some(s) if !s.is_empty() && s != country => format!("{country}, {s}"),
        _ => country.to_string(),
    }
}

/// 12-hour `hh:mm AM` for a Unix timestamp, shifted by `offset_secs` east of UTC.
pub fn local_time(dt: i64, offset_secs: Option<i32>) -> String {
    let offset = offset_secs
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    let utc = DateTime::<Utc>::from_timestamp(dt, 0).unwrap_or_default();
    utc.with_timezone(&offset).format("%I:%M %p").to_string()
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@4x.png")
}
