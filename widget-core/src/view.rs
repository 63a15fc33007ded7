//! The display surface the widget writes into.
//!
//! The widget never creates fields; it only overwrites text, image sources
//! and style classes of the fields listed in [`Field`], and switches the
//! [`ViewState`] between the error region and the content card.

use std::collections::BTreeMap;

/// Named output fields of the weather card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CityName,
    CountryState,
    CurrentTime,
    Temperature,
    Condition,
    WeatherIcon,
    AqiScore,
    AqiStatus,
    Pm25,
    Pm10,
    Co,
    No2,
    O3,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::CityName => "city-name",
            Field::CountryState => "country-state",
            Field::CurrentTime => "current-time",
            Field::Temperature => "temperature",
            Field::Condition => "condition",
            Field::WeatherIcon => "weather-icon",
            Field::AqiScore => "aqi-score",
            Field::AqiStatus => "aqi-status",
            Field::Pm25 => "pm25",
            Field::Pm10 => "pm10",
            Field::Co => "co",
            Field::No2 => "no2",
            Field::O3 => "o3",
        }
    }

    pub const fn all() -> &'static [Field] {
        &[
            Field::CityName,
            Field::CountryState,
            Field::CurrentTime,
            Field::Temperature,
            Field::Condition,
            Field::WeatherIcon,
            Field::AqiScore,
            Field::AqiStatus,
            Field::Pm25,
            Field::Pm10,
            Field::Co,
            Field::No2,
            Field::O3,
        ]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which region is visible. Error and content can never be shown together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Neither region is shown (initial state, or while a lookup is in flight).
    #[default]
    Idle,
    Error(String),
    Content,
}

impl ViewState {
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, ViewState::Content)
    }
}

/// Capability handed to the widget for writing output.
pub trait View: Send {
    fn set_text(&mut self, field: Field, text: &str);

    fn set_image(&mut self, field: Field, src: &str);

    /// Replace the full class list of a field.
    fn set_classes(&mut self, field: Field, classes: &[&str]);

    fn set_state(&mut self, state: ViewState);

    fn state(&self) -> &ViewState;
}

/// A view that keeps everything in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    texts: BTreeMap<Field, String>,
    images: BTreeMap<Field, String>,
    classes: BTreeMap<Field, Vec<String>>,
    state: ViewState,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn image(&self, field: Field) -> Option<&str> {
        self.images.get(&field).map(String::as_str)
    }

    pub fn classes(&self, field: Field) -> &[String] {
        self.classes.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl View for MemoryView {
    fn set_text(&mut self, field: Field, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn set_image(&mut self, field: Field, src: &str) {
        self.images.insert(field, src.to_string());
    }

    fn set_classes(&mut self, field: Field, classes: &[&str]) {
        self.classes.insert(field, classes.iter().map(|c| c.to_string()).collect());
    }

    fn set_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn state(&self) -> &ViewState {
        &self.state
    }
}
