use std::fmt::Write;

use widget_core::{Field, MemoryView, View, ViewState};

pub fn print_view(view: &MemoryView) {
    match view.state() {
        ViewState::Error(msg) => eprintln!("Error: {msg}"),
        ViewState::Content => print!("{}", format_card(view)),
        ViewState::Idle => {}
    }
}

/// Plain-text rendering of the weather card.
pub fn format_card(view: &MemoryView) -> String {
    let text = |field| view.text(field).unwrap_or("-");
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", text(Field::CityName), text(Field::CountryState));
    let _ = writeln!(out, "{}", text(Field::CurrentTime));
    let _ = writeln!(out, "{}  {}", text(Field::Temperature), text(Field::Condition));
    if let Some(icon) = view.image(Field::WeatherIcon) {
        let _ = writeln!(out, "Icon: {icon}");
    }
    let _ = writeln!(out, "AQI: {} ({})", text(Field::AqiScore), text(Field::AqiStatus));
    let _ = writeln!(
        out,
        "  PM2.5 {}  PM10 {}  CO {}  NO2 {}  O3 {}",
        text(Field::Pm25),
        text(Field::Pm10),
        text(Field::Co),
        text(Field::No2),
        text(Field::O3),
    );

    out
}
