//! Air-quality index categories as reported by OpenWeather (1..=5).

/// Display name and style tag for one AQI level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiCategory {
    pub name: &'static str,
    pub style_tag: &'static str,
}

impl AqiCategory {
    /// Returned for any index outside the documented range.
    pub const NOT_AVAILABLE: AqiCategory = AqiCategory { name: "N/A", style_tag: "" };
}

const CATEGORIES: [AqiCategory; 5] = [
    AqiCategory { name: "Good", style_tag: "good" },
    AqiCategory { name: "Fair", style_tag: "fair" },
    AqiCategory { name: "Moderate", style_tag: "moderate" },
    AqiCategory { name: "Poor", style_tag: "poor" },
    AqiCategory { name: "Very Poor", style_tag: "very-poor" },
];

/// Look up the category for an AQI index. Never fails.
pub fn category(index: Option<i64>) -> AqiCategory {
    match index {
        Some(i @ 1..=5) => CATEGORIES[(i - 1) as usize],
        _ => AqiCategory::NOT_AVAILABLE,
    }
}
