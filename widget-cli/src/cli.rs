use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use widget_core::{
    AirQualityMode, Config, LookupOutcome, MemoryView, Widget, WidgetOptions,
    provider::provider_from_config,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather and air quality for a city")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, default city and air-quality mode.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name; the configured default city when absent.
        city: Option<String>,

        /// Fetch real air-quality readings for this lookup.
        #[arg(long)]
        live_aqi: bool,
    },

    /// Load the default city, then prompt for more cities until an empty line.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, live_aqi } => {
                let mut config = Config::load()?;
                if live_aqi {
                    config.air_quality = AirQualityMode::Live;
                }
                let widget = build_widget(&config)?;

                let outcome = match city {
                    Some(city) => widget.search(&city).await,
                    None => widget.on_load().await,
                };
                let view = widget.view();
                let view = view.lock().await;
                ensure_shown(outcome, &view)?;

                output::print_view(&view);
                Ok(())
            }
            Command::Interactive => interactive().await,
        }
    }
}

/// Turn a lookup that showed nothing but an error into a non-zero exit.
fn ensure_shown(outcome: LookupOutcome, view: &MemoryView) -> anyhow::Result<()> {
    match outcome {
        LookupOutcome::Ignored => anyhow::bail!("City name must not be empty."),
        LookupOutcome::Failed(_) => {
            anyhow::bail!("{}", view.error_message().unwrap_or("Weather lookup failed."))
        }
        LookupOutcome::Rendered | LookupOutcome::Superseded => Ok(()),
    }
}

fn build_widget(config: &Config) -> anyhow::Result<Widget<MemoryView>> {
    let provider = provider_from_config(config)?;
    Ok(Widget::new(Arc::new(provider), MemoryView::new(), WidgetOptions::from(config)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    let modes = vec!["placeholder", "live"];
    let start = match config.air_quality {
        AirQualityMode::Placeholder => 0,
        AirQualityMode::Live => 1,
    };
    let mode = Select::new("Air quality readings:", modes)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read air quality mode")?;

    config.api_key = Some(api_key.trim().to_string());
    config.default_city = default_city.trim().to_string();
    config.air_quality =
        if mode == "live" { AirQualityMode::Live } else { AirQualityMode::Placeholder };

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let widget = build_widget(&config)?;

    widget.on_load().await;
    output::print_view(&*widget.view().lock().await);

    loop {
        let input = Text::new("City (empty to quit):").prompt().context("Failed to read city")?;
        if widget.search(&input).await == LookupOutcome::Ignored {
            break;
        }
        output::print_view(&*widget.view().lock().await);
    }

    Ok(())
}
