use anyhow::{bail, Context, Result};

use crate::layout::spacing::MAX_FIXED_SPACING;
use crate::layout::{LayoutOptions, StartPreferences};
use crate::models::zone::LayoutMode;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Room every player spawns in; preferred layout seed when present in a zone.
    pub canonical_spawn_room_id: Option<i64>,
    /// Other conventional entry rooms, tried in order after the spawn room.
    pub conventional_start_room_ids: Vec<i64>,
    pub layout_mode: LayoutMode,
    pub fixed_spacing: i32,
    pub max_rooms_per_layout: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            canonical_spawn_room_id: optional_env("CANONICAL_SPAWN_ROOM_ID")
                .map(|v| {
                    v.trim()
                        .parse::<i64>()
                        .context("CANONICAL_SPAWN_ROOM_ID must be an integer room id")
                })
                .transpose()?,
            conventional_start_room_ids: parse_id_list(
                &optional_env("CONVENTIONAL_START_ROOM_IDS").unwrap_or_default(),
            )
            .context("CONVENTIONAL_START_ROOM_IDS must be a comma-separated list of room ids")?,
            layout_mode: parse_layout_mode(
                &std::env::var("LAYOUT_MODE").unwrap_or_else(|_| "dynamic".to_string()),
            )?,
            fixed_spacing: std::env::var("FIXED_SPACING")
                .unwrap_or_else(|_| "2".to_string())
                .parse::<i32>()
                .context("FIXED_SPACING must be an integer")?,
            max_rooms_per_layout: std::env::var("MAX_ROOMS_PER_LAYOUT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<usize>()
                .context("MAX_ROOMS_PER_LAYOUT must be a non-negative integer")?,
        };

        validate_fixed_spacing(config.fixed_spacing)?;
        Ok(config)
    }

    /// Seed preferences shared by every layout request.
    pub fn start_preferences(&self) -> StartPreferences {
        StartPreferences {
            canonical_spawn_id: self.canonical_spawn_room_id,
            conventional_ids: self.conventional_start_room_ids.clone(),
        }
    }

    /// Layout options for `mode`, with the configured start preferences.
    pub fn layout_options(&self, mode: LayoutMode, spacing: Option<i32>) -> LayoutOptions {
        let options = match mode {
            LayoutMode::Dynamic => LayoutOptions::dynamic(),
            LayoutMode::Fixed => LayoutOptions::fixed(spacing.unwrap_or(self.fixed_spacing)),
        };
        options.with_start(self.start_preferences())
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_id_list(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().with_context(|| format!("invalid room id '{s}'")))
        .collect()
}

fn validate_fixed_spacing(spacing: i32) -> Result<()> {
    if !(1..=MAX_FIXED_SPACING).contains(&spacing) {
        bail!("FIXED_SPACING must be between 1 and {MAX_FIXED_SPACING}, got {spacing}");
    }
    Ok(())
}

fn parse_layout_mode(raw: &str) -> Result<LayoutMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dynamic" => Ok(LayoutMode::Dynamic),
        "fixed" => Ok(LayoutMode::Fixed),
        other => bail!("LAYOUT_MODE must be 'dynamic' or 'fixed', got '{other}'"),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        canonical_spawn_room_id: None,
        conventional_start_room_ids: vec![],
        layout_mode: LayoutMode::Dynamic,
        fixed_spacing: 2,
        max_rooms_per_layout: 100,
    }
}
