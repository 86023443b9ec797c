use super::constants::{
    COLLAGE_DISTINCT_PHOTOS, COLLAGE_MAX_PHOTOS, MUSIC_VOLUME, PARTICLE_COUNT, PARTICLE_MAX_COUNT,
};

/// Runtime options read from the page query string, e.g. `?log=debug&muted`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_level: log::Level,
    pub music_volume: f64,
    pub muted: bool,
    pub photos: usize,
    pub particles: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            music_volume: MUSIC_VOLUME,
            muted: false,
            photos: COLLAGE_DISTINCT_PHOTOS,
            particles: PARTICLE_COUNT,
        }
    }
}

fn parse_level(v: &str) -> Option<log::Level> {
    match v.to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

impl AppConfig {
    /// Parse `location.search`. Bad values keep their defaults and are
    /// reported in the returned warnings; unknown keys are ignored.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut cfg = Self::default();
        let mut warnings = Vec::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => match parse_level(value) {
                    Some(l) => cfg.log_level = l,
                    None => warnings.push(format!("unknown log level '{}'", value)),
                },
                "volume" => match value.parse::<f64>() {
                    Ok(v) if v.is_finite() => cfg.music_volume = v.clamp(0.0, 1.0),
                    _ => warnings.push(format!("invalid volume '{}'", value)),
                },
                "muted" => cfg.muted = !matches!(value, "0" | "false"),
                "photos" => match value.parse::<usize>() {
                    Ok(n) if (1..=COLLAGE_MAX_PHOTOS).contains(&n) => cfg.photos = n,
                    _ => warnings.push(format!("invalid photo count '{}'", value)),
                },
                "particles" => match value.parse::<usize>() {
                    Ok(n) if n <= PARTICLE_MAX_COUNT => cfg.particles = n,
                    _ => warnings.push(format!("invalid particle count '{}'", value)),
                },
                _ => {}
            }
        }
        (cfg, warnings)
    }
}
