use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Team name used to build the section heading matchers
    #[serde(default = "default_team_name")]
    pub team_name: String,

    #[serde(default = "default_roster_url")]
    pub roster_url: String,

    #[serde(default = "default_matches_url")]
    pub matches_url: String,

    #[serde(default = "default_events_url")]
    pub events_url: String,

    /// Upper bound on how long to wait for client-side rendering, in seconds
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,

    /// CSS selector whose appearance signals the page has rendered
    #[serde(default = "default_render_marker")]
    pub render_marker: String,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_team_name() -> String {
    "FURIA".to_string()
}

fn default_roster_url() -> String {
    "https://www.hltv.org/team/8297/furia#tab-rosterBox".to_string()
}

fn default_matches_url() -> String {
    "https://www.hltv.org/team/8297/furia#tab-matchesBox".to_string()
}

fn default_events_url() -> String {
    "https://www.hltv.org/team/8297/furia#tab-eventsBox".to_string()
}

fn default_settle_delay_secs() -> u64 {
    5
}

fn default_render_marker() -> String {
    ".contentCol".to_string()
}

fn default_output_path() -> String {
    "data/team_data.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            team_name: default_team_name(),
            roster_url: default_roster_url(),
            matches_url: default_matches_url(),
            events_url: default_events_url(),
            settle_delay_secs: default_settle_delay_secs(),
            render_marker: default_render_marker(),
            output_path: default_output_path(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

impl ScraperConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScraperConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::info!("Config file {} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn recent_heading(&self) -> String {
        format!("Recent results for {}", self.team_name)
    }

    pub fn upcoming_heading(&self) -> String {
        format!("Upcoming matches for {}", self.team_name)
    }
}
