#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::LeadCategory;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Everything the lead finder reads at runtime, resolved once at startup.
///
/// Sections mirror the TOML layout. Only geography, search keywords and
/// regions feed display text; the rest is carried for the scraper and
/// alerting that do not exist yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    pub geography: GeographyConfig,
    pub search: SearchConfig,
    pub scoring: ScoringTable,
    pub regions: RegionConfig,
    pub storage: StorageConfig,
    pub scraping: ScrapingConfig,
    pub server: ServerConfig,
    pub notifications: NotificationConfig,
    pub deduplication: DeduplicationConfig,
    /// Date stamped into the export filename.
    #[serde(skip, default = "today")]
    pub run_date: NaiveDate,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeographyConfig {
    pub center_zip: String,
    /// (latitude, longitude)
    pub center_coords: (f64, f64),
    pub radius_miles: u32,
}

impl Default for GeographyConfig {
    fn default() -> Self {
        Self {
            center_zip: "75686".to_string(),
            center_coords: (32.97, -94.95),
            radius_miles: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub craigslist_keywords: Vec<String>,
    pub maps_search_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            craigslist_keywords: strings(&[
                "need handyman",
                "looking for handyman",
                "repair needed",
                "home repair",
                "fix broken",
                "leaky faucet",
                "roof repair",
                "drywall repair",
                "painting needed",
                "deck repair",
                "fence repair",
                "gutter repair",
                "door repair",
                "window repair",
                "appliance repair",
                "plumbing repair",
                "electrical repair",
                "tile work",
                "cabinet repair",
                "ASAP repair",
                "emergency repair",
                "handyman wanted",
                "reliable handyman",
            ]),
            maps_search_terms: strings(&[
                "property management companies",
                "real estate offices",
                "apartment complex management",
                "mobile home park",
                "RV park",
                "vacation rental host",
                "bed and breakfast",
                "home inspection companies",
                "property restoration",
                "water damage restoration",
                "fire restoration",
            ]),
        }
    }
}

/// Qualification rule for one category. Declared only; nothing scores
/// leads against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRule {
    pub description: String,
    pub keywords_score: u32,
    pub has_phone: bool,
    pub has_email_or_website: bool,
    pub distance_max_miles: u32,
    pub posting_age_days: u32,
    pub score_threshold: u32,
}

/// A `[scoring.<CATEGORY>]` table as written; missing keys keep the
/// category's default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialScoringRule {
    pub description: Option<String>,
    pub keywords_score: Option<u32>,
    pub has_phone: Option<bool>,
    pub has_email_or_website: Option<bool>,
    pub distance_max_miles: Option<u32>,
    pub posting_age_days: Option<u32>,
    pub score_threshold: Option<u32>,
}

impl ScoringRule {
    pub fn merged(self, partial: PartialScoringRule) -> Self {
        Self {
            description: partial.description.unwrap_or(self.description),
            keywords_score: partial.keywords_score.unwrap_or(self.keywords_score),
            has_phone: partial.has_phone.unwrap_or(self.has_phone),
            has_email_or_website: partial
                .has_email_or_website
                .unwrap_or(self.has_email_or_website),
            distance_max_miles: partial.distance_max_miles.unwrap_or(self.distance_max_miles),
            posting_age_days: partial.posting_age_days.unwrap_or(self.posting_age_days),
            score_threshold: partial.score_threshold.unwrap_or(self.score_threshold),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PartialScoringTable {
    #[serde(rename = "HOT")]
    hot: PartialScoringRule,
    #[serde(rename = "WARM")]
    warm: PartialScoringRule,
    #[serde(rename = "COLD")]
    cold: PartialScoringRule,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PartialScoringTable")]
pub struct ScoringTable {
    pub hot: ScoringRule,
    pub warm: ScoringRule,
    pub cold: ScoringRule,
}

impl From<PartialScoringTable> for ScoringTable {
    fn from(partial: PartialScoringTable) -> Self {
        let defaults = ScoringTable::default();
        Self {
            hot: defaults.hot.merged(partial.hot),
            warm: defaults.warm.merged(partial.warm),
            cold: defaults.cold.merged(partial.cold),
        }
    }
}

impl ScoringTable {
    pub fn rule(&self, category: LeadCategory) -> &ScoringRule {
        match category {
            LeadCategory::Hot => &self.hot,
            LeadCategory::Warm => &self.warm,
            LeadCategory::Cold => &self.cold,
        }
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            hot: ScoringRule {
                description: "Priority: Clear need + Full contact info".to_string(),
                keywords_score: 25,
                has_phone: true,
                has_email_or_website: true,
                distance_max_miles: 50,
                posting_age_days: 7,
                score_threshold: 80,
            },
            warm: ScoringRule {
                description: "Secondary: Likely customer + Partial contact".to_string(),
                keywords_score: 15,
                has_phone: true,
                has_email_or_website: false,
                distance_max_miles: 100,
                posting_age_days: 30,
                score_threshold: 60,
            },
            cold: ScoringRule {
                description: "Lower priority: Generic or vague need".to_string(),
                keywords_score: 5,
                has_phone: false,
                has_email_or_website: false,
                distance_max_miles: 200,
                posting_age_days: 90,
                score_threshold: 0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub urls: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            urls: strings(&[
                "https://beaumont.craigslist.org",
                "https://tyler.craigslist.org",
                "https://longview.craigslist.org",
                "https://texarkana.craigslist.org",
                "https://centrallouisiana.craigslist.org",
                "https://northlouisiana.craigslist.org",
                "https://arklatex.craigslist.org",
                "https://houston.craigslist.org",
            ]),
            categories: strings(&["sss", "ggg", "roo"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_url: String,
    pub database_path: String,
    pub export_dir: String,
    pub export_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:///database/leads.db".to_string(),
            database_path: "database/leads.db".to_string(),
            export_dir: "exports".to_string(),
            export_prefix: "handyman_leads".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrapingConfig {
    pub timeout_seconds: u64,
    pub retries: u32,
    pub user_agents: Vec<String>,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            retries: 3,
            user_agents: strings(&[
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub slack_webhook: Option<String>,
    pub email_alerts: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeduplicationConfig {
    pub fields: Vec<String>,
}

impl Default for DeduplicationConfig {
    fn default() -> Self {
        Self {
            fields: strings(&["phone", "email", "website"]),
        }
    }
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            geography: GeographyConfig::default(),
            search: SearchConfig::default(),
            scoring: ScoringTable::default(),
            regions: RegionConfig::default(),
            storage: StorageConfig::default(),
            scraping: ScrapingConfig::default(),
            server: ServerConfig::default(),
            notifications: NotificationConfig::default(),
            deduplication: DeduplicationConfig::default(),
            run_date: today(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl LeadConfig {
    /// Defaults, then the optional TOML file, then process environment,
    /// then validation.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                tracing::debug!("No configuration file given, using built-in defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies `DATABASE_URL`, `PORT`, `FLASK_DEBUG`, `SLACK_WEBHOOK` and
    /// `EMAIL_ALERTS`. Values that do not parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database_url = url;
        }

        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::debug!("Ignoring unparsable PORT value '{}'", raw),
            }
        }

        if let Some(raw) = lookup("FLASK_DEBUG") {
            match parse_flag(&raw) {
                Some(debug) => self.server.debug = debug,
                None => tracing::debug!("Ignoring unparsable FLASK_DEBUG value '{}'", raw),
            }
        }

        if let Some(webhook) = lookup("SLACK_WEBHOOK") {
            self.notifications.slack_webhook = Some(webhook);
        }

        if let Some(email) = lookup("EMAIL_ALERTS") {
            self.notifications.email_alerts = Some(email);
        }
    }

    pub fn export_filename(&self) -> String {
        format!(
            "{}_{}.csv",
            self.storage.export_prefix,
            self.run_date.format("%Y%m%d")
        )
    }

    pub fn export_path(&self) -> PathBuf {
        Path::new(&self.storage.export_dir).join(self.export_filename())
    }

    /// First `count` Craigslist keywords, comma separated, with a trailing
    /// ellipsis.
    pub fn keyword_preview(&self, count: usize) -> String {
        let shown: Vec<&str> = self
            .search
            .craigslist_keywords
            .iter()
            .take(count)
            .map(String::as_str)
            .collect();
        format!("{}...", shown.join(", "))
    }

    pub fn region_names(&self) -> Vec<String> {
        self.regions
            .urls
            .iter()
            .map(|raw| {
                Url::parse(raw)
                    .ok()
                    .and_then(|url| url.host_str().map(str::to_string))
                    .unwrap_or_else(|| raw.rsplit('/').next().unwrap_or(raw).to_string())
            })
            .collect()
    }
}

impl Validate for LeadConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("geography.center_zip", &self.geography.center_zip)?;
        validate_range(
            "geography.center_coords.latitude",
            self.geography.center_coords.0,
            -90.0,
            90.0,
        )?;
        validate_range(
            "geography.center_coords.longitude",
            self.geography.center_coords.1,
            -180.0,
            180.0,
        )?;
        validate_positive_number("geography.radius_miles", self.geography.radius_miles, 1)?;

        for category in LeadCategory::ALL {
            let field = format!("scoring.{}.score_threshold", category);
            validate_range(&field, self.scoring.rule(category).score_threshold, 0, 100)?;
        }

        for url in &self.regions.urls {
            validate_url("regions.urls", url)?;
        }

        validate_path("storage.export_dir", &self.storage.export_dir)?;
        validate_non_empty_string("storage.export_prefix", &self.storage.export_prefix)?;
        validate_path("storage.export_prefix", &self.storage.export_prefix)?;

        Ok(())
    }
}
