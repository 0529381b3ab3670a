use crate::rating::{
    CompetencyMode, RatingConfig, COMPETENCY_ROWS, DEPARTMENT_ROWS, EMPLOYEE_ROWS,
    FIXED_COMPETENCY_RATING,
};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub rating: RatingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let competency_mode = match env::var("RATING_COMPETENCY_MODE") {
            Ok(value) => parse_competency_mode(&value)?,
            Err(_) => CompetencyMode::Fixed,
        };

        let rating = RatingConfig {
            department_rows: row_count("RATING_DEPARTMENT_ROWS", DEPARTMENT_ROWS)?,
            employee_rows: row_count("RATING_EMPLOYEE_ROWS", EMPLOYEE_ROWS)?,
            competency_rows: row_count("RATING_COMPETENCY_ROWS", COMPETENCY_ROWS)?,
            competency_mode,
            fixed_competency_rating: FIXED_COMPETENCY_RATING,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            rating,
        })
    }
}

fn row_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidRowCount { key, value: raw }),
    }
}

fn parse_competency_mode(value: &str) -> Result<CompetencyMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fixed" => Ok(CompetencyMode::Fixed),
        "dynamic" => Ok(CompetencyMode::Dynamic),
        _ => Err(ConfigError::InvalidCompetencyMode {
            value: value.to_string(),
        }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRowCount { key: &'static str, value: String },
    InvalidCompetencyMode { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRowCount { key, value } => {
                write!(f, "{key} must be a positive integer (got '{value}')")
            }
            ConfigError::InvalidCompetencyMode { value } => write!(
                f,
                "RATING_COMPETENCY_MODE must be 'fixed' or 'dynamic' (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
