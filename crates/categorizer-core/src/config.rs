//! Configuration module
//!
//! Upload policy settings are read from the environment (and an optional
//! `.env` file). Two deployment profiles exist; every value can be
//! overridden individually.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_ALLOWED_EXTENSIONS, EXTENDED_MAX_FILE_SIZE_MB, MIB,
    STANDARD_MAX_FILE_SIZE_MB,
};
use crate::error::IntakeError;
use crate::validation::UploadPolicy;

/// Convert a size limit in MiB to bytes, refusing values that overflow
pub fn megabytes_to_bytes(megabytes: u64) -> Result<u64, anyhow::Error> {
    megabytes
        .checked_mul(MIB)
        .ok_or_else(|| anyhow::anyhow!("MAX_FILE_SIZE_MB is too large: {}", megabytes))
}

/// Deployment profile selecting the default size limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadProfile {
    /// 16 MiB
    #[default]
    Standard,
    /// 50 MiB
    Extended,
}

impl UploadProfile {
    pub fn max_file_size_mb(&self) -> u64 {
        match self {
            UploadProfile::Standard => STANDARD_MAX_FILE_SIZE_MB,
            UploadProfile::Extended => EXTENDED_MAX_FILE_SIZE_MB,
        }
    }
}

impl FromStr for UploadProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(UploadProfile::Standard),
            "extended" => Ok(UploadProfile::Extended),
            _ => Err(anyhow::anyhow!("Invalid upload profile: {}", s)),
        }
    }
}

impl Display for UploadProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadProfile::Standard => write!(f, "standard"),
            UploadProfile::Extended => write!(f, "extended"),
        }
    }
}

/// Intake configuration
#[derive(Clone, Debug)]
pub struct IntakeConfig {
    pub environment: String,
    pub profile: UploadProfile,
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self::for_profile(UploadProfile::default())
    }
}

impl IntakeConfig {
    /// Profile defaults without consulting the environment
    pub fn for_profile(profile: UploadProfile) -> Self {
        Self {
            environment: "development".to_string(),
            profile,
            max_file_size_bytes: profile.max_file_size_mb() * MIB,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_content_types: DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let profile = match env::var("UPLOAD_PROFILE") {
            Ok(value) if !value.trim().is_empty() => value.parse::<UploadProfile>()?,
            _ => UploadProfile::default(),
        };

        let max_file_size_mb = match env::var("MAX_FILE_SIZE_MB") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_MB must be a valid number"))?,
            Err(_) => profile.max_file_size_mb(),
        };

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_EXTENSIONS.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_CONTENT_TYPES.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let config = IntakeConfig {
            environment,
            profile,
            max_file_size_bytes: megabytes_to_bytes(max_file_size_mb)?,
            allowed_extensions,
            allowed_content_types,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.policy()?;
        Ok(())
    }

    /// Build the upload policy described by this configuration
    pub fn policy(&self) -> Result<UploadPolicy, IntakeError> {
        let policy = UploadPolicy::new(
            self.max_file_size_bytes,
            &self.allowed_extensions,
            &self.allowed_content_types,
        );
        policy.validate()?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parsing() {
        assert_eq!(
            "Extended".parse::<UploadProfile>().unwrap(),
            UploadProfile::Extended
        );
        assert!("huge".parse::<UploadProfile>().is_err());
        assert_eq!(UploadProfile::Standard.to_string(), "standard");
    }

    #[test]
    fn profile_defaults() {
        let config = IntakeConfig::for_profile(UploadProfile::Extended);
        assert_eq!(config.max_file_size_bytes, 50 * 1024 * 1024);
        assert!(config.validate().is_ok());
        assert_eq!(config.policy().unwrap(), UploadPolicy::extended());
    }

    #[test]
    fn validate_rejects_zero_size() {
        let mut config = IntakeConfig::default();
        config.max_file_size_bytes = 0;
        assert!(config.validate().is_err());
        assert!(matches!(
            config.policy(),
            Err(IntakeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_allowlists() {
        let mut config = IntakeConfig::default();
        config.allowed_extensions.clear();
        config.allowed_content_types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn megabytes_conversion_checks_overflow() {
        assert_eq!(megabytes_to_bytes(16).unwrap(), 16 * MIB);
        assert!(megabytes_to_bytes(u64::MAX / MIB + 1).is_err());
    }

    const ENV_KEYS: [&str; 6] = [
        "ENVIRONMENT",
        "APP_ENV",
        "UPLOAD_PROFILE",
        "MAX_FILE_SIZE_MB",
        "ALLOWED_EXTENSIONS",
        "ALLOWED_CONTENT_TYPES",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    // Every environment case lives in this one test so no other test in the
    // crate races on the process environment.
    #[test]
    fn from_env_reads_and_rejects_settings() {
        clear_env();
        let config = IntakeConfig::from_env().unwrap();
        assert_eq!(config.environment, "development");
        assert_eq!(config.profile, UploadProfile::Standard);
        assert_eq!(config.max_file_size_bytes, 16 * MIB);
        assert_eq!(config.allowed_extensions, vec!["csv", "xlsx", "json", "txt"]);

        env::set_var("APP_ENV", "staging");
        env::set_var("UPLOAD_PROFILE", "Extended");
        env::set_var("ALLOWED_EXTENSIONS", " CSV, ,json ");
        env::set_var("ALLOWED_CONTENT_TYPES", "text/csv");
        let config = IntakeConfig::from_env().unwrap();
        assert_eq!(config.environment, "staging");
        assert_eq!(config.profile, UploadProfile::Extended);
        assert_eq!(config.max_file_size_bytes, 50 * MIB);
        assert_eq!(config.allowed_extensions, vec!["csv", "json"]);
        assert_eq!(config.allowed_content_types, vec!["text/csv"]);

        env::set_var("MAX_FILE_SIZE_MB", " 5 ");
        let config = IntakeConfig::from_env().unwrap();
        assert_eq!(config.max_file_size_bytes, 5 * MIB);

        env::set_var("MAX_FILE_SIZE_MB", "five");
        assert!(IntakeConfig::from_env().is_err());

        env::set_var("MAX_FILE_SIZE_MB", "0");
        assert!(IntakeConfig::from_env().is_err());

        env::set_var("MAX_FILE_SIZE_MB", (u64::MAX / MIB + 1).to_string());
        let err = IntakeConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("too large"));

        env::remove_var("MAX_FILE_SIZE_MB");
        env::set_var("UPLOAD_PROFILE", "huge");
        assert!(IntakeConfig::from_env().is_err());

        env::remove_var("UPLOAD_PROFILE");
        env::set_var("ALLOWED_EXTENSIONS", ",");
        env::set_var("ALLOWED_CONTENT_TYPES", " ");
        assert!(IntakeConfig::from_env().is_err());

        clear_env();
    }
}
