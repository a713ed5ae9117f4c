use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CandidateFile;
use crate::constants::{DEFAULT_CONFIDENCE_PERCENT, DOWNLOAD_NAME_PREFIX};
use crate::error::IntakeError;

/// Format of the categorized result returned for a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Excel,
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse a form value, falling back to Excel for anything unrecognized
    pub fn from_form_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// File extension of the generated result
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Excel => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Name of the generated result, e.g. `categorized_data_20240131_094500.xlsx`
    pub fn download_name(&self, at: DateTime<Utc>) -> String {
        format!(
            "{}_{}.{}",
            DOWNLOAD_NAME_PREFIX,
            at.format("%Y%m%d_%H%M%S"),
            self.extension()
        )
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excel" => Ok(OutputFormat::Excel),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {}", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Minimum prediction confidence requested with a submission, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ConfidenceThreshold(u8);

impl ConfidenceThreshold {
    pub fn new(percent: u8) -> Result<Self, IntakeError> {
        if percent > 100 {
            return Err(IntakeError::InvalidInput(format!(
                "Confidence must be between 0 and 100, got {}",
                percent
            )));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE_PERCENT)
    }
}

impl TryFrom<u8> for ConfidenceThreshold {
    type Error = IntakeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceThreshold> for u8 {
    fn from(value: ConfidenceThreshold) -> Self {
        value.0
    }
}

impl Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}%", self.0)
    }
}

/// Everything a transport needs to post the intake form.
///
/// The request body itself is owned by the server side; this only carries
/// the values the intake step is responsible for.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub id: Uuid,
    pub file: CandidateFile,
    pub output_format: OutputFormat,
    pub confidence: ConfidenceThreshold,
    pub requested_at: DateTime<Utc>,
}

impl SubmissionRequest {
    pub fn new(
        file: CandidateFile,
        output_format: OutputFormat,
        confidence: ConfidenceThreshold,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
            output_format,
            confidence,
            requested_at: Utc::now(),
        }
    }

    /// Name the categorized result will be downloaded under
    pub fn download_name(&self) -> String {
        self.output_format.download_name(self.requested_at)
    }
}
