use std::collections::HashSet;
use std::fmt::Write as _;
use std::process::ExitCode;

use pin_domain::{PinAnalysis, PinError};
use serde::Serialize;

use crate::config::ConfigError;

#[derive(Debug, Serialize)]
pub struct CommonResponse {
    pub pin: String,
    pub digit_length: usize,
    pub is_common: bool,
}

#[derive(Debug, Serialize)]
pub struct CombinationsResponse {
    pub date: String,
    pub digit_length: usize,
    pub combinations: Vec<String>,
}

impl CombinationsResponse {
    pub fn new(date: &str, digit_length: usize, combinations: HashSet<String>) -> Self {
        let mut combinations: Vec<String> = combinations.into_iter().collect();
        combinations.sort();
        Self {
            date: date.to_string(),
            digit_length,
            combinations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub pin: String,
    pub digit_length: usize,
}

/// Plain-text rendering for terminal output
pub trait ToText {
    fn to_text(&self) -> String;
}

impl ToText for CommonResponse {
    fn to_text(&self) -> String {
        format!("Is PIN commonly used? {}", self.is_common)
    }
}

impl ToText for CombinationsResponse {
    fn to_text(&self) -> String {
        self.combinations.join("\n")
    }
}

impl ToText for SuggestResponse {
    fn to_text(&self) -> String {
        self.pin.clone()
    }
}

impl ToText for PinAnalysis {
    fn to_text(&self) -> String {
        let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        let mut out = format!("PIN strength: {}\nReasons: [{}]", self.strength, reasons.join(", "));

        for pattern in &self.common_patterns {
            let _ = write!(out, "\nPattern: {}", pattern.description());
        }
        for matched in &self.demographic_matches {
            let _ = write!(out, "\n{}", matched);
        }
        out
    }
}

pub trait IntoExitCode {
    fn into_exit_code(self) -> ExitCode;
}

impl IntoExitCode for PinError {
    fn into_exit_code(self) -> ExitCode {
        match self {
            // Bad input from the caller
            PinError::InvalidDigitLength(_) | PinError::UnparseableDate(_) => ExitCode::from(2),

            // Internal failure
            PinError::SuggestionExhausted(_) => ExitCode::from(1),
        }
    }
}

impl IntoExitCode for ConfigError {
    fn into_exit_code(self) -> ExitCode {
        ExitCode::from(2)
    }
}
