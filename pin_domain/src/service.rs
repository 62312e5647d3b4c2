use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::common_pins::CommonPinSet;
use crate::demographics;
use crate::error::{PinError, PinResult};
use crate::models::{Demographics, ReasonCode, Verdict};
use crate::utils::is_valid_pin;

/// PIN strength service trait defining the engine operations
pub trait PinStrengthService: Send + Sync {
    /// Number of digits every PIN must have
    fn digit_length(&self) -> usize;

    /// Check if a PIN is in the commonly used set
    /// Malformed PINs are never common
    fn is_common(&self, pin: &str) -> bool;

    /// Demographic combinations derived from a `DD-MM-YYYY` date
    fn combinations_for_date(&self, date_text: &str) -> HashSet<String>;

    /// Classify a PIN against the common set and the holder's dates
    fn classify(&self, pin: &str, demographics: &Demographics) -> Verdict;

    /// Positional form of [`PinStrengthService::classify`]
    fn check_strength(
        &self,
        pin: &str,
        self_birth_date: Option<&str>,
        spouse_birth_date: Option<&str>,
        anniversary: Option<&str>,
    ) -> Verdict {
        let demographics = Demographics::new(
            self_birth_date.map(str::to_owned),
            spouse_birth_date.map(str::to_owned),
            anniversary.map(str::to_owned),
        );
        self.classify(pin, &demographics)
    }
}

/// Longest PIN a checker can be configured for
pub const MAX_DIGIT_LENGTH: usize = 32;

/// Implementation of PinStrengthService backed by a precomputed common set
#[derive(Debug, Clone)]
pub struct PinChecker {
    common_pins: Arc<CommonPinSet>,
}

impl PinChecker {
    /// Configure a checker for `digit_length`, building its common set.
    ///
    /// Any positive even length up to [`MAX_DIGIT_LENGTH`] is accepted; only
    /// 4 and 6 get doubled-run patterns and demographic combinations.
    pub fn new(digit_length: usize) -> PinResult<Self> {
        if digit_length == 0 || digit_length % 2 != 0 || digit_length > MAX_DIGIT_LENGTH {
            return Err(PinError::InvalidDigitLength(digit_length));
        }

        let common_pins = CommonPinSet::generate(digit_length);
        debug!(
            "Configured PIN checker for {} digits with {} common PINs",
            digit_length,
            common_pins.len()
        );
        Ok(Self::with_common_pins(Arc::new(common_pins)))
    }

    /// Build a checker around an already generated common set
    pub fn with_common_pins(common_pins: Arc<CommonPinSet>) -> Self {
        Self { common_pins }
    }

    pub fn common_pins(&self) -> &CommonPinSet {
        &self.common_pins
    }
}

impl PinStrengthService for PinChecker {
    fn digit_length(&self) -> usize {
        self.common_pins.digit_length()
    }

    fn is_common(&self, pin: &str) -> bool {
        is_valid_pin(pin, self.digit_length()) && self.common_pins.contains(pin)
    }

    fn combinations_for_date(&self, date_text: &str) -> HashSet<String> {
        demographics::combinations_for_date(date_text, self.digit_length())
    }

    fn classify(&self, pin: &str, demographics: &Demographics) -> Verdict {
        if !is_valid_pin(pin, self.digit_length()) {
            debug!("Rejected malformed PIN of length {}", pin.len());
            return Verdict::invalid();
        }

        let mut reasons = Vec::new();
        if self.common_pins.contains(pin) {
            reasons.push(ReasonCode::CommonlyUsed);
        }

        for (reason, date) in demographics.checks() {
            let Some(date) = date else { continue };
            if self.combinations_for_date(date).contains(pin) {
                reasons.push(reason);
            }
        }

        let verdict = Verdict::from_reasons(reasons);
        debug!("Classified PIN as {} ({} reasons)", verdict.strength, verdict.reasons.len());
        verdict
    }
}
