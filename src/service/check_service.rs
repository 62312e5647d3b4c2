use pin_domain::{suggest_pin, DateParts, Demographics, PinAnalysis, PinError, PinStrengthService};
use tracing::{info, warn};

use crate::mapper::{CombinationsResponse, CommonResponse, SuggestResponse};

/// Raw, untrimmed dates supplied by the PIN holder
#[derive(Debug, Clone, Default)]
pub struct DateInputs {
    pub birth_date: Option<String>,
    pub spouse_birth_date: Option<String>,
    pub wedding_date: Option<String>,
}

impl DateInputs {
    /// Trim every date, dropping blank ones
    pub fn into_demographics(self) -> Demographics {
        Demographics::new(
            normalize_date("birth date", self.birth_date),
            normalize_date("spouse birth date", self.spouse_birth_date),
            normalize_date("wedding date", self.wedding_date),
        )
    }
}

/// Raw, untrimmed input for a strength check
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    pub pin: String,
    pub dates: DateInputs,
}

/// Front-end handler that normalizes user input before calling the engine
pub struct CheckServiceImpl {
    pin_service: Box<dyn PinStrengthService + Send + Sync>,
}

impl CheckServiceImpl {
    pub fn new(pin_service: Box<dyn PinStrengthService + Send + Sync>) -> Self {
        Self { pin_service }
    }

    pub fn digit_length(&self) -> usize {
        self.pin_service.digit_length()
    }

    pub fn common(&self, pin: &str) -> CommonResponse {
        let pin = pin.trim();
        CommonResponse {
            pin: pin.to_string(),
            digit_length: self.digit_length(),
            is_common: self.pin_service.is_common(pin),
        }
    }

    pub fn check(&self, request: CheckRequest) -> PinAnalysis {
        let pin = request.pin.trim();
        let demographics = request.dates.into_demographics();

        let analysis = PinAnalysis::analyze(&*self.pin_service, pin, &demographics);
        info!("PIN checked: strength={} reasons={}", analysis.strength, analysis.reasons.len());
        analysis
    }

    pub fn combinations(&self, date: &str) -> Result<CombinationsResponse, PinError> {
        let date = date.trim();
        date.parse::<DateParts>()?;
        Ok(CombinationsResponse::new(
            date,
            self.digit_length(),
            self.pin_service.combinations_for_date(date),
        ))
    }

    pub fn suggest(&self, dates: DateInputs) -> Result<SuggestResponse, PinError> {
        let demographics = dates.into_demographics();
        let pin = suggest_pin(&*self.pin_service, &demographics, &mut rand::thread_rng())?;
        Ok(SuggestResponse {
            pin,
            digit_length: self.digit_length(),
        })
    }
}

/// Trim a date argument, treating blank input as absent
fn normalize_date(field: &str, value: Option<String>) -> Option<String> {
    let value = value?.trim().to_string();
    if value.is_empty() {
        return None;
    }
    if let Err(e) = value.parse::<DateParts>() {
        warn!("Ignoring {}: {}", field, e);
    }
    Some(value)
}
