use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Final classification of a PIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    Invalid,  // Wrong length or non-digit characters
    Weak,     // At least one reason code matched
    Strong,   // Passed validation with no reasons
}

/// Why a PIN was classified as weak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    CommonlyUsed,
    DemographicDobSelf,
    DemographicDobSpouse,
    DemographicAnniversary,
}

/// Strength verdict together with the ordered reasons that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub strength: Strength,
    pub reasons: Vec<ReasonCode>,
}

impl Verdict {
    pub fn invalid() -> Self {
        Self {
            strength: Strength::Invalid,
            reasons: Vec::new(),
        }
    }

    /// Builds a `Weak` or `Strong` verdict depending on whether any reason matched.
    pub fn from_reasons(reasons: Vec<ReasonCode>) -> Self {
        let strength = if reasons.is_empty() {
            Strength::Strong
        } else {
            Strength::Weak
        };
        Self { strength, reasons }
    }
}

/// Dates associated with the PIN holder, each in `DD-MM-YYYY` form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub self_birth_date: Option<String>,
    pub spouse_birth_date: Option<String>,
    pub anniversary: Option<String>,
}

impl Demographics {
    pub fn new(
        self_birth_date: Option<String>,
        spouse_birth_date: Option<String>,
        anniversary: Option<String>,
    ) -> Self {
        Self {
            self_birth_date,
            spouse_birth_date,
            anniversary,
        }
    }

    /// Date checks in evaluation order, paired with the reason each one yields.
    pub fn checks(&self) -> [(ReasonCode, Option<&str>); 3] {
        [
            (ReasonCode::DemographicDobSelf, self.self_birth_date.as_deref()),
            (ReasonCode::DemographicDobSpouse, self.spouse_birth_date.as_deref()),
            (ReasonCode::DemographicAnniversary, self.anniversary.as_deref()),
        ]
    }
}
