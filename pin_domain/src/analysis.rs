//! Presentation-oriented derivations of a verdict: score, advice and labels.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

use crate::models::{Demographics, ReasonCode, Strength, Verdict};
use crate::service::PinStrengthService;

/// Shape of a commonly used PIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    RepeatedDigit,
    AscendingRun,
    DescendingRun,
    DoubledRun,
}

impl PatternKind {
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::RepeatedDigit => "All digits are the same",
            PatternKind::AscendingRun => "Sequential ascending digits",
            PatternKind::DescendingRun => "Sequential descending digits",
            PatternKind::DoubledRun => "Doubled consecutive digits",
        }
    }
}

/// Numeric score in 0..=100, lower for each reason a PIN is weak
pub fn strength_score(verdict: &Verdict) -> u8 {
    match verdict.strength {
        Strength::Strong => 100,
        Strength::Weak => {
            let penalty = verdict.reasons.len().saturating_mul(20);
            80usize.saturating_sub(penalty).max(20) as u8
        }
        Strength::Invalid => 0,
    }
}

fn advice_for(reason: ReasonCode) -> &'static str {
    match reason {
        ReasonCode::CommonlyUsed => "Avoid commonly used PINs like 1111, 1234, or 0000",
        ReasonCode::DemographicDobSelf => "Don't use your birth date in your PIN",
        ReasonCode::DemographicDobSpouse => "Don't use your spouse's birth date in your PIN",
        ReasonCode::DemographicAnniversary => "Don't use your wedding/anniversary date in your PIN",
    }
}

pub fn recommendations(verdict: &Verdict) -> Vec<String> {
    let mut recommendations: Vec<String> = verdict
        .reasons
        .iter()
        .map(|reason| advice_for(*reason).to_string())
        .collect();

    if verdict.strength == Strength::Strong {
        recommendations.push("Great choice! This PIN appears to be strong and secure.".to_string());
    } else {
        recommendations.extend(
            [
                "Use a mix of digits that don't follow obvious patterns",
                "Avoid personal information like dates",
                "Consider using a random combination of digits",
            ]
            .map(String::from),
        );
    }

    recommendations
}

/// Shapes a digit string exhibits; empty for anything that is not all ASCII digits
pub fn pattern_kinds(pin: &str) -> Vec<PatternKind> {
    if pin.is_empty() || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }
    let digits: Vec<i8> = pin.bytes().map(|b| (b - b'0') as i8).collect();
    let steps_by = |step: i8| digits.windows(2).all(|w| w[1] - w[0] == step);

    let mut kinds = Vec::new();
    if steps_by(0) {
        kinds.push(PatternKind::RepeatedDigit);
    }
    if digits.len() > 1 && steps_by(1) {
        kinds.push(PatternKind::AscendingRun);
    }
    if digits.len() > 1 && steps_by(-1) {
        kinds.push(PatternKind::DescendingRun);
    }
    if is_doubled_run(&digits) {
        kinds.push(PatternKind::DoubledRun);
    }
    kinds
}

fn is_doubled_run(digits: &[i8]) -> bool {
    if digits.len() < 4 || digits.len() % 2 != 0 {
        return false;
    }
    let pairs: Vec<&[i8]> = digits.chunks(2).collect();
    pairs.iter().all(|pair| pair[0] == pair[1])
        && pairs.windows(2).all(|w| w[1][0] - w[0][0] == 1)
}

/// One sentence per demographic reason, naming the date that matched
pub fn demographic_matches(verdict: &Verdict, demographics: &Demographics) -> Vec<String> {
    demographics
        .checks()
        .into_iter()
        .filter(|(reason, _)| verdict.reasons.contains(reason))
        .filter_map(|(reason, date)| {
            let date = date?;
            let subject = match reason {
                ReasonCode::DemographicDobSelf => "your birth date",
                ReasonCode::DemographicDobSpouse => "spouse's birth date",
                ReasonCode::DemographicAnniversary => "wedding date",
                ReasonCode::CommonlyUsed => return None,
            };
            Some(format!("Matches {} ({})", subject, date))
        })
        .collect()
}

/// Full report for a single PIN
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinAnalysis {
    pub pin: String,
    pub digit_length: usize,
    pub strength: Strength,
    pub reasons: Vec<ReasonCode>,
    pub is_common: bool,
    pub strength_score: u8,
    pub recommendations: Vec<String>,
    pub common_patterns: Vec<PatternKind>,
    pub demographic_matches: Vec<String>,
}

impl PinAnalysis {
    pub fn analyze<S>(service: &S, pin: &str, demographics: &Demographics) -> Self
    where
        S: PinStrengthService + ?Sized,
    {
        let verdict = service.classify(pin, demographics);
        let is_common = service.is_common(pin);
        let common_patterns = if is_common { pattern_kinds(pin) } else { Vec::new() };

        Self {
            pin: pin.to_string(),
            digit_length: service.digit_length(),
            strength_score: strength_score(&verdict),
            recommendations: recommendations(&verdict),
            demographic_matches: demographic_matches(&verdict, demographics),
            strength: verdict.strength,
            reasons: verdict.reasons,
            is_common,
            common_patterns,
        }
    }
}
