use pin_domain::{PinChecker, PinStrengthService, ReasonCode, Strength, Verdict};
use serde::Serialize;
use tracing::error;

use crate::mapper::ToText;

use pin_domain::ReasonCode::*;

/// What a self-test case asserts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expectation {
    /// Part A: result of the common-PIN check
    Common(bool),
    /// Part B: strength only
    Strength(Strength),
    /// Part C: strength together with the ordered reasons
    Verdict(Strength, Vec<ReasonCode>),
}

#[derive(Debug, Clone)]
pub struct SelfTestCase {
    pub digit_length: usize,
    pub pin: &'static str,
    pub birth_date: Option<&'static str>,
    pub spouse_birth_date: Option<&'static str>,
    pub wedding_date: Option<&'static str>,
    pub expected: Expectation,
}

impl SelfTestCase {
    fn common(digit_length: usize, pin: &'static str, expected: bool) -> Self {
        Self {
            digit_length,
            pin,
            birth_date: None,
            spouse_birth_date: None,
            wedding_date: None,
            expected: Expectation::Common(expected),
        }
    }

    fn dated(
        digit_length: usize,
        pin: &'static str,
        dates: [Option<&'static str>; 3],
        expected: Expectation,
    ) -> Self {
        let [birth_date, spouse_birth_date, wedding_date] = dates;
        Self {
            digit_length,
            pin,
            birth_date,
            spouse_birth_date,
            wedding_date,
            expected,
        }
    }

    pub fn part(&self) -> char {
        match self.expected {
            Expectation::Common(_) => 'A',
            Expectation::Strength(_) => 'B',
            Expectation::Verdict(..) => 'C',
        }
    }

    fn evaluate(&self) -> Result<Expectation, String> {
        let checker = PinChecker::new(self.digit_length).map_err(|e| e.to_string())?;
        let actual = match self.expected {
            Expectation::Common(_) => Expectation::Common(checker.is_common(self.pin)),
            Expectation::Strength(_) => Expectation::Strength(self.verdict(&checker).strength),
            Expectation::Verdict(..) => {
                let verdict = self.verdict(&checker);
                Expectation::Verdict(verdict.strength, verdict.reasons)
            }
        };
        Ok(actual)
    }

    fn verdict(&self, checker: &PinChecker) -> Verdict {
        checker.check_strength(
            self.pin,
            self.birth_date,
            self.spouse_birth_date,
            self.wedding_date,
        )
    }
}

/// The reference case table exercised by the `self-test` command
pub fn default_cases() -> Vec<SelfTestCase> {
    const DOB: Option<&str> = Some("02-01-1998");
    const SPOUSE: Option<&str> = Some("15-06-1995");
    const WEDDING: Option<&str> = Some("10-07-2020");
    let weak = |reasons: Vec<ReasonCode>| Expectation::Verdict(Strength::Weak, reasons);

    vec![
        SelfTestCase::common(4, "1111", true),
        SelfTestCase::common(4, "1234", true),
        SelfTestCase::common(4, "9876", true),
        SelfTestCase::common(4, "1122", true),
        SelfTestCase::common(4, "4839", false),
        SelfTestCase::common(4, "abc", false),
        SelfTestCase::common(4, "123", false),
        SelfTestCase::dated(4, "1111", [None; 3], Expectation::Strength(Strength::Weak)),
        SelfTestCase::dated(4, "0201", [DOB, None, None], Expectation::Strength(Strength::Weak)),
        SelfTestCase::dated(4, "4839", [DOB, SPOUSE, WEDDING], Expectation::Strength(Strength::Strong)),
        SelfTestCase::dated(4, "abc", [None; 3], Expectation::Strength(Strength::Invalid)),
        SelfTestCase::dated(4, "1111", [None; 3], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(4, "0201", [DOB, None, None], weak(vec![DemographicDobSelf])),
        SelfTestCase::dated(4, "1506", [None, SPOUSE, None], weak(vec![DemographicDobSpouse])),
        SelfTestCase::dated(
            4,
            "1122",
            [Some("22-11-1999"), None, None],
            weak(vec![CommonlyUsed, DemographicDobSelf]),
        ),
        SelfTestCase::dated(4, "1007", [None, None, WEDDING], weak(vec![DemographicAnniversary])),
        SelfTestCase::dated(
            4,
            "4839",
            [DOB, SPOUSE, WEDDING],
            Expectation::Verdict(Strength::Strong, vec![]),
        ),
        SelfTestCase::dated(
            4,
            "0101",
            [Some("01-01-2000"), None, Some("01-01-2010")],
            weak(vec![DemographicDobSelf, DemographicAnniversary]),
        ),
        SelfTestCase::dated(4, "0000", [None; 3], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(4, "9999", [DOB, None, None], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(6, "111111", [None; 3], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(6, "123456", [None; 3], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(6, "987654", [None; 3], weak(vec![CommonlyUsed])),
        SelfTestCase::dated(6, "020198", [DOB, None, None], weak(vec![DemographicDobSelf])),
        SelfTestCase::dated(
            6,
            "750293",
            [DOB, SPOUSE, WEDDING],
            Expectation::Verdict(Strength::Strong, vec![]),
        ),
    ]
}

#[derive(Debug, Serialize)]
pub struct SelfTestResult {
    pub test_number: usize,
    pub part: char,
    pub digit_length: usize,
    pub pin: String,
    pub expected: Expectation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Expectation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
pub struct SelfTestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate: String,
}

#[derive(Debug, Serialize)]
pub struct SelfTestReport {
    pub results: Vec<SelfTestResult>,
    pub summary: SelfTestSummary,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }
}

impl ToText for SelfTestReport {
    fn to_text(&self) -> String {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|result| match (&result.error, result.passed) {
                (Some(e), _) => format!("Test {} errored: {}", result.test_number, e),
                (None, true) => format!("Test {} passed", result.test_number),
                (None, false) => format!(
                    "Test {} failed: expected {:?}, got {:?}",
                    result.test_number, result.expected, result.actual
                ),
            })
            .collect();
        lines.push(format!(
            "{} of {} passed ({})",
            self.summary.passed, self.summary.total, self.summary.success_rate
        ));
        lines.join("\n")
    }
}

pub fn run(cases: &[SelfTestCase]) -> SelfTestReport {
    let results: Vec<SelfTestResult> = cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let test_number = index + 1;
            let (actual, error) = match case.evaluate() {
                Ok(actual) => (Some(actual), None),
                Err(e) => {
                    error!("Self-test case {} could not run: {}", test_number, e);
                    (None, Some(e))
                }
            };
            SelfTestResult {
                test_number,
                part: case.part(),
                digit_length: case.digit_length,
                pin: case.pin.to_string(),
                passed: actual.as_ref() == Some(&case.expected),
                expected: case.expected.clone(),
                actual,
                error,
            }
        })
        .collect();

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let success_rate = if total == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", passed as f64 / total as f64 * 100.0)
    };

    SelfTestReport {
        results,
        summary: SelfTestSummary {
            total,
            passed,
            failed: total - passed,
            success_rate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cases_pass() {
        let report = run(&default_cases());
        let failures: Vec<_> = report.results.iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "failing cases: {failures:?}");
        assert_eq!(report.summary.total, 25);
        assert_eq!(report.summary.success_rate, "100.0%");
    }

    #[test]
    fn test_failures_are_counted() {
        let cases = vec![
            SelfTestCase::common(4, "1234", false),
            SelfTestCase::common(5, "12345", true),
            SelfTestCase::common(4, "1234", true),
        ];
        let report = run(&cases);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 2);
        assert!(!report.all_passed());
        assert!(report.results[1].error.is_some());
        assert_eq!(report.summary.success_rate, "33.3%");
    }

    #[test]
    fn test_parts() {
        let cases = default_cases();
        assert_eq!(cases[0].part(), 'A');
        assert_eq!(cases[7].part(), 'B');
        assert_eq!(cases[11].part(), 'C');
    }

    #[test]
    fn test_actual_matches_expectation_kind() {
        let dob = Some("02-01-1998");
        let strength_only = SelfTestCase::dated(4, "0201", [dob, None, None], Expectation::Strength(Strength::Weak));
        assert_eq!(strength_only.evaluate(), Ok(Expectation::Strength(Strength::Weak)));

        let with_reasons =
            SelfTestCase::dated(4, "0201", [dob, None, None], Expectation::Verdict(Strength::Strong, vec![]));
        assert_eq!(
            with_reasons.evaluate(),
            Ok(Expectation::Verdict(Strength::Weak, vec![DemographicDobSelf]))
        );
    }
}
