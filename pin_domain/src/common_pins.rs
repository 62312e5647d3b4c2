//! Generation of the commonly used PIN set for a given digit length.

use std::collections::HashSet;

use crate::utils::digits_to_string;

/// Immutable set of PINs that are over-represented among real users.
///
/// Built once per digit length and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPinSet {
    digit_length: usize,
    pins: HashSet<String>,
}

impl CommonPinSet {
    /// Generates the set for `digit_length`.
    ///
    /// Contains every repeated single digit, every ascending and descending
    /// run of consecutive digits that fits in 0..=9 without wrapping, and the
    /// doubled-run patterns (`1122`, `112233`) for 4 and 6 digits. Lengths
    /// other than 4 and 6 have no doubled-run entries.
    pub fn generate(digit_length: usize) -> Self {
        let mut pins = HashSet::new();
        let len = digit_length as u8;

        for digit in 0..=9u8 {
            pins.insert(digits_to_string(std::iter::repeat(digit).take(digit_length)));
        }

        // Starts are capped so the run never passes 9
        if digit_length < 10 {
            for start in 1..=(10 - len) {
                pins.insert(digits_to_string(start..start + len));
            }
        }

        if digit_length <= 9 {
            for start in (len.max(1)..=9).rev() {
                pins.insert(digits_to_string((start + 1 - len..=start).rev()));
            }
        }

        match digit_length {
            4 => {
                for digit in 1..=8u8 {
                    pins.insert(digits_to_string([digit, digit, digit + 1, digit + 1]));
                }
            }
            6 => {
                for digit in 1..=7u8 {
                    pins.insert(digits_to_string([
                        digit,
                        digit,
                        digit + 1,
                        digit + 1,
                        digit + 2,
                        digit + 2,
                    ]));
                }
            }
            _ => {}
        }

        Self { digit_length, pins }
    }

    pub fn digit_length(&self) -> usize {
        self.digit_length
    }

    pub fn contains(&self, pin: &str) -> bool {
        self.pins.contains(pin)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pins.iter().map(String::as_str)
    }
}
