use std::collections::HashSet;

use crate::dates::{date_parts, DateParts};

const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

const ORDERS: [(usize, usize, usize); 6] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 0, 2),
    (1, 2, 0),
    (2, 0, 1),
    (2, 1, 0),
];

/// PINs an attacker could derive from the parts of a known date.
///
/// For 4 digits every pair of day/month/year is taken in both orders
/// (DDMM, MMDD, DDYY, YYDD, MMYY, YYMM); for 6 digits all three parts are
/// concatenated in every order. Other lengths produce nothing.
pub fn combinations(parts: &DateParts, digit_length: usize) -> HashSet<String> {
    let parts = parts.as_array();
    let mut combinations = HashSet::new();

    match digit_length {
        4 => {
            for (i, j) in PAIRS {
                combinations.insert([parts[i], parts[j]].concat());
                combinations.insert([parts[j], parts[i]].concat());
            }
        }
        6 => {
            for (a, b, c) in ORDERS {
                combinations.insert([parts[a], parts[b], parts[c]].concat());
            }
        }
        _ => {}
    }

    combinations
}

/// Same as [`combinations`], starting from `DD-MM-YYYY` text; unparseable text yields an empty set
pub fn combinations_for_date(date_text: &str, digit_length: usize) -> HashSet<String> {
    match date_parts(date_text) {
        Some(parts) => combinations(&parts, digit_length),
        None => HashSet::new(),
    }
}
