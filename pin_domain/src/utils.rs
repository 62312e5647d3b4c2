/// Checks that a PIN is exactly `digit_length` ASCII decimal digits
pub fn is_valid_pin(pin: &str, digit_length: usize) -> bool {
    pin.len() == digit_length && pin.bytes().all(|b| b.is_ascii_digit())
}

/// Concatenates a run of single digits into a string, e.g. `[1, 2, 3]` -> `"123"`
pub(crate) fn digits_to_string<I>(digits: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    digits.into_iter().map(|d| char::from(b'0' + d)).collect()
}
