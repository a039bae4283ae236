/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Keep only the ASCII digits of a phone number or fragment.
///
/// `"(123) 456-7890"` becomes `"1234567890"`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
