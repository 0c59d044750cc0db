use std::collections::BTreeMap;

/// Escapes control characters as `\xNN` so a logged value cannot forge
/// additional log lines.
pub fn escape_control_chars(s: &str) -> String {
	if !s.chars().any(char::is_control) {
		return s.to_string();
	}

	let mut result = String::with_capacity(s.len() + 8);
	for ch in s.chars() {
		if ch.is_control() {
			let mut buf = [0u8; 4];
			for byte in ch.encode_utf8(&mut buf).as_bytes() {
				result.push_str(&format!("\\x{:02x}", byte));
			}
		} else {
			result.push(ch);
		}
	}
	result
}

/// Renders structured fields as a compact JSON object with sorted keys.
pub fn format_extra(extra: &BTreeMap<String, serde_json::Value>) -> String {
	if extra.is_empty() {
		return String::from("{}");
	}
	let json = serde_json::to_string(extra).unwrap_or_else(|_| String::from("{}"));
	escape_control_chars(&json)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("line\nbreak", "line\\x0abreak")]
	#[case("tab\there", "tab\\x09here")]
	#[case("caf\u{e9}", "caf\u{e9}")]
	fn test_escape_control_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_control_chars(input), expected);
	}

	#[rstest]
	fn test_format_extra_sorted() {
		let mut extra = BTreeMap::new();
		extra.insert("b".to_string(), serde_json::json!(2));
		extra.insert("a".to_string(), serde_json::json!("x"));
		assert_eq!(format_extra(&extra), r#"{"a":"x","b":2}"#);
	}

	#[rstest]
	fn test_format_extra_empty() {
		assert_eq!(format_extra(&BTreeMap::new()), "{}");
	}
}
