//! Assignability and best-effort primitive coercion of JSON values.

use reinhardt_pages::ParamKind;
use serde_json::{Number, Value};

/// Whether `value` can be bound to an input of `kind` without conversion.
pub fn is_assignable(kind: &ParamKind, value: &Value) -> bool {
	match kind {
		ParamKind::String => value.is_string(),
		ParamKind::Integer { min, max } => {
			exact_integer(value).is_some_and(|n| (*min..=*max).contains(&n))
		}
		ParamKind::Float => value.is_number(),
		ParamKind::Boolean => value.is_boolean(),
		ParamKind::Model { .. } => value.is_object(),
		ParamKind::Json => true,
	}
}

/// Converts `value` to `kind` when a lossless primitive conversion exists.
pub fn coerce(kind: &ParamKind, value: &Value) -> Option<Value> {
	match (kind, value) {
		(ParamKind::String, Value::Number(n)) => Some(Value::String(n.to_string())),
		(ParamKind::String, Value::Bool(b)) => Some(Value::String(b.to_string())),

		(ParamKind::Integer { min, max }, _) => {
			let n = match value {
				Value::String(s) => s.trim().parse::<i128>().ok()?,
				Value::Number(_) => integral(value)?,
				Value::Bool(b) => i128::from(*b),
				_ => return None,
			};
			if !(*min..=*max).contains(&n) {
				return None;
			}
			integer_value(n)
		}

		(ParamKind::Float, Value::String(s)) => {
			let f = s.trim().parse::<f64>().ok()?;
			Number::from_f64(f).map(Value::Number)
		}
		(ParamKind::Float, Value::Bool(b)) => {
			Some(Value::from(if *b { 1.0 } else { 0.0 }))
		}

		(ParamKind::Boolean, Value::String(s)) => {
			let s = s.trim();
			if s.eq_ignore_ascii_case("true") {
				Some(Value::Bool(true))
			} else if s.eq_ignore_ascii_case("false") {
				Some(Value::Bool(false))
			} else {
				None
			}
		}
		(ParamKind::Boolean, Value::Number(_)) => integral(value).map(|n| Value::Bool(n != 0)),

		_ => None,
	}
}

/// JSON type name of `value`, for log fields.
pub fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(n) if n.is_f64() => "float",
		Value::Number(_) => "integer",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// The integer a number denotes, if it has no fractional part.
fn integral(value: &Value) -> Option<i128> {
	if let Some(n) = exact_integer(value) {
		return Some(n);
	}
	let f = value.as_f64()?;
	if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= u64::MAX as f64 {
		Some(f as i128)
	} else {
		None
	}
}

/// The integer a number holds, if it is stored as one.
fn exact_integer(value: &Value) -> Option<i128> {
	let Value::Number(n) = value else {
		return None;
	};
	n.as_i64()
		.map(i128::from)
		.or_else(|| n.as_u64().map(i128::from))
}

fn integer_value(n: i128) -> Option<Value> {
	if let Ok(i) = i64::try_from(n) {
		Some(Value::from(i))
	} else {
		u64::try_from(n).ok().map(Value::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	const I32: ParamKind = ParamKind::Integer {
		min: i32::MIN as i128,
		max: i32::MAX as i128,
	};
	const U8: ParamKind = ParamKind::Integer { min: 0, max: 255 };

	struct Order;

	#[rstest]
	#[case(ParamKind::String, json!("x"), true)]
	#[case(ParamKind::String, json!(1), false)]
	#[case(I32, json!(42), true)]
	#[case(I32, json!(42.5), false)]
	#[case(I32, json!(42.0), false)]
	#[case(U8, json!(256), false)]
	#[case(U8, json!(-1), false)]
	#[case(ParamKind::Float, json!(3), true)]
	#[case(ParamKind::Float, json!(3.5), true)]
	#[case(ParamKind::Boolean, json!(true), true)]
	#[case(ParamKind::Boolean, json!(1), false)]
	#[case(ParamKind::Json, json!(null), true)]
	#[case(ParamKind::Json, json!([1, 2]), true)]
	fn test_is_assignable(#[case] kind: ParamKind, #[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_assignable(&kind, &value), expected);
	}

	#[rstest]
	fn test_model_assignable_from_object_only() {
		let kind = ParamKind::model::<Order>();
		assert!(is_assignable(&kind, &json!({"id": 1})));
		assert!(!is_assignable(&kind, &json!("order")));
	}

	#[rstest]
	#[case(I32, json!("42"), Some(json!(42)))]
	#[case(I32, json!(" -7 "), Some(json!(-7)))]
	#[case(I32, json!("not-a-number"), None)]
	#[case(I32, json!("4.2"), None)]
	#[case(I32, json!(42.0), Some(json!(42)))]
	#[case(I32, json!(42.5), None)]
	#[case(I32, json!(true), Some(json!(1)))]
	#[case(U8, json!("300"), None)]
	#[case(U8, json!(false), Some(json!(0)))]
	#[case(ParamKind::Float, json!("2.5"), Some(json!(2.5)))]
	#[case(ParamKind::Float, json!("NaN"), None)]
	#[case(ParamKind::Float, json!("inf"), None)]
	#[case(ParamKind::Float, json!(true), Some(json!(1.0)))]
	#[case(ParamKind::String, json!(42), Some(json!("42")))]
	#[case(ParamKind::String, json!(1.5), Some(json!("1.5")))]
	#[case(ParamKind::String, json!(false), Some(json!("false")))]
	#[case(ParamKind::String, json!({"a": 1}), None)]
	#[case(ParamKind::Boolean, json!(" TRUE "), Some(json!(true)))]
	#[case(ParamKind::Boolean, json!("False"), Some(json!(false)))]
	#[case(ParamKind::Boolean, json!("yes"), None)]
	#[case(ParamKind::Boolean, json!(0), Some(json!(false)))]
	#[case(ParamKind::Boolean, json!(2), Some(json!(true)))]
	#[case(ParamKind::Boolean, json!(0.5), None)]
	fn test_coerce(#[case] kind: ParamKind, #[case] value: Value, #[case] expected: Option<Value>) {
		assert_eq!(coerce(&kind, &value), expected);
	}

	#[rstest]
	fn test_model_and_json_never_coerce() {
		assert_eq!(coerce(&ParamKind::model::<Order>(), &json!("{}")), None);
		assert_eq!(coerce(&ParamKind::Json, &json!("x")), None);
	}

	#[rstest]
	fn test_u64_range_survives() {
		let kind = ParamKind::Integer {
			min: 0,
			max: u64::MAX as i128,
		};
		assert_eq!(
			coerce(&kind, &json!(u64::MAX.to_string())),
			Some(json!(u64::MAX))
		);
	}

	#[rstest]
	#[case(json!(null), "null")]
	#[case(json!(1), "integer")]
	#[case(json!(1.5), "float")]
	#[case(json!("s"), "string")]
	fn test_json_type(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(json_type(&value), expected);
	}
}
