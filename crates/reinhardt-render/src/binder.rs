//! Model-to-component parameter binding.

use crate::coercion::{coerce, is_assignable, json_type};
use crate::error::BindingError;
use reinhardt_logging::{LogLevel, Logger, LoggerFactory};
use reinhardt_pages::{BoundParameterSet, ComponentDescriptor, InputField};
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::TypeId;

/// Fills a component's declared inputs from the fields of a model.
///
/// The model's fields are the entries of its serialized map, so
/// `#[serde(skip)]` hides a field and `#[serde(rename)]` renames it. Inputs
/// without a usable field are left out of the result with a warning; only a
/// model that fails to serialize fails the bind.
#[derive(Debug, Clone)]
pub struct ParameterBinder {
	logger: Logger,
}

enum Unbound {
	Absent,
	NullForRequired,
	Mismatch { actual: &'static str },
}

impl Unbound {
	fn reason(&self) -> &'static str {
		match self {
			Unbound::Absent => "expected field absent",
			Unbound::NullForRequired => "null for non-nullable input",
			Unbound::Mismatch { .. } => "type mismatch",
		}
	}
}

impl ParameterBinder {
	pub fn new(loggers: &dyn LoggerFactory) -> Self {
		Self {
			logger: loggers.get_logger("reinhardt.render.binder"),
		}
	}

	/// Binds `model`'s fields to the inputs in `descriptor`.
	pub fn bind<M: Serialize + 'static>(
		&self,
		model: &M,
		descriptor: &ComponentDescriptor,
	) -> Result<BoundParameterSet, BindingError> {
		let model_name = std::any::type_name::<M>();
		let reflected = serde_json::to_value(model).map_err(|source| {
			self.logger
				.record(LogLevel::Error, "failed to read model fields")
				.field("component", descriptor.component_name())
				.field("model", model_name)
				.display("error", &source)
				.emit();
			BindingError::Reflection {
				model: model_name,
				source,
			}
		})?;

		let empty = Map::new();
		let fields = reflected.as_object().unwrap_or(&empty);
		let model_type = TypeId::of::<M>();

		let mut parameters = BoundParameterSet::new();
		for input in descriptor.inputs() {
			match self.bind_input(input, fields, &reflected, model_type) {
				Ok(value) => {
					parameters.insert(input.name(), value);
				}
				Err(unbound) => self.warn_unbound(descriptor, input, &unbound),
			}
		}
		Ok(parameters)
	}

	fn bind_input(
		&self,
		input: &InputField,
		fields: &Map<String, Value>,
		whole: &Value,
		model_type: TypeId,
	) -> Result<Value, Unbound> {
		let kind = input.kind();
		let Some(value) = find_field(fields, input.name()) else {
			if input.accepts_type(model_type) {
				return Ok(whole.clone());
			}
			return Err(Unbound::Absent);
		};

		if value.is_null() {
			return if input.nullable() {
				Ok(Value::Null)
			} else {
				Err(Unbound::NullForRequired)
			};
		}

		if is_assignable(&kind, value) {
			return Ok(value.clone());
		}
		coerce(&kind, value).ok_or(Unbound::Mismatch {
			actual: json_type(value),
		})
	}

	fn warn_unbound(&self, descriptor: &ComponentDescriptor, input: &InputField, unbound: &Unbound) {
		let mut record = self
			.logger
			.record(LogLevel::Warning, "component input left unbound")
			.field("component", descriptor.component_name())
			.field("field", input.name())
			.field("reason", unbound.reason())
			.display("expected", input.kind());
		if let Unbound::Mismatch { actual } = unbound {
			record = record.field("actual", *actual);
		}
		record.emit();
	}
}

/// Exact-case match first, then the first case-insensitive one.
fn find_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
	if let Some(value) = fields.get(name) {
		return Some(value);
	}
	let folded = name.to_lowercase();
	fields
		.iter()
		.find(|(key, _)| key.to_lowercase() == folded)
		.map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_logging::{LoggingConfig, LoggingManager, MemoryHandler};
	use reinhardt_pages::ParamKind;
	use rstest::{fixture, rstest};
	use serde_json::json;

	struct Harness {
		binder: ParameterBinder,
		memory: MemoryHandler,
	}

	#[fixture]
	fn harness() -> Harness {
		let memory = MemoryHandler::new(LogLevel::Debug);
		let manager = LoggingManager::empty(LoggingConfig::with_level(LogLevel::Debug))
			.with_handler(memory.clone());
		Harness {
			binder: ParameterBinder::new(&manager),
			memory,
		}
	}

	#[derive(Serialize)]
	struct Mail {
		subject: String,
		body: String,
		#[serde(skip)]
		#[allow(dead_code)]
		secret: String,
		attachments: Option<u32>,
	}

	fn mail() -> Mail {
		Mail {
			subject: "Hi".into(),
			body: "<p>x</p>".into(),
			secret: "hidden".into(),
			attachments: None,
		}
	}

	#[rstest]
	fn test_binds_matching_fields_in_declaration_order(harness: Harness) {
		let descriptor = ComponentDescriptor::new("MailView")
			.input::<String>("body")
			.input::<String>("subject");

		let bound = harness.binder.bind(&mail(), &descriptor).unwrap();

		assert_eq!(bound.keys().collect::<Vec<_>>(), ["body", "subject"]);
		assert_eq!(bound.get("subject"), Some(&json!("Hi")));
		assert!(harness.memory.get_records().is_empty());
	}

	#[rstest]
	#[case::exact_case_wins("Title", "exact")]
	#[case::first_case_folded_match("tItLe", "lower")]
	fn test_case_insensitive_lookup(
		harness: Harness,
		#[case] input: &str,
		#[case] expected: &str,
	) {
		let fields = json!({"title": "lower", "Title": "exact", "TITLE": "upper"});
		let descriptor = ComponentDescriptor::new("Card").input::<String>(input);

		let bound = harness.binder.bind(&fields, &descriptor).unwrap();

		assert_eq!(bound.get(input), Some(&json!(expected)));
		assert!(harness.memory.records_at(LogLevel::Warning).is_empty());
	}

	#[rstest]
	fn test_skipped_field_is_not_visible(harness: Harness) {
		let descriptor = ComponentDescriptor::new("MailView").input::<String>("secret");

		let bound = harness.binder.bind(&mail(), &descriptor).unwrap();

		assert!(bound.is_empty());
		let warnings = harness.memory.records_at(LogLevel::Warning);
		assert_eq!(warnings.len(), 1);
		assert_eq!(warnings[0].field_str("reason"), Some("expected field absent"));
		assert_eq!(warnings[0].field_str("field"), Some("secret"));
		assert_eq!(warnings[0].field_str("component"), Some("MailView"));
	}

	#[rstest]
	#[case::nullable(true, Some(Value::Null))]
	#[case::required(false, None)]
	fn test_null_field(harness: Harness, #[case] nullable: bool, #[case] expected: Option<Value>) {
		let descriptor = ComponentDescriptor::new("MailView").input_kind(
			"attachments",
			ParamKind::integer(0, u32::MAX as i128),
			nullable,
		);

		let bound = harness.binder.bind(&mail(), &descriptor).unwrap();

		assert_eq!(bound.get("attachments").cloned(), expected);
	}

	#[rstest]
	fn test_whole_model_fallback(harness: Harness) {
		let descriptor = ComponentDescriptor::new("MailView").model::<Mail>("mail");

		let bound = harness.binder.bind(&mail(), &descriptor).unwrap();

		assert_eq!(
			bound.get("mail"),
			Some(&json!({"subject": "Hi", "body": "<p>x</p>", "attachments": null}))
		);
	}

	#[rstest]
	fn test_other_model_type_does_not_take_whole_model(harness: Harness) {
		struct Invoice;
		let descriptor = ComponentDescriptor::new("MailView").model::<Invoice>("mail");

		let bound = harness.binder.bind(&mail(), &descriptor).unwrap();

		assert!(bound.is_empty());
		assert_eq!(harness.memory.records_at(LogLevel::Warning).len(), 1);
	}

	#[rstest]
	fn test_primitive_model_binds_whole_to_matching_type(harness: Harness) {
		let descriptor = ComponentDescriptor::new("Label")
			.input::<String>("text")
			.input::<Option<String>>("caption")
			.input::<u32>("width");

		let bound = harness.binder.bind(&String::from("hello"), &descriptor).unwrap();

		assert_eq!(bound.get("text"), Some(&json!("hello")));
		assert_eq!(bound.get("caption"), Some(&json!("hello")));
		assert!(!bound.contains("width"));
		let warnings = harness.memory.records_at(LogLevel::Warning);
		assert_eq!(warnings.len(), 1);
		assert_eq!(warnings[0].field_str("field"), Some("width"));
	}

	#[rstest]
	fn test_mismatch_warning_carries_types(harness: Harness) {
		let model = json!({"count": "not-a-number"});
		let descriptor = ComponentDescriptor::new("Counter").input::<i32>("count");

		let bound = harness.binder.bind(&model, &descriptor).unwrap();

		assert!(!bound.contains("count"));
		let warnings = harness.memory.records_at(LogLevel::Warning);
		assert_eq!(warnings.len(), 1);
		assert_eq!(warnings[0].field_str("reason"), Some("type mismatch"));
		assert_eq!(warnings[0].field_str("actual"), Some("string"));
		assert_eq!(
			warnings[0].field_str("expected"),
			Some("integer[-2147483648..=2147483647]")
		);
	}

	#[rstest]
	fn test_non_map_model_exposes_no_fields(harness: Harness) {
		let descriptor = ComponentDescriptor::new("Label")
			.input::<String>("text")
			.input::<Value>("raw");

		let bound = harness.binder.bind(&"plain", &descriptor).unwrap();

		assert!(!bound.contains("text"));
		assert_eq!(bound.get("raw"), Some(&json!("plain")));
	}

	struct Unreadable;

	impl Serialize for Unreadable {
		fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
			Err(serde::ser::Error::custom("field is not readable"))
		}
	}

	#[rstest]
	fn test_reflection_failure_is_fatal(harness: Harness) {
		let descriptor = ComponentDescriptor::new("Label").input::<String>("text");

		let err = harness.binder.bind(&Unreadable, &descriptor).unwrap_err();

		assert!(err.to_string().contains("field is not readable"));
		let errors = harness.memory.records_at(LogLevel::Error);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].field_str("component"), Some("Label"));
	}
}
