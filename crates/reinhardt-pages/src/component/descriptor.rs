//! Declared component inputs.

use super::r#trait::Component;
use std::any::TypeId;
use std::fmt;

/// The declared type of a component input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
	String,
	/// An integer that must fall within `[min, max]`.
	Integer { min: i128, max: i128 },
	Float,
	Boolean,
	/// A specific structured type, compared by `TypeId` when the whole model is
	/// offered and structurally (any JSON object) when a model field is.
	Model {
		type_id: TypeId,
		type_name: &'static str,
	},
	/// Any value at all, including the whole model.
	Json,
}

impl ParamKind {
	pub fn model<M: 'static>() -> Self {
		ParamKind::Model {
			type_id: TypeId::of::<M>(),
			type_name: std::any::type_name::<M>(),
		}
	}

	pub fn integer(min: i128, max: i128) -> Self {
		ParamKind::Integer { min, max }
	}

	/// Short name used in log fields and error messages.
	pub fn label(&self) -> &'static str {
		match self {
			ParamKind::String => "string",
			ParamKind::Integer { .. } => "integer",
			ParamKind::Float => "float",
			ParamKind::Boolean => "boolean",
			ParamKind::Model { type_name, .. } => type_name,
			ParamKind::Json => "json",
		}
	}
}

impl fmt::Display for ParamKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamKind::Integer { min, max } => write!(f, "integer[{min}..={max}]"),
			other => f.write_str(other.label()),
		}
	}
}

/// Maps a Rust field type onto the kind of input it declares.
pub trait InputType: 'static {
	fn kind() -> ParamKind;

	fn nullable() -> bool {
		false
	}

	/// Model types the input takes whole when no field matches it.
	fn accepted_types() -> Vec<TypeId> {
		vec![TypeId::of::<Self>()]
	}
}

impl InputType for String {
	fn kind() -> ParamKind {
		ParamKind::String
	}
}

impl InputType for bool {
	fn kind() -> ParamKind {
		ParamKind::Boolean
	}
}

impl InputType for f32 {
	fn kind() -> ParamKind {
		ParamKind::Float
	}
}

impl InputType for f64 {
	fn kind() -> ParamKind {
		ParamKind::Float
	}
}

impl InputType for serde_json::Value {
	fn kind() -> ParamKind {
		ParamKind::Json
	}

	fn nullable() -> bool {
		true
	}
}

impl<T: InputType> InputType for Option<T> {
	fn kind() -> ParamKind {
		T::kind()
	}

	fn nullable() -> bool {
		true
	}

	fn accepted_types() -> Vec<TypeId> {
		let mut types = T::accepted_types();
		types.push(TypeId::of::<Self>());
		types
	}
}

macro_rules! integer_input {
	($($ty:ty),* $(,)?) => {
		$(
			impl InputType for $ty {
				fn kind() -> ParamKind {
					ParamKind::Integer {
						min: <$ty>::MIN as i128,
						max: <$ty>::MAX as i128,
					}
				}
			}
		)*
	};
}

integer_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// One declared input of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
	name: String,
	kind: ParamKind,
	nullable: bool,
	accepted_types: Vec<TypeId>,
}

impl InputField {
	pub fn new(name: impl Into<String>, kind: ParamKind, nullable: bool) -> Self {
		Self {
			name: name.into(),
			kind,
			nullable,
			accepted_types: Vec::new(),
		}
	}

	/// Declares the model types this input takes whole.
	pub fn accepting(mut self, types: impl IntoIterator<Item = TypeId>) -> Self {
		self.accepted_types.extend(types);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> ParamKind {
		self.kind
	}

	pub fn nullable(&self) -> bool {
		self.nullable
	}

	/// Whether a model of type `model` can be bound to this input as a whole.
	pub fn accepts_type(&self, model: TypeId) -> bool {
		match self.kind {
			ParamKind::Json => true,
			ParamKind::Model { type_id, .. } if type_id == model => true,
			_ => self.accepted_types.contains(&model),
		}
	}
}

/// A component type and its declared inputs, in declaration order.
///
/// Input names are unique ignoring case; declaring a name again replaces the
/// earlier declaration in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
	component: &'static str,
	inputs: Vec<InputField>,
}

impl ComponentDescriptor {
	pub fn new(component: &'static str) -> Self {
		Self {
			component,
			inputs: Vec::new(),
		}
	}

	/// Starts a descriptor named after `C`.
	pub fn of<C: Component>() -> Self {
		Self::new(C::name())
	}

	/// Declares an input whose kind follows from the Rust type `T`.
	pub fn input<T: InputType>(self, name: impl Into<String>) -> Self {
		let field = InputField::new(name, T::kind(), T::nullable()).accepting(T::accepted_types());
		self.declare(field)
	}

	/// Declares an input that takes the structured type `M`.
	pub fn model<M: 'static>(self, name: impl Into<String>) -> Self {
		self.input_kind(name, ParamKind::model::<M>(), false)
	}

	/// Declares an optional input that takes the structured type `M`.
	pub fn optional_model<M: 'static>(self, name: impl Into<String>) -> Self {
		self.input_kind(name, ParamKind::model::<M>(), true)
	}

	pub fn input_kind(self, name: impl Into<String>, kind: ParamKind, nullable: bool) -> Self {
		self.declare(InputField::new(name, kind, nullable))
	}

	fn declare(mut self, field: InputField) -> Self {
		match self
			.inputs
			.iter_mut()
			.find(|existing| existing.name.to_lowercase() == field.name.to_lowercase())
		{
			Some(existing) => *existing = field,
			None => self.inputs.push(field),
		}
		self
	}

	pub fn component_name(&self) -> &'static str {
		self.component
	}

	pub fn inputs(&self) -> &[InputField] {
		&self.inputs
	}

	pub fn get(&self, name: &str) -> Option<&InputField> {
		self.inputs.iter().find(|input| input.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Order;

	#[rstest]
	fn test_input_types_map_to_kinds() {
		let descriptor = ComponentDescriptor::new("Receipt")
			.input::<String>("title")
			.input::<Option<String>>("note")
			.input::<u8>("items")
			.input::<f64>("total")
			.input::<bool>("paid")
			.input::<serde_json::Value>("extra")
			.model::<Order>("order");

		let kinds: Vec<_> = descriptor
			.inputs()
			.iter()
			.map(|i| (i.name(), i.kind(), i.nullable()))
			.collect();
		assert_eq!(
			kinds,
			vec![
				("title", ParamKind::String, false),
				("note", ParamKind::String, true),
				("items", ParamKind::integer(0, 255), false),
				("total", ParamKind::Float, false),
				("paid", ParamKind::Boolean, false),
				("extra", ParamKind::Json, true),
				("order", ParamKind::model::<Order>(), false),
			]
		);
	}

	#[rstest]
	fn test_duplicate_input_replaces_in_place() {
		let descriptor = ComponentDescriptor::new("Card")
			.input::<String>("title")
			.input::<String>("body")
			.input::<Option<String>>("Title");

		assert_eq!(descriptor.inputs().len(), 2);
		assert_eq!(descriptor.inputs()[0].name(), "Title");
		assert!(descriptor.inputs()[0].nullable());
		assert_eq!(descriptor.inputs()[1].name(), "body");
	}

	#[rstest]
	fn test_get_is_exact() {
		let descriptor = ComponentDescriptor::new("Card").input::<String>("title");
		assert!(descriptor.get("title").is_some());
		assert!(descriptor.get("TITLE").is_none());
	}

	#[rstest]
	#[case(ParamKind::String, "string")]
	#[case(ParamKind::integer(-128, 127), "integer[-128..=127]")]
	#[case(ParamKind::Json, "json")]
	fn test_kind_display(#[case] kind: ParamKind, #[case] expected: &str) {
		assert_eq!(kind.to_string(), expected);
	}

	#[rstest]
	fn test_whole_model_acceptance() {
		struct Other;
		let descriptor = ComponentDescriptor::new("Receipt")
			.input::<String>("label")
			.input::<Option<u32>>("count")
			.input::<serde_json::Value>("extra")
			.model::<Order>("order")
			.input_kind("manual", ParamKind::String, false);
		let accepts = |name: &str, model: TypeId| descriptor.get(name).unwrap().accepts_type(model);

		assert!(accepts("label", TypeId::of::<String>()));
		assert!(!accepts("label", TypeId::of::<Order>()));
		assert!(accepts("count", TypeId::of::<u32>()));
		assert!(accepts("count", TypeId::of::<Option<u32>>()));
		assert!(!accepts("count", TypeId::of::<u64>()));
		assert!(accepts("extra", TypeId::of::<Other>()));
		assert!(accepts("order", TypeId::of::<Order>()));
		assert!(!accepts("order", TypeId::of::<Other>()));
		assert!(!accepts("manual", TypeId::of::<String>()));
	}

	#[rstest]
	fn test_model_kind_compares_by_type() {
		struct Other;
		assert_eq!(ParamKind::model::<Order>(), ParamKind::model::<Order>());
		assert_ne!(ParamKind::model::<Order>(), ParamKind::model::<Other>());
	}
}
