#[derive(Debug, thiserror::Error)]
pub enum VocabError {
	#[error("expected a json object, got {0}")]
	NotAnObject(&'static str),

	#[error("document has no usable 'type' discriminator")]
	MissingType,

	#[error("unrecognized type {0}")]
	UnknownType(String),

	#[error("invalid id: {0}")]
	InvalidId(serde_json::Value),

	#[error("document nested deeper than {0} levels")]
	TooDeep(usize),

	#[error("value for '{0}' matches none of its shapes")]
	ShapeMismatch(&'static str),

	#[error("property '{property}' is not defined on {kind}")]
	NotApplicable {
		property: &'static str,
		kind: &'static str,
	},

	#[error("property '{0}' is functional and already holds a value")]
	Functional(&'static str),

	#[error("property '{0}' has no natural language map")]
	NoLanguageMap(&'static str),

	#[error("float {0} cannot be represented in json")]
	NotRepresentable(f64),
}

pub type Result<T> = std::result::Result<T, VocabError>;

pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
