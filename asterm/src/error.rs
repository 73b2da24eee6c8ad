/// Hard failures while moving terms between their typed and generic json shapes.
///
/// Values that merely fail to match one alternative of a property are not errors: they fall
/// through to the next alternative and ultimately to [crate::PropertyValue::Unknown].
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("expected a json object, got {0}")]
	NotAnObject(&'static str),

	#[error("no known vocabulary type among {0:?}")]
	UnknownType(Vec<String>),

	#[error("embedded objects nested deeper than {0} levels")]
	TooDeep(usize),

	#[error("float {0} cannot be represented in json")]
	NonFiniteFloat(f64),

	#[error("property '{property}': {source}")]
	Property {
		property: String,
		source: Box<Error>,
	},
}

impl Error {
	pub(crate) fn at(property: &str, source: Error) -> Self {
		Error::Property { property: property.to_string(), source: Box::new(source) }
	}

	/// innermost error, skipping property path wrappers
	pub fn root_cause(&self) -> &Error {
		match self {
			Error::Property { source, .. } => source.root_cause(),
			x => x,
		}
	}

	/// dotted property path leading to the innermost error
	pub fn path(&self) -> String {
		let mut path = Vec::new();
		let mut current = self;
		while let Error::Property { property, source } = current {
			path.push(property.as_str());
			current = source;
		}
		path.join(".")
	}
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
