use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

use crate::types::{base::BaseType, collection::CollectionType, document::DocumentType, object::ObjectType};
use crate::{xsd, Field, FieldErr, Iri, Term};

/// Which embedded objects a property admits, by their resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admit {
	Any,
	Collection,
	CollectionPage,
	Image,
}

impl Admit {
	pub fn admits(&self, kind: ObjectType) -> bool {
		match self {
			Admit::Any => true,
			Admit::Collection => matches!(kind, ObjectType::Collection(_)),
			Admit::CollectionPage => matches!(
				kind,
				ObjectType::Collection(CollectionType::CollectionPage | CollectionType::OrderedCollectionPage)
			),
			Admit::Image => matches!(kind, ObjectType::Document(DocumentType::Image)),
		}
	}
}

/// One shape a property value may take.
///
/// Properties list their alternatives in priority order; resolution walks that list and keeps
/// the first alternative that matches, so the order is part of the property's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
	Object(Admit),
	Link,
	Iri,
	String,
	LangString,
	Float,
	NonNegativeInteger,
	Boolean,
	DateTime,
	Duration,
}

impl Alternative {
	fn matches(&self, raw: &Value, names: &[&str], depth: usize) -> crate::Result<Option<PropertyValue>> {
		let parsed = match self {
			Alternative::Object(admit) => {
				let Value::Object(map) = raw else { return Ok(None) };
				let kind = names.iter().find_map(|x| match BaseType::try_from(*x) {
					Ok(BaseType::Object(kind)) if admit.admits(kind) => Some(BaseType::Object(kind)),
					_ => None,
				});
				return match kind {
					Some(kind) => Ok(Some(PropertyValue::Object(Box::new(Term::deserialize_at(kind, map, depth + 1)?)))),
					None => Ok(None),
				};
			},
			Alternative::Link => {
				let Value::Object(map) = raw else { return Ok(None) };
				let kind = names.iter().find_map(|x| match BaseType::try_from(*x) {
					Ok(BaseType::Link(kind)) => Some(BaseType::Link(kind)),
					_ => None,
				});
				return match kind {
					Some(kind) => Ok(Some(PropertyValue::Link(Box::new(Term::deserialize_at(kind, map, depth + 1)?)))),
					None => Ok(None),
				};
			},
			Alternative::Iri => xsd::iri(raw).map(PropertyValue::Iri),
			Alternative::String => xsd::string(raw).map(PropertyValue::String),
			Alternative::LangString => xsd::lang_string(raw).map(PropertyValue::LangString),
			Alternative::Float => xsd::float(raw).map(PropertyValue::Float),
			Alternative::NonNegativeInteger => xsd::non_negative_integer(raw).map(PropertyValue::NonNegativeInteger),
			Alternative::Boolean => xsd::boolean(raw).map(PropertyValue::Boolean),
			Alternative::DateTime => xsd::datetime(raw).map(PropertyValue::DateTime),
			Alternative::Duration => xsd::duration(raw).map(PropertyValue::Duration),
		};

		match parsed {
			Ok(x) => Ok(Some(x)),
			Err(e) => {
				tracing::trace!("skipping alternative {self:?}: {e}");
				Ok(None)
			},
		}
	}
}

/// A single property value: exactly one of the shapes a property may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Object(Box<Term>),
	Link(Box<Term>),
	Iri(Iri),
	String(String),
	LangString(BTreeMap<String, String>),
	Float(f64),
	NonNegativeInteger(u64),
	Boolean(bool),
	DateTime(DateTime<Utc>),
	Duration(TimeDelta),
	/// anything no alternative could classify, kept verbatim
	Unknown(Value),
}

impl PropertyValue {
	/// Resolve a raw json value against an ordered list of alternatives.
	///
	/// Never fails because nothing matched, that ends up as [PropertyValue::Unknown]. Errors come
	/// only from embedded objects which were classified but could not be deserialized.
	pub fn deserialize(alternatives: &[Alternative], raw: &Value) -> crate::Result<Self> {
		Self::deserialize_at(alternatives, raw, 0)
	}

	pub(crate) fn deserialize_at(alternatives: &[Alternative], raw: &Value, depth: usize) -> crate::Result<Self> {
		let names = match raw {
			Value::Object(map) => crate::types::discriminators(map),
			_ => vec![],
		};

		for alternative in alternatives {
			if let Some(value) = alternative.matches(raw, &names, depth)? {
				return Ok(value);
			}
		}

		if !names.is_empty() {
			tracing::debug!("no admitted type among {names:?}, keeping value as unknown");
		}
		Ok(PropertyValue::Unknown(raw.clone()))
	}

	pub fn serialize(&self) -> crate::Result<Value> {
		Ok(match self {
			PropertyValue::Object(x) | PropertyValue::Link(x) => Value::Object(x.serialize()?),
			PropertyValue::Iri(x) => Value::String(x.to_string()),
			PropertyValue::String(x) => Value::String(x.clone()),
			PropertyValue::LangString(x) => Value::Object(
				x.iter()
					.map(|(k, v)| (k.clone(), Value::String(v.clone())))
					.collect()
			),
			PropertyValue::Float(x) => xsd::format_float(*x)?,
			PropertyValue::NonNegativeInteger(x) => Value::from(*x),
			PropertyValue::Boolean(x) => Value::Bool(*x),
			PropertyValue::DateTime(x) => Value::String(xsd::format_datetime(x)),
			PropertyValue::Duration(x) => Value::String(xsd::format_duration(x)),
			PropertyValue::Unknown(x) => x.clone(),
		})
	}

	pub fn iri(value: &str) -> Result<Self, xsd::XsdError> {
		Ok(PropertyValue::Iri(Iri::parse(value)?))
	}

	pub fn object(term: Term) -> Self {
		if term.kind().is_link() {
			PropertyValue::Link(Box::new(term))
		} else {
			PropertyValue::Object(Box::new(term))
		}
	}

	/// name of the populated alternative
	pub fn alternative(&self) -> &'static str {
		match self {
			PropertyValue::Object(_) => "object",
			PropertyValue::Link(_) => "link",
			PropertyValue::Iri(_) => "iri",
			PropertyValue::String(_) => "string",
			PropertyValue::LangString(_) => "langString",
			PropertyValue::Float(_) => "float",
			PropertyValue::NonNegativeInteger(_) => "nonNegativeInteger",
			PropertyValue::Boolean(_) => "boolean",
			PropertyValue::DateTime(_) => "dateTime",
			PropertyValue::Duration(_) => "duration",
			PropertyValue::Unknown(_) => "unknown",
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::String(x) => Some(x),
			_ => None,
		}
	}

	/// embedded object or link, if any
	pub fn as_term(&self) -> Option<&Term> {
		match self {
			PropertyValue::Object(x) | PropertyValue::Link(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, PropertyValue::Unknown(_))
	}

	/// identifier this value points to: the iri itself, a link's href, an object's id
	pub fn id(&self) -> Field<&str> {
		match self {
			PropertyValue::Iri(x) => Ok(x.as_str()),
			PropertyValue::Link(x) => x.href().or_else(|_| x.id()),
			PropertyValue::Object(x) => x.id(),
			_ => Err(FieldErr("id")),
		}
	}
}

impl From<Iri> for PropertyValue {
	fn from(value: Iri) -> Self {
		PropertyValue::Iri(value)
	}
}

impl From<Term> for PropertyValue {
	fn from(value: Term) -> Self {
		PropertyValue::object(value)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{Admit, Alternative, PropertyValue};

	const OBJECT_OR_LINK: &[Alternative] = &[Alternative::Object(Admit::Any), Alternative::Link, Alternative::Iri];

	#[test]
	fn typed_map_becomes_object() {
		let value = PropertyValue::deserialize(OBJECT_OR_LINK, &json!({ "type": "Note", "content": "hi" })).unwrap();
		let term = value.as_term().expect("expected embedded object");
		assert_eq!(value.alternative(), "object");
		assert_eq!(term.kind().as_ref(), "Note");
		assert_eq!(term.content(), Ok("hi"));
	}

	#[test]
	fn link_types_only_resolve_through_link_alternative() {
		let raw = json!({ "type": "Mention", "href": "https://example.com/bob" });
		let value = PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap();
		assert_eq!(value.alternative(), "link");
		assert_eq!(value.id(), Ok("https://example.com/bob"));

		let objects_only = [Alternative::Object(Admit::Any), Alternative::Iri];
		let value = PropertyValue::deserialize(&objects_only, &raw).unwrap();
		assert_eq!(value, PropertyValue::Unknown(raw));
	}

	#[test]
	fn first_resolvable_type_name_wins() {
		let raw = json!({ "type": ["toot:Emoji", "Image"], "url": "https://example.com/e.png" });
		let value = PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap();
		assert_eq!(value.as_term().map(|x| x.kind().as_ref().to_string()), Some("Image".to_string()));
	}

	#[test]
	fn untyped_maps_are_unknown() {
		let raw = json!({ "href": "https://example.com" });
		assert_eq!(PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap(), PropertyValue::Unknown(raw));
	}

	#[test]
	fn admitted_kinds_restrict_objects() {
		let collections = [Alternative::Object(Admit::Collection), Alternative::Link, Alternative::Iri];
		let note = json!({ "type": "Note" });
		assert!(PropertyValue::deserialize(&collections, &note).unwrap().is_unknown());
		let ordered = json!({ "type": "OrderedCollection", "totalItems": 3 });
		let value = PropertyValue::deserialize(&collections, &ordered).unwrap();
		assert_eq!(value.as_term().and_then(|x| x.total_items().ok()), Some(3));
	}

	#[test]
	fn primitives_are_tried_in_declared_order() {
		let text = [Alternative::String, Alternative::LangString];
		assert_eq!(
			PropertyValue::deserialize(&text, &json!("hi")).unwrap(),
			PropertyValue::String("hi".into()),
		);
		assert_eq!(
			PropertyValue::deserialize(&text, &json!({ "en": "hi" })).unwrap().alternative(),
			"langString",
		);

		let iri_first = [Alternative::Iri, Alternative::String];
		let string_first = [Alternative::String, Alternative::Iri];
		assert_eq!(PropertyValue::deserialize(&iri_first, &json!("https://a.b")).unwrap().alternative(), "iri");
		assert_eq!(PropertyValue::deserialize(&string_first, &json!("https://a.b")).unwrap().alternative(), "string");
	}

	#[test]
	fn failed_primitives_fall_back_to_unknown() {
		let dates = [Alternative::DateTime];
		assert_eq!(
			PropertyValue::deserialize(&dates, &json!("not a date")).unwrap(),
			PropertyValue::Unknown(json!("not a date")),
		);
		assert_eq!(
			PropertyValue::deserialize(&dates, &json!(null)).unwrap(),
			PropertyValue::Unknown(json!(null)),
		);
	}

	#[test]
	fn nested_errors_propagate() {
		let mut raw = json!({ "type": "Note" });
		for _ in 0..crate::MAX_NESTING {
			raw = json!({ "type": "Note", "inReplyTo": raw });
		}
		let err = PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap_err();
		assert!(matches!(err.root_cause(), crate::Error::TooDeep(_)));
		assert!(err.path().starts_with("inReplyTo"));
	}

	#[test]
	fn malformed_type_entries_are_skipped() {
		let raw = json!({ "type": ["Note", 42], "content": "hi" });
		let value = PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap();
		assert_eq!(value.as_term().map(|x| x.types().to_vec()), Some(vec!["Note".to_string()]));
	}

	#[test]
	fn serialize_mirrors_deserialize() {
		for raw in [
			json!("https://example.com/alice"),
			json!({ "type": "Note", "content": "hi" }),
			json!({ "something": ["else", 1] }),
		] {
			let value = PropertyValue::deserialize(OBJECT_OR_LINK, &raw).unwrap();
			assert_eq!(value.serialize().unwrap(), raw);
		}
	}
}
