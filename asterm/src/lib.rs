//! Typed ActivityStreams 2.0 terms on top of generic json trees.
//!
//! Every property of a term holds values which may take one of several shapes: embedded objects,
//! links, bare iris, strings, language maps, numbers, dates. [PropertyValue] resolves raw json
//! against each property's ordered alternatives, falling back to keeping unclassifiable values
//! verbatim, and [Term] moves whole documents between their typed and generic shapes without
//! losing extension fields.
//!
//! ```
//! let ignore = asterm::resolve(&serde_json::json!({
//! 	"type": "Ignore",
//! 	"actor": "https://example.com/alice",
//! 	"object": { "type": "Note", "content": "hi" },
//! })).unwrap();
//! assert_eq!(ignore.actor().id(), Ok("https://example.com/alice"));
//! assert_eq!(ignore.object().inner().unwrap().content(), Ok("hi"));
//! ```

pub(crate) mod macros;
pub(crate) use macros::strenum;
pub use macros::TypeValueError;

mod accessors;

mod error;
pub use error::{Error, Result};

mod field;
pub use field::{Field, FieldErr};

pub mod jsonld;
pub use jsonld::LD;

mod node;
pub use node::Node;

pub mod property;
pub use property::{Admit, Alternative, PropertyValue};

pub mod schema;

pub mod target;
pub use target::Addressed;

mod term;
pub use term::{Term, MAX_NESTING};

pub mod types;
pub use types::{
	activity::{AcceptType, ActivityType, IgnoreType, IntransitiveActivityType, OfferType, RejectType},
	actor::ActorType,
	base::BaseType,
	collection::CollectionType,
	document::DocumentType,
	link::LinkType,
	object::ObjectType,
};

pub mod xsd;
pub use xsd::Iri;

/// Classify a standalone document by its `type` and deserialize it.
///
/// Documents without any known type name are read as plain `Object`s.
pub fn resolve(value: &serde_json::Value) -> Result<Term> {
	let map = value.as_object().ok_or(Error::NotAnObject(error::json_kind(value)))?;
	let kind = match types::resolve(types::discriminators(map)) {
		Some(kind) => kind,
		None => {
			tracing::debug!("no known type for document, reading it as Object");
			BaseType::Object(ObjectType::Object)
		},
	};
	Term::deserialize(kind, map)
}

/// Like [resolve], but documents without a known type name are refused.
pub fn resolve_strict(value: &serde_json::Value) -> Result<Term> {
	let map = value.as_object().ok_or(Error::NotAnObject(error::json_kind(value)))?;
	let names = types::discriminators(map);
	match types::resolve(names.iter().copied()) {
		Some(kind) => Term::deserialize(kind, map),
		None => Err(Error::UnknownType(names.into_iter().map(|x| x.to_string()).collect())),
	}
}
