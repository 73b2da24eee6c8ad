//! Property tables for every vocabulary kind.
//!
//! Kinds inherit the tables of their parents (an Activity is also an Object), and a term only
//! recognizes the keys its own kind declares: anything else is kept aside as unknown.

use crate::property::{Admit, Alternative};
use crate::types::{
	activity::{ActivityType, IntransitiveActivityType},
	base::BaseType,
	collection::CollectionType,
	object::ObjectType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
	/// wire key
	pub name: &'static str,
	/// at most one value expected
	pub functional: bool,
	/// also carries a `<name>Map` natural language map
	pub natural_language: bool,
	/// alternatives in resolution order
	pub range: &'static [Alternative],
}

const fn prop(name: &'static str, range: &'static [Alternative]) -> PropertyDef {
	PropertyDef { name, functional: false, natural_language: false, range }
}

const fn functional(name: &'static str, range: &'static [Alternative]) -> PropertyDef {
	PropertyDef { name, functional: true, natural_language: false, range }
}

const fn text(name: &'static str, functional: bool) -> PropertyDef {
	PropertyDef { name, functional, natural_language: true, range: TEXT }
}

use Alternative as A;

const OBJECT_REF: &[Alternative] = &[A::Object(Admit::Any), A::Link, A::Iri];
const COLLECTION_REF: &[Alternative] = &[A::Object(Admit::Collection), A::Link, A::Iri];
const PAGE_REF: &[Alternative] = &[A::Object(Admit::CollectionPage), A::Link, A::Iri];
const IMAGE_REF: &[Alternative] = &[A::Object(Admit::Image), A::Link, A::Iri];
const LINK_REF: &[Alternative] = &[A::Link, A::Iri];
const IRI: &[Alternative] = &[A::Iri];
const TEXT: &[Alternative] = &[A::String, A::LangString];
const STRING: &[Alternative] = &[A::String];
const DATETIME: &[Alternative] = &[A::DateTime];
const DURATION: &[Alternative] = &[A::Duration];
const FLOAT: &[Alternative] = &[A::Float];
const COUNT: &[Alternative] = &[A::NonNegativeInteger];
const BOOLEAN: &[Alternative] = &[A::Boolean];
const UNITS: &[Alternative] = &[A::Iri, A::String];
const CLOSED: &[Alternative] = &[A::Object(Admit::Any), A::Link, A::Iri, A::DateTime, A::Boolean];
const FORMER_TYPE: &[Alternative] = &[A::Object(Admit::Any), A::String];

pub const OBJECT: &[PropertyDef] = &[
	functional("id", IRI),
	prop("attachment", OBJECT_REF),
	prop("attributedTo", OBJECT_REF),
	prop("audience", OBJECT_REF),
	prop("bcc", OBJECT_REF),
	prop("bto", OBJECT_REF),
	prop("cc", OBJECT_REF),
	text("content", false),
	prop("context", OBJECT_REF),
	functional("duration", DURATION),
	functional("endTime", DATETIME),
	prop("generator", OBJECT_REF),
	prop("icon", IMAGE_REF),
	prop("image", IMAGE_REF),
	prop("inReplyTo", OBJECT_REF),
	functional("likes", COLLECTION_REF),
	prop("location", OBJECT_REF),
	functional("mediaType", STRING),
	text("name", false),
	prop("preview", OBJECT_REF),
	functional("published", DATETIME),
	functional("replies", COLLECTION_REF),
	functional("shares", COLLECTION_REF),
	functional("source", OBJECT_REF),
	functional("startTime", DATETIME),
	text("summary", false),
	prop("tag", OBJECT_REF),
	prop("to", OBJECT_REF),
	functional("updated", DATETIME),
	prop("url", LINK_REF),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const OBJECT_MISCELLANY: &[PropertyDef] = &[
	functional("sensitive", BOOLEAN),
	functional("quoteUrl", OBJECT_REF),
];

#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const OBJECT_MISCELLANY: &[PropertyDef] = &[];

pub const LINK: &[PropertyDef] = &[
	functional("id", IRI),
	functional("height", COUNT),
	functional("href", IRI),
	functional("hreflang", STRING),
	functional("mediaType", STRING),
	text("name", false),
	prop("preview", OBJECT_REF),
	prop("rel", STRING),
	functional("width", COUNT),
];

pub const INTRANSITIVE_ACTIVITY: &[PropertyDef] = &[
	prop("actor", OBJECT_REF),
	prop("instrument", OBJECT_REF),
	prop("origin", OBJECT_REF),
	prop("result", OBJECT_REF),
	prop("target", OBJECT_REF),
];

pub const TRANSITIVE: &[PropertyDef] = &[
	prop("object", OBJECT_REF),
];

pub const QUESTION: &[PropertyDef] = &[
	prop("anyOf", OBJECT_REF),
	prop("closed", CLOSED),
	prop("oneOf", OBJECT_REF),
];

pub const ACTOR: &[PropertyDef] = &[
	functional("discoverable", BOOLEAN),
	functional("endpoints", OBJECT_REF),
	functional("followers", COLLECTION_REF),
	functional("following", COLLECTION_REF),
	functional("inbox", COLLECTION_REF),
	functional("liked", COLLECTION_REF),
	functional("outbox", COLLECTION_REF),
	text("preferredUsername", true),
	prop("streams", COLLECTION_REF),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const ACTOR_MISCELLANY: &[PropertyDef] = &[
	functional("manuallyApprovesFollowers", BOOLEAN),
	functional("movedTo", OBJECT_REF),
];

#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const ACTOR_MISCELLANY: &[PropertyDef] = &[];

pub const COLLECTION: &[PropertyDef] = &[
	functional("current", PAGE_REF),
	functional("first", PAGE_REF),
	functional("last", PAGE_REF),
	functional("totalItems", COUNT),
];

pub const UNORDERED_ITEMS: &[PropertyDef] = &[
	prop("items", OBJECT_REF),
];

pub const ORDERED_ITEMS: &[PropertyDef] = &[
	prop("orderedItems", OBJECT_REF),
];

pub const COLLECTION_PAGE: &[PropertyDef] = &[
	functional("next", PAGE_REF),
	functional("partOf", COLLECTION_REF),
	functional("prev", PAGE_REF),
];

pub const ORDERED_COLLECTION_PAGE: &[PropertyDef] = &[
	functional("startIndex", COUNT),
];

pub const PLACE: &[PropertyDef] = &[
	functional("accuracy", FLOAT),
	functional("altitude", FLOAT),
	functional("latitude", FLOAT),
	functional("longitude", FLOAT),
	functional("radius", FLOAT),
	functional("units", UNITS),
];

pub const PROFILE: &[PropertyDef] = &[
	functional("describes", OBJECT_REF),
];

pub const RELATIONSHIP: &[PropertyDef] = &[
	prop("object", OBJECT_REF),
	prop("relationship", OBJECT_REF),
	prop("subject", OBJECT_REF),
];

pub const TOMBSTONE: &[PropertyDef] = &[
	functional("deleted", DATETIME),
	prop("formerType", FORMER_TYPE),
];

/// All properties a kind recognizes, parents first.
pub fn properties(kind: BaseType) -> Vec<&'static PropertyDef> {
	let tables: Vec<&'static [PropertyDef]> = match kind {
		BaseType::Link(_) => vec![LINK],
		BaseType::Object(object) => {
			let mut tables = vec![OBJECT, OBJECT_MISCELLANY];
			match object {
				ObjectType::Activity(ActivityType::IntransitiveActivity(IntransitiveActivityType::Question)) =>
					tables.extend([INTRANSITIVE_ACTIVITY, QUESTION]),
				ObjectType::Activity(ActivityType::IntransitiveActivity(_)) =>
					tables.push(INTRANSITIVE_ACTIVITY),
				ObjectType::Activity(_) =>
					tables.extend([INTRANSITIVE_ACTIVITY, TRANSITIVE]),
				ObjectType::Actor(_) =>
					tables.extend([ACTOR, ACTOR_MISCELLANY]),
				ObjectType::Collection(collection) => {
					tables.push(COLLECTION);
					tables.push(if collection.is_ordered() { ORDERED_ITEMS } else { UNORDERED_ITEMS });
					if matches!(collection, CollectionType::CollectionPage | CollectionType::OrderedCollectionPage) {
						tables.push(COLLECTION_PAGE);
					}
					if matches!(collection, CollectionType::OrderedCollectionPage) {
						tables.push(ORDERED_COLLECTION_PAGE);
					}
				},
				ObjectType::Place => tables.push(PLACE),
				ObjectType::Profile => tables.push(PROFILE),
				ObjectType::Relationship => tables.push(RELATIONSHIP),
				ObjectType::Tombstone => tables.push(TOMBSTONE),
				ObjectType::Object
				| ObjectType::Article
				| ObjectType::Event
				| ObjectType::Note
				| ObjectType::Document(_) => {},
			}
			tables
		},
	};

	tables.into_iter().flatten().collect()
}

/// Declared property named by a wire key, for given kind.
pub fn lookup(kind: BaseType, name: &str) -> Option<&'static PropertyDef> {
	properties(kind).into_iter().find(|x| x.name == name)
}

#[cfg(test)]
mod test {
	use crate::types::{
		activity::{ActivityType, IgnoreType, IntransitiveActivityType},
		base::BaseType,
		collection::CollectionType,
		link::LinkType,
	};

	#[test]
	fn activities_inherit_object_properties() {
		let ignore = BaseType::from(ActivityType::Ignore(IgnoreType::Ignore));
		assert!(super::lookup(ignore, "actor").is_some());
		assert!(super::lookup(ignore, "object").is_some());
		assert!(super::lookup(ignore, "content").is_some());
		assert!(super::lookup(ignore, "inbox").is_none());
	}

	#[test]
	fn intransitive_activities_have_no_object() {
		let arrive = BaseType::from(ActivityType::IntransitiveActivity(IntransitiveActivityType::Arrive));
		assert!(super::lookup(arrive, "actor").is_some());
		assert!(super::lookup(arrive, "object").is_none());
		let question = BaseType::from(ActivityType::IntransitiveActivity(IntransitiveActivityType::Question));
		assert!(super::lookup(question, "oneOf").is_some());
	}

	#[test]
	fn ordered_collections_use_ordered_items() {
		let ordered = BaseType::from(CollectionType::OrderedCollectionPage);
		assert!(super::lookup(ordered, "orderedItems").is_some());
		assert!(super::lookup(ordered, "items").is_none());
		assert!(super::lookup(ordered, "startIndex").is_some());
		let plain = BaseType::from(CollectionType::Collection);
		assert!(super::lookup(plain, "items").is_some());
		assert!(super::lookup(plain, "partOf").is_none());
	}

	#[test]
	fn links_only_know_link_properties() {
		let mention = BaseType::Link(LinkType::Mention);
		assert!(super::lookup(mention, "href").is_some());
		assert!(super::lookup(mention, "name").is_some_and(|x| x.natural_language));
		assert!(super::lookup(mention, "content").is_none());
	}

	#[test]
	fn every_kind_declares_each_key_once() {
		for name in ["Object", "Question", "Person", "OrderedCollectionPage", "Relationship", "Link", "Tombstone"] {
			let kind = BaseType::try_from(name).unwrap();
			let props = super::properties(kind);
			for p in &props {
				assert_eq!(props.iter().filter(|x| x.name == p.name).count(), 1, "{name}.{}", p.name);
			}
		}
	}
}
