//! Closed set of vocabulary type names.
//!
//! Every `"type"` string this crate understands maps onto one variant of [BaseType] through an
//! exhaustive match generated by [crate::macros::strenum]. Names outside the vocabulary fail to
//! resolve and are left to the caller to classify as unknown.

pub mod activity;
pub mod actor;
pub mod base;
pub mod collection;
pub mod document;
pub mod link;
pub mod object;

/// Candidate type names carried by a json object, in wire order.
///
/// `"type"` may hold a single string or an array; non string entries of an array are skipped.
pub fn discriminators(map: &serde_json::Map<String, serde_json::Value>) -> Vec<&str> {
	match map.get("type") {
		Some(serde_json::Value::String(x)) => vec![x.as_str()],
		Some(serde_json::Value::Array(arr)) => arr.iter().filter_map(|x| x.as_str()).collect(),
		_ => vec![],
	}
}

/// First candidate name which is part of the vocabulary.
pub fn resolve<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<base::BaseType> {
	names.into_iter().find_map(|x| base::BaseType::try_from(x).ok())
}
