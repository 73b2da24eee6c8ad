use serde_json::Value;

use crate::{Field, FieldErr, PropertyValue, Term};

/// Values held under one property key of a term: nothing, one value, or many.
///
/// On the wire a single value is written bare and many values as an array; a node doesn't
/// remember which of the two it was read from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node(Vec<PropertyValue>);

impl Node {
	pub const fn empty() -> Self {
		Node(Vec::new())
	}

	pub fn one(value: impl Into<PropertyValue>) -> Self {
		Node(vec![value.into()])
	}

	pub fn many(values: impl IntoIterator<Item = PropertyValue>) -> Self {
		Node(values.into_iter().collect())
	}

	/// node holding one iri, empty if the given string isn't a valid iri
	pub fn link(uri: &str) -> Self {
		match PropertyValue::iri(uri) {
			Ok(x) => Node(vec![x]),
			Err(e) => {
				tracing::warn!("refusing to link '{uri}': {e}");
				Node::empty()
			},
		}
	}

	pub fn links<'a>(uris: impl IntoIterator<Item = &'a str>) -> Self {
		Node(uris.into_iter().flat_map(Node::link).collect())
	}

	/// first value, if any
	pub fn get(&self) -> Option<&PropertyValue> {
		self.0.first()
	}

	/// first embedded object or link
	pub fn inner(&self) -> Field<&Term> {
		self.0.iter().find_map(|x| x.as_term()).ok_or(FieldErr("inner"))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue> {
		self.0.iter()
	}

	pub fn push(&mut self, value: PropertyValue) {
		self.0.push(value);
	}

	/// true only if node holds nothing
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// id of first value: iri itself, href for links, id for objects
	pub fn id(&self) -> Field<&str> {
		self.get().ok_or(FieldErr("id"))?.id()
	}

	pub fn all_ids(&self) -> Vec<String> {
		self.0.iter()
			.filter_map(|x| Some(x.id().ok()?.to_string()))
			.collect()
	}

	pub(crate) fn deserialize_at(alternatives: &[crate::Alternative], raw: &Value, depth: usize) -> crate::Result<Self> {
		match raw {
			Value::Array(arr) => arr
				.iter()
				.map(|x| PropertyValue::deserialize_at(alternatives, x, depth))
				.collect::<crate::Result<Vec<_>>>()
				.map(Node),
			_ => Ok(Node(vec![PropertyValue::deserialize_at(alternatives, raw, depth)?])),
		}
	}

	/// single values are written bare, `None` when there's nothing to write
	pub fn serialize(&self) -> crate::Result<Option<Value>> {
		match self.0.as_slice() {
			[] => Ok(None),
			[x] => Ok(Some(x.serialize()?)),
			many => Ok(Some(Value::Array(
				many.iter()
					.map(|x| x.serialize())
					.collect::<crate::Result<Vec<_>>>()?
			))),
		}
	}
}

impl From<PropertyValue> for Node {
	fn from(value: PropertyValue) -> Self {
		Node(vec![value])
	}
}

impl From<Option<PropertyValue>> for Node {
	fn from(value: Option<PropertyValue>) -> Self {
		Node(value.into_iter().collect())
	}
}

impl From<Term> for Node {
	fn from(value: Term) -> Self {
		Node(vec![PropertyValue::object(value)])
	}
}

impl FromIterator<PropertyValue> for Node {
	fn from_iter<I: IntoIterator<Item = PropertyValue>>(iter: I) -> Self {
		Node(iter.into_iter().collect())
	}
}

impl IntoIterator for Node {
	type Item = PropertyValue;
	type IntoIter = std::vec::IntoIter<PropertyValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Node {
	type Item = &'a PropertyValue;
	type IntoIter = std::slice::Iter<'a, PropertyValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
