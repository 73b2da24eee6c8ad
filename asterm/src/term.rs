use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::schema::{self, PropertyDef};
use crate::types::base::BaseType;
use crate::{Error, Field, FieldErr, Node, PropertyValue};

/// Embedded objects deeper than this are refused rather than recursed into.
pub const MAX_NESTING: usize = 64;

static EMPTY: Node = Node::empty();

/// One vocabulary term instance: a Note, an Ignore, a Mention, ...
///
/// Declared properties are stored per wire key, language maps live next to their plain property,
/// and any key the term's kind doesn't declare is kept verbatim so it survives re-serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
	kind: BaseType,
	types: Vec<String>,
	properties: BTreeMap<&'static str, Node>,
	language_maps: BTreeMap<&'static str, BTreeMap<String, String>>,
	unknown: Map<String, Value>,
}

impl Term {
	pub fn new(kind: impl Into<BaseType>) -> Self {
		Term {
			kind: kind.into(),
			types: Vec::new(),
			properties: BTreeMap::new(),
			language_maps: BTreeMap::new(),
			unknown: Map::new(),
		}
	}

	pub fn kind(&self) -> BaseType {
		self.kind
	}

	/// type names as found on the wire; the kind's own name is added when serializing
	pub fn types(&self) -> &[String] {
		&self.types
	}

	pub fn set_types(mut self, types: Vec<String>) -> Self {
		self.types = types;
		self
	}

	/// declared properties of this term's kind
	pub fn declared(&self) -> Vec<&'static PropertyDef> {
		schema::properties(self.kind)
	}

	/// populated properties, by wire key
	pub fn properties(&self) -> impl Iterator<Item = (&'static str, &Node)> {
		self.properties.iter().map(|(k, v)| (*k, v))
	}

	/// values under given wire key, empty node if unset or not declared
	pub fn get(&self, property: &str) -> &Node {
		self.properties.get(property).unwrap_or(&EMPTY)
	}

	/// replace all values of a declared property, an empty node clears it
	pub fn set_property(&mut self, property: &str, node: Node) -> Field<()> {
		let def = self.definition(property)?;
		if def.functional && node.len() > 1 {
			tracing::debug!("setting {} values on functional property '{}'", node.len(), def.name);
		}
		if node.is_empty() {
			self.properties.remove(def.name);
		} else {
			self.properties.insert(def.name, node);
		}
		Ok(())
	}

	/// add one value to a declared property, functional properties get replaced instead
	pub fn append(&mut self, property: &str, value: PropertyValue) -> Field<()> {
		let def = self.definition(property)?;
		if def.functional {
			self.properties.insert(def.name, Node::one(value));
		} else {
			self.properties.entry(def.name).or_default().push(value);
		}
		Ok(())
	}

	// for builder style setters, which can't report errors
	pub(crate) fn put(&mut self, property: &str, node: Node) {
		if let Err(e) = self.set_property(property, node) {
			tracing::error!("cannot set property on {}: {e}", self.kind);
		}
	}

	fn definition(&self, property: &str) -> Field<&'static PropertyDef> {
		schema::lookup(self.kind, property).ok_or(FieldErr("property"))
	}

	/// natural language map of a property, present once touched even if empty
	pub fn language_map(&self, property: &str) -> Option<&BTreeMap<String, String>> {
		self.language_maps.get(property)
	}

	pub fn set_language_map(&mut self, property: &str, map: Option<BTreeMap<String, String>>) -> Field<()> {
		let def = self.definition(property)?;
		if !def.natural_language {
			return Err(FieldErr("language map"));
		}
		match map {
			Some(map) => self.language_maps.insert(def.name, map),
			None => self.language_maps.remove(def.name),
		};
		Ok(())
	}

	pub(crate) fn put_language(&mut self, property: &str, lang: &str, value: &str) {
		match self.definition(property) {
			Ok(def) if def.natural_language => {
				self.language_maps
					.entry(def.name)
					.or_default()
					.insert(lang.to_string(), value.to_string());
			},
			_ => tracing::error!("{} has no natural language property '{property}'", self.kind),
		}
	}

	/// keys this term's kind doesn't declare, kept as they came
	pub fn unknown(&self) -> &Map<String, Value> {
		&self.unknown
	}

	pub fn set_unknown(&mut self, key: &str, value: Option<Value>) {
		match value {
			Some(x) => self.unknown.insert(key.to_string(), x),
			None => self.unknown.remove(key),
		};
	}

	/// Build a term of given kind from its generic json map.
	///
	/// `@context` is dropped, `type` fills the type list, declared keys are resolved through their
	/// alternatives and everything else is stored as unknown. Nothing is returned on error, so a
	/// half parsed term can't leak out.
	pub fn deserialize(kind: BaseType, map: &Map<String, Value>) -> crate::Result<Self> {
		Term::deserialize_at(kind, map, 0)
	}

	pub(crate) fn deserialize_at(kind: BaseType, map: &Map<String, Value>, depth: usize) -> crate::Result<Self> {
		if depth > MAX_NESTING {
			return Err(Error::TooDeep(MAX_NESTING));
		}

		let declared = schema::properties(kind);
		let mut term = Term::new(kind);

		for (key, value) in map {
			if key == "@context" {
				continue;
			}

			if key == "type" {
				term.types = type_list(value);
				continue;
			}

			if let Some(def) = declared.iter().find(|x| x.name == key.as_str()) {
				let node = Node::deserialize_at(def.range, value, depth)
					.map_err(|e| Error::at(key, e))?;
				if !node.is_empty() {
					term.properties.insert(def.name, node);
				}
				continue;
			}

			if let Some(def) = key
				.strip_suffix("Map")
				.and_then(|base| declared.iter().find(|x| x.natural_language && x.name == base))
			{
				if let Value::Object(entries) = value {
					let map = entries
						.iter()
						.filter_map(|(lang, text)| Some((lang.clone(), text.as_str()?.to_string())))
						.collect();
					term.language_maps.insert(def.name, map);
					continue;
				}
			}

			term.unknown.insert(key.clone(), value.clone());
		}

		let name = kind.as_ref();
		if !term.types.iter().any(|x| x == name) {
			term.types.push(name.to_string());
		}

		Ok(term)
	}

	/// Generic json map for this term.
	///
	/// Unknown keys go in first so declared properties win any collision. Single values are
	/// written bare, empty properties are left out, and the kind's own type name is always there.
	pub fn serialize(&self) -> crate::Result<Map<String, Value>> {
		let mut out = self.unknown.clone();

		let mut types = self.types.clone();
		let name = self.kind.as_ref();
		if !types.iter().any(|x| x == name) {
			types.push(name.to_string());
		}
		let types = match types.as_slice() {
			[single] => Value::String(single.clone()),
			_ => Value::Array(types.into_iter().map(Value::String).collect()),
		};
		out.insert("type".to_string(), types);

		for (key, node) in &self.properties {
			if let Some(value) = node.serialize().map_err(|e| Error::at(key, e))? {
				out.insert(key.to_string(), value);
			}
		}

		// emitted even when empty, consumers may rely on the key being there
		for (key, map) in &self.language_maps {
			out.insert(
				format!("{key}Map"),
				Value::Object(
					map.iter()
						.map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
						.collect()
				),
			);
		}

		Ok(out)
	}
}

// non string entries are dropped, a `type` which is neither string nor array leaves the list empty
fn type_list(value: &Value) -> Vec<String> {
	match value {
		Value::String(x) => vec![x.clone()],
		Value::Array(arr) => arr.iter().filter_map(|x| Some(x.as_str()?.to_string())).collect(),
		_ => {
			tracing::warn!("ignoring malformed 'type': {value}");
			vec![]
		},
	}
}

impl serde::Serialize for Term {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let map = Term::serialize(self).map_err(serde::ser::Error::custom)?;
		serde::Serialize::serialize(&map, serializer)
	}
}

impl<'de> serde::Deserialize<'de> for Term {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
		crate::resolve(&value).map_err(serde::de::Error::custom)
	}
}
