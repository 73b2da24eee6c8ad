#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}

			$(
				impl From<$inner> for $enum_name {
					fn from(value: $inner) -> Self {
						Self::$deep(value)
					}
				}
			)*
		)*
	};
}

pub(crate) use strenum;

// accessors over Term properties, property names are the camelCase wire keys

macro_rules! getter {
	($name:ident -> node) => {
		pub fn $name(&self) -> &$crate::Node {
			self.get(stringify!($name))
		}
	};

	($name:ident::$rename:ident -> node) => {
		pub fn $name(&self) -> &$crate::Node {
			self.get(stringify!($rename))
		}
	};

	($name:ident -> iri) => {
		pub fn $name(&self) -> $crate::Field<&str> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::Iri(x)) => Ok(x.as_str()),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident -> &str) => {
		pub fn $name(&self) -> $crate::Field<&str> {
			self.get(stringify!($name))
				.iter()
				.find_map(|x| x.as_str())
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident::$rename:ident -> &str) => {
		pub fn $name(&self) -> $crate::Field<&str> {
			self.get(stringify!($rename))
				.iter()
				.find_map(|x| x.as_str())
				.ok_or($crate::FieldErr(stringify!($rename)))
		}
	};

	($name:ident -> bool) => {
		pub fn $name(&self) -> $crate::Field<bool> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::Boolean(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident::$rename:ident -> bool) => {
		pub fn $name(&self) -> $crate::Field<bool> {
			match self.get(stringify!($rename)).get() {
				Some($crate::PropertyValue::Boolean(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($rename))),
			}
		}
	};

	($name:ident -> u64) => {
		pub fn $name(&self) -> $crate::Field<u64> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::NonNegativeInteger(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident::$rename:ident -> u64) => {
		pub fn $name(&self) -> $crate::Field<u64> {
			match self.get(stringify!($rename)).get() {
				Some($crate::PropertyValue::NonNegativeInteger(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($rename))),
			}
		}
	};

	($name:ident -> f64) => {
		pub fn $name(&self) -> $crate::Field<f64> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::Float(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident -> chrono::DateTime<chrono::Utc>) => {
		pub fn $name(&self) -> $crate::Field<chrono::DateTime<chrono::Utc>> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::DateTime(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident::$rename:ident -> chrono::DateTime<chrono::Utc>) => {
		pub fn $name(&self) -> $crate::Field<chrono::DateTime<chrono::Utc>> {
			match self.get(stringify!($rename)).get() {
				Some($crate::PropertyValue::DateTime(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($rename))),
			}
		}
	};

	($name:ident -> chrono::TimeDelta) => {
		pub fn $name(&self) -> $crate::Field<chrono::TimeDelta> {
			match self.get(stringify!($name)).get() {
				Some($crate::PropertyValue::Duration(x)) => Ok(*x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};
}

pub(crate) use getter;

macro_rules! setter {
	($name:ident -> node) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: $crate::Node) -> Self {
				self.put(stringify!($name), val);
				self
			}
		}
	};

	($name:ident::$rename:ident -> node) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: $crate::Node) -> Self {
				self.put(stringify!($rename), val);
				self
			}
		}
	};

	($name:ident -> iri) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<$crate::Iri>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::Iri).into());
				self
			}
		}
	};

	($name:ident -> &str) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<&str>) -> Self {
				self.put(
					stringify!($name),
					val.map(|x| $crate::PropertyValue::String(x.to_string())).into(),
				);
				self
			}
		}
	};

	($name:ident::$rename:ident -> &str) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<&str>) -> Self {
				self.put(
					stringify!($rename),
					val.map(|x| $crate::PropertyValue::String(x.to_string())).into(),
				);
				self
			}
		}
	};

	($name:ident -> bool) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<bool>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::Boolean).into());
				self
			}
		}
	};

	($name:ident::$rename:ident -> bool) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<bool>) -> Self {
				self.put(stringify!($rename), val.map($crate::PropertyValue::Boolean).into());
				self
			}
		}
	};

	($name:ident -> u64) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<u64>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::NonNegativeInteger).into());
				self
			}
		}
	};

	($name:ident::$rename:ident -> u64) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<u64>) -> Self {
				self.put(stringify!($rename), val.map($crate::PropertyValue::NonNegativeInteger).into());
				self
			}
		}
	};

	($name:ident -> f64) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<f64>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::Float).into());
				self
			}
		}
	};

	($name:ident -> chrono::DateTime<chrono::Utc>) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<chrono::DateTime<chrono::Utc>>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::DateTime).into());
				self
			}
		}
	};

	($name:ident::$rename:ident -> chrono::DateTime<chrono::Utc>) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<chrono::DateTime<chrono::Utc>>) -> Self {
				self.put(stringify!($rename), val.map($crate::PropertyValue::DateTime).into());
				self
			}
		}
	};

	($name:ident -> chrono::TimeDelta) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<chrono::TimeDelta>) -> Self {
				self.put(stringify!($name), val.map($crate::PropertyValue::Duration).into());
				self
			}
		}
	};
}

pub(crate) use setter;

// natural language maps, carried next to the plain property under `<name>Map`
macro_rules! langmap {
	($name:ident) => {
		$crate::macros::langmap! { $name::$name }
	};

	($name:ident::$rename:ident) => {
		paste::item! {
			/// language tags present in this property's natural language map
			pub fn [< $name _map_languages >](&self) -> Vec<&str> {
				self.language_map(stringify!($rename))
					.map(|map| map.keys().map(|x| x.as_str()).collect())
					.unwrap_or_default()
			}

			/// value for given language tag, empty string if not present
			pub fn [< get_ $name _map >](&self, lang: &str) -> &str {
				self.language_map(stringify!($rename))
					.and_then(|map| map.get(lang))
					.map(|x| x.as_str())
					.unwrap_or_default()
			}

			pub fn [< set_ $name _map >](mut self, lang: &str, val: &str) -> Self {
				self.put_language(stringify!($rename), lang, val);
				self
			}
		}
	};
}

pub(crate) use langmap;
