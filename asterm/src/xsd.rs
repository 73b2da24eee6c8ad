//! Codecs for the primitive value kinds properties can hold.
//!
//! Parsers take an already decoded json value and either produce the typed value or fail with
//! [XsdError]; formatters produce the json-safe representation back.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, Utc};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is not a valid {0}")]
pub struct XsdError(pub &'static str);

/// Internationalized resource identifier, kept exactly as received.
///
/// Only the presence of a scheme is checked: no normalization happens, so that `http://a.b` is
/// not turned into `http://a.b/` on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
	pub fn parse(value: &str) -> Result<Self, XsdError> {
		let Some((scheme, _)) = value.split_once(':') else {
			return Err(XsdError("iri"));
		};
		let mut chars = scheme.chars();
		let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
			&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
		if !scheme_ok || value.chars().any(|c| c.is_whitespace() || c.is_control()) {
			return Err(XsdError("iri"));
		}
		Ok(Iri(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl TryFrom<&str> for Iri {
	type Error = XsdError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Iri::parse(value)
	}
}

pub fn iri(raw: &Value) -> Result<Iri, XsdError> {
	Iri::parse(raw.as_str().ok_or(XsdError("iri"))?)
}

pub fn string(raw: &Value) -> Result<String, XsdError> {
	raw.as_str().map(|x| x.to_string()).ok_or(XsdError("string"))
}

/// rdf:langString as a map from language tag to text, every value must be a string
pub fn lang_string(raw: &Value) -> Result<BTreeMap<String, String>, XsdError> {
	let map = raw.as_object().ok_or(XsdError("langString"))?;
	if map.is_empty() {
		return Err(XsdError("langString"));
	}
	map.iter()
		.map(|(k, v)| Ok((k.clone(), v.as_str().ok_or(XsdError("langString"))?.to_string())))
		.collect()
}

pub fn float(raw: &Value) -> Result<f64, XsdError> {
	raw.as_f64().ok_or(XsdError("float"))
}

pub fn format_float(value: f64) -> crate::Result<Value> {
	serde_json::Number::from_f64(value)
		.map(Value::Number)
		.ok_or(crate::Error::NonFiniteFloat(value))
}

pub fn non_negative_integer(raw: &Value) -> Result<u64, XsdError> {
	raw.as_u64().ok_or(XsdError("nonNegativeInteger"))
}

pub fn boolean(raw: &Value) -> Result<bool, XsdError> {
	raw.as_bool().ok_or(XsdError("boolean"))
}

const DATETIME_MINUTES: &str = "%Y-%m-%dT%H:%M%#z";
const DATETIME_NAIVE: &str = "%Y-%m-%dT%H:%M:%S";

/// RFC 3339 first, then minute precision with offset, then naive timestamps taken as UTC.
///
/// Only four digit years are accepted: anything else can't be written back as RFC 3339.
pub fn datetime(raw: &Value) -> Result<DateTime<Utc>, XsdError> {
	let value = raw.as_str().ok_or(XsdError("dateTime"))?;
	let parsed = DateTime::parse_from_rfc3339(value)
		.or_else(|_| DateTime::parse_from_str(value, DATETIME_MINUTES))
		.map(|x| x.with_timezone(&Utc))
		.or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_NAIVE).map(|x| x.and_utc()))
		.map_err(|_| XsdError("dateTime"))?;
	if !(0..=9999).contains(&parsed.year()) {
		return Err(XsdError("dateTime"));
	}
	Ok(parsed)
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
	value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

// years and months have no fixed length, approximate them as 365 and 30 days
const DATE_DESIGNATORS: &[(char, i128)] = &[
	('Y', 365 * NANOS_PER_DAY),
	('M', 30 * NANOS_PER_DAY),
	('D', NANOS_PER_DAY),
];

const TIME_DESIGNATORS: &[(char, i128)] = &[
	('H', NANOS_PER_HOUR),
	('M', NANOS_PER_MINUTE),
	('S', NANOS_PER_SECOND),
];

/// xsd:duration, e.g. `P1DT2H`, `PT5S`, `-PT0.5S`
pub fn duration(raw: &Value) -> Result<TimeDelta, XsdError> {
	parse_duration(raw.as_str().ok_or(XsdError("duration"))?).ok_or(XsdError("duration"))
}

fn parse_duration(value: &str) -> Option<TimeDelta> {
	let (negative, rest) = match value.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, value),
	};
	let rest = rest.strip_prefix('P')?;
	let (date, time) = match rest.split_once('T') {
		Some((_, "")) => return None,
		Some((date, time)) => (date, Some(time)),
		None => (rest, None),
	};
	if date.is_empty() && time.is_none() {
		return None;
	}
	let mut total = designated(date, DATE_DESIGNATORS, false)?;
	if let Some(time) = time {
		total = total.checked_add(designated(time, TIME_DESIGNATORS, true)?)?;
	}
	if negative {
		total = -total;
	}
	Some(TimeDelta::nanoseconds(i64::try_from(total).ok()?))
}

fn designated(part: &str, designators: &[(char, i128)], fractional_seconds: bool) -> Option<i128> {
	let mut total: i128 = 0;
	let mut rest = part;
	let mut next = 0;
	while !rest.is_empty() {
		let end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
		let (number, tail) = rest.split_at(end);
		let designator = tail.chars().next()?;
		let position = next + designators[next..].iter().position(|(d, _)| *d == designator)?;
		let scale = designators[position].1;
		let fraction_allowed = fractional_seconds && designator == 'S';
		total = total.checked_add(scaled(number, scale, fraction_allowed)?)?;
		next = position + 1;
		rest = &tail[designator.len_utf8()..];
	}
	Some(total)
}

fn scaled(number: &str, scale: i128, fraction_allowed: bool) -> Option<i128> {
	match number.split_once('.') {
		None if !number.is_empty() => number.parse::<i128>().ok()?.checked_mul(scale),
		Some((int, frac)) if fraction_allowed && !int.is_empty() && !frac.is_empty() => {
			if !frac.chars().all(|c| c.is_ascii_digit()) {
				return None;
			}
			let digits: String = frac.chars().take(9).collect();
			let nanos = format!("{digits:0<9}").parse::<i128>().ok()?;
			int.parse::<i128>().ok()?.checked_mul(scale)?.checked_add(nanos)
		},
		_ => None,
	}
}

/// Days are the largest unit emitted, since years and months can't be recovered exactly.
pub fn format_duration(value: &TimeDelta) -> String {
	let mut out = String::new();
	if *value < TimeDelta::zero() {
		out.push('-');
	}
	out.push('P');

	let abs = value.abs();
	let total = abs.num_seconds();
	let nanos = abs.subsec_nanos();
	let days = total / 86_400;
	let hours = (total % 86_400) / 3_600;
	let minutes = (total % 3_600) / 60;
	let seconds = total % 60;

	if days > 0 {
		out.push_str(&format!("{days}D"));
	}
	if days > 0 && hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
		return out;
	}

	out.push('T');
	if hours > 0 {
		out.push_str(&format!("{hours}H"));
	}
	if minutes > 0 {
		out.push_str(&format!("{minutes}M"));
	}
	if nanos > 0 {
		let fraction = format!("{nanos:09}");
		out.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
	} else if seconds > 0 || (hours == 0 && minutes == 0) {
		out.push_str(&format!("{seconds}S"));
	}
	out
}

#[cfg(test)]
mod test {
	use chrono::TimeDelta;
	use serde_json::json;

	#[test]
	fn iri_requires_a_scheme() {
		assert!(super::iri(&json!("https://example.com/alice")).is_ok());
		assert!(super::iri(&json!("urn:uuid:8f0a5cd4-0b2f-4c33-9a5f-8d8b1a1b2c3d")).is_ok());
		assert!(super::iri(&json!("hello")).is_err());
		assert!(super::iri(&json!("1http://x")).is_err());
		assert!(super::iri(&json!("note: not an iri")).is_err());
		assert!(super::iri(&json!(12)).is_err());
	}

	#[test]
	fn iri_is_not_normalized() {
		let iri = super::iri(&json!("http://example.com")).unwrap();
		assert_eq!(iri.as_str(), "http://example.com");
	}

	#[test]
	fn lang_string_needs_only_string_values() {
		let ok = super::lang_string(&json!({ "en": "hello", "it": "ciao" })).unwrap();
		assert_eq!(ok.get("it").map(|x| x.as_str()), Some("ciao"));
		assert!(super::lang_string(&json!({ "en": "hello", "n": 1 })).is_err());
		assert!(super::lang_string(&json!({})).is_err());
		assert!(super::lang_string(&json!("hello")).is_err());
	}

	#[test]
	fn datetime_accepts_known_layouts() {
		let full = super::datetime(&json!("2024-06-04T17:09:20+00:00")).unwrap();
		assert_eq!(super::format_datetime(&full), "2024-06-04T17:09:20Z");
		let minutes = super::datetime(&json!("2024-06-04T17:09+02:00")).unwrap();
		assert_eq!(super::format_datetime(&minutes), "2024-06-04T15:09:00Z");
		let naive = super::datetime(&json!("2024-06-04T17:09:20")).unwrap();
		assert_eq!(naive, full);
		assert!(super::datetime(&json!("yesterday")).is_err());
	}

	#[test]
	fn datetime_refuses_years_rfc3339_cannot_hold() {
		for raw in ["+10000-01-01T00:00:00", "+10000-01-01T00:00:00Z", "-0001-01-01T00:00+00:00"] {
			assert!(super::datetime(&json!(raw)).is_err(), "{raw} should not parse");
		}
		let edge = super::datetime(&json!("9999-12-31T23:59:59")).unwrap();
		assert_eq!(super::datetime(&json!(super::format_datetime(&edge))), Ok(edge));
	}

	#[test]
	fn duration_parses_designators() {
		assert_eq!(super::duration(&json!("PT5S")).unwrap(), TimeDelta::seconds(5));
		assert_eq!(super::duration(&json!("P1DT2H")).unwrap(), TimeDelta::hours(26));
		assert_eq!(super::duration(&json!("P1M")).unwrap(), TimeDelta::days(30));
		assert_eq!(super::duration(&json!("-PT0.5S")).unwrap(), TimeDelta::milliseconds(-500));
		assert!(super::duration(&json!("P")).is_err());
		assert!(super::duration(&json!("PT")).is_err());
		assert!(super::duration(&json!("P1S")).is_err());
		assert!(super::duration(&json!("PT1S2M")).is_err());
		assert!(super::duration(&json!("P1.5D")).is_err());
	}

	#[test]
	fn duration_formats_back_to_parsable_text() {
		for (delta, text) in [
			(TimeDelta::zero(), "PT0S"),
			(TimeDelta::seconds(5), "PT5S"),
			(TimeDelta::days(2), "P2D"),
			(TimeDelta::hours(26) + TimeDelta::minutes(3), "P1DT2H3M"),
			(TimeDelta::milliseconds(-1500), "-PT1.5S"),
		] {
			assert_eq!(super::format_duration(&delta), text);
			assert_eq!(super::duration(&json!(text)).unwrap(), delta);
		}
	}

	#[test]
	fn non_finite_floats_cannot_be_formatted() {
		assert!(super::format_float(1.5).is_ok());
		assert!(matches!(super::format_float(f64::NAN), Err(crate::Error::NonFiniteFloat(_))));
	}
}
