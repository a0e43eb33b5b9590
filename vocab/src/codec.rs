//! Primitive value codecs.
//!
//! Every codec comes as a `try_*` function, returning `None` when the json value is not of
//! that type, and a serializer producing the json value back. A `None` is never an error:
//! property resolution uses it to move on to the next candidate shape.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};
use serde_json::Value;

use crate::{Result, VocabError};

/// Internationalized resource identifier, validated but stored as given so that it serializes
/// back byte for byte
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(String);

impl Iri {
	pub fn parse(value: &str) -> Option<Self> {
		url::Url::parse(value).ok()?;
		Some(Iri(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn url(&self) -> std::result::Result<url::Url, url::ParseError> {
		url::Url::parse(&self.0)
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
	type Error = VocabError;

	fn try_from(value: &str) -> Result<Self> {
		Iri::parse(value).ok_or_else(|| VocabError::InvalidId(Value::String(value.to_string())))
	}
}

/// rdf:langString, in its json-ld value object form: `{"@value": "...", "@language": "en"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
	pub value: String,
	pub language: String,
}

pub fn try_string(value: &Value) -> Option<String> {
	value.as_str().map(|x| x.to_string())
}

pub fn string(value: &str) -> Value {
	Value::String(value.to_string())
}

pub fn try_iri(value: &Value) -> Option<Iri> {
	Iri::parse(value.as_str()?)
}

pub fn iri(value: &Iri) -> Value {
	Value::String(value.0.clone())
}

pub fn try_lang_string(value: &Value) -> Option<LangString> {
	let map = value.as_object()?;
	if map.keys().any(|k| k != "@value" && k != "@language") {
		return None;
	}
	Some(LangString {
		value: map.get("@value")?.as_str()?.to_string(),
		language: map.get("@language")?.as_str()?.to_string(),
	})
}

pub fn lang_string(value: &LangString) -> Value {
	let mut map = serde_json::Map::new();
	map.insert("@value".to_string(), Value::String(value.value.clone()));
	map.insert("@language".to_string(), Value::String(value.language.clone()));
	Value::Object(map)
}

pub fn try_date_time(value: &Value) -> Option<DateTime<FixedOffset>> {
	let raw = value.as_str()?;
	if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
		return Some(dt);
	}
	// as2 allows omitting seconds
	let normalized = match raw.strip_suffix('Z') {
		Some(x) => format!("{x}+00:00"),
		None => raw.to_string(),
	};
	DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").ok()
}

pub fn date_time(value: &DateTime<FixedOffset>) -> Value {
	Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// xsd:duration, with years counted as 365 days and months as 30 days
pub fn try_duration(value: &Value) -> Option<TimeDelta> {
	let raw = value.as_str()?;
	let (negative, raw) = match raw.strip_prefix('-') {
		Some(x) => (true, x),
		None => (false, raw),
	};
	let raw = raw.strip_prefix('P')?;
	let (date, time) = match raw.split_once('T') {
		Some((_, "")) => return None,
		Some((date, time)) => (date, Some(time)),
		None => (raw, None),
	};
	if date.is_empty() && time.is_none() {
		return None;
	}

	let mut nanos = sum_components(date, &[
		('Y', 365 * NANOS_PER_DAY),
		('M', 30 * NANOS_PER_DAY),
		('D', NANOS_PER_DAY),
	])?;
	if let Some(time) = time {
		nanos = nanos.checked_add(sum_components(time, &[
			('H', NANOS_PER_HOUR),
			('M', NANOS_PER_MINUTE),
			('S', NANOS_PER_SECOND),
		])?)?;
	}
	if negative {
		nanos = -nanos;
	}

	let seconds = i64::try_from(nanos / NANOS_PER_SECOND).ok()?;
	let subsec = (nanos % NANOS_PER_SECOND) as i64;
	Some(TimeDelta::try_seconds(seconds)? + TimeDelta::nanoseconds(subsec))
}

fn sum_components(part: &str, units: &[(char, i128)]) -> Option<i128> {
	let mut total : i128 = 0;
	let mut next_unit = 0;
	let mut start = 0;
	for (i, c) in part.char_indices() {
		if c.is_ascii_digit() || c == '.' {
			continue;
		}
		let pos = units[next_unit..].iter().position(|(d, _)| *d == c)? + next_unit;
		total = total.checked_add(scale(&part[start..i], units[pos].1)?)?;
		next_unit = pos + 1;
		start = i + c.len_utf8();
	}
	if start != part.len() {
		return None; // number without designator
	}
	Some(total)
}

fn scale(digits: &str, unit: i128) -> Option<i128> {
	match digits.split_once('.') {
		None => digits.parse::<i128>().ok()?.checked_mul(unit),
		Some((int, frac)) => {
			if int.is_empty() || frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
				return None;
			}
			let whole = int.parse::<i128>().ok()?.checked_mul(unit)?;
			let frac = &frac[..frac.len().min(9)];
			let denominator = 10i128.pow(frac.len() as u32);
			let part = frac.parse::<i128>().ok()?.checked_mul(unit)?.checked_div(denominator)?;
			whole.checked_add(part)
		},
	}
}

/// serializes in days, hours, minutes and seconds, omitting zero components
pub fn duration(value: &TimeDelta) -> Value {
	let mut nanos = value.num_seconds() as i128 * NANOS_PER_SECOND + value.subsec_nanos() as i128;
	let mut out = String::new();
	if nanos < 0 {
		out.push('-');
		nanos = -nanos;
	}
	out.push('P');

	let days = nanos / NANOS_PER_DAY;
	let hours = (nanos % NANOS_PER_DAY) / NANOS_PER_HOUR;
	let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
	let seconds = (nanos % NANOS_PER_MINUTE) / NANOS_PER_SECOND;
	let subsec = nanos % NANOS_PER_SECOND;

	if days > 0 {
		out.push_str(&format!("{days}D"));
	}
	if hours > 0 || minutes > 0 || seconds > 0 || subsec > 0 || days == 0 {
		out.push('T');
		if hours > 0 {
			out.push_str(&format!("{hours}H"));
		}
		if minutes > 0 {
			out.push_str(&format!("{minutes}M"));
		}
		if subsec > 0 {
			let frac = format!("{subsec:09}");
			out.push_str(&format!("{seconds}.{}S", frac.trim_end_matches('0')));
		} else if seconds > 0 || (hours == 0 && minutes == 0) {
			out.push_str(&format!("{seconds}S"));
		}
	}
	Value::String(out)
}

pub fn try_float(value: &Value) -> Option<f64> {
	value.as_f64()
}

/// integral floats are written without fraction, like most activitypub producers do
pub fn float(value: f64) -> Result<Value> {
	if !value.is_finite() {
		return Err(VocabError::NotRepresentable(value));
	}
	if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
		return Ok(Value::from(value as i64));
	}
	serde_json::Number::from_f64(value)
		.map(Value::Number)
		.ok_or(VocabError::NotRepresentable(value))
}

pub fn try_non_negative_integer(value: &Value) -> Option<u64> {
	value.as_u64()
}

pub fn non_negative_integer(value: u64) -> Value {
	Value::from(value)
}

pub fn try_boolean(value: &Value) -> Option<bool> {
	value.as_bool()
}

pub fn boolean(value: bool) -> Value {
	Value::Bool(value)
}

/// MIME media type: `type/subtype`, optionally followed by parameters
pub fn try_media_type(value: &Value) -> Option<String> {
	let raw = value.as_str()?;
	let essence = raw.split(';').next()?.trim();
	let (kind, subtype) = essence.split_once('/')?;
	let token = |x: &str| !x.is_empty() && x.chars().all(|c| c.is_ascii_graphic() && c != '/');
	if !token(kind) || !token(subtype) {
		return None;
	}
	Some(raw.to_string())
}

/// BCP47 language tag, checked only for its subtag structure
pub fn try_bcp47(value: &Value) -> Option<String> {
	let raw = value.as_str()?;
	let well_formed = raw
		.split('-')
		.all(|sub| (1..=8).contains(&sub.len()) && sub.chars().all(|c| c.is_ascii_alphanumeric()));
	if !well_formed {
		return None;
	}
	Some(raw.to_string())
}

/// RFC5988 link relation
pub fn try_rel(value: &Value) -> Option<String> {
	let raw = value.as_str()?;
	if raw.is_empty() || raw.chars().any(|c| c.is_whitespace() || c == ',') {
		return None;
	}
	Some(raw.to_string())
}

pub const UNITS : [&str; 6] = ["cm", "feet", "inches", "km", "m", "miles"];

pub fn try_units(value: &Value) -> Option<String> {
	let raw = value.as_str()?;
	UNITS.contains(&raw).then(|| raw.to_string())
}

/// values nobody understood are carried around untouched
pub fn opaque(value: &Value) -> Value {
	value.clone()
}

#[cfg(test)]
mod test {
	use chrono::TimeDelta;
	use serde_json::json;

	#[test]
	fn iri_keeps_original_spelling() {
		let iri = super::try_iri(&json!("https://example.com")).expect("valid iri rejected");
		assert_eq!(super::iri(&iri), json!("https://example.com"));
	}

	#[test]
	fn relative_references_are_not_iris() {
		assert!(super::try_iri(&json!("Launch")).is_none());
		assert!(super::try_iri(&json!("/users/alice")).is_none());
		assert!(super::try_iri(&json!(12)).is_none());
	}

	#[test]
	fn date_time_accepts_omitted_seconds() {
		let dt = super::try_date_time(&json!("2024-06-04T17:09Z")).expect("could not parse");
		assert_eq!(super::date_time(&dt), json!("2024-06-04T17:09:00Z"));
	}

	#[test]
	fn date_time_keeps_offset_and_fraction() {
		let dt = super::try_date_time(&json!("2024-06-04T17:09:20.250+02:00")).expect("could not parse");
		assert_eq!(super::date_time(&dt), json!("2024-06-04T17:09:20.250+02:00"));
	}

	#[test]
	fn durations_parse_into_deltas() {
		assert_eq!(super::try_duration(&json!("PT5S")), Some(TimeDelta::seconds(5)));
		assert_eq!(super::try_duration(&json!("P1DT2H")), Some(TimeDelta::hours(26)));
		assert_eq!(super::try_duration(&json!("PT1.5S")), Some(TimeDelta::milliseconds(1500)));
		assert_eq!(super::try_duration(&json!("-PT1M")), Some(TimeDelta::minutes(-1)));
		assert_eq!(super::try_duration(&json!("P1Y")), Some(TimeDelta::days(365)));
	}

	#[test]
	fn malformed_durations_are_not_durations() {
		for raw in [
			"P", "PT", "P1DT", "5S", "PT5", "P1S", "PT1S2H", "P1.D", "nope",
			"PT170141183460469231731687303715.999999999S",
		] {
			assert!(super::try_duration(&json!(raw)).is_none(), "accepted {raw}");
		}
	}

	#[test]
	fn durations_serialize_canonically() {
		assert_eq!(super::duration(&TimeDelta::seconds(5)), json!("PT5S"));
		assert_eq!(super::duration(&TimeDelta::hours(26)), json!("P1DT2H"));
		assert_eq!(super::duration(&TimeDelta::minutes(90)), json!("PT1H30M"));
		assert_eq!(super::duration(&TimeDelta::milliseconds(1500)), json!("PT1.5S"));
		assert_eq!(super::duration(&TimeDelta::days(2)), json!("P2D"));
		assert_eq!(super::duration(&TimeDelta::zero()), json!("PT0S"));
		assert_eq!(super::duration(&TimeDelta::minutes(-1)), json!("-PT1M"));
	}

	#[test]
	fn integral_floats_drop_their_fraction() {
		assert_eq!(super::float(42.0).expect("finite float"), json!(42));
		assert_eq!(super::float(-0.5).expect("finite float"), json!(-0.5));
		assert!(super::float(f64::NAN).is_err());
		assert!(super::float(f64::INFINITY).is_err());
	}

	#[test]
	fn lang_strings_need_value_and_language() {
		let x = super::try_lang_string(&json!({"@value": "ciao", "@language": "it"})).expect("could not parse");
		assert_eq!(x.value, "ciao");
		assert_eq!(x.language, "it");
		assert!(super::try_lang_string(&json!({"@value": "ciao"})).is_none());
		assert!(super::try_lang_string(&json!({"@value": "ciao", "@language": "it", "type": "Note"})).is_none());
	}

	#[test]
	fn media_types_need_type_and_subtype() {
		assert!(super::try_media_type(&json!("text/html")).is_some());
		assert!(super::try_media_type(&json!("text/html; charset=utf-8")).is_some());
		assert!(super::try_media_type(&json!("text")).is_none());
		assert!(super::try_media_type(&json!("text/")).is_none());
	}

	#[test]
	fn language_tags_are_checked_structurally() {
		assert!(super::try_bcp47(&json!("en")).is_some());
		assert!(super::try_bcp47(&json!("zh-Hant-TW")).is_some());
		assert!(super::try_bcp47(&json!("")).is_none());
		assert!(super::try_bcp47(&json!("not a tag")).is_none());
	}

	#[test]
	fn units_are_a_closed_set() {
		assert_eq!(super::try_units(&json!("km")), Some("km".to_string()));
		assert!(super::try_units(&json!("parsecs")).is_none());
	}
}
