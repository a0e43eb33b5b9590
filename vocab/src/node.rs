use chrono::{DateTime, FixedOffset, TimeDelta};
use serde_json::{Map, Value};

use crate::{
	codec::{self, Iri, LangString},
	config::EncodeConfig,
	property::{Property, Shape},
	types::Family,
	Context, Endpoints, Entity, PublicKey, Result,
};

/// ActivityPub property value: one concrete alternative among the shapes its property allows.
///
/// Variants are listed in the order shapes are tried when decoding, embedded values first and
/// unknown last. Values that matched nothing are kept verbatim so they serialize back
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Object(Box<Entity>),
	Link(Box<Entity>),
	Endpoints(Box<Endpoints>),
	PublicKey(Box<PublicKey>),
	DateTime(DateTime<FixedOffset>),
	Duration(TimeDelta),
	Float(f64),
	Integer(u64),
	Boolean(bool),
	LangString(LangString),
	Str(String),
	Iri(Iri),
	Unknown(Value),
}

/// `type` discriminators of a json object, normalized to a list. Entries which are not
/// strings can't name a type and are skipped.
pub(crate) fn discriminators(map: &Map<String, Value>) -> Vec<&str> {
	match map.get("type") {
		Some(Value::String(x)) => vec![x.as_str()],
		Some(Value::Array(arr)) => arr.iter().filter_map(|x| x.as_str()).collect(),
		_ => vec![],
	}
}

impl Node {
	/// pick the first shape of `property` matching `value`
	pub(crate) fn resolve(property: &Property, value: &Value, ctx: &Context, depth: usize) -> Result<Self> {
		if let Value::Object(map) = value {
			if property.has_embedded() {
				let names = discriminators(map);
				for shape in property.shapes.iter().filter(|s| s.is_embedded()) {
					for name in &names {
						let found = match shape {
							Shape::Object => ctx.resolver().object(name),
							Shape::ObjectOf(allowed) => ctx.resolver()
								.object(name)
								.filter(|kind| allowed.iter().any(|a| kind.is_a(a))),
							Shape::Link => ctx.resolver().link(name),
							_ => None,
						};
						if let Some(kind) = found {
							let entity = Box::new(Entity::decode(kind, map, ctx, depth + 1)?);
							return Ok(match kind.family {
								Family::Object => Node::Object(entity),
								Family::Link => Node::Link(entity),
							});
						}
					}
				}
				tracing::debug!("no known type among {names:?} for '{}', keeping embedded value as is", property.name);
				return Ok(Node::Unknown(codec::opaque(value)));
			}
		}

		for shape in property.shapes {
			if let Some(node) = shape.try_scalar(value) {
				return Ok(node);
			}
		}

		tracing::debug!("value for '{}' matches none of its shapes, keeping it as is", property.name);
		Ok(Node::Unknown(codec::opaque(value)))
	}

	pub fn serialize(&self) -> Result<Value> {
		self.encode(&EncodeConfig::default())
	}

	pub(crate) fn encode(&self, opts: &EncodeConfig) -> Result<Value> {
		Ok(match self {
			Node::Object(x) | Node::Link(x) => Value::Object(x.encode(opts)?),
			Node::Endpoints(x) => x.serialize(),
			Node::PublicKey(x) => x.serialize(),
			Node::DateTime(x) => codec::date_time(x),
			Node::Duration(x) => codec::duration(x),
			Node::Float(x) => codec::float(*x)?,
			Node::Integer(x) => codec::non_negative_integer(*x),
			Node::Boolean(x) => codec::boolean(*x),
			Node::LangString(x) => codec::lang_string(x),
			Node::Str(x) => codec::string(x),
			Node::Iri(x) => codec::iri(x),
			Node::Unknown(x) => codec::opaque(x),
		})
	}

	pub fn unknown(value: Value) -> Self {
		Node::Unknown(value)
	}

	/// reference to a remote object, `None` if `iri` is not valid
	pub fn link_to(iri: &str) -> Option<Self> {
		Iri::parse(iri).map(Node::Iri)
	}

	/// true only if Node is an embedded object
	pub fn is_object(&self) -> bool {
		matches!(self, Node::Object(_))
	}

	/// true only if Node is an embedded link
	pub fn is_link(&self) -> bool {
		matches!(self, Node::Link(_))
	}

	/// true if Node is either an embedded object or link
	pub fn is_embedded(&self) -> bool {
		matches!(self, Node::Object(_) | Node::Link(_))
	}

	/// true only if Node is a bare reference
	pub fn is_iri(&self) -> bool {
		matches!(self, Node::Iri(_))
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Node::Str(_))
	}

	pub fn is_lang_string(&self) -> bool {
		matches!(self, Node::LangString(_))
	}

	pub fn is_date_time(&self) -> bool {
		matches!(self, Node::DateTime(_))
	}

	pub fn is_duration(&self) -> bool {
		matches!(self, Node::Duration(_))
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Node::Float(_))
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Node::Integer(_))
	}

	pub fn is_boolean(&self) -> bool {
		matches!(self, Node::Boolean(_))
	}

	pub fn is_endpoints(&self) -> bool {
		matches!(self, Node::Endpoints(_))
	}

	pub fn is_public_key(&self) -> bool {
		matches!(self, Node::PublicKey(_))
	}

	/// true only if no shape matched when decoding
	pub fn is_unknown(&self) -> bool {
		matches!(self, Node::Unknown(_))
	}

	pub fn as_object(&self) -> Option<&Entity> {
		match self {
			Node::Object(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_object_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Node::Object(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_link(&self) -> Option<&Entity> {
		match self {
			Node::Link(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_link_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Node::Link(x) => Some(x),
			_ => None,
		}
	}

	/// embedded object or link
	pub fn as_entity(&self) -> Option<&Entity> {
		match self {
			Node::Object(x) | Node::Link(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_endpoints(&self) -> Option<&Endpoints> {
		match self {
			Node::Endpoints(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_public_key(&self) -> Option<&PublicKey> {
		match self {
			Node::PublicKey(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_iri(&self) -> Option<&Iri> {
		match self {
			Node::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Node::Str(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_lang_string(&self) -> Option<&LangString> {
		match self {
			Node::LangString(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<DateTime<FixedOffset>> {
		match self {
			Node::DateTime(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<TimeDelta> {
		match self {
			Node::Duration(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Node::Float(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<u64> {
		match self {
			Node::Integer(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Node::Boolean(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_unknown(&self) -> Option<&Value> {
		match self {
			Node::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// returns id of referenced thing: the IRI itself, the id of embedded objects, the href of
	/// embedded links (or their id if they have no href)
	pub fn id(&self) -> Option<&str> {
		match self {
			Node::Iri(x) => Some(x.as_str()),
			Node::Object(x) => x.id().map(Iri::as_str),
			Node::Link(x) => x
				.href()
				.and_then(|s| s.first())
				.and_then(Node::as_iri)
				.or(x.id())
				.map(Iri::as_str),
			Node::PublicKey(x) => x.id.as_ref().map(Iri::as_str),
			_ => None,
		}
	}
}

impl From<Entity> for Node {
	fn from(value: Entity) -> Self {
		match value.kind().family {
			Family::Object => Node::Object(Box::new(value)),
			Family::Link => Node::Link(Box::new(value)),
		}
	}
}

impl From<Iri> for Node {
	fn from(value: Iri) -> Self {
		Node::Iri(value)
	}
}

impl From<&str> for Node {
	fn from(value: &str) -> Self {
		Node::Str(value.to_string())
	}
}

impl From<String> for Node {
	fn from(value: String) -> Self {
		Node::Str(value)
	}
}

impl From<LangString> for Node {
	fn from(value: LangString) -> Self {
		Node::LangString(value)
	}
}

impl From<DateTime<FixedOffset>> for Node {
	fn from(value: DateTime<FixedOffset>) -> Self {
		Node::DateTime(value)
	}
}

impl From<TimeDelta> for Node {
	fn from(value: TimeDelta) -> Self {
		Node::Duration(value)
	}
}

impl From<f64> for Node {
	fn from(value: f64) -> Self {
		Node::Float(value)
	}
}

impl From<u64> for Node {
	fn from(value: u64) -> Self {
		Node::Integer(value)
	}
}

impl From<bool> for Node {
	fn from(value: bool) -> Self {
		Node::Boolean(value)
	}
}

impl From<Endpoints> for Node {
	fn from(value: Endpoints) -> Self {
		Node::Endpoints(Box::new(value))
	}
}

impl From<PublicKey> for Node {
	fn from(value: PublicKey) -> Self {
		Node::PublicKey(Box::new(value))
	}
}
