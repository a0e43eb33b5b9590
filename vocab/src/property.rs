use serde_json::Value;

use crate::{codec, Endpoints, Node, PublicKey};

/// One of the shapes a property value can take. A property lists the shapes it accepts in
/// priority order: the first one matching a value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// embedded object of any type from the object family
	Object,
	/// embedded object whose type is, or extends, one of these
	ObjectOf(&'static [&'static str]),
	/// embedded object of any type from the link family
	Link,
	Endpoints,
	PublicKey,
	DateTime,
	Duration,
	Float,
	NonNegativeInteger,
	Boolean,
	MediaType,
	Bcp47,
	Rel,
	Units,
	LangString,
	String,
	Iri,
}

impl Shape {
	/// shapes which are picked by looking at the `type` discriminator
	pub fn is_embedded(&self) -> bool {
		matches!(self, Shape::Object | Shape::ObjectOf(_) | Shape::Link)
	}

	/// true if `node` is a value of this shape
	pub fn admits(&self, node: &Node) -> bool {
		match (self, node) {
			(Shape::Object, Node::Object(_)) => true,
			(Shape::ObjectOf(allowed), Node::Object(x)) => allowed.iter().any(|a| x.kind().is_a(a)),
			(Shape::Link, Node::Link(_)) => true,
			(Shape::Endpoints, Node::Endpoints(_)) => true,
			(Shape::PublicKey, Node::PublicKey(_)) => true,
			(Shape::DateTime, Node::DateTime(_)) => true,
			(Shape::Duration, Node::Duration(_)) => true,
			(Shape::Float, Node::Float(_)) => true,
			(Shape::NonNegativeInteger, Node::Integer(_)) => true,
			(Shape::Boolean, Node::Boolean(_)) => true,
			(Shape::LangString, Node::LangString(_)) => true,
			(Shape::Iri, Node::Iri(_)) => true,
			(Shape::String, Node::Str(_)) => true,
			(Shape::MediaType | Shape::Bcp47 | Shape::Rel | Shape::Units, Node::Str(x)) =>
				self.try_scalar(&Value::String(x.clone())).is_some(),
			_ => false,
		}
	}

	/// try decoding a value that doesn't need the type resolver
	pub fn try_scalar(&self, value: &Value) -> Option<Node> {
		match self {
			Shape::Object | Shape::ObjectOf(_) | Shape::Link => None,
			Shape::Endpoints => Endpoints::try_deserialize(value).map(|x| Node::Endpoints(Box::new(x))),
			Shape::PublicKey => PublicKey::try_deserialize(value).map(|x| Node::PublicKey(Box::new(x))),
			Shape::DateTime => codec::try_date_time(value).map(Node::DateTime),
			Shape::Duration => codec::try_duration(value).map(Node::Duration),
			Shape::Float => codec::try_float(value).map(Node::Float),
			Shape::NonNegativeInteger => codec::try_non_negative_integer(value).map(Node::Integer),
			Shape::Boolean => codec::try_boolean(value).map(Node::Boolean),
			Shape::MediaType => codec::try_media_type(value).map(Node::Str),
			Shape::Bcp47 => codec::try_bcp47(value).map(Node::Str),
			Shape::Rel => codec::try_rel(value).map(Node::Str),
			Shape::Units => codec::try_units(value).map(Node::Str),
			Shape::LangString => codec::try_lang_string(value).map(Node::LangString),
			Shape::String => codec::try_string(value).map(Node::Str),
			Shape::Iri => codec::try_iri(value).map(Node::Iri),
		}
	}
}

/// Declarative description of a vocabulary property: how it's spelled, how many values it
/// holds and which shapes those values may take.
#[derive(Debug)]
pub struct Property {
	pub name: &'static str,
	pub functional: bool,
	pub shapes: &'static [Shape],
	pub lang_map: bool,
}

impl PartialEq for Property {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Property {
	/// cardinality at most one
	pub const fn one(name: &'static str, shapes: &'static [Shape]) -> Self {
		Property { name, functional: true, shapes, lang_map: false }
	}

	/// ordered list of values
	pub const fn many(name: &'static str, shapes: &'static [Shape]) -> Self {
		Property { name, functional: false, shapes, lang_map: false }
	}

	/// also carries a `<name>Map` sibling with per-language values
	pub const fn with_lang_map(mut self) -> Self {
		self.lang_map = true;
		self
	}

	/// unknown values are always accepted, everything else must match one of the shapes
	pub fn admits(&self, node: &Node) -> bool {
		node.is_unknown() || self.shapes.iter().any(|s| s.admits(node))
	}

	pub fn has_embedded(&self) -> bool {
		self.shapes.iter().any(Shape::is_embedded)
	}

	/// json key of the natural language map sibling, if any
	pub fn map_key(&self) -> Option<String> {
		self.lang_map.then(|| format!("{}Map", self.name))
	}
}
