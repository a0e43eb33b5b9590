use std::collections::{BTreeMap, VecDeque};

use serde_json::{Map, Value};

use crate::{
	config::EncodeConfig,
	Context, Node, Property, Result, VocabError,
};

/// Storage for every value of one property of one entity.
///
/// Functional properties hold at most one [Node], the others an ordered sequence. Properties
/// with a natural language map also keep per-language values, independent from the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
	property: &'static Property,
	nodes: VecDeque<Node>,
	lang_map: BTreeMap<String, String>,
}

impl Slot {
	pub fn new(property: &'static Property) -> Self {
		Slot { property, nodes: VecDeque::new(), lang_map: BTreeMap::new() }
	}

	pub fn property(&self) -> &'static Property {
		self.property
	}

	pub fn name(&self) -> &'static str {
		self.property.name
	}

	pub fn is_functional(&self) -> bool {
		self.property.functional
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// no values and no language map entries: nothing would be serialized
	pub fn is_unset(&self) -> bool {
		self.nodes.is_empty() && self.lang_map.is_empty()
	}

	pub fn get(&self, i: usize) -> Option<&Node> {
		self.nodes.get(i)
	}

	pub fn get_mut(&mut self, i: usize) -> Option<&mut Node> {
		self.nodes.get_mut(i)
	}

	pub fn first(&self) -> Option<&Node> {
		self.nodes.front()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter()
	}

	/// ids of every referenced thing, skipping values which can't carry one
	pub fn ids(&self) -> Vec<String> {
		self.nodes.iter().filter_map(Node::id).map(str::to_string).collect()
	}

	/// replace every value with given one
	pub fn set(&mut self, node: impl Into<Node>) -> Result<()> {
		let node = self.admitted(node.into())?;
		self.nodes.clear();
		self.nodes.push_back(node);
		Ok(())
	}

	pub fn append(&mut self, node: impl Into<Node>) -> Result<()> {
		let node = self.admitted(node.into())?;
		self.ensure_room()?;
		self.nodes.push_back(node);
		Ok(())
	}

	pub fn prepend(&mut self, node: impl Into<Node>) -> Result<()> {
		let node = self.admitted(node.into())?;
		self.ensure_room()?;
		self.nodes.push_front(node);
		Ok(())
	}

	/// insert at position `i`, or at the end if `i` is past it
	pub fn insert(&mut self, i: usize, node: impl Into<Node>) -> Result<()> {
		let node = self.admitted(node.into())?;
		self.ensure_room()?;
		let i = i.min(self.nodes.len());
		self.nodes.insert(i, node);
		Ok(())
	}

	pub fn remove(&mut self, i: usize) -> Option<Node> {
		self.nodes.remove(i)
	}

	/// drop every value, language map entries are kept
	pub fn clear(&mut self) {
		self.nodes.clear();
	}

	pub fn is_iri(&self, i: usize) -> bool {
		self.nodes.get(i).is_some_and(Node::is_iri)
	}

	pub fn is_object(&self, i: usize) -> bool {
		self.nodes.get(i).is_some_and(Node::is_object)
	}

	pub fn is_link(&self, i: usize) -> bool {
		self.nodes.get(i).is_some_and(Node::is_link)
	}

	pub fn is_string(&self, i: usize) -> bool {
		self.nodes.get(i).is_some_and(Node::is_string)
	}

	pub fn is_unknown(&self, i: usize) -> bool {
		self.nodes.get(i).is_some_and(Node::is_unknown)
	}

	fn admitted(&self, node: Node) -> Result<Node> {
		if !self.property.admits(&node) {
			return Err(VocabError::ShapeMismatch(self.property.name));
		}
		Ok(node)
	}

	fn ensure_room(&self) -> Result<()> {
		if self.property.functional && !self.nodes.is_empty() {
			return Err(VocabError::Functional(self.property.name));
		}
		Ok(())
	}

	fn ensure_lang_map(&self) -> Result<()> {
		if !self.property.lang_map {
			return Err(VocabError::NoLanguageMap(self.property.name));
		}
		Ok(())
	}

	/// value for given BCP47 tag, empty if there's none
	pub fn lang(&self, tag: &str) -> &str {
		self.lang_map.get(tag).map(String::as_str).unwrap_or_default()
	}

	pub fn has_lang(&self, tag: &str) -> bool {
		self.lang_map.contains_key(tag)
	}

	pub fn set_lang(&mut self, tag: &str, value: &str) -> Result<()> {
		self.ensure_lang_map()?;
		self.lang_map.insert(tag.to_string(), value.to_string());
		Ok(())
	}

	pub fn remove_lang(&mut self, tag: &str) -> Option<String> {
		self.lang_map.remove(tag)
	}

	/// language tags with a value, sorted
	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.lang_map.keys().map(String::as_str)
	}

	/// decode the json value of this property, replacing current values
	pub fn deserialize(&mut self, value: &Value, ctx: &Context) -> Result<()> {
		self.decode(value, ctx, 0)
	}

	/// values are swapped in only once all of them decoded: on error the slot is untouched
	pub(crate) fn decode(&mut self, value: &Value, ctx: &Context, depth: usize) -> Result<()> {
		let mut nodes = VecDeque::new();
		if self.property.functional {
			let node = Node::resolve(self.property, value, ctx, depth)?;
			if node.is_unknown() && ctx.config().decode.strict_functional {
				return Err(VocabError::ShapeMismatch(self.property.name));
			}
			nodes.push_back(node);
		} else {
			match value {
				Value::Array(items) => {
					for item in items {
						nodes.push_back(Node::resolve(self.property, item, ctx, depth)?);
					}
				},
				_ => nodes.push_back(Node::resolve(self.property, value, ctx, depth)?),
			}
		}
		self.nodes = nodes;
		Ok(())
	}

	/// decode a `<name>Map` json value, false if it is not a json object. Entries that are
	/// not strings are dropped.
	pub(crate) fn decode_lang_map(&mut self, value: &Value) -> bool {
		let Value::Object(map) = value else { return false };
		self.lang_map.clear();
		for (tag, text) in map {
			match text.as_str() {
				Some(text) => {
					self.lang_map.insert(tag.clone(), text.to_string());
				},
				None => tracing::warn!("dropping non-string value for language '{tag}' of {}Map", self.property.name),
			}
		}
		true
	}

	/// json value of this property, `None` if it holds nothing
	pub fn serialize(&self) -> Result<Option<Value>> {
		self.encode(&EncodeConfig::default())
	}

	pub(crate) fn encode(&self, opts: &EncodeConfig) -> Result<Option<Value>> {
		if self.property.functional {
			return self.nodes.front().map(|n| n.encode(opts)).transpose();
		}

		let mut values = Vec::with_capacity(self.nodes.len());
		for node in &self.nodes {
			values.push(node.encode(opts)?);
		}
		Ok(match values.len() {
			0 => None,
			// a lone array would be split into many values when read back
			1 if opts.collapse_singletons && !values[0].is_array() => values.pop(),
			_ => Some(Value::Array(values)),
		})
	}

	/// json value of the `<name>Map` sibling, `None` if empty
	pub(crate) fn encode_lang_map(&self) -> Option<Value> {
		if self.lang_map.is_empty() {
			return None;
		}
		Some(Value::Object(
			self.lang_map
				.iter()
				.map(|(k, v)| (k.clone(), Value::String(v.clone())))
				.collect::<Map<String, Value>>()
		))
	}
}
