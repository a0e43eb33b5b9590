use serde_json::Value;

use crate::{
	config::Config,
	error::kind_of,
	node::discriminators,
	Entity, Resolver, Result, VocabError,
};

/// Everything decoding needs besides the document: which types are known and how to behave.
/// Read only once built, one can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Context {
	resolver: Resolver,
	config: Config,
}

impl Default for Context {
	fn default() -> Self {
		Context::new(Config::default())
	}
}

impl Context {
	/// context knowing the whole vocabulary
	pub fn new(config: Config) -> Self {
		Context::with_resolver(Resolver::activitystreams(), config)
	}

	pub fn with_resolver(resolver: Resolver, config: Config) -> Self {
		Context { resolver, config }
	}

	pub fn resolver(&self) -> &Resolver {
		&self.resolver
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// decode a whole document, picking its type among the known ones: object types are
	/// preferred over link types, then the first matching discriminator wins
	pub fn deserialize(&self, value: &Value) -> Result<Entity> {
		let Value::Object(map) = value else {
			return Err(VocabError::NotAnObject(kind_of(value)));
		};
		let names = discriminators(map);
		let kind = names.iter()
			.find_map(|name| self.resolver.object(name))
			.or_else(|| names.iter().find_map(|name| self.resolver.link(name)));
		match kind {
			Some(kind) => Entity::decode(kind, map, self, 0),
			None if names.is_empty() => Err(VocabError::MissingType),
			None => Err(VocabError::UnknownType(names.join(", "))),
		}
	}

	/// encode an entity following this context's settings
	pub fn serialize(&self, entity: &Entity) -> Result<Value> {
		Ok(Value::Object(entity.serialize_with(&self.config.encode)?))
	}
}
