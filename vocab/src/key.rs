use serde_json::{Map, Value};

use crate::{codec, Iri};

// TODO technically this is not part of ActivityStreams, should live behind a security vocab feature

/// Actor `publicKey` as produced by most fediverse software
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
	pub id: Option<Iri>,
	pub owner: Option<Iri>,
	pub public_key_pem: String,
	pub unknown: Map<String, Value>,
}

impl PublicKey {
	pub fn new(id: Option<Iri>, owner: Option<Iri>, public_key_pem: &str) -> Self {
		PublicKey { id, owner, public_key_pem: public_key_pem.to_string(), unknown: Map::new() }
	}

	/// a json object with at least a string `publicKeyPem`
	pub fn try_deserialize(value: &Value) -> Option<Self> {
		let map = value.as_object()?;
		let mut out = PublicKey::new(None, None, map.get("publicKeyPem")?.as_str()?);
		for (key, value) in map {
			match key.as_str() {
				"publicKeyPem" => {},
				"id" => out.id = Some(codec::try_iri(value)?),
				"owner" => out.owner = Some(codec::try_iri(value)?),
				_ => {
					out.unknown.insert(key.clone(), codec::opaque(value));
				},
			}
		}
		Some(out)
	}

	pub fn serialize(&self) -> Value {
		let mut map = self.unknown.clone();
		if let Some(id) = &self.id {
			map.insert("id".to_string(), codec::iri(id));
		}
		if let Some(owner) = &self.owner {
			map.insert("owner".to_string(), codec::iri(owner));
		}
		map.insert("publicKeyPem".to_string(), codec::string(&self.public_key_pem));
		Value::Object(map)
	}
}
