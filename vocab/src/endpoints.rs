use serde_json::{Map, Value};

use crate::{codec, Iri};

/// Actor `endpoints`, an untyped json object whose members are all IRIs.
///
/// See <https://www.w3.org/TR/activitypub/#actor-objects>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoints {
	pub proxy_url: Option<Iri>,
	pub oauth_authorization_endpoint: Option<Iri>,
	pub oauth_token_endpoint: Option<Iri>,
	pub provide_client_key: Option<Iri>,
	pub sign_client_key: Option<Iri>,
	pub shared_inbox: Option<Iri>,
	pub unknown: Map<String, Value>,
}

const MEMBERS : [&str; 6] = [
	"proxyUrl",
	"oauthAuthorizationEndpoint",
	"oauthTokenEndpoint",
	"provideClientKey",
	"signClientKey",
	"sharedInbox",
];

impl Endpoints {
	fn members_mut(&mut self) -> [&mut Option<Iri>; 6] {
		[
			&mut self.proxy_url,
			&mut self.oauth_authorization_endpoint,
			&mut self.oauth_token_endpoint,
			&mut self.provide_client_key,
			&mut self.sign_client_key,
			&mut self.shared_inbox,
		]
	}

	fn members(&self) -> [&Option<Iri>; 6] {
		[
			&self.proxy_url,
			&self.oauth_authorization_endpoint,
			&self.oauth_token_endpoint,
			&self.provide_client_key,
			&self.sign_client_key,
			&self.shared_inbox,
		]
	}

	/// `None` if not a json object or if any known member isn't an IRI
	pub fn try_deserialize(value: &Value) -> Option<Self> {
		let map = value.as_object()?;
		let mut out = Endpoints::default();
		for (key, value) in map {
			match MEMBERS.iter().position(|k| *k == key.as_str()) {
				Some(i) => *out.members_mut()[i] = Some(codec::try_iri(value)?),
				None => {
					out.unknown.insert(key.clone(), codec::opaque(value));
				},
			}
		}
		Some(out)
	}

	pub fn serialize(&self) -> Value {
		let mut map = self.unknown.clone();
		for (key, member) in MEMBERS.iter().zip(self.members()) {
			if let Some(iri) = member {
				map.insert(key.to_string(), codec::iri(iri));
			}
		}
		Value::Object(map)
	}
}
