use crate::{properties, Entity, Property};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

/// compacted spelling of [PUBLIC] found in the wild
const PUBLIC_COMPACT : &str = "as:Public";

pub trait Addressed {
	/// every recipient: to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// primary recipients only: to and bto
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed()
			.iter()
			.any(|x| x == PUBLIC || x == PUBLIC_COMPACT)
	}
}

impl Entity {
	fn ids_of(&self, props: &[&Property]) -> Vec<String> {
		props.iter()
			.filter_map(|p| self.slot(p))
			.flat_map(|s| s.ids())
			.collect()
	}
}

impl Addressed for Entity {
	fn addressed(&self) -> Vec<String> {
		self.ids_of(&[&properties::TO, &properties::BTO, &properties::CC, &properties::BCC])
	}

	fn mentioning(&self) -> Vec<String> {
		self.ids_of(&[&properties::TO, &properties::BTO])
	}
}

#[cfg(test)]
mod test {
	use super::{Addressed, PUBLIC};
	use crate::Context;

	fn note() -> crate::Entity {
		Context::default().deserialize(&serde_json::json!({
			"id": "http://localhost:8080/obj/1",
			"type": "Note",
			"content": "hello world!",
			"published": "2024-06-04T17:09:20+00:00",
			"to": ["http://localhost:8080/usr/root/followers"],
			"bto": ["https://localhost:8080/usr/secret"],
			"cc": [PUBLIC],
			"bcc": [],
		})).expect("could not deserialize note")
	}

	#[test]
	fn addressed_trait_finds_all_targets() {
		assert_eq!(
			note().addressed(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
				PUBLIC.to_string(),
			]
		);
	}

	#[test]
	fn primary_targets_only_finds_to_and_bto() {
		assert_eq!(
			note().mentioning(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
			]
		);
	}

	#[test]
	fn compact_public_counts_as_public() {
		assert!(note().is_public());
		let compact = Context::default()
			.deserialize(&serde_json::json!({ "type": "Note", "to": "as:Public" }))
			.expect("could not deserialize note");
		assert!(compact.is_public());
		let private = Context::default()
			.deserialize(&serde_json::json!({ "type": "Note", "to": "https://example.net/u/bob" }))
			.expect("could not deserialize note");
		assert!(!private.is_public());
	}
}
