use serde_json::{Map, Value};

use crate::types::actor::ACTOR_TYPES;

pub const ACTIVITYSTREAMS : &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY : &str = "https://w3id.org/security/v1";

pub trait LD {
	/// attach a `@context` covering every term this crate may produce
	fn ld_context(self) -> Self;
}

impl LD for Value {
	fn ld_context(mut self) -> Self {
		let is_actor = match self.get("type") {
			Some(Value::String(t)) => ACTOR_TYPES.contains(&t.as_str()),
			Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).any(|t| ACTOR_TYPES.contains(&t)),
			_ => false,
		};
		let Some(obj) = self.as_object_mut() else {
			tracing::warn!("cannot add @context to json value different than object");
			return self;
		};

		#[allow(unused_mut)]
		let mut ctx = Map::new();
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		{
			ctx.insert("sensitive".to_string(), Value::String("as:sensitive".into()));
			ctx.insert("quoteUrl".to_string(), Value::String("as:quoteUrl".into()));
			ctx.insert("Hashtag".to_string(), Value::String("as:Hashtag".into()));
			if is_actor {
				ctx.insert("manuallyApprovesFollowers".to_string(), Value::String("as:manuallyApprovesFollowers".into()));
				ctx.insert("movedTo".to_string(), Value::String("as:movedTo".into()));
			}
		}
		#[cfg(feature = "activitypub-counters")]
		if is_actor {
			ctx.insert("counters".to_string(), Value::String("https://ns.alemi.dev/as/counters/#".into()));
			ctx.insert("followingCount".to_string(), Value::String("counters:followingCount".into()));
			ctx.insert("followersCount".to_string(), Value::String("counters:followersCount".into()));
			ctx.insert("statusesCount".to_string(), Value::String("counters:statusesCount".into()));
		}

		let mut context = vec![Value::String(ACTIVITYSTREAMS.into())];
		if is_actor {
			// only actors carry keys
			context.push(Value::String(SECURITY.into()));
		}
		if !ctx.is_empty() {
			context.push(Value::Object(ctx));
		}
		obj.insert("@context".to_string(), Value::Array(context));
		self
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{LD, ACTIVITYSTREAMS, SECURITY};

	#[test]
	fn actors_get_security_context() {
		let person = json!({ "type": "Person" }).ld_context();
		let context = person["@context"].as_array().expect("context should be an array");
		assert_eq!(context[0], json!(ACTIVITYSTREAMS));
		assert_eq!(context[1], json!(SECURITY));
	}

	#[test]
	fn other_objects_get_activitystreams_context() {
		let note = json!({ "type": "Note" }).ld_context();
		let context = note["@context"].as_array().expect("context should be an array");
		assert_eq!(context[0], json!(ACTIVITYSTREAMS));
		assert!(!context.contains(&json!(SECURITY)));
	}

	#[test]
	fn non_objects_are_left_alone() {
		assert_eq!(json!([1, 2]).ld_context(), json!([1, 2]));
	}
}
