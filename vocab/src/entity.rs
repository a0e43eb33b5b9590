use serde_json::{Map, Value};

use crate::{
	codec::{self, Iri},
	config::EncodeConfig,
	properties,
	types::VocabType,
	Context, Property, Result, Slot, VocabError,
};

/// Instance of a vocabulary type: its identity, its `type` discriminators, one [Slot] per
/// property its type carries and every json member it didn't recognize.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
	kind: &'static VocabType,
	id: Option<Iri>,
	types: Vec<Value>,
	slots: Vec<Slot>,
	unknown: Map<String, Value>,
}

impl Entity {
	/// empty instance of given type
	pub fn new(kind: &'static VocabType) -> Self {
		Entity {
			kind,
			id: None,
			types: Vec::new(),
			slots: kind.properties().map(Slot::new).collect(),
			unknown: Map::new(),
		}
	}

	/// decode a json object as an instance of given type, regardless of its `type` member
	pub fn deserialize(kind: &'static VocabType, map: &Map<String, Value>, ctx: &Context) -> Result<Self> {
		Entity::decode(kind, map, ctx, 0)
	}

	pub(crate) fn decode(kind: &'static VocabType, map: &Map<String, Value>, ctx: &Context, depth: usize) -> Result<Self> {
		let limit = ctx.config().decode.max_depth;
		if depth > limit {
			return Err(VocabError::TooDeep(limit));
		}

		let mut out = Entity::new(kind);
		for (key, value) in map {
			match key.as_str() {
				// contexts are attached by whoever sends the document, see crate::LD
				"@context" => continue,
				"type" => out.types = match value {
					Value::Array(arr) => arr.clone(),
					x => vec![x.clone()],
				},
				"id" => out.id = Some(codec::try_iri(value).ok_or_else(|| VocabError::InvalidId(value.clone()))?),
				_ => {
					if let Some(slot) = out.slots.iter_mut().find(|s| s.name() == key) {
						slot.decode(value, ctx, depth)?;
					} else if let Some(slot) = key
						.strip_suffix("Map")
						.and_then(|name| out.slots.iter_mut().find(|s| s.property().lang_map && s.name() == name))
					{
						if !slot.decode_lang_map(value) {
							tracing::debug!("{key} is not a language map, keeping it as unknown");
							out.unknown.insert(key.clone(), codec::opaque(value));
						}
					} else {
						out.unknown.insert(key.clone(), codec::opaque(value));
					}
				},
			}
		}
		Ok(out)
	}

	pub fn serialize(&self) -> Result<Map<String, Value>> {
		self.encode(&EncodeConfig::default())
	}

	pub fn serialize_with(&self, opts: &EncodeConfig) -> Result<Map<String, Value>> {
		self.encode(opts)
	}

	pub(crate) fn encode(&self, opts: &EncodeConfig) -> Result<Map<String, Value>> {
		let mut map = self.unknown.clone();

		let mut types = self.types.clone();
		if !types.iter().any(|t| t.as_str() == Some(self.kind.name)) {
			types.push(Value::String(self.kind.name.to_string()));
		}
		let types = match types.len() {
			1 => types.swap_remove(0),
			_ => Value::Array(types),
		};
		map.insert("type".to_string(), types);

		if let Some(id) = &self.id {
			map.insert("id".to_string(), codec::iri(id));
		}

		for slot in &self.slots {
			if let Some(value) = slot.encode(opts)? {
				map.insert(slot.name().to_string(), value);
			}
			if let (Some(key), Some(langs)) = (slot.property().map_key(), slot.encode_lang_map()) {
				map.insert(key, langs);
			}
		}

		Ok(map)
	}

	pub fn kind(&self) -> &'static VocabType {
		self.kind
	}

	/// name of the vocabulary type this entity was decoded as
	pub fn type_name(&self) -> &'static str {
		self.kind.name
	}

	pub fn id(&self) -> Option<&Iri> {
		self.id.as_ref()
	}

	pub fn set_id(&mut self, id: Option<Iri>) {
		self.id = id;
	}

	/// `type` discriminators as found in the json, which may include names this crate doesn't
	/// know. Its own type name is added when serializing if missing.
	pub fn types(&self) -> &[Value] {
		&self.types
	}

	pub fn append_type(&mut self, value: impl Into<Value>) {
		self.types.push(value.into());
	}

	pub fn prepend_type(&mut self, value: impl Into<Value>) {
		self.types.insert(0, value.into());
	}

	pub fn remove_type(&mut self, i: usize) -> Option<Value> {
		(i < self.types.len()).then(|| self.types.remove(i))
	}

	pub fn clear_types(&mut self) {
		self.types.clear();
	}

	pub fn slots(&self) -> impl Iterator<Item = &Slot> {
		self.slots.iter()
	}

	/// `None` if this entity's type doesn't carry given property
	pub fn slot(&self, property: &Property) -> Option<&Slot> {
		self.slots.iter().find(|s| s.property() == property)
	}

	pub fn slot_mut(&mut self, property: &Property) -> Option<&mut Slot> {
		self.slots.iter_mut().find(|s| s.property() == property)
	}

	/// like [Entity::slot_mut], but not carrying the property is an error
	pub fn try_slot_mut(&mut self, property: &Property) -> Result<&mut Slot> {
		let kind = self.kind.name;
		self.slot_mut(property).ok_or(VocabError::NotApplicable { property: property.name, kind })
	}

	pub fn slot_named(&self, name: &str) -> Option<&Slot> {
		self.slots.iter().find(|s| s.name() == name)
	}

	/// true if given property holds at least one value
	pub fn has(&self, property: &Property) -> bool {
		self.slot(property).is_some_and(|s| !s.is_empty())
	}

	pub fn has_unknown(&self, key: &str) -> bool {
		self.unknown.contains_key(key)
	}

	pub fn unknown(&self, key: &str) -> Option<&Value> {
		self.unknown.get(key)
	}

	/// store a member this crate doesn't model, written back verbatim when serializing.
	/// Keys of modeled properties are written after unknown ones, so they win on conflict.
	pub fn set_unknown(&mut self, key: &str, value: Value) {
		self.unknown.insert(key.to_string(), value);
	}

	pub fn remove_unknown(&mut self, key: &str) -> Option<Value> {
		self.unknown.remove(key)
	}

	pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
		self.unknown.keys().map(String::as_str)
	}
}

crate::accessors! {
	attachment => properties::ATTACHMENT,
	attributed_to => properties::ATTRIBUTED_TO,
	audience => properties::AUDIENCE,
	bcc => properties::BCC,
	bto => properties::BTO,
	cc => properties::CC,
	content => properties::CONTENT,
	context => properties::CONTEXT,
	duration => properties::DURATION,
	end_time => properties::END_TIME,
	generator => properties::GENERATOR,
	icon => properties::ICON,
	image => properties::IMAGE_PROPERTY,
	in_reply_to => properties::IN_REPLY_TO,
	likes => properties::LIKES,
	location => properties::LOCATION,
	media_type => properties::MEDIA_TYPE,
	name => properties::NAME,
	preview => properties::PREVIEW,
	published => properties::PUBLISHED,
	replies => properties::REPLIES,
	shares => properties::SHARES,
	source => properties::SOURCE,
	start_time => properties::START_TIME,
	summary => properties::SUMMARY,
	tag => properties::TAG,
	to => properties::TO,
	updated => properties::UPDATED,
	url => properties::URL,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	sensitive => properties::SENSITIVE,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	quote_url => properties::QUOTE_URL,

	height => properties::HEIGHT,
	href => properties::HREF,
	hreflang => properties::HREFLANG,
	rel => properties::REL,
	width => properties::WIDTH,

	actor => properties::ACTOR,
	instrument => properties::INSTRUMENT,
	object => properties::OBJECT,
	origin => properties::ORIGIN,
	result => properties::RESULT,
	target => properties::TARGET,
	any_of => properties::ANY_OF,
	one_of => properties::ONE_OF,
	closed => properties::CLOSED,

	discoverable => properties::DISCOVERABLE,
	endpoints => properties::ENDPOINTS,
	followers => properties::FOLLOWERS,
	following => properties::FOLLOWING,
	inbox => properties::INBOX,
	liked => properties::LIKED,
	outbox => properties::OUTBOX,
	preferred_username => properties::PREFERRED_USERNAME,
	public_key => properties::PUBLIC_KEY,
	streams => properties::STREAMS,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	manually_approves_followers => properties::MANUALLY_APPROVES_FOLLOWERS,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	moved_to => properties::MOVED_TO,
	#[cfg(feature = "activitypub-counters")]
	followers_count => properties::FOLLOWERS_COUNT,
	#[cfg(feature = "activitypub-counters")]
	following_count => properties::FOLLOWING_COUNT,
	#[cfg(feature = "activitypub-counters")]
	statuses_count => properties::STATUSES_COUNT,

	current => properties::CURRENT,
	first => properties::FIRST,
	items => properties::ITEMS,
	last => properties::LAST,
	next => properties::NEXT,
	ordered_items => properties::ORDERED_ITEMS,
	part_of => properties::PART_OF,
	prev => properties::PREV,
	start_index => properties::START_INDEX,
	total_items => properties::TOTAL_ITEMS,

	accuracy => properties::ACCURACY,
	altitude => properties::ALTITUDE,
	latitude => properties::LATITUDE,
	longitude => properties::LONGITUDE,
	radius => properties::RADIUS,
	units => properties::UNITS,

	describes => properties::DESCRIBES,
	relationship => properties::RELATIONSHIP,
	subject => properties::SUBJECT,
	deleted => properties::DELETED,
	former_type => properties::FORMER_TYPE,
}

#[cfg(test)]
mod test {
	use serde_json::{json, Value};

	use super::Entity;
	use crate::{
		config::Config,
		properties,
		types::{activity, link, object},
		Context, Iri, Node, VocabError,
	};

	fn roundtrip(value: Value) -> Value {
		let ctx = Context::default();
		let entity = ctx.deserialize(&value).expect("could not deserialize");
		Value::Object(entity.serialize().expect("could not serialize"))
	}

	#[test]
	fn event_roundtrip_preserves_everything() {
		let raw = json!({
			"type": "Event",
			"name": "Party",
			"to": ["https://example.com/alice", "https://example.com/bob"],
			"x-custom": 42,
		});
		let ctx = Context::default();
		let event = ctx.deserialize(&raw).expect("could not deserialize");
		assert_eq!(event.type_name(), "Event");

		let to = event.to().expect("events are addressed");
		assert_eq!(to.len(), 2);
		assert!(to.is_iri(0) && to.is_iri(1));
		assert_eq!(to.get(1).and_then(Node::as_iri).map(Iri::as_str), Some("https://example.com/bob"));
		assert_eq!(event.name().and_then(|s| s.first()).and_then(Node::as_str), Some("Party"));
		assert_eq!(event.unknown("x-custom"), Some(&json!(42)));

		assert_eq!(Value::Object(event.serialize().expect("could not serialize")), raw);
	}

	#[test]
	fn launch_event_scenario() {
		let raw = json!({ "type": "Event", "name": "Launch", "to": ["https://a/1", "https://a/2"], "x-custom": 42 });
		let event = Context::default().deserialize(&raw).expect("could not deserialize");
		assert_eq!(event.types().first(), Some(&json!("Event")));
		let name = event.name().expect("events have names");
		assert_eq!(name.len(), 1);
		assert_eq!(name.get(0).and_then(Node::as_str), Some("Launch"));
		let to = event.to().expect("events are addressed");
		assert_eq!(to.len(), 2);
		assert!((0..2).all(|i| to.is_iri(i)));
		assert!(event.has_unknown("x-custom"));
		assert_eq!(event.unknown("x-custom"), Some(&json!(42)));
		assert_eq!(roundtrip(raw.clone()), raw);
	}

	#[test]
	fn decoding_serialized_entities_gives_them_back() {
		let ctx = Context::default();
		let raw = json!({
			"type": "Question",
			"name": "best fruit?",
			"oneOf": [
				{ "type": "Note", "name": "apple" },
				{ "type": "Note", "name": "pear" },
			],
			"closed": "2024-05-01T12:00:00.250+02:00",
			"endTime": "2024-05-01T12:00:00Z",
		});
		let question = ctx.deserialize(&raw).expect("could not deserialize");
		let again = ctx
			.deserialize(&Value::Object(question.serialize().expect("could not serialize")))
			.expect("could not deserialize serialized entity");
		assert_eq!(question, again);
		let options = again.one_of().expect("questions have options");
		assert_eq!(
			options.get(1).and_then(Node::as_object).and_then(|x| x.name()).and_then(|s| s.first()).and_then(Node::as_str),
			Some("pear")
		);
		assert!(again.closed().and_then(|s| s.first()).is_some_and(Node::is_date_time));
	}

	#[test]
	fn bare_event_has_nothing_set() {
		let event = Context::default().deserialize(&json!({ "type": "Event" })).expect("could not deserialize");
		assert!(event.slots().all(|s| s.is_unset()));
		assert!(event.id().is_none());
		assert!(!event.has(&properties::NAME));
		assert_eq!(event.unknown_keys().count(), 0);
	}

	#[test]
	fn empty_entity_serializes_to_its_type() {
		let note = object::NOTE.instance();
		assert_eq!(Value::Object(note.serialize().expect("could not serialize")), json!({ "type": "Note" }));
	}

	#[test]
	fn context_is_dropped_and_ids_kept() {
		let out = roundtrip(json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"id": "https://example.net/objects/1",
			"type": "Note",
			"content": "hello",
		}));
		assert_eq!(out, json!({
			"id": "https://example.net/objects/1",
			"type": "Note",
			"content": "hello",
		}));
	}

	#[test]
	fn nested_activity_roundtrip() {
		let raw = json!({
			"id": "https://example.net/activities/1",
			"type": "Create",
			"actor": "https://example.net/users/alice",
			"published": "2024-03-10T15:30:00Z",
			"object": {
				"id": "https://example.net/objects/1",
				"type": "Note",
				"attributedTo": "https://example.net/users/alice",
				"content": "<p>hi <a href=\"https://example.net/users/bob\">@bob</a></p>",
				"contentMap": { "en": "<p>hi</p>" },
				"tag": [
					{ "type": "Mention", "href": "https://example.net/users/bob", "name": "@bob" },
					{ "type": "Emoji", "name": ":blob:", "icon": { "type": "Image", "url": "https://example.net/blob.png" } },
				],
				"sensitive": false,
			},
		});
		let ctx = Context::default();
		let create = ctx.deserialize(&raw).expect("could not deserialize");
		let note = create.object().and_then(|s| s.first()).and_then(Node::as_object).expect("embedded note");
		assert_eq!(note.content().map(|s| s.lang("en")), Some("<p>hi</p>"));
		let tags = note.tag().expect("notes have tags");
		assert!(tags.is_link(0));
		assert!(tags.is_unknown(1));

		#[cfg(feature = "activitypub-miscellaneous-terms")]
		assert_eq!(note.sensitive().and_then(|s| s.first()).and_then(Node::as_bool), Some(false));

		assert_eq!(Value::Object(create.serialize().expect("could not serialize")), raw);
	}

	#[test]
	fn multiple_types_are_preserved() {
		let raw = json!({ "type": ["Note", "https://example.net/ns#Status"], "content": "hi" });
		assert_eq!(roundtrip(raw.clone()), raw);
	}

	#[test]
	fn own_type_is_added_once() {
		let mut note = object::NOTE.instance();
		note.append_type("Status");
		let out = note.serialize().expect("could not serialize");
		assert_eq!(out.get("type"), Some(&json!(["Status", "Note"])));
		note.append_type("Note");
		let out = note.serialize().expect("could not serialize");
		assert_eq!(out.get("type"), Some(&json!(["Status", "Note"])));
		assert_eq!(note.remove_type(0), Some(json!("Status")));
		assert_eq!(note.remove_type(5), None);
	}

	#[test]
	fn building_entities_by_hand() {
		let mut follow = activity::FOLLOW.instance();
		follow.set_id(Iri::parse("https://example.net/follows/1"));
		follow.actor_mut().expect("activities have actors")
			.append(Iri::parse("https://example.net/users/alice").expect("valid iri"))
			.expect("actor is not functional");
		let mut mention = link::MENTION.instance();
		mention.href_mut().expect("links have href")
			.set(Iri::parse("https://example.net/users/bob").expect("valid iri"))
			.expect("href is an iri");
		follow.object_mut().expect("follows have objects").set(mention).expect("objects can be links");

		let out = Value::Object(follow.serialize().expect("could not serialize"));
		assert_eq!(out, json!({
			"id": "https://example.net/follows/1",
			"type": "Follow",
			"actor": "https://example.net/users/alice",
			"object": { "type": "Mention", "href": "https://example.net/users/bob" },
		}));
		assert!(follow.has(&properties::ACTOR));
		assert!(!follow.has(&properties::TARGET));
	}

	#[test]
	fn properties_outside_the_type_are_not_applicable() {
		let mut mention = link::MENTION.instance();
		assert!(mention.slot(&properties::TO).is_none());
		assert!(mention.to().is_none());
		assert!(matches!(
			mention.try_slot_mut(&properties::TO),
			Err(VocabError::NotApplicable { property: "to", kind: "Mention" })
		));
		assert!(mention.try_slot_mut(&properties::HREF).is_ok());
	}

	#[test]
	fn unknown_bag_can_be_edited() {
		let mut note = object::NOTE.instance();
		note.set_unknown("x-custom", json!({ "a": 1 }));
		assert!(note.has_unknown("x-custom"));
		assert_eq!(note.unknown_keys().collect::<Vec<_>>(), vec!["x-custom"]);
		assert_eq!(note.remove_unknown("x-custom"), Some(json!({ "a": 1 })));
		assert!(!note.has_unknown("x-custom"));
	}

	#[test]
	fn members_of_other_types_are_unknown() {
		// 'href' belongs to links, a Note keeps it as is
		let raw = json!({ "type": "Note", "href": "https://example.net/x" });
		let ctx = Context::default();
		let note = ctx.deserialize(&raw).expect("could not deserialize");
		assert!(note.has_unknown("href"));
		assert_eq!(Value::Object(note.serialize().expect("could not serialize")), raw);
	}

	#[test]
	fn broken_language_maps_are_kept_as_unknown() {
		let raw = json!({ "type": "Note", "nameMap": "not a map" });
		let out = roundtrip(raw.clone());
		assert_eq!(out, raw);
	}

	#[test]
	fn invalid_ids_are_an_error() {
		let ctx = Context::default();
		let res = ctx.deserialize(&json!({ "type": "Note", "id": 7 }));
		assert!(matches!(res, Err(VocabError::InvalidId(_))));
		let res = ctx.deserialize(&json!({ "type": "Note", "id": "not an iri" }));
		assert!(matches!(res, Err(VocabError::InvalidId(_))));
	}

	#[test]
	fn depth_is_limited() {
		let mut cfg = Config::default();
		cfg.decode.max_depth = 2;
		let ctx = Context::new(cfg);
		let nested = json!({ "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note" } } });
		assert!(ctx.deserialize(&nested).is_ok());
		let deeper = json!({ "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note" } } } });
		assert!(matches!(ctx.deserialize(&deeper), Err(VocabError::TooDeep(2))));
	}

	#[test]
	fn entities_built_by_hand_decode_back_equal() {
		let mut note = object::NOTE.instance();
		let name = note.name_mut().expect("notes have names");
		assert!(name.append(Iri::parse("https://example.net/x").expect("valid iri")).is_err());
		name.append("https://example.net/x").expect("names are strings");
		note.to_mut().expect("notes are addressed")
			.append(Iri::parse("https://example.net/x").expect("valid iri"))
			.expect("recipients can be iris");

		let ctx = Context::default();
		let back = ctx
			.deserialize(&ctx.serialize(&note).expect("could not serialize"))
			.expect("could not deserialize");
		assert_eq!(back.types(), &[json!("Note")]);
		note.append_type("Note");
		assert_eq!(back, note);
	}

	#[test]
	fn unrepresentable_nested_values_fail_serialization() {
		let mut place = object::PLACE.instance();
		place.latitude_mut().expect("places have latitude").set(f64::NAN).expect("latitude is a float");
		let mut arrive = activity::ARRIVE.instance();
		arrive.location_mut().expect("activities have location").append(place).expect("locations can be objects");
		arrive.actor_mut().expect("activities have actors")
			.append(Iri::parse("https://example.net/users/alice").expect("valid iri"))
			.expect("actor is not functional");

		assert!(matches!(arrive.serialize(), Err(VocabError::NotRepresentable(x)) if x.is_nan()));
		assert!(Context::default().serialize(&arrive).is_err());
	}

	#[test]
	fn floats_and_durations_roundtrip() {
		let raw = json!({
			"type": "Place",
			"latitude": 45.5,
			"longitude": -73,
			"units": "km",
			"radius": 10,
		});
		assert_eq!(roundtrip(raw.clone()), raw);

		let raw = json!({ "type": "Video", "duration": "PT2H30M" });
		assert_eq!(roundtrip(raw.clone()), raw);
	}

	#[test]
	fn actors_carry_endpoints_and_keys() {
		let raw = json!({
			"id": "https://example.net/users/alice",
			"type": "Person",
			"inbox": "https://example.net/users/alice/inbox",
			"outbox": "https://example.net/users/alice/outbox",
			"preferredUsername": "alice",
			"endpoints": { "sharedInbox": "https://example.net/inbox" },
			"publicKey": {
				"id": "https://example.net/users/alice#main-key",
				"owner": "https://example.net/users/alice",
				"publicKeyPem": "-----BEGIN PUBLIC KEY-----",
			},
		});
		let ctx = Context::default();
		let person = ctx.deserialize(&raw).expect("could not deserialize");
		let endpoints = person.endpoints().and_then(|s| s.first()).and_then(Node::as_endpoints).expect("endpoints");
		assert_eq!(endpoints.shared_inbox.as_ref().map(Iri::as_str), Some("https://example.net/inbox"));
		assert!(person.public_key().and_then(|s| s.first()).is_some_and(Node::is_public_key));
		assert_eq!(Value::Object(person.serialize().expect("could not serialize")), raw);
	}

	#[test]
	fn collection_pages_embed_their_items() {
		let raw = json!({
			"id": "https://example.net/users/alice/outbox?page=1",
			"type": "OrderedCollectionPage",
			"partOf": "https://example.net/users/alice/outbox",
			"next": "https://example.net/users/alice/outbox?page=2",
			"startIndex": 0,
			"totalItems": 2,
			"orderedItems": [
				{ "type": "Announce", "object": "https://example.org/notes/3" },
				"https://example.net/activities/9",
			],
		});
		let ctx = Context::default();
		let page = ctx.deserialize(&raw).expect("could not deserialize");
		let items = page.ordered_items().expect("ordered pages have ordered items");
		assert!(items.is_object(0));
		assert!(items.is_iri(1));
		assert_eq!(page.start_index().and_then(|s| s.first()).and_then(Node::as_integer), Some(0));
		assert_eq!(Value::Object(page.serialize().expect("could not serialize")), raw);
	}
}
