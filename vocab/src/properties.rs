//! Every property of the ActivityStreams 2.0 vocabulary, plus the ActivityPub and extension
//! terms this crate understands, grouped the way vocabulary types compose them.
//!
//! See <https://www.w3.org/TR/activitystreams-vocabulary/#properties>

use crate::property::{Property, Shape};

const OBJECT_OR_LINK : &[Shape] = &[Shape::Object, Shape::Link, Shape::Iri];
const TEXT : &[Shape] = &[Shape::String, Shape::LangString];
const INSTANT : &[Shape] = &[Shape::DateTime];
const COLLECTION : &[Shape] = &[Shape::ObjectOf(&["Collection"]), Shape::Iri];
const ORDERED_COLLECTION : &[Shape] = &[Shape::ObjectOf(&["OrderedCollection"]), Shape::Iri];
const PAGE : &[Shape] = &[Shape::ObjectOf(&["CollectionPage"]), Shape::Link, Shape::Iri];
const IMAGE : &[Shape] = &[Shape::ObjectOf(&["Image"]), Shape::Link, Shape::Iri];

// object
pub const ATTACHMENT : Property = Property::many("attachment", OBJECT_OR_LINK);
pub const ATTRIBUTED_TO : Property = Property::many("attributedTo", OBJECT_OR_LINK);
pub const AUDIENCE : Property = Property::many("audience", OBJECT_OR_LINK);
pub const BCC : Property = Property::many("bcc", OBJECT_OR_LINK);
pub const BTO : Property = Property::many("bto", OBJECT_OR_LINK);
pub const CC : Property = Property::many("cc", OBJECT_OR_LINK);
pub const CONTENT : Property = Property::many("content", TEXT).with_lang_map();
pub const CONTEXT : Property = Property::many("context", OBJECT_OR_LINK);
pub const DURATION : Property = Property::one("duration", &[Shape::Duration]);
pub const END_TIME : Property = Property::one("endTime", INSTANT);
pub const GENERATOR : Property = Property::many("generator", OBJECT_OR_LINK);
pub const ICON : Property = Property::many("icon", IMAGE);
pub const IMAGE_PROPERTY : Property = Property::many("image", IMAGE);
pub const IN_REPLY_TO : Property = Property::many("inReplyTo", OBJECT_OR_LINK);
pub const LIKES : Property = Property::one("likes", COLLECTION);
pub const LOCATION : Property = Property::many("location", OBJECT_OR_LINK);
pub const MEDIA_TYPE : Property = Property::one("mediaType", &[Shape::MediaType]);
pub const NAME : Property = Property::many("name", TEXT).with_lang_map();
pub const PREVIEW : Property = Property::many("preview", OBJECT_OR_LINK);
pub const PUBLISHED : Property = Property::one("published", INSTANT);
pub const REPLIES : Property = Property::one("replies", COLLECTION);
pub const SHARES : Property = Property::one("shares", COLLECTION);
pub const SOURCE : Property = Property::one("source", &[Shape::Object]);
pub const START_TIME : Property = Property::one("startTime", INSTANT);
pub const SUMMARY : Property = Property::many("summary", TEXT).with_lang_map();
pub const TAG : Property = Property::many("tag", OBJECT_OR_LINK);
pub const TO : Property = Property::many("to", OBJECT_OR_LINK);
pub const UPDATED : Property = Property::one("updated", INSTANT);
pub const URL : Property = Property::many("url", &[Shape::Link, Shape::Iri]);

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const SENSITIVE : Property = Property::one("sensitive", &[Shape::Boolean]);
#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const QUOTE_URL : Property = Property::one("quoteUrl", &[Shape::Iri]);

// link
pub const HEIGHT : Property = Property::one("height", &[Shape::NonNegativeInteger]);
pub const HREF : Property = Property::one("href", &[Shape::Iri]);
pub const HREFLANG : Property = Property::one("hreflang", &[Shape::Bcp47]);
pub const REL : Property = Property::many("rel", &[Shape::Rel]);
pub const WIDTH : Property = Property::one("width", &[Shape::NonNegativeInteger]);

// activity
pub const ACTOR : Property = Property::many("actor", OBJECT_OR_LINK);
pub const INSTRUMENT : Property = Property::many("instrument", OBJECT_OR_LINK);
pub const OBJECT : Property = Property::many("object", OBJECT_OR_LINK);
pub const ORIGIN : Property = Property::many("origin", OBJECT_OR_LINK);
pub const RESULT : Property = Property::many("result", OBJECT_OR_LINK);
pub const TARGET : Property = Property::many("target", OBJECT_OR_LINK);

// question
pub const ANY_OF : Property = Property::many("anyOf", OBJECT_OR_LINK);
pub const ONE_OF : Property = Property::many("oneOf", OBJECT_OR_LINK);
pub const CLOSED : Property = Property::many(
	"closed",
	&[Shape::Object, Shape::Link, Shape::DateTime, Shape::Boolean, Shape::Iri],
);

// actor, from activitypub
pub const DISCOVERABLE : Property = Property::one("discoverable", &[Shape::Boolean]);
pub const ENDPOINTS : Property = Property::one("endpoints", &[Shape::Endpoints, Shape::Iri]);
pub const FOLLOWERS : Property = Property::one("followers", COLLECTION);
pub const FOLLOWING : Property = Property::one("following", COLLECTION);
pub const INBOX : Property = Property::one("inbox", ORDERED_COLLECTION);
pub const LIKED : Property = Property::one("liked", COLLECTION);
pub const OUTBOX : Property = Property::one("outbox", ORDERED_COLLECTION);
pub const PREFERRED_USERNAME : Property = Property::one("preferredUsername", &[Shape::String]).with_lang_map();
pub const PUBLIC_KEY : Property = Property::one("publicKey", &[Shape::PublicKey, Shape::Iri]);
pub const STREAMS : Property = Property::many("streams", COLLECTION);

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const MANUALLY_APPROVES_FOLLOWERS : Property = Property::one("manuallyApprovesFollowers", &[Shape::Boolean]);
#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const MOVED_TO : Property = Property::one("movedTo", OBJECT_OR_LINK);

#[cfg(feature = "activitypub-counters")]
pub const FOLLOWERS_COUNT : Property = Property::one("followersCount", &[Shape::NonNegativeInteger]);
#[cfg(feature = "activitypub-counters")]
pub const FOLLOWING_COUNT : Property = Property::one("followingCount", &[Shape::NonNegativeInteger]);
#[cfg(feature = "activitypub-counters")]
pub const STATUSES_COUNT : Property = Property::one("statusesCount", &[Shape::NonNegativeInteger]);

// collections
pub const CURRENT : Property = Property::one("current", PAGE);
pub const FIRST : Property = Property::one("first", PAGE);
pub const ITEMS : Property = Property::many("items", OBJECT_OR_LINK);
pub const LAST : Property = Property::one("last", PAGE);
pub const NEXT : Property = Property::one("next", PAGE);
pub const ORDERED_ITEMS : Property = Property::many("orderedItems", OBJECT_OR_LINK);
pub const PART_OF : Property = Property::one("partOf", &[Shape::Link, Shape::ObjectOf(&["Collection"]), Shape::Iri]);
pub const PREV : Property = Property::one("prev", PAGE);
pub const START_INDEX : Property = Property::one("startIndex", &[Shape::NonNegativeInteger]);
pub const TOTAL_ITEMS : Property = Property::one("totalItems", &[Shape::NonNegativeInteger]);

// place
pub const ACCURACY : Property = Property::one("accuracy", &[Shape::Float]);
pub const ALTITUDE : Property = Property::one("altitude", &[Shape::Float]);
pub const LATITUDE : Property = Property::one("latitude", &[Shape::Float]);
pub const LONGITUDE : Property = Property::one("longitude", &[Shape::Float]);
pub const RADIUS : Property = Property::one("radius", &[Shape::Float]);
pub const UNITS : Property = Property::one("units", &[Shape::Units, Shape::Iri]);

// profile, relationship, tombstone
pub const DESCRIBES : Property = Property::one("describes", &[Shape::Object, Shape::Iri]);
pub const RELATIONSHIP : Property = Property::many("relationship", &[Shape::Object, Shape::Iri]);
pub const SUBJECT : Property = Property::one("subject", OBJECT_OR_LINK);
pub const DELETED : Property = Property::one("deleted", INSTANT);
pub const FORMER_TYPE : Property = Property::many("formerType", &[Shape::Object, Shape::String]);


pub type Group = &'static [&'static Property];

pub const OBJECT_PROPERTIES : Group = &[
	&ATTACHMENT, &ATTRIBUTED_TO, &AUDIENCE, &BCC, &BTO, &CC, &CONTENT, &CONTEXT,
	&DURATION, &END_TIME, &GENERATOR, &ICON, &IMAGE_PROPERTY, &IN_REPLY_TO, &LIKES,
	&LOCATION, &MEDIA_TYPE, &NAME, &PREVIEW, &PUBLISHED, &REPLIES, &SHARES, &SOURCE,
	&START_TIME, &SUMMARY, &TAG, &TO, &UPDATED, &URL,
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const OBJECT_EXTENSIONS : Group = &[&SENSITIVE, &QUOTE_URL];
#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const OBJECT_EXTENSIONS : Group = &[];

pub const LINK_PROPERTIES : Group = &[
	&ATTRIBUTED_TO, &HEIGHT, &HREF, &HREFLANG, &MEDIA_TYPE, &NAME, &PREVIEW, &REL, &WIDTH,
];

pub const INTRANSITIVE_ACTIVITY_PROPERTIES : Group = &[
	&ACTOR, &INSTRUMENT, &ORIGIN, &RESULT, &TARGET,
];

pub const ACTIVITY_PROPERTIES : Group = &[&OBJECT];

pub const QUESTION_PROPERTIES : Group = &[&ANY_OF, &ONE_OF, &CLOSED];

pub const ACTOR_PROPERTIES : Group = &[
	&DISCOVERABLE, &ENDPOINTS, &FOLLOWERS, &FOLLOWING, &INBOX, &LIKED, &OUTBOX,
	&PREFERRED_USERNAME, &PUBLIC_KEY, &STREAMS,
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const ACTOR_MISCELLANEOUS : Group = &[&MANUALLY_APPROVES_FOLLOWERS, &MOVED_TO];
#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const ACTOR_MISCELLANEOUS : Group = &[];

#[cfg(feature = "activitypub-counters")]
pub const ACTOR_COUNTERS : Group = &[&FOLLOWERS_COUNT, &FOLLOWING_COUNT, &STATUSES_COUNT];
#[cfg(not(feature = "activitypub-counters"))]
pub const ACTOR_COUNTERS : Group = &[];

pub const COLLECTION_PROPERTIES : Group = &[&CURRENT, &FIRST, &LAST, &TOTAL_ITEMS];

pub const UNORDERED_ITEMS : Group = &[&ITEMS];

pub const ORDERED_ITEMS_PROPERTIES : Group = &[&ORDERED_ITEMS];

pub const PAGE_PROPERTIES : Group = &[&NEXT, &PART_OF, &PREV];

pub const ORDERED_PAGE_PROPERTIES : Group = &[&START_INDEX];

pub const PLACE_PROPERTIES : Group = &[&ACCURACY, &ALTITUDE, &LATITUDE, &LONGITUDE, &RADIUS, &UNITS];

pub const PROFILE_PROPERTIES : Group = &[&DESCRIBES];

pub const RELATIONSHIP_PROPERTIES : Group = &[&OBJECT, &RELATIONSHIP, &SUBJECT];

pub const TOMBSTONE_PROPERTIES : Group = &[&DELETED, &FORMER_TYPE];
