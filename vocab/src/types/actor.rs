use crate::properties::{
	Group, ACTOR_COUNTERS, ACTOR_MISCELLANEOUS, ACTOR_PROPERTIES, OBJECT_EXTENSIONS,
	OBJECT_PROPERTIES,
};

use super::{object::OBJECT, VocabType};

const ACTOR_GROUPS : &[Group] = &[
	OBJECT_PROPERTIES, OBJECT_EXTENSIONS, ACTOR_PROPERTIES, ACTOR_MISCELLANEOUS, ACTOR_COUNTERS,
];

pub static APPLICATION : VocabType = VocabType::object("Application", &[&OBJECT], ACTOR_GROUPS);
pub static GROUP : VocabType = VocabType::object("Group", &[&OBJECT], ACTOR_GROUPS);
pub static ORGANIZATION : VocabType = VocabType::object("Organization", &[&OBJECT], ACTOR_GROUPS);
pub static PERSON : VocabType = VocabType::object("Person", &[&OBJECT], ACTOR_GROUPS);
pub static SERVICE : VocabType = VocabType::object("Service", &[&OBJECT], ACTOR_GROUPS);

/// names of the types whose instances act on their own, and carry inbox and outbox
pub const ACTOR_TYPES : [&str; 5] = ["Application", "Group", "Organization", "Person", "Service"];
