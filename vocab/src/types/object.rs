use crate::properties::{
	Group, OBJECT_EXTENSIONS, OBJECT_PROPERTIES, PLACE_PROPERTIES, PROFILE_PROPERTIES,
	RELATIONSHIP_PROPERTIES, TOMBSTONE_PROPERTIES,
};

use super::VocabType;

const OBJECT_GROUPS : &[Group] = &[OBJECT_PROPERTIES, OBJECT_EXTENSIONS];

pub static OBJECT : VocabType = VocabType::object("Object", &[], OBJECT_GROUPS);

pub static ARTICLE : VocabType = VocabType::object("Article", &[&OBJECT], OBJECT_GROUPS);
pub static EVENT : VocabType = VocabType::object("Event", &[&OBJECT], OBJECT_GROUPS);
pub static NOTE : VocabType = VocabType::object("Note", &[&OBJECT], OBJECT_GROUPS);

pub static DOCUMENT : VocabType = VocabType::object("Document", &[&OBJECT], OBJECT_GROUPS);
pub static AUDIO : VocabType = VocabType::object("Audio", &[&DOCUMENT], OBJECT_GROUPS);
pub static IMAGE : VocabType = VocabType::object("Image", &[&DOCUMENT], OBJECT_GROUPS);
pub static PAGE : VocabType = VocabType::object("Page", &[&DOCUMENT], OBJECT_GROUPS);
pub static VIDEO : VocabType = VocabType::object("Video", &[&DOCUMENT], OBJECT_GROUPS);

pub static PLACE : VocabType = VocabType::object(
	"Place", &[&OBJECT],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, PLACE_PROPERTIES],
);

pub static PROFILE : VocabType = VocabType::object(
	"Profile", &[&OBJECT],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, PROFILE_PROPERTIES],
);

pub static RELATIONSHIP : VocabType = VocabType::object(
	"Relationship", &[&OBJECT],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, RELATIONSHIP_PROPERTIES],
);

pub static TOMBSTONE : VocabType = VocabType::object(
	"Tombstone", &[&OBJECT],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, TOMBSTONE_PROPERTIES],
);
