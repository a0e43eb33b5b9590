use crate::properties::{
	Group, ACTIVITY_PROPERTIES, INTRANSITIVE_ACTIVITY_PROPERTIES, OBJECT_EXTENSIONS,
	OBJECT_PROPERTIES, QUESTION_PROPERTIES,
};

use super::{object::OBJECT, VocabType};

const ACTIVITY_GROUPS : &[Group] = &[
	OBJECT_PROPERTIES, OBJECT_EXTENSIONS, INTRANSITIVE_ACTIVITY_PROPERTIES, ACTIVITY_PROPERTIES,
];

const INTRANSITIVE_GROUPS : &[Group] = &[
	OBJECT_PROPERTIES, OBJECT_EXTENSIONS, INTRANSITIVE_ACTIVITY_PROPERTIES,
];

pub static ACTIVITY : VocabType = VocabType::object("Activity", &[&OBJECT], ACTIVITY_GROUPS);

pub static ACCEPT : VocabType = VocabType::object("Accept", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static TENTATIVE_ACCEPT : VocabType = VocabType::object("TentativeAccept", &[&ACCEPT], ACTIVITY_GROUPS);
pub static ADD : VocabType = VocabType::object("Add", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static ANNOUNCE : VocabType = VocabType::object("Announce", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static CREATE : VocabType = VocabType::object("Create", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static DELETE : VocabType = VocabType::object("Delete", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static DISLIKE : VocabType = VocabType::object("Dislike", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static FLAG : VocabType = VocabType::object("Flag", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static FOLLOW : VocabType = VocabType::object("Follow", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static IGNORE : VocabType = VocabType::object("Ignore", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static BLOCK : VocabType = VocabType::object("Block", &[&IGNORE], ACTIVITY_GROUPS);
pub static JOIN : VocabType = VocabType::object("Join", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static LEAVE : VocabType = VocabType::object("Leave", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static LIKE : VocabType = VocabType::object("Like", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static LISTEN : VocabType = VocabType::object("Listen", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static MOVE : VocabType = VocabType::object("Move", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static OFFER : VocabType = VocabType::object("Offer", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static INVITE : VocabType = VocabType::object("Invite", &[&OFFER], ACTIVITY_GROUPS);
pub static READ : VocabType = VocabType::object("Read", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static REJECT : VocabType = VocabType::object("Reject", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static TENTATIVE_REJECT : VocabType = VocabType::object("TentativeReject", &[&REJECT], ACTIVITY_GROUPS);
pub static REMOVE : VocabType = VocabType::object("Remove", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static UNDO : VocabType = VocabType::object("Undo", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static UPDATE : VocabType = VocabType::object("Update", &[&ACTIVITY], ACTIVITY_GROUPS);
pub static VIEW : VocabType = VocabType::object("View", &[&ACTIVITY], ACTIVITY_GROUPS);

pub static INTRANSITIVE_ACTIVITY : VocabType = VocabType::object("IntransitiveActivity", &[&ACTIVITY], INTRANSITIVE_GROUPS);
pub static ARRIVE : VocabType = VocabType::object("Arrive", &[&INTRANSITIVE_ACTIVITY], INTRANSITIVE_GROUPS);
pub static TRAVEL : VocabType = VocabType::object("Travel", &[&INTRANSITIVE_ACTIVITY], INTRANSITIVE_GROUPS);
pub static QUESTION : VocabType = VocabType::object(
	"Question", &[&INTRANSITIVE_ACTIVITY],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, INTRANSITIVE_ACTIVITY_PROPERTIES, QUESTION_PROPERTIES],
);
