//! Static descriptors of every vocabulary type. A descriptor is what the resolver hands out
//! for a `type` discriminator: it names the type, tells its family and which properties its
//! instances carry, and builds empty instances.

pub mod activity;
pub mod actor;
pub mod collection;
pub mod link;
pub mod object;

use crate::{properties::Group, Entity, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
	Object,
	Link,
}

#[derive(Debug)]
pub struct VocabType {
	pub name: &'static str,
	pub family: Family,
	/// direct supertypes, as per the vocabulary "Extends" relation
	pub extends: &'static [&'static VocabType],
	pub groups: &'static [Group],
}

impl PartialEq for VocabType {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl VocabType {
	pub const fn object(name: &'static str, extends: &'static [&'static VocabType], groups: &'static [Group]) -> Self {
		VocabType { name, family: Family::Object, extends, groups }
	}

	pub const fn link(name: &'static str, extends: &'static [&'static VocabType], groups: &'static [Group]) -> Self {
		VocabType { name, family: Family::Link, extends, groups }
	}

	/// true if this type is `name` or extends it, directly or not
	pub fn is_a(&self, name: &str) -> bool {
		self.name == name || self.extends.iter().any(|x| x.is_a(name))
	}

	pub fn properties(&self) -> impl Iterator<Item = &'static Property> + '_ {
		self.groups.iter().flat_map(|g| g.iter().copied())
	}

	pub fn property(&self, name: &str) -> Option<&'static Property> {
		self.properties().find(|p| p.name == name)
	}

	/// build an instance with every property empty
	pub fn instance(&'static self) -> Entity {
		Entity::new(self)
	}
}

/// every core activitystreams type, both families
pub static ALL : &[&VocabType] = &[
	&object::OBJECT,
	&object::ARTICLE,
	&object::AUDIO,
	&object::DOCUMENT,
	&object::EVENT,
	&object::IMAGE,
	&object::NOTE,
	&object::PAGE,
	&object::PLACE,
	&object::PROFILE,
	&object::RELATIONSHIP,
	&object::TOMBSTONE,
	&object::VIDEO,

	&activity::ACTIVITY,
	&activity::INTRANSITIVE_ACTIVITY,
	&activity::ACCEPT,
	&activity::ADD,
	&activity::ANNOUNCE,
	&activity::ARRIVE,
	&activity::BLOCK,
	&activity::CREATE,
	&activity::DELETE,
	&activity::DISLIKE,
	&activity::FLAG,
	&activity::FOLLOW,
	&activity::IGNORE,
	&activity::INVITE,
	&activity::JOIN,
	&activity::LEAVE,
	&activity::LIKE,
	&activity::LISTEN,
	&activity::MOVE,
	&activity::OFFER,
	&activity::QUESTION,
	&activity::READ,
	&activity::REJECT,
	&activity::REMOVE,
	&activity::TENTATIVE_ACCEPT,
	&activity::TENTATIVE_REJECT,
	&activity::TRAVEL,
	&activity::UNDO,
	&activity::UPDATE,
	&activity::VIEW,

	&actor::APPLICATION,
	&actor::GROUP,
	&actor::ORGANIZATION,
	&actor::PERSON,
	&actor::SERVICE,

	&collection::COLLECTION,
	&collection::COLLECTION_PAGE,
	&collection::ORDERED_COLLECTION,
	&collection::ORDERED_COLLECTION_PAGE,

	&link::LINK,
	&link::MENTION,
];

/// types coming from extension vocabularies enabled at build time
#[cfg(feature = "activitypub-miscellaneous-terms")]
pub static EXTENSIONS : &[&VocabType] = &[&link::HASHTAG];
#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub static EXTENSIONS : &[&VocabType] = &[];

/// core and extension types together
pub fn known() -> impl Iterator<Item = &'static VocabType> {
	ALL.iter().chain(EXTENSIONS.iter()).copied()
}
