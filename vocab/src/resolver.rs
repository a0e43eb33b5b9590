use std::collections::HashMap;

use crate::types::{Family, VocabType};

/// Maps `type` discriminators to vocabulary type descriptors, one table per family.
///
/// Built once, then only read: share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
	objects: HashMap<&'static str, &'static VocabType>,
	links: HashMap<&'static str, &'static VocabType>,
}

impl Resolver {
	/// resolver restricted to given types
	pub fn new(types: impl IntoIterator<Item = &'static VocabType>) -> Self {
		let mut resolver = Resolver::default();
		for kind in types {
			let table = match kind.family {
				Family::Object => &mut resolver.objects,
				Family::Link => &mut resolver.links,
			};
			if table.insert(kind.name, kind).is_some() {
				tracing::warn!("type {} registered twice, keeping last one", kind.name);
			}
		}
		resolver
	}

	/// resolver knowing the whole vocabulary, extensions included
	pub fn activitystreams() -> Self {
		Resolver::new(crate::types::known())
	}

	pub fn object(&self, name: &str) -> Option<&'static VocabType> {
		let found = self.objects.get(name).copied();
		if found.is_some() {
			tracing::trace!("resolved object type {name}");
		}
		found
	}

	pub fn link(&self, name: &str) -> Option<&'static VocabType> {
		let found = self.links.get(name).copied();
		if found.is_some() {
			tracing::trace!("resolved link type {name}");
		}
		found
	}

	/// look in objects first, then links
	pub fn any(&self, name: &str) -> Option<&'static VocabType> {
		self.object(name).or_else(|| self.link(name))
	}

	pub fn len(&self) -> usize {
		self.objects.len() + self.links.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// every registered type, sorted by name
	pub fn types(&self) -> Vec<&'static VocabType> {
		let mut out : Vec<&'static VocabType> = self.objects.values().chain(self.links.values()).copied().collect();
		out.sort_by_key(|x| x.name);
		out
	}
}

#[cfg(test)]
mod test {
	use super::Resolver;
	use crate::types::{link, object};

	#[test]
	fn families_are_resolved_separately() {
		let resolver = Resolver::activitystreams();
		assert_eq!(resolver.object("Event").map(|x| x.name), Some("Event"));
		assert!(resolver.link("Event").is_none());
		assert_eq!(resolver.link("Mention").map(|x| x.name), Some("Mention"));
		assert!(resolver.object("Mention").is_none());
	}

	#[test]
	fn unknown_names_are_not_an_error() {
		let resolver = Resolver::activitystreams();
		assert!(resolver.object("Emoji").is_none());
		assert!(resolver.link("").is_none());
		assert!(resolver.any("event").is_none());
	}

	#[test]
	fn restricted_resolver_only_knows_given_types() {
		let resolver = Resolver::new([&object::NOTE, &link::LINK]);
		assert_eq!(resolver.len(), 2);
		assert!(resolver.object("Note").is_some());
		assert!(resolver.object("Event").is_none());
		assert!(resolver.any("Link").is_some());
	}

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	#[test]
	fn hashtags_are_links() {
		assert!(Resolver::activitystreams().link("Hashtag").is_some());
	}

	#[test]
	fn resolver_is_shareable_across_threads() {
		fn assert_sync<T: Send + Sync>() {}
		assert_sync::<Resolver>();
	}
}
