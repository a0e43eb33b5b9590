use crate::properties::LINK_PROPERTIES;

use super::VocabType;

pub static LINK : VocabType = VocabType::link("Link", &[], &[LINK_PROPERTIES]);

pub static MENTION : VocabType = VocabType::link("Mention", &[&LINK], &[LINK_PROPERTIES]);

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub static HASHTAG : VocabType = VocabType::link("Hashtag", &[&LINK], &[LINK_PROPERTIES]);
