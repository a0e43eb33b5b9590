use crate::properties::{
	COLLECTION_PROPERTIES, OBJECT_EXTENSIONS, OBJECT_PROPERTIES, ORDERED_ITEMS_PROPERTIES,
	ORDERED_PAGE_PROPERTIES, PAGE_PROPERTIES, UNORDERED_ITEMS,
};

use super::{object::OBJECT, VocabType};

pub static COLLECTION : VocabType = VocabType::object(
	"Collection", &[&OBJECT],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, COLLECTION_PROPERTIES, UNORDERED_ITEMS],
);

pub static ORDERED_COLLECTION : VocabType = VocabType::object(
	"OrderedCollection", &[&COLLECTION],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, COLLECTION_PROPERTIES, ORDERED_ITEMS_PROPERTIES],
);

pub static COLLECTION_PAGE : VocabType = VocabType::object(
	"CollectionPage", &[&COLLECTION],
	&[OBJECT_PROPERTIES, OBJECT_EXTENSIONS, COLLECTION_PROPERTIES, UNORDERED_ITEMS, PAGE_PROPERTIES],
);

pub static ORDERED_COLLECTION_PAGE : VocabType = VocabType::object(
	"OrderedCollectionPage", &[&ORDERED_COLLECTION, &COLLECTION_PAGE],
	&[
		OBJECT_PROPERTIES, OBJECT_EXTENSIONS, COLLECTION_PROPERTIES, ORDERED_ITEMS_PROPERTIES,
		PAGE_PROPERTIES, ORDERED_PAGE_PROPERTIES,
	],
);
