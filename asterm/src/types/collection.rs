crate::strenum! {
	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};
}

impl CollectionType {
	pub fn is_ordered(&self) -> bool {
		matches!(self, CollectionType::OrderedCollection | CollectionType::OrderedCollectionPage)
	}
}
