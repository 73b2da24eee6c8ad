use super::{activity::ActivityType, collection::CollectionType, link::LinkType, object::ObjectType};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

impl BaseType {
	pub fn is_link(&self) -> bool {
		matches!(self, BaseType::Link(_))
	}

	pub fn is_object(&self) -> bool {
		matches!(self, BaseType::Object(_))
	}

	pub fn is_activity(&self) -> bool {
		matches!(self, BaseType::Object(ObjectType::Activity(_)))
	}

	pub fn is_actor(&self) -> bool {
		matches!(self, BaseType::Object(ObjectType::Actor(_)))
	}

	pub fn is_collection(&self) -> bool {
		matches!(self, BaseType::Object(ObjectType::Collection(_)))
	}

	pub fn is_collection_page(&self) -> bool {
		matches!(
			self,
			BaseType::Object(ObjectType::Collection(CollectionType::CollectionPage | CollectionType::OrderedCollectionPage))
		)
	}
}

impl From<ActivityType> for BaseType {
	fn from(value: ActivityType) -> Self {
		BaseType::Object(ObjectType::Activity(value))
	}
}

impl From<super::actor::ActorType> for BaseType {
	fn from(value: super::actor::ActorType) -> Self {
		BaseType::Object(ObjectType::Actor(value))
	}
}

impl From<CollectionType> for BaseType {
	fn from(value: CollectionType) -> Self {
		BaseType::Object(ObjectType::Collection(value))
	}
}

impl From<super::document::DocumentType> for BaseType {
	fn from(value: super::document::DocumentType) -> Self {
		BaseType::Object(ObjectType::Document(value))
	}
}
