use crate::macros::{getter, langmap, setter};
use crate::Term;

// Object
impl Term {
	getter! { id -> iri }
	getter! { attachment -> node }
	getter! { attributed_to::attributedTo -> node }
	getter! { audience -> node }
	getter! { bcc -> node }
	getter! { bto -> node }
	getter! { cc -> node }
	getter! { content -> &str }
	getter! { context -> node }
	getter! { duration -> chrono::TimeDelta }
	getter! { end_time::endTime -> chrono::DateTime<chrono::Utc> }
	getter! { generator -> node }
	getter! { icon -> node }
	getter! { image -> node }
	getter! { in_reply_to::inReplyTo -> node }
	getter! { likes -> node }
	getter! { location -> node }
	getter! { media_type::mediaType -> &str }
	getter! { name -> &str }
	getter! { preview -> node }
	getter! { published -> chrono::DateTime<chrono::Utc> }
	getter! { replies -> node }
	getter! { shares -> node }
	getter! { source -> node }
	getter! { start_time::startTime -> chrono::DateTime<chrono::Utc> }
	getter! { summary -> &str }
	getter! { tag -> node }
	getter! { to -> node }
	getter! { updated -> chrono::DateTime<chrono::Utc> }
	getter! { url -> node }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	getter! { sensitive -> bool }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	getter! { quote_url::quoteUrl -> node }

	setter! { id -> iri }
	setter! { attachment -> node }
	setter! { attributed_to::attributedTo -> node }
	setter! { audience -> node }
	setter! { bcc -> node }
	setter! { bto -> node }
	setter! { cc -> node }
	setter! { content -> &str }
	setter! { context -> node }
	setter! { duration -> chrono::TimeDelta }
	setter! { end_time::endTime -> chrono::DateTime<chrono::Utc> }
	setter! { generator -> node }
	setter! { icon -> node }
	setter! { image -> node }
	setter! { in_reply_to::inReplyTo -> node }
	setter! { likes -> node }
	setter! { location -> node }
	setter! { media_type::mediaType -> &str }
	setter! { name -> &str }
	setter! { preview -> node }
	setter! { published -> chrono::DateTime<chrono::Utc> }
	setter! { replies -> node }
	setter! { shares -> node }
	setter! { source -> node }
	setter! { start_time::startTime -> chrono::DateTime<chrono::Utc> }
	setter! { summary -> &str }
	setter! { tag -> node }
	setter! { to -> node }
	setter! { updated -> chrono::DateTime<chrono::Utc> }
	setter! { url -> node }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	setter! { sensitive -> bool }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	setter! { quote_url::quoteUrl -> node }

	langmap! { content }
	langmap! { name }
	langmap! { summary }
}

// Activity, IntransitiveActivity, Question
impl Term {
	getter! { actor -> node }
	getter! { instrument -> node }
	getter! { object -> node }
	getter! { origin -> node }
	getter! { result -> node }
	getter! { target -> node }
	getter! { any_of::anyOf -> node }
	getter! { one_of::oneOf -> node }
	getter! { closed -> node }

	setter! { actor -> node }
	setter! { instrument -> node }
	setter! { object -> node }
	setter! { origin -> node }
	setter! { result -> node }
	setter! { target -> node }
	setter! { any_of::anyOf -> node }
	setter! { one_of::oneOf -> node }
	setter! { closed -> node }
}

// Actor
impl Term {
	getter! { discoverable -> bool }
	getter! { endpoints -> node }
	getter! { followers -> node }
	getter! { following -> node }
	getter! { inbox -> node }
	getter! { liked -> node }
	getter! { outbox -> node }
	getter! { preferred_username::preferredUsername -> &str }
	getter! { streams -> node }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	getter! { manually_approves_followers::manuallyApprovesFollowers -> bool }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	getter! { moved_to::movedTo -> node }

	setter! { discoverable -> bool }
	setter! { endpoints -> node }
	setter! { followers -> node }
	setter! { following -> node }
	setter! { inbox -> node }
	setter! { liked -> node }
	setter! { outbox -> node }
	setter! { preferred_username::preferredUsername -> &str }
	setter! { streams -> node }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	setter! { manually_approves_followers::manuallyApprovesFollowers -> bool }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	setter! { moved_to::movedTo -> node }

	langmap! { preferred_username::preferredUsername }
}

// Collection, CollectionPage
impl Term {
	getter! { current -> node }
	getter! { first -> node }
	getter! { last -> node }
	getter! { total_items::totalItems -> u64 }
	getter! { items -> node }
	getter! { ordered_items::orderedItems -> node }
	getter! { next -> node }
	getter! { part_of::partOf -> node }
	getter! { prev -> node }
	getter! { start_index::startIndex -> u64 }

	setter! { current -> node }
	setter! { first -> node }
	setter! { last -> node }
	setter! { total_items::totalItems -> u64 }
	setter! { items -> node }
	setter! { ordered_items::orderedItems -> node }
	setter! { next -> node }
	setter! { part_of::partOf -> node }
	setter! { prev -> node }
	setter! { start_index::startIndex -> u64 }
}

// Link
impl Term {
	getter! { href -> iri }
	getter! { hreflang -> &str }
	getter! { height -> u64 }
	getter! { width -> u64 }
	getter! { rel -> node }

	setter! { href -> iri }
	setter! { hreflang -> &str }
	setter! { height -> u64 }
	setter! { width -> u64 }
	setter! { rel -> node }
}

// Place, Profile, Relationship, Tombstone
impl Term {
	getter! { accuracy -> f64 }
	getter! { altitude -> f64 }
	getter! { latitude -> f64 }
	getter! { longitude -> f64 }
	getter! { radius -> f64 }
	getter! { units -> node }
	getter! { describes -> node }
	getter! { subject -> node }
	getter! { relationship -> node }
	getter! { deleted -> chrono::DateTime<chrono::Utc> }
	getter! { former_type::formerType -> node }

	setter! { accuracy -> f64 }
	setter! { altitude -> f64 }
	setter! { latitude -> f64 }
	setter! { longitude -> f64 }
	setter! { radius -> f64 }
	setter! { units -> node }
	setter! { describes -> node }
	setter! { subject -> node }
	setter! { relationship -> node }
	setter! { deleted -> chrono::DateTime<chrono::Utc> }
	setter! { former_type::formerType -> node }
}
