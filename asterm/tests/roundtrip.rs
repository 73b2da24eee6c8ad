use asterm::{ObjectType, Term};
use serde_json::{json, Value};

fn roundtrip(raw: Value) -> (Term, Value) {
	let term = asterm::resolve(&raw).expect("failed resolving document");
	let out = Value::Object(term.serialize().expect("failed serializing term"));
	let again = asterm::resolve(&out).expect("failed resolving serialized term");
	assert_eq!(term, again, "term changed across round trip");
	(term, out)
}

#[test]
fn rich_documents_survive_round_trips() {
	for raw in [
		json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"id": "https://example.com/activities/1",
			"type": "Create",
			"actor": { "type": "Person", "id": "https://example.com/alice", "preferredUsername": "alice" },
			"object": {
				"type": "Note",
				"content": "<p>hi</p>",
				"contentMap": { "en": "<p>hi</p>" },
				"published": "2024-06-04T17:09:20Z",
				"duration": "PT1M30S",
				"attachment": [
					{ "type": "Image", "url": "https://example.com/a.png", "mediaType": "image/png" },
					{ "type": "Link", "href": "https://example.com/b", "rel": ["alternate", "canonical"] },
				],
			},
			"to": ["https://example.com/bob", "https://example.com/carol"],
		}),
		json!({
			"type": "OrderedCollectionPage",
			"partOf": "https://example.com/outbox",
			"startIndex": 0,
			"orderedItems": [{ "type": "Like", "object": "https://example.com/x" }],
			"next": { "type": "OrderedCollectionPage", "id": "https://example.com/outbox?page=2" },
		}),
		json!({
			"type": "Question",
			"name": "pizza?",
			"oneOf": [{ "type": "Note", "name": "yes" }, { "type": "Note", "name": "no" }],
			"closed": "2024-07-01T00:00:00Z",
		}),
		json!({ "type": ["Hashtag", "ext:Tag"], "href": "https://example.com/tags/rust", "name": "#rust" }),
		json!({ "type": "Tombstone", "formerType": "Note", "deleted": "2024-06-04T17:09:20Z" }),
	] {
		roundtrip(raw);
	}
}

#[test]
fn context_is_dropped_and_extensions_kept() {
	let (term, out) = roundtrip(json!({
		"@context": ["https://www.w3.org/ns/activitystreams", { "toot": "http://joinmastodon.org/ns#" }],
		"type": "Note",
		"fooBar": 123,
		"toot:featured": { "nested": [1, 2, { "deep": null }] },
	}));

	assert_eq!(term.unknown().len(), 2);
	assert!(out.get("@context").is_none());
	assert_eq!(out["fooBar"], json!(123));
	assert_eq!(out["toot:featured"], json!({ "nested": [1, 2, { "deep": null }] }));
}

#[test]
fn singletons_collapse_and_empties_vanish() {
	let (term, out) = roundtrip(json!({
		"type": "Note",
		"to": ["https://example.com/only"],
		"cc": [],
		"bto": ["https://example.com/a", "https://example.com/b"],
	}));

	assert_eq!(term.to().len(), 1);
	assert_eq!(out["to"], json!("https://example.com/only"));
	assert!(out.get("cc").is_none());
	assert_eq!(out["bto"], json!(["https://example.com/a", "https://example.com/b"]));
}

#[test]
fn type_name_is_added_exactly_once() {
	let fresh = Value::Object(Term::new(ObjectType::Article).serialize().unwrap());
	assert_eq!(fresh["type"], json!("Article"));

	let extended = Term::new(ObjectType::Article)
		.set_types(vec!["ext:Longform".to_string()]);
	let out = Value::Object(extended.serialize().unwrap());
	assert_eq!(out["type"], json!(["ext:Longform", "Article"]));

	let already = Term::new(ObjectType::Article)
		.set_types(vec!["Article".to_string()]);
	assert_eq!(Value::Object(already.serialize().unwrap())["type"], json!("Article"));
}

#[test]
fn declared_properties_win_over_unknown_fields() {
	let mut note = Term::new(ObjectType::Note).set_content(Some("declared"));
	note.set_unknown("content", Some(json!("shadowed")));
	note.set_unknown("extra", Some(json!(true)));

	let out = Value::Object(note.serialize().unwrap());
	assert_eq!(out["content"], json!("declared"));
	assert_eq!(out["extra"], json!(true));
}

#[test]
fn empty_language_maps_are_still_written() {
	let (term, out) = roundtrip(json!({ "type": "Note", "summaryMap": {} }));
	assert!(term.language_map("summary").is_some_and(|x| x.is_empty()));
	assert_eq!(out["summaryMap"], json!({}));
}

#[test]
fn unclassifiable_values_keep_their_shape() {
	let (term, out) = roundtrip(json!({
		"type": "Person",
		"inbox": "not an iri",
		"endpoints": { "sharedInbox": "https://example.com/inbox" },
		"published": 12,
	}));

	assert!(term.inbox().get().is_some_and(|x| x.is_unknown()));
	assert!(term.endpoints().get().is_some_and(|x| x.is_unknown()));
	assert_eq!(out["inbox"], json!("not an iri"));
	assert_eq!(out["endpoints"], json!({ "sharedInbox": "https://example.com/inbox" }));
	assert_eq!(out["published"], json!(12));
}

#[test]
fn out_of_range_dates_stay_unknown() {
	let (term, out) = roundtrip(json!({
		"type": "Note",
		"published": "+10000-01-01T00:00:00",
		"updated": "9999-12-31T23:59:59",
	}));

	assert!(term.published().is_err());
	assert!(term.updated().is_ok());
	assert_eq!(out["published"], json!("+10000-01-01T00:00:00"));
	assert_eq!(out["updated"], json!("9999-12-31T23:59:59Z"));
}
