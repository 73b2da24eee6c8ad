pub const ACTIVITYSTREAMS : &str = "https://www.w3.org/ns/activitystreams";

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self) -> Self {
		if let Some(obj) = self.as_object_mut() {
			let mut ctx = serde_json::Map::new();
			#[cfg(feature = "activitypub-miscellaneous-terms")]
			{
				ctx.insert("sensitive".to_string(), serde_json::Value::String("as:sensitive".into()));
				ctx.insert("quoteUrl".to_string(), serde_json::Value::String("as:quoteUrl".into()));
				ctx.insert("manuallyApprovesFollowers".to_string(), serde_json::Value::String("as:manuallyApprovesFollowers".into()));
				ctx.insert("movedTo".to_string(), serde_json::Value::String("as:movedTo".into()));
				ctx.insert("Hashtag".to_string(), serde_json::Value::String("as:Hashtag".into()));
			}
			let mut context = vec![serde_json::Value::String(ACTIVITYSTREAMS.into())];
			if !ctx.is_empty() {
				context.push(serde_json::Value::Object(ctx));
			}
			obj.insert("@context".to_string(), serde_json::Value::Array(context));
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}

#[cfg(test)]
mod test {
	use super::LD;

	#[test]
	fn context_is_added_to_objects_only() {
		let obj = serde_json::json!({ "type": "Note" }).ld_context();
		assert_eq!(obj["@context"][0], serde_json::json!(super::ACTIVITYSTREAMS));
		let not_obj = serde_json::json!("https://example.com").ld_context();
		assert_eq!(not_obj, serde_json::json!("https://example.com"));
	}

	#[test]
	fn context_is_dropped_again_when_parsing() {
		let value = serde_json::Value::Object(
			crate::Term::new(crate::types::object::ObjectType::Note).serialize().unwrap()
		).ld_context();
		let term = crate::resolve(&value).unwrap();
		assert!(term.unknown().is_empty());
	}
}
