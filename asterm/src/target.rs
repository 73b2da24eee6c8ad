use crate::Term;

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

// compacted forms of the public collection, seen in the wild when documents are json-ld compacted
const PUBLIC_COMPACT : [&str; 2] = ["as:Public", "Public"];

pub trait Addressed {
	/// every audience id: to, bto, cc, bcc
	fn addressed(&self) -> Vec<String>;
	/// primary audience ids only: to, bto
	fn mentioning(&self) -> Vec<String>;
	/// public collection among to or cc
	fn is_public(&self) -> bool;
}

impl Addressed for Term {
	fn addressed(&self) -> Vec<String> {
		let mut out = Vec::new();
		for id in [self.to(), self.bto(), self.cc(), self.bcc()].into_iter().flat_map(|x| x.all_ids()) {
			if !out.contains(&id) {
				out.push(id);
			}
		}
		out
	}

	fn mentioning(&self) -> Vec<String> {
		let mut to : Vec<String> = self.to().all_ids();
		to.append(&mut self.bto().all_ids());
		to
	}

	fn is_public(&self) -> bool {
		self.to()
			.iter()
			.chain(self.cc())
			.filter_map(|x| match x {
				crate::PropertyValue::String(s)
				| crate::PropertyValue::Unknown(serde_json::Value::String(s)) => Some(s.as_str()),
				x => x.id().ok(),
			})
			.any(|x| x == PUBLIC || PUBLIC_COMPACT.contains(&x))
	}
}
