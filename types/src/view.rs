use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct View {
	#[serde(rename = "ID")]
	pub id: i32,
	pub name: String,
	pub common: bool,
}

impl View {
	pub fn new(id: i32, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			common: true,
		}
	}
}
