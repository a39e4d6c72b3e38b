use serde::{Deserialize, Serialize};

/// Identity of one version of an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjVer {
	#[serde(rename = "ID")]
	pub id: i32,
	#[serde(rename = "Type")]
	pub r#type: i32,
	#[serde(rename = "Version")]
	pub version: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ObjectVersion {
	pub title: String,
	pub obj_ver: ObjVer,
	#[serde(rename = "DisplayID")]
	pub display_id: String,
	pub single_file: bool,
	pub object_checked_out: bool,
}

impl ObjectVersion {
	pub fn new(obj_ver: ObjVer, title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			display_id: obj_ver.id.to_string(),
			obj_ver,
			..Default::default()
		}
	}
}
