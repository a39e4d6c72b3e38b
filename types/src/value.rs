use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::MFDataType;

/// Reference to another object, as used by lookup values and traditional folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Lookup {
	pub item: i32,
	pub version: i32,
	pub object_type: i32,
	pub display_value: String,
	pub deleted: bool,
	pub hidden: bool,
}

impl Lookup {
	pub fn new(item: i32, display_value: impl Into<String>) -> Self {
		Self {
			item,
			version: -1,
			display_value: display_value.into(),
			..Default::default()
		}
	}
}

/// A property value, carried by property-based virtual folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TypedValue {
	pub data_type: MFDataType,
	pub has_value: bool,
	pub value: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lookup: Option<Lookup>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lookups: Option<Vec<Lookup>>,
	pub display_value: String,
	pub sorting_key: String,
}

impl TypedValue {
	pub fn new(data_type: MFDataType, value: Value, display_value: impl Into<String>) -> Self {
		Self {
			data_type,
			has_value: !value.is_null(),
			value: Some(value).filter(|value| !value.is_null()),
			display_value: display_value.into(),
			..Default::default()
		}
	}

	pub fn lookup(lookup: Lookup) -> Self {
		Self {
			data_type: MFDataType::Lookup,
			has_value: true,
			display_value: lookup.display_value.clone(),
			lookup: Some(lookup),
			..Default::default()
		}
	}

	pub fn multi_select_lookup(lookups: Vec<Lookup>) -> Self {
		let display_value = lookups
			.iter()
			.map(|lookup| lookup.display_value.as_str())
			.collect::<Vec<_>>()
			.join("; ");
		Self {
			data_type: MFDataType::MultiSelectLookup,
			has_value: !lookups.is_empty(),
			lookups: Some(lookups),
			display_value,
			..Default::default()
		}
	}
}
