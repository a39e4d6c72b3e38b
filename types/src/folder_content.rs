use int_enum::IntEnum;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{Lookup, ObjectVersion, TypedValue, TypesError, View};

/// Discriminant of a folder content item, numbered as on the wire.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr, IntEnum)]
pub enum FolderContentItemType {
	Unknown = 0,
	ViewFolder = 1,
	PropertyFolder = 2,
	TraditionalFolder = 3,
	ObjectVersion = 4,
}

/// One entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFolderContentItem", into = "RawFolderContentItem")]
pub enum FolderContentItem {
	ViewFolder(View),
	PropertyFolder(TypedValue),
	TraditionalFolder(Lookup),
	ObjectVersion(ObjectVersion),
	Unknown,
}

impl FolderContentItem {
	pub fn item_type(&self) -> FolderContentItemType {
		match self {
			Self::ViewFolder(_) => FolderContentItemType::ViewFolder,
			Self::PropertyFolder(_) => FolderContentItemType::PropertyFolder,
			Self::TraditionalFolder(_) => FolderContentItemType::TraditionalFolder,
			Self::ObjectVersion(_) => FolderContentItemType::ObjectVersion,
			Self::Unknown => FolderContentItemType::Unknown,
		}
	}

	/// Name shown for the item in a listing, empty for unknown items.
	pub fn display_name(&self) -> &str {
		match self {
			Self::ViewFolder(view) => &view.name,
			Self::PropertyFolder(value) => &value.display_value,
			Self::TraditionalFolder(lookup) => &lookup.display_value,
			Self::ObjectVersion(object) => &object.title,
			Self::Unknown => "",
		}
	}

	pub fn is_folder(&self) -> bool {
		matches!(
			self,
			Self::ViewFolder(_) | Self::PropertyFolder(_) | Self::TraditionalFolder(_)
		)
	}
}

/// Wire shape: a type tag next to one payload field per variant.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct RawFolderContentItem {
	folder_content_item_type: i32,
	#[serde(skip_serializing_if = "Option::is_none")]
	view: Option<View>,
	#[serde(skip_serializing_if = "Option::is_none")]
	property_folder: Option<TypedValue>,
	#[serde(skip_serializing_if = "Option::is_none")]
	traditional_folder: Option<Lookup>,
	#[serde(skip_serializing_if = "Option::is_none")]
	object_version: Option<ObjectVersion>,
}

impl TryFrom<RawFolderContentItem> for FolderContentItem {
	type Error = TypesError;

	fn try_from(raw: RawFolderContentItem) -> Result<Self, Self::Error> {
		let item_type = FolderContentItemType::from_int(raw.folder_content_item_type)
			.unwrap_or(FolderContentItemType::Unknown);
		let item = match item_type {
			FolderContentItemType::ViewFolder => raw.view.map(Self::ViewFolder),
			FolderContentItemType::PropertyFolder => raw.property_folder.map(Self::PropertyFolder),
			FolderContentItemType::TraditionalFolder => {
				raw.traditional_folder.map(Self::TraditionalFolder)
			}
			FolderContentItemType::ObjectVersion => raw.object_version.map(Self::ObjectVersion),
			FolderContentItemType::Unknown => Some(Self::Unknown),
		};
		item.ok_or(TypesError::MissingPayload(item_type))
	}
}

impl From<FolderContentItem> for RawFolderContentItem {
	fn from(item: FolderContentItem) -> Self {
		let mut raw = Self {
			folder_content_item_type: item.item_type().int_value(),
			..Default::default()
		};
		match item {
			FolderContentItem::ViewFolder(view) => raw.view = Some(view),
			FolderContentItem::PropertyFolder(value) => raw.property_folder = Some(value),
			FolderContentItem::TraditionalFolder(lookup) => raw.traditional_folder = Some(lookup),
			FolderContentItem::ObjectVersion(object) => raw.object_version = Some(object),
			FolderContentItem::Unknown => {}
		}
		raw
	}
}

/// Response of a folder listing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FolderContentItems {
	pub items: Vec<FolderContentItem>,
	pub more_results: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::{MFDataType, ObjVer};

	#[test]
	fn test_decode_view_folder() -> anyhow::Result<()> {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 1,
			"View": { "ID": 5, "Name": "Documents", "Common": true }
		}))?;
		assert_eq!(item, FolderContentItem::ViewFolder(View::new(5, "Documents")));
		assert_eq!(item.display_name(), "Documents");
		Ok(())
	}

	#[test]
	fn test_decode_traditional_folder() -> anyhow::Result<()> {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 3,
			"TraditionalFolder": { "Item": 42, "DisplayValue": "Archive" }
		}))?;
		assert_eq!(item.item_type(), FolderContentItemType::TraditionalFolder);
		assert_eq!(item.display_name(), "Archive");
		assert!(item.is_folder());
		Ok(())
	}

	#[test]
	fn test_decode_object_version() -> anyhow::Result<()> {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 4,
			"ObjectVersion": {
				"Title": "Invoice 2023-04",
				"ObjVer": { "ID": 381, "Type": 0, "Version": 3 },
				"DisplayID": "381",
				"SingleFile": true
			}
		}))?;
		match &item {
			FolderContentItem::ObjectVersion(object) => {
				assert_eq!(object.obj_ver, ObjVer { id: 381, r#type: 0, version: 3 });
				assert!(object.single_file);
			}
			other => panic!("unexpected item {:?}", other),
		}
		assert_eq!(item.display_name(), "Invoice 2023-04");
		assert!(!item.is_folder());
		Ok(())
	}

	#[test]
	fn test_decode_property_folder() -> anyhow::Result<()> {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 2,
			"PropertyFolder": {
				"DataType": 10,
				"HasValue": true,
				"Lookups": [
					{ "Item": 1, "DisplayValue": "One" },
					{ "Item": 2, "DisplayValue": "Two" }
				],
				"DisplayValue": "One; Two"
			}
		}))?;
		let FolderContentItem::PropertyFolder(value) = item else {
			panic!("expected a property folder");
		};
		assert_eq!(value.data_type, MFDataType::MultiSelectLookup);
		assert_eq!(value.lookups.map(|lookups| lookups.len()), Some(2));
		Ok(())
	}

	#[test]
	fn test_missing_payload() {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 1,
			"ObjectVersion": { "Title": "wrong payload" }
		}));
		assert!(item.is_err());
		assert!(item
			.unwrap_err()
			.to_string()
			.contains("folder content item of type ViewFolder has no payload"));
	}

	#[test]
	fn test_unknown_item_type() -> anyhow::Result<()> {
		let item = serde_json::from_value::<FolderContentItem>(json!({
			"FolderContentItemType": 9
		}))?;
		assert_eq!(item, FolderContentItem::Unknown);
		assert_eq!(item.display_name(), "");
		Ok(())
	}

	#[test]
	fn test_serialize_keeps_wire_shape() -> anyhow::Result<()> {
		let item = FolderContentItem::TraditionalFolder(Lookup::new(9, "Projects"));
		let data = serde_json::to_value(&item)?;
		assert_eq!(data["FolderContentItemType"], json!(3));
		assert_eq!(data["TraditionalFolder"]["Item"], json!(9));
		assert!(data.get("View").is_none());
		assert_eq!(serde_json::from_value::<FolderContentItem>(data)?, item);
		Ok(())
	}

	#[test]
	fn test_decode_listing() -> anyhow::Result<()> {
		let listing = serde_json::from_value::<FolderContentItems>(json!({
			"Items": [
				{ "FolderContentItemType": 1, "View": { "ID": 101, "Name": "By Customer" } },
				{ "FolderContentItemType": 4, "ObjectVersion": { "Title": "Contract" } }
			],
			"MoreResults": false,
			"Path": "v101/"
		}))?;
		assert_eq!(listing.items.len(), 2);
		assert_eq!(listing.path.as_deref(), Some("v101/"));
		Ok(())
	}
}
