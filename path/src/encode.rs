use mfws_types::{FolderContentItem, Lookup, MFDataType, TypedValue};
use serde_json::Value;

use crate::PathError;

/// Name to show for the item. `None` is rejected.
pub fn display_name(item: Option<&FolderContentItem>) -> Result<&str, PathError> {
	item.map(FolderContentItem::display_name)
		.ok_or(PathError::NullItem)
}

/// One-character tag a property folder of this data type is addressed with.
pub fn data_type_prefix(data_type: MFDataType) -> Option<char> {
	match data_type {
		MFDataType::Text => Some('T'),
		MFDataType::MultiLineText => Some('M'),
		MFDataType::Integer => Some('I'),
		MFDataType::Integer64 => Some('J'),
		MFDataType::Floating => Some('R'),
		MFDataType::Date => Some('D'),
		MFDataType::Time => Some('C'),
		MFDataType::FILETIME => Some('E'),
		MFDataType::Lookup => Some('L'),
		MFDataType::MultiSelectLookup => Some('S'),
		MFDataType::Uninitialized => Some('-'),
		MFDataType::ACL => Some('A'),
		MFDataType::Boolean => Some('B'),
		MFDataType::Timestamp => None,
	}
}

/// Path segment addressing the item, e.g. `v5`, `y42` or `L12`.
///
/// A missing item gives an empty segment. Items that cannot be addressed
/// (objects, unknown items, property folders without a prefix or value)
/// give `None`.
pub fn path(item: Option<&FolderContentItem>) -> Option<String> {
	let Some(item) = item else {
		return Some(String::new());
	};
	match item {
		FolderContentItem::ViewFolder(view) => Some(format!("v{}", view.id)),
		FolderContentItem::TraditionalFolder(folder) => Some(format!("y{}", folder.item)),
		FolderContentItem::PropertyFolder(value) => property_folder_path(value),
		FolderContentItem::ObjectVersion(_) | FolderContentItem::Unknown => None,
	}
}

/// Slash-joined path of a folder location, terminated by a slash.
///
/// Segments that are missing or blank are skipped. An empty location gives
/// an empty string.
pub fn paths<'a, I, T>(items: I) -> String
where
	I: IntoIterator<Item = T>,
	T: Into<Option<&'a FolderContentItem>>,
{
	let mut items = items.into_iter().peekable();
	if items.peek().is_none() {
		return String::new();
	}

	let segments = items
		.filter_map(|item| path(item.into()))
		.filter(|segment| !segment.trim().is_empty())
		.collect::<Vec<_>>();
	format!("{}/", segments.join("/"))
}

/// Resource listing the contents of a folder location, relative to the REST root.
pub fn items_resource<'a, I, T>(items: I) -> String
where
	I: IntoIterator<Item = T>,
	T: Into<Option<&'a FolderContentItem>>,
{
	let location = paths(items);
	let location = location.strip_prefix('/').unwrap_or(&location);
	format!("/views/{}items", location)
}

fn property_folder_path(folder: &TypedValue) -> Option<String> {
	let prefix = data_type_prefix(folder.data_type);
	let suffix = match folder.data_type {
		MFDataType::Lookup => Some(folder.lookup.as_ref().map_or(0, |lookup| lookup.item).to_string()),
		MFDataType::MultiSelectLookup => Some(lookup_ids(folder.lookups.as_deref().unwrap_or_default())),
		_ => folder.value.as_ref().and_then(value_text),
	};

	match (prefix, suffix) {
		(Some(prefix), Some(suffix)) => Some(format!("{}{}", prefix, percent_decode(&suffix))),
		(prefix, suffix) => {
			tracing::debug!(
				data_type = ?folder.data_type,
				display_value = %folder.display_value,
				has_prefix = prefix.is_some(),
				has_suffix = suffix.is_some(),
				"property folder has no path segment"
			);
			None
		}
	}
}

fn lookup_ids(lookups: &[Lookup]) -> String {
	lookups
		.iter()
		.map(|lookup| lookup.item.to_string())
		.collect::<Vec<_>>()
		.join(",")
}

fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		other => Some(other.to_string()),
	}
}

// The HTTP layer escapes segments again, so values go out decoded exactly once.
fn percent_decode(suffix: &str) -> String {
	let decoded = urlencoding::decode_binary(suffix.as_bytes());
	String::from_utf8_lossy(&decoded).into_owned()
}
