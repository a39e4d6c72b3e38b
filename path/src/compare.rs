use std::cmp::Ordering;

use mfws_types::{FolderContentItem, FolderContentItemType as ItemType};

/// Orders item kinds: unknown items, then folders of any kind, then objects.
pub fn compare_type(x: ItemType, y: ItemType) -> Ordering {
	if x == y {
		return Ordering::Equal;
	}
	match (x, y) {
		(ItemType::ObjectVersion, _) => Ordering::Greater,
		(_, ItemType::ObjectVersion) => Ordering::Less,
		(ItemType::Unknown, _) => Ordering::Less,
		(_, ItemType::Unknown) => Ordering::Greater,
		_ => Ordering::Equal,
	}
}

/// Listing order: folders before objects, each group by display name
/// ignoring case. Missing items go last.
pub fn compare(x: Option<&FolderContentItem>, y: Option<&FolderContentItem>) -> Ordering {
	match (x, y) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(x), Some(y)) => compare_type(x.item_type(), y.item_type())
			.then_with(|| compare_ignore_case(x.display_name(), y.display_name())),
	}
}

/// Stable sort of a listing into display order.
pub fn sort_items(items: &mut [FolderContentItem]) {
	items.sort_by(|x, y| compare(Some(x), Some(y)));
}

fn compare_ignore_case(x: &str, y: &str) -> Ordering {
	x.chars().map(fold_case).cmp(y.chars().map(fold_case))
}

// Ordinal folding: chars without a single-char uppercase form compare as themselves.
fn fold_case(c: char) -> char {
	let mut upper = c.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(folded), None) => folded,
		_ => c,
	}
}
