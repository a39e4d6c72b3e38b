use mfws_types::FolderContentItems;

use crate::sort_items;

pub trait SortedListing {
	/// Puts the listing into display order.
	fn sorted(self) -> Self;
}

impl SortedListing for FolderContentItems {
	fn sorted(mut self) -> Self {
		sort_items(&mut self.items);
		self
	}
}
