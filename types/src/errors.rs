use crate::FolderContentItemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypesError {
	MissingPayload(FolderContentItemType),
}

impl std::fmt::Display for TypesError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MissingPayload(item_type) => {
				write!(f, "folder content item of type {:?} has no payload", item_type)
			}
		}
	}
}

impl std::error::Error for TypesError {}
