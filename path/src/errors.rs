#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
	NullItem,
}

impl std::fmt::Display for PathError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NullItem => write!(f, "folder content item cannot be null"),
		}
	}
}

impl std::error::Error for PathError {}
