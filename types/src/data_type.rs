use int_enum::IntEnum;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Kind of value a property holds, numbered as on the wire.
#[allow(clippy::upper_case_acronyms)]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr, IntEnum)]
pub enum MFDataType {
	Uninitialized = 0,
	Text = 1,
	Integer = 2,
	Floating = 3,
	Date = 5,
	Time = 6,
	Timestamp = 7,
	Boolean = 8,
	Lookup = 9,
	MultiSelectLookup = 10,
	Integer64 = 11,
	FILETIME = 12,
	MultiLineText = 13,
	ACL = 14,
}

impl Default for MFDataType {
	fn default() -> Self {
		Self::Uninitialized
	}
}
