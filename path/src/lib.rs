//! Display names, path segments and listing order for folder content items
//! of the M-Files Web Service.
//!
//! Paths follow the server's view addressing: each folder becomes a token
//! made of a one-character prefix and an identifier or value, tokens are
//! joined with `/` and the whole path ends with `/`.
//!
//! ```
//! use mfws_path::{paths, path};
//! use mfws_types::{FolderContentItem, Lookup, View};
//!
//! let view = FolderContentItem::ViewFolder(View::new(5, "Documents"));
//! let folder = FolderContentItem::TraditionalFolder(Lookup::new(9, "Projects"));
//! assert_eq!(path(Some(&view)).as_deref(), Some("v5"));
//! assert_eq!(paths([Some(&view), None, Some(&folder)]), "v5/y9/");
//! ```

mod compare;
mod encode;
mod errors;
mod listing;

pub use compare::*;
pub use encode::*;
pub use errors::*;
pub use listing::*;
