//! Read-only model of the folder listings returned by the M-Files Web Service.

mod data_type;
mod errors;
mod folder_content;
mod object;
mod value;
mod view;

pub use data_type::*;
pub use errors::*;
pub use folder_content::*;
pub use object::*;
pub use value::*;
pub use view::*;
