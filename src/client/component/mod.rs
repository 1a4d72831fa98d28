//! HTML fragments shared by the pages. Every piece of backend text passes through
//! `layout::escape` before it is written into markup.

pub mod layout;
pub mod table;
