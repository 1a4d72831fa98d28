//! League computations over match lists: standings, fixtures, form and seasons.
//!
//! Nothing here performs I/O. Callers fetch the matches and lookup tables, these
//! functions derive what the pages show.

pub mod fixture;
pub mod form;
pub mod names;
pub mod season;
pub mod standings;
