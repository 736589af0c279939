pub mod fuzzy;
pub mod track;
