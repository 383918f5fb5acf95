pub mod dedup;
pub mod entities;
pub mod gallery_entry;
pub mod outcome;
pub mod parent_fields;
pub mod policies;
pub mod sequence;
