//! Config sources, added to the builder lowest precedence first.

pub mod explicit_file;
pub mod user_file;
