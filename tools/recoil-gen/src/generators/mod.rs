//! Output generators

pub mod c;
