pub mod csv;
pub mod sets;
