pub mod input;
pub mod limit;
pub mod records;
