pub mod check;
pub mod dispatch;
pub mod extract;
pub mod scan;
pub mod shared;
pub mod spans;
