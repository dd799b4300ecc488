pub mod greet;
pub mod cli;

pub use greet::greet;
