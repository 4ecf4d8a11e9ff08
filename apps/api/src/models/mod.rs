pub mod investment;
pub mod lenient;
pub mod opportunity;
pub mod profile;
