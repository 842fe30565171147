pub mod check;
pub mod generate;
pub mod version;
pub mod walk;
