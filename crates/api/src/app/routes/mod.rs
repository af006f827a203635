pub mod person;
pub mod system;
