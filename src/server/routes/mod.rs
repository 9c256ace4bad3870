pub mod default;
pub mod tasks;
