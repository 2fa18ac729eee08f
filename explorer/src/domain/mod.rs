pub mod details;
pub mod explorer;
pub mod traces;
