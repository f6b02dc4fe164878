pub mod interfaces;
pub mod models;
pub mod orchestrators;
