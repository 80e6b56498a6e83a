pub mod alternatives;
pub mod catalog;
pub mod detection;
pub mod dosage;
pub mod engine;
pub mod messages;
pub mod reference;
pub mod types;
