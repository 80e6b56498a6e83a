pub mod enums;
pub mod prescription;

pub use enums::{AgeBand, RiskLevel, Severity};
pub use prescription::{PatientProfile, PrescribedDrug};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
