//! Errors raised at the physics boundary
//!
//! Everything here is a precondition violation caught before it can reach
//! the force or integration code: a malformed body, a bad parameter, or a
//! body set with clashing ids
//! or no ids left to hand out.

use std::fmt;

use crate::simulation::states::BodyId;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    NegativeRadius(f64),
    NonPositiveMass(f64),
    NonFinite { field: &'static str },
    InvalidParameter { name: &'static str, value: f64 },
    DuplicateId(BodyId),
    IdsExhausted,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::NegativeRadius(r) => write!(f, "radius must be non-negative, got {r}"),
            PhysicsError::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            PhysicsError::NonFinite { field } => write!(f, "{field} must be finite"),
            PhysicsError::InvalidParameter { name, value } => {
                write!(f, "invalid value {value} for parameter `{name}`")
            }
            PhysicsError::DuplicateId(id) => write!(f, "body id {id} is already in use"),
            PhysicsError::IdsExhausted => write!(f, "no body ids left to allocate"),
        }
    }
}

impl std::error::Error for PhysicsError {}
