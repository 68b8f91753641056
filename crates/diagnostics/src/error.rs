use thiserror::Error;

use crate::package::PackageId;

/// Reasons the registry refuses a list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("package {package_id} is out of range, the registry only has {max_slots} slots")]
    PackageOutOfRange { package_id: PackageId, max_slots: usize },

    #[error("package {package_id} slot already holds a different {kind} list")]
    SlotOccupied { package_id: PackageId, kind: &'static str },

    #[error("invalid {kind} list: {reason}")]
    InvalidList { kind: &'static str, reason: String },
}

impl RegistryError {
    pub fn package_out_of_range(package_id: PackageId, max_slots: usize) -> Self {
        Self::PackageOutOfRange { package_id, max_slots }
    }

    pub fn slot_occupied(package_id: PackageId, kind: &'static str) -> Self {
        Self::SlotOccupied { package_id, kind }
    }

    pub fn invalid_list<S: ToString>(kind: &'static str, reason: S) -> Self {
        Self::InvalidList { kind, reason: reason.to_string() }
    }
}
