//! Per-package slot table shared by the error and log subject registries.
//!
//! Reads take a lock-free snapshot through [`ArcSwap`]; writes go through `rcu` and
//! only ever fill an empty slot, so a slot never changes once it is populated.

use std::ptr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use crate::ensure;
use crate::error::RegistryError;
use crate::package::{PACKAGE_SLOTS, PackageId};

type Slots<T> = [Option<&'static T>; PACKAGE_SLOTS];

pub(crate) struct SlotTable<T: 'static> {
    kind: &'static str,
    slots: ArcSwap<Slots<T>>,
}

impl<T: 'static> SlotTable<T> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self { kind, slots: ArcSwap::from_pointee([None; PACKAGE_SLOTS]) }
    }

    /// Installs `list` into the slot of `package_id`.
    ///
    /// Returns `Ok(true)` when the slot was filled by this call and `Ok(false)` when the
    /// very same list was already installed.
    pub(crate) fn install(&self, package_id: PackageId, list: &'static T) -> Result<bool, RegistryError> {
        let index = package_id as usize;
        ensure!(index < PACKAGE_SLOTS, RegistryError::package_out_of_range(package_id, PACKAGE_SLOTS));

        let mut outcome = Ok(false);
        self.slots.rcu(|current| match current[index] {
            None => {
                outcome = Ok(true);
                let mut next = **current;
                next[index] = Some(list);
                Arc::new(next)
            }
            Some(existing) if ptr::eq(existing, list) => {
                outcome = Ok(false);
                Arc::clone(current)
            }
            Some(_) => {
                outcome = Err(RegistryError::slot_occupied(package_id, self.kind));
                Arc::clone(current)
            }
        });

        match &outcome {
            Ok(true) => debug!(package_id, kind = self.kind, "installed diagnostics list"),
            Ok(false) => debug!(package_id, kind = self.kind, "diagnostics list already installed, skip"),
            Err(e) => warn!(cause = %e, "rejected diagnostics list"),
        }
        outcome
    }

    pub(crate) fn get(&self, package_id: PackageId) -> Option<&'static T> {
        self.slots.load().get(package_id as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: [u8; 1] = [1];
    static SECOND: [u8; 1] = [2];

    #[test]
    fn install_once() {
        let table: SlotTable<[u8; 1]> = SlotTable::new("test");
        assert_eq!(table.get(3), None);

        assert_eq!(table.install(3, &FIRST), Ok(true));
        assert_eq!(table.install(3, &FIRST), Ok(false));
        assert_eq!(table.get(3), Some(&FIRST));
    }

    #[test]
    fn occupied_slot_keeps_first_list() {
        let table: SlotTable<[u8; 1]> = SlotTable::new("test");
        table.install(4, &FIRST).unwrap();

        assert_eq!(table.install(4, &SECOND), Err(RegistryError::slot_occupied(4, "test")));
        assert_eq!(table.get(4), Some(&FIRST));
    }

    #[test]
    fn out_of_range() {
        let table: SlotTable<[u8; 1]> = SlotTable::new("test");
        let package_id = PACKAGE_SLOTS as PackageId;

        assert_eq!(
            table.install(package_id, &FIRST),
            Err(RegistryError::package_out_of_range(package_id, PACKAGE_SLOTS))
        );
        assert_eq!(table.get(package_id), None);
    }
}
