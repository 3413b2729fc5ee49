//! Snapshot of every VM and group known to the service.

use crate::core::domain::model::{group::Group, params::Params};
use serde::{Deserialize, Serialize};

/// All VMs and groups, as returned by `list` and by every mutating call.
///
/// The snapshot is never updated in place: changes are requests to the
/// service, and the next response carries a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GlobalState {
    #[serde(default)]
    pub vms: Vec<Params>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl GlobalState {
    pub fn new(vms: Vec<Params>, groups: Vec<Group>) -> Self {
        Self { vms, groups }
    }

    /// Looks up a VM by name.
    pub fn vm(&self, name: &str) -> Option<&Params> {
        self.vms.iter().find(|vm| vm.name() == Some(name))
    }

    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Iterates over every VM name followed by every group name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vms
            .iter()
            .filter_map(Params::name)
            .chain(self.groups.iter().map(|group| group.name.as_str()))
    }
}
