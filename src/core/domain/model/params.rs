//! Validated VM parameters.
//!
//! A `Params` describes a VM for `add`, carries the changes for `set`, and is
//! also the shape in which the service reports each VM back in a listing.

use crate::core::domain::{
    error::{ValidationError, VtResult},
    model::vm_spec::VmSpec,
    value_object::{
        Action, CORES_MIN, CPU_MAX_PERCENT, CPU_MIN_PERCENT, HDD_MIN_KB, RAM_MAX_KB, RAM_MIN_KB,
        check_action, check_ip, check_range,
    },
};
use serde::{Deserialize, Serialize};

/// Parameters of a single VM.
///
/// Every field except `status` may be unset. Unset fields are left out of the
/// JSON body, which the service reads as "do not change" when the same
/// parameters are applied to several VMs with `set`.
///
/// Values built through [`Params::builder`] are validated once, at build time.
/// Values decoded from a service response are taken as reported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// RAM in kilobytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ram: Option<u64>,
    /// Disk size in kilobytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hdd: Option<u64>,
    /// CPU share as a percentage of the host maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cpu: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cores: Option<u32>,
    /// IPv4 address in dotted-decimal notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
    /// Name of an uploaded ISO file used as DVD contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iso: Option<String>,
    /// Requested transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    /// Last observed state.
    #[serde(default)]
    status: Action,
}

impl Params {
    /// Creates a builder with every field unset.
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn ram(&self) -> Option<u64> {
        self.ram
    }

    pub fn hdd(&self) -> Option<u64> {
        self.hdd
    }

    pub fn cpu(&self) -> Option<u32> {
        self.cpu
    }

    pub fn cores(&self) -> Option<u32> {
        self.cores
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn iso(&self) -> Option<&str> {
        self.iso.as_deref()
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn status(&self) -> Action {
        self.status
    }

    /// Returns `true` when every optional field is set, as `add` expects.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.ram.is_some()
            && self.hdd.is_some()
            && self.cpu.is_some()
            && self.cores.is_some()
            && self.ip.is_some()
            && self.iso.is_some()
            && self.action.is_some()
    }
}

impl VmSpec for Params {
    fn validate(&self) -> Result<(), ValidationError> {
        check_range(self.ram, RAM_MIN_KB, Some(RAM_MAX_KB), "ram")?;
        check_range(self.hdd, HDD_MIN_KB, None, "hdd")?;
        check_range(self.cpu, CPU_MIN_PERCENT, Some(CPU_MAX_PERCENT), "cpu")?;
        check_range(self.cores, CORES_MIN, None, "cores")?;
        if let Some(ip) = &self.ip {
            check_ip(ip)?;
        }
        Ok(())
    }
}

/// Builder for [`Params`].
///
/// # Examples
///
/// ```
/// use vtapi::{Action, Params};
///
/// let params = Params::builder()
///     .name("vm1")
///     .ram(2048)
///     .hdd(1024)
///     .cpu(50)
///     .cores(1)
///     .ip("1.2.3.4")
///     .action(Action::Start)
///     .build()
///     .unwrap();
/// assert_eq!(params.action(), Some(Action::Start));
///
/// let too_small = Params::builder().name("vm1").ram(512).build();
/// assert!(too_small.is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ParamsBuilder {
    name: Option<String>,
    ram: Option<u64>,
    hdd: Option<u64>,
    cpu: Option<u32>,
    cores: Option<u32>,
    ip: Option<String>,
    iso: Option<String>,
    action: Option<String>,
}

impl ParamsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ram(mut self, kb: u64) -> Self {
        self.ram = Some(kb);
        self
    }

    pub fn hdd(mut self, kb: u64) -> Self {
        self.hdd = Some(kb);
        self
    }

    pub fn cpu(mut self, percent: u32) -> Self {
        self.cpu = Some(percent);
        self
    }

    pub fn cores(mut self, cores: u32) -> Self {
        self.cores = Some(cores);
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn iso(mut self, iso: impl Into<String>) -> Self {
        self.iso = Some(iso.into());
        self
    }

    /// Sets the requested action, either as an [`Action`] or by name.
    pub fn action(mut self, action: impl AsRef<str>) -> Self {
        self.action = Some(action.as_ref().to_string());
        self
    }

    /// Validates the collected fields and builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `VtError::Validation` for the first field that is out of range
    /// or malformed.
    pub fn build(self) -> VtResult<Params> {
        let params = Params {
            name: self.name,
            ram: self.ram,
            hdd: self.hdd,
            cpu: self.cpu,
            cores: self.cores,
            ip: self.ip,
            iso: self.iso,
            action: check_action(self.action.as_deref())?,
            status: Action::Stop,
        };
        params.validate()?;
        Ok(params)
    }
}
