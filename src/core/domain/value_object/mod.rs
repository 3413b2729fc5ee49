mod action;
mod ipv4;
mod range;
mod vt_url;

pub use action::{Action, check_action};
pub use ipv4::check_ip;
pub use range::check_range;
pub use vt_url::VtUrl;

// Re-export field bounds for internal use
pub(crate) use range::{
    CORES_MIN, CPU_MAX_PERCENT, CPU_MIN_PERCENT, HDD_MIN_KB, RAM_MAX_KB, RAM_MIN_KB,
};
