pub mod global_state;
pub mod group;
pub mod params;
pub mod requests;
pub mod vm_spec;
