//! Address specification handling
//!
//! A specification is either a literal host (`"10.0.0.5"`) or a `.0`-suffixed
//! /24 subnet (`"10.0.0.0"`), which expands to the 254 usable host addresses
//! of that subnet.

mod expand;

pub use expand::{
    expand_spec, is_dotted_quad, is_subnet_spec, subnet_hosts, subnet_prefix, SUBNET_HOST_COUNT,
};
