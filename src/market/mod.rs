//! Listed commodity options
//!
//! Handles:
//! - BRN / HH contract months and option expiry dates
//! - An in-memory book of listed options
//! - Present value of every listing for a commodity

pub mod book;
pub mod contract_month;
pub mod pv;

pub use book::*;
pub use contract_month::*;
pub use pv::*;
