#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # usaddr-entities
//!
//! A parsed United States postal address and its standardized,
//! USPS-style text rendering.
//!
//! The entities are pure values: no I/O, no serialization framework.

pub mod address;
pub mod state;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
