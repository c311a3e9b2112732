//! Flat-file JSON persistence.

mod store;

pub use store::JsonStore;
