//! Command implementations for the component-bundle CLI

pub mod bundle;
