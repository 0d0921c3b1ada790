//! Data model, embedded catalogs and weather client for BloomWatch.
//!
//! Catalogs are authored under `fixtures/` and embedded at compile time,
//! the same way the reservoir capacity tables are. They are parsed once on
//! first access and never mutated afterwards.

pub mod application;
pub mod data_source;
pub mod icon;
pub mod region;
pub mod seasonal;
pub mod weather;
