//! Multimodal trip planner.
//!
//! A batch tool that answers: "leaving city A at this time, what is the
//! cheapest (or quickest) way to get to city B?" for every request in a
//! clients file, over a network of scheduled connections read from a maps
//! file.

pub mod batch;
pub mod domain;
pub mod ingest;
pub mod network;
pub mod planner;
pub mod report;
