//! Choice Ranker - Multi-criteria ranking of decision alternatives
//!
//! This crate ranks a set of alternatives scored on several weighted
//! criteria with two methods, TOPSIS and SPOTIS, and renders the result
//! as a text table or JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
