#![forbid(unsafe_code)]

//! Finds community YouTube videos for catalogued outdoor sites and merges
//! them into the dated JSON files the website reads.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod profile;
pub mod query;
pub mod ranking;
pub mod writer;
pub mod youtube;
