//! # Userbase Shared Library
//!
//! This crate contains the database layer and models used by the userbase
//! API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool management and migrations
//! - `models`: Database models and their CRUD operations

pub mod db;
pub mod models;
