//! Personnel manager business layer.
//!
//! This crate validates and registers salaried and hourly employees against
//! the company's hiring rules, delegating storage to an injected repository,
//! and exposes the service over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
