//! Core library exports for the Shelfsort service.
//!
//! Shelfsort lets shop administrators define a custom display order for the
//! products inside each catalog category and serves storefront category
//! pages in that order. The crate exposes domain types, repositories,
//! routes and service layers used by the web application.

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Role required for the admin ordering endpoints.
pub const SERVICE_ACCESS_ROLE: &str = "manager";
