#![warn(missing_docs)]
//! Core of the product interest ranking service.
//!
//! The service stores products, categories, users, and per-user interest
//! scores, and derives ranked lists of products and categories from the
//! arithmetic mean of recorded interests.
//!
//! This crate follows a hexagonal layout: [`models`] holds the domain
//! entities, [`ports`] defines the repository traits a persistence adapter
//! must implement, and [`service`] contains the operations (interest
//! recording, score aggregation, ranking, catalog replacement) expressed
//! against those ports.

/// Core domain models for the ranking system.
///
/// The models in this module are data structures with minimal business
/// logic, keeping the domain entities separate from their persistence and
/// transport representations.
pub mod models;

/// Interface traits for the ranking system.
///
/// These traits define the contract between the domain logic and external
/// adapters (databases, APIs) without specifying implementation details,
/// which allows infrastructure to be swapped without touching the core.
pub mod ports;

/// Core operations over the ports: recording interests, ranking, and
/// catalog replacement, together with the service error taxonomy.
pub mod service;
