//! Core types and contracts for attrstore.
//!
//! Everything in this crate is free of I/O: the request envelope model, the
//! attributes payload, partition key generators and the two traits that the
//! `attrstore` crate implements (`PersistenceAdapter` and `DocumentStore`).

pub mod envelope;
pub mod persistence;
pub mod store;
