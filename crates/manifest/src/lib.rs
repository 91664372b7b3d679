//! Transcoding of EthPM package manifests between the versioned wire
//! format and the canonical in-memory package model.
//!
//! The wire format is JSON; [`v2`] implements manifest version `"2"`.
//! [`canon`] renders wire documents deterministically, so that
//! structurally equal documents always produce byte-identical text and
//! therefore stable content identifiers when hashed downstream.
//!
//! Schema validation, content retrieval and transport are external to
//! this crate: the reader assumes its input already passed structural
//! validation, and URIs are stored and classified but never
//! dereferenced. All transcoding is synchronous, allocation-local and
//! free of shared mutable state.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod canon;
pub mod v2;
