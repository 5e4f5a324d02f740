#![deny(missing_docs)]

//! # muse-crypto — Signature Verification for the Muse Supporter Stack
//!
//! Validates that a claimed wallet address actually produced a given signed
//! message. Wallets sign a dashboard-generated message with their Ed25519
//! key; the address and detached signature travel base58-encoded and are
//! decoded to fixed-length byte arrays before verification.
//!
//! Verification is pure and deterministic: no I/O, no clock, no side
//! effects. This crate never handles private key material.

pub mod signature;

pub use signature::{verify_detached, SignatureError};
