//! # agri-core: Foundational Types for the Farm Input Survey
//!
//! Defines the vocabulary shared by the form controller, the HTTP gateway
//! client, the REST service, and the CLI. Every other crate in the workspace
//! depends on `agri-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed field vocabulary.** The 14 survey fields are a `FieldName`
//!    enum, not bare strings. Wire names (`farmerId`, `sowingDate`, ...) are
//!    produced by one `as_str()` and parsed by one `FromStr`.
//!
//! 2. **Untyped record, typed parsing.** `FarmRecord` stores every field as a
//!    `String`, exactly as entered. Semantic typing (digit strings, decimals,
//!    ISO dates) is applied by the parsers in [`parse`], which return a tagged
//!    [`FieldFault`] instead of a boolean.
//!
//! 3. **One message per field.** `ErrorMap` overwrites on insert, so rule
//!    ordering alone decides which message survives.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `agri-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod errors;
pub mod field;
pub mod parse;
pub mod record;
pub mod step;
pub mod temporal;
pub mod wire;

// Re-export primary types for ergonomic imports.
pub use catalog::Catalog;
pub use error::CoreError;
pub use errors::ErrorMap;
pub use field::FieldName;
pub use parse::FieldFault;
pub use record::FarmRecord;
pub use step::Step;
pub use temporal::{Clock, FixedClock, SystemClock};
pub use wire::SubmitResponse;
