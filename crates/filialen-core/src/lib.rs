//! # filialen-core: Domain Types for the Filialen Service
//!
//! Defines the branch office record (`Filiaal`), its identifier, and the
//! field validation rules every create or update must pass. The HTTP layer
//! (`filialen-api`) depends on this crate; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction.** A [`FiliaalData`] can only be obtained
//!    through [`FiliaalData::new`], which checks every field and reports
//!    all violations at once as [`FieldErrors`].
//!
//! 2. **Immutable identity.** A [`Filiaal`] gets its [`FiliaalId`] exactly
//!    once, when the persistence layer assigns it. Updates produce a new
//!    value via [`FiliaalData::with_id`] instead of mutating an id.
//!
//! 3. **Exact amounts.** Revenue is a `rust_decimal::Decimal`, never a float.
//!
//! ## Crate Policy
//!
//! - No async, no I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod filiaal;
pub mod identity;
pub mod validation;

pub use error::FieldErrors;
pub use filiaal::{Filiaal, FiliaalData};
pub use identity::FiliaalId;
