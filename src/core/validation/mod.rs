//! Validation of order creation payloads
//!
//! Incoming JSON is loosely typed. It is first coerced into an
//! [`OrderCandidate`] (see [`filters`]), then every field rule in
//! [`validators`] runs against it. The [`ValidatedOrder`] extractor wires both
//! steps into axum so handlers only ever see a [`crate::core::NewOrder`].

pub mod candidate;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use candidate::OrderCandidate;
pub use extractor::ValidatedOrder;
pub use validators::validate;
