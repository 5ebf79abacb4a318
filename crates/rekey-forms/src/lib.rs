//! # rekey-forms
//!
//! Field registration, schema validation and error projection for
//! browser-style forms.
//!
//! This crate provides:
//! - Field bindings with local focus/fill presentation state
//! - A form controller owning the authoritative value and error maps
//! - Schema rules evaluated against the full value snapshot
//! - Projection of structured failures into per-field error messages
//!
//! A [`FieldBinding`] registers its rendered control with a
//! [`FormController`] through the [`FieldRegistry`] capability and never
//! reaches into the controller beyond that surface, so bindings can be
//! mounted against any concrete form-state holder. At submit time the
//! controller snapshots every registered control into [`FormValues`], a
//! [`Schema`] checks the snapshot and reports [`ValidationFailures`], and
//! the failure list is projected into the name-keyed [`FieldErrors`] map
//! the bindings render from.
//!
//! ## Quick Start
//!
//! ```rust
//! use rekey_forms::{
//!     ElementHandle, FieldBinding, FormController, RequiredRule, Schema,
//! };
//!
//! let mut controller = FormController::new();
//!
//! // A binding registers its rendered control at mount time.
//! let control = ElementHandle::with_value("user@example.com");
//! let mut binding = FieldBinding::new("email").handle(control);
//! binding.mount(&mut controller);
//!
//! // Submit-time snapshot and validation.
//! let schema = Schema::new().rule(RequiredRule::new("email"));
//! let values = controller.values();
//! assert!(schema.validate(&values, true).is_ok());
//! ```
//!
//! ## Error projection
//!
//! ```rust
//! use rekey_forms::{FormValues, RequiredRule, Schema};
//!
//! let schema = Schema::new()
//!     .rule(RequiredRule::new("password").message("Password required"));
//!
//! let failures = schema.validate(&FormValues::new(), true).unwrap_err();
//! let errors = failures.into_field_errors();
//! assert_eq!(errors.get("password"), Some("Password required"));
//! ```

mod binding;
mod controller;
mod element;
mod error;
mod schema;
mod values;

pub use binding::{ContainerState, FieldBinding};
pub use controller::{FieldRegistration, FieldRegistry, FormController};
pub use element::ElementHandle;
pub use error::{FieldErrors, FormError, Result, ValidationFailure, ValidationFailures};
pub use schema::{
    MatchesFieldRule, MaxLengthRule, MinLengthRule, RegexRule, RequiredRule, Rule, Schema,
    WhenFilledRule,
};
pub use values::FormValues;
