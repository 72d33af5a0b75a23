//! Planner support hook for `commission_cents(rate, salesperson_id)`.
//!
//! If the salesperson id is a literal SQL NULL there is no salesperson, and
//! the commission is always zero regardless of the rate. This crate lets the
//! planner recognize that at plan time and splice a constant `0` in place of
//! the call, skipping runtime evaluation.
//!
//! The simplification flow is:
//! ```text
//! Expr tree → fold_constants → SupportRegistry → commission_cents_support → Const(0) | unchanged
//! ```
//!
//! Every branch that cannot prove the shortcut safe returns "no
//! simplification", which the planner treats as "use the original call" —
//! always semantically correct. The rule only ever affects planning cost,
//! never query results.

mod error;
mod expr;
mod fold;
mod notice;
mod registry;
mod support;

pub use error::{Error, Result};
pub use expr::{CollationId, Const, Datum, Expr, FuncCall, TypeId};
pub use fold::fold_constants;
pub use notice::{Notice, Notices, Severity};
pub use registry::{FunctionSignature, SupportRegistry};
pub use support::{SimplifyRequest, SupportHandler, SupportRequest, commission_cents_support};
