//! Support-request protocol and the `commission_cents` simplification rule.
//!
//! The planner dispatches a tagged request at each function call it tries to
//! simplify. A handler either returns a replacement expression the planner
//! splices in, or `None` to leave the call unchanged. `None` is always safe:
//! the unsimplified call still evaluates correctly at runtime.

use crate::expr::{Const, Expr, FuncCall, TypeId};
use crate::notice::Notices;

/// A request from the planner to a function's support handler.
///
/// Borrowed from the planner's expression tree; valid only for the duration
/// of the handler call. Handlers ignore request kinds they do not understand.
#[derive(Debug, Clone, Copy)]
pub enum SupportRequest<'a> {
    Simplify(SimplifyRequest<'a>),
    Selectivity { fcall: &'a FuncCall },
    Cost { fcall: &'a FuncCall },
}

/// "Simplify this call if possible."
#[derive(Debug, Clone, Copy)]
pub struct SimplifyRequest<'a> {
    pub fcall: &'a FuncCall,
}

/// A planner support handler for one SQL-callable function.
pub type SupportHandler = fn(&SupportRequest<'_>, &mut Notices) -> Option<Expr>;

/// Support handler for `commission_cents(rate numeric, salesperson_id int4)`.
///
/// If we know up front there is no salesperson, the commission is always $0,
/// whatever the rate: a call whose second argument is a literal NULL INT4 is
/// replaced with the constant zero. Any concrete salesperson id, even one
/// that matches no row, must fall through to the real computation.
///
/// Bound query parameters are never recognized as constants here; their
/// values are not visible at this extension point.
pub fn commission_cents_support(req: &SupportRequest<'_>, notices: &mut Notices) -> Option<Expr> {
    // Only Simplify requests are handled.
    let SupportRequest::Simplify(req) = req else {
        return None;
    };

    let expr = req.fcall;
    if expr.args.len() != 2 {
        notices.warning(format!(
            "commission_cents support called with {} args but expected 2",
            expr.args.len()
        ));
        return None;
    }

    // The salesperson id must be a non-null-checked Const of type INT4.
    // The rate argument is never inspected.
    match &expr.args[1] {
        Expr::Const(c) => {
            if c.type_id != TypeId::Int4 {
                notices.warning("commission_cents support called with non-INT4 parameter");
                return None;
            }

            if c.is_null() {
                notices.notice("commission_cents support inlining a constant zero");
                return Some(Expr::Const(Const::int4(0)));
            }

            notices.notice("commission_cents support called with a concrete salesperson id");
            None
        }
        _ => {
            notices.notice("commission_cents support called with non-constant parameter");
            None
        }
    }
}
