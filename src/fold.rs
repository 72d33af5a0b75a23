//! Constant-folding pass that drives support-function simplification.

use crate::expr::{Expr, FuncCall};
use crate::notice::Notices;
use crate::registry::SupportRegistry;

/// Fold an expression bottom-up, offering every function call to its
/// registered support handler.
///
/// Arguments are folded before the call itself, so a call nested inside
/// another call's argument list can be inlined first and the outer call then
/// sees the already-simplified argument. The input is never mutated.
pub fn fold_constants(expr: &Expr, registry: &SupportRegistry, notices: &mut Notices) -> Expr {
    match expr {
        Expr::Const(_) => expr.clone(),

        Expr::Column { .. } => expr.clone(),

        Expr::Param { .. } => expr.clone(),

        Expr::FuncCall(call) => {
            let folded = FuncCall {
                name: call.name.clone(),
                args: call
                    .args
                    .iter()
                    .map(|arg| fold_constants(arg, registry, notices))
                    .collect(),
                return_type: call.return_type,
            };

            match registry.simplify_call(&folded, notices) {
                Some(replacement) => replacement,
                None => Expr::FuncCall(folded),
            }
        }
    }
}
