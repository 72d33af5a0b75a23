//! End-to-end scenarios for the commission_cents planner support hook,
//! exercised through the public crate API the way a host planner would:
//! build the call expression, run the folding pass, inspect the rewritten
//! tree and the emitted notices.

use commission_support::{
    CollationId, Const, Datum, Expr, FuncCall, Notices, Severity, SupportRegistry, TypeId,
    fold_constants,
};
use rust_decimal::Decimal;

fn rate(v: Decimal) -> Expr {
    Expr::Const(Const::new(
        TypeId::Numeric,
        -1,
        CollationId::NONE,
        Some(Datum::Numeric(v)),
    ))
}

fn commission_call(args: Vec<Expr>) -> Expr {
    Expr::FuncCall(FuncCall::new("commission_cents", args, TypeId::Int4))
}

// SELECT commission_cents(0.05, NULL::int)
#[test]
fn null_salesperson_plans_to_constant_zero() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Const(Const::null(TypeId::Int4)),
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, Expr::Const(Const::int4(0)));
    assert_eq!(notices.warnings().count(), 0);
    assert_eq!(notices.len(), 1);
}

// SELECT commission_cents(0.05, 42)
#[test]
fn concrete_salesperson_falls_through_to_real_computation() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Const(Const::int4(42)),
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, expr);
    assert_eq!(notices.warnings().count(), 0);
}

// SELECT commission_cents(0.05, salesperson_id) FROM sales
#[test]
fn column_argument_falls_through_to_real_computation() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Column {
            table: Some("sales".to_string()),
            name: "salesperson_id".to_string(),
            index: Some(3),
        },
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, expr);
}

// SELECT commission_cents(0.05, NULL::text)
#[test]
fn wrong_typed_null_declines_with_a_warning() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Const(Const::null(TypeId::Text)),
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, expr);
    let warnings: Vec<_> = notices.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("non-INT4"));
}

// Mismatched registration: call arrives with a single argument.
#[test]
fn single_argument_call_declines_with_a_warning() {
    let expr = commission_call(vec![rate(Decimal::new(5, 2))]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, expr);
    assert_eq!(notices.warnings().count(), 1);
}

// SELECT commission_cents(0.05, $1) — bound parameter, value not visible
// to the simplification hook.
#[test]
fn bound_parameter_is_never_inlined() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Param {
            id: 1,
            type_id: TypeId::Int4,
        },
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let planned = fold_constants(&expr, &registry, &mut notices);

    assert_eq!(planned, expr);
    assert_eq!(notices.warnings().count(), 0);
    assert!(notices.iter().all(|n| n.severity == Severity::Notice));
}

// Re-planning an already simplified query never rewrites further.
#[test]
fn replanning_the_simplified_tree_is_stable() {
    let expr = commission_call(vec![
        rate(Decimal::new(5, 2)),
        Expr::Const(Const::null(TypeId::Int4)),
    ]);
    let registry = SupportRegistry::with_builtins();
    let mut notices = Notices::new();

    let once = fold_constants(&expr, &registry, &mut notices);
    let twice = fold_constants(&once, &registry, &mut notices);
    let thrice = fold_constants(&twice, &registry, &mut notices);

    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}
