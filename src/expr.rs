//! Expression nodes the planner hands to support functions.
//!
//! This is the slice of the planner's expression tree a simplification hook
//! can see: constants, column references, bound parameters, and function
//! calls. Constants carry the full declared-type contract (type, typmod,
//! collation, nullability) so a replacement node can be built without
//! consulting the catalog.

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared type of an expression, the planner's analogue of a type OID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeId {
    Bool,
    Int2,
    Int4,
    Int8,
    Float8,
    Numeric,
    Text,
}

impl TypeId {
    /// Fixed byte width of the type, or `None` for variable-length types.
    pub fn len(&self) -> Option<i16> {
        match self {
            TypeId::Bool => Some(1),
            TypeId::Int2 => Some(2),
            TypeId::Int4 => Some(4),
            TypeId::Int8 => Some(8),
            TypeId::Float8 => Some(8),
            TypeId::Numeric | TypeId::Text => None,
        }
    }

    /// Whether values of this type are passed by value rather than by reference.
    pub fn by_val(&self) -> bool {
        self.len().is_some()
    }
}

/// Collation attached to a constant. Zero means "no collation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CollationId(pub u32);

impl CollationId {
    pub const NONE: CollationId = CollationId(0);
}

/// A concrete value payload. Fixed-width variants are by-value, the rest are
/// by-reference; `Const::by_val` reports which applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datum {
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float8(OrderedFloat<f64>),
    Numeric(Decimal),
    Text(String),
}

/// A literal constant in the expression tree.
///
/// Nullability is expressed through `value`: a SQL NULL constant carries
/// `None`, so a null payload cannot be read by mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Const {
    pub type_id: TypeId,
    pub typmod: i32,
    pub collation: CollationId,
    pub value: Option<Datum>,
}

impl Const {
    pub fn new(type_id: TypeId, typmod: i32, collation: CollationId, value: Option<Datum>) -> Self {
        Self {
            type_id,
            typmod,
            collation,
            value,
        }
    }

    /// A non-null INT4 constant with unconstrained typmod and no collation.
    pub fn int4(value: i32) -> Self {
        Self::new(TypeId::Int4, -1, CollationId::NONE, Some(Datum::Int4(value)))
    }

    /// A SQL NULL constant of the given type.
    pub fn null(type_id: TypeId) -> Self {
        Self::new(type_id, -1, CollationId::NONE, None)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn len(&self) -> Option<i16> {
        self.type_id.len()
    }

    pub fn by_val(&self) -> bool {
        self.type_id.by_val()
    }
}

/// A call to an SQL-callable function within a query's expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub return_type: TypeId,
}

impl FuncCall {
    pub fn new(name: impl Into<String>, args: Vec<Expr>, return_type: TypeId) -> Self {
        Self {
            name: name.into(),
            args,
            return_type,
        }
    }
}

/// Expression node.
///
/// `Param` is a bound query parameter: its value is known at execution time
/// but is not exposed to plan-time simplification, so it is never treated as
/// a constant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Const(Const),
    Column {
        table: Option<String>,
        name: String,
        index: Option<usize>,
    },
    Param {
        id: usize,
        type_id: TypeId,
    },
    FuncCall(FuncCall),
}
