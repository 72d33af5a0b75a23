//! Function support metadata.
//!
//! The registry records which SQL-callable functions advertise a planner
//! support handler, keyed by case-insensitive function name. The folding
//! pass consults it at every function call it encounters.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::expr::{Expr, FuncCall, TypeId};
use crate::notice::Notices;
use crate::support::{SimplifyRequest, SupportHandler, SupportRequest, commission_cents_support};

/// Declared signature of a registered function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub arg_types: Vec<TypeId>,
    pub return_type: TypeId,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, arg_types: Vec<TypeId>, return_type: TypeId) -> Self {
        Self {
            name: name.into(),
            arg_types,
            return_type,
        }
    }
}

struct RegisteredSupport {
    signature: FunctionSignature,
    handler: SupportHandler,
}

/// Maps function names to their planner support handlers.
#[derive(Default)]
pub struct SupportRegistry {
    handlers: FxHashMap<String, RegisteredSupport>,
}

impl SupportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in handlers installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.handlers.insert(
            "commission_cents".to_string(),
            RegisteredSupport {
                signature: FunctionSignature::new(
                    "commission_cents",
                    vec![TypeId::Numeric, TypeId::Int4],
                    TypeId::Int4,
                ),
                handler: commission_cents_support,
            },
        );
        registry
    }

    pub fn register(&mut self, signature: FunctionSignature, handler: SupportHandler) -> Result<()> {
        let key = signature.name.to_lowercase();
        if self.handlers.contains_key(&key) {
            return Err(Error::duplicate_function(&signature.name));
        }
        self.handlers.insert(key, RegisteredSupport { signature, handler });
        Ok(())
    }

    pub fn signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.handlers
            .get(&name.to_lowercase())
            .map(|r| &r.signature)
    }

    pub fn supports_simplify(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    /// Offer a function call to its support handler, if one is registered.
    ///
    /// Returns the replacement expression the handler produced, or `None`
    /// when no handler exists or the handler declined.
    pub fn simplify_call(&self, fcall: &FuncCall, notices: &mut Notices) -> Option<Expr> {
        let registered = self.handlers.get(&fcall.name.to_lowercase())?;
        let request = SupportRequest::Simplify(SimplifyRequest { fcall });
        (registered.handler)(&request, notices)
    }
}
