//! Immutable call-shape model.
//!
//! A [`Signature`] describes one callable: its parameter types in order, its
//! return type and its shape flags. Signatures are created once, for the
//! intercepted call and for each candidate method, and never mutated.

use bitflags::bitflags;

use crate::types::TypeId;

bitflags! {
    /// Shape flags of an intercepted call or candidate method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SignatureFlags: u8 {
        /// The callable has no receiver.
        const STATIC = 1 << 0;
        /// The callable is a constructor rather than a plain method.
        const CONSTRUCTOR = 1 << 1;
    }
}

/// A single parameter of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// The declared type.
    pub ty: TypeId,
    /// Positional offset within the parameter list.
    pub index: usize,
}

/// Immutable description of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The type declaring the callable; the receiver type for instance calls.
    pub owner: TypeId,
    params: Vec<ParamDescriptor>,
    /// The declared return type.
    pub return_type: TypeId,
    flags: SignatureFlags,
}

impl Signature {
    /// Create a signature from parameter types in positional order.
    pub fn new(
        owner: TypeId,
        param_types: Vec<TypeId>,
        return_type: TypeId,
        flags: SignatureFlags,
    ) -> Self {
        let params = param_types
            .into_iter()
            .enumerate()
            .map(|(index, ty)| ParamDescriptor { ty, index })
            .collect();
        Self {
            owner,
            params,
            return_type,
            flags,
        }
    }

    /// All parameters, in positional order.
    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// The parameter at `index`, if the signature has one.
    pub fn param(&self, index: usize) -> Option<&ParamDescriptor> {
        self.params.get(index)
    }

    /// The number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether the callable has no receiver.
    pub fn is_static(&self) -> bool {
        self.flags.contains(SignatureFlags::STATIC)
    }

    /// Whether the callable is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.flags.contains(SignatureFlags::CONSTRUCTOR)
    }

    /// The type a caller actually receives: constructors produce their owner
    /// type, everything else its declared return type.
    pub fn effective_return(&self) -> TypeId {
        if self.is_constructor() {
            self.owner
        } else {
            self.return_type
        }
    }
}
