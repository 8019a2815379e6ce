//! Binding attempt types: per-parameter results and assembled method bindings.

use rustc_hash::FxHashMap;

use crate::candidate::CandidateMethod;
use crate::error::ConfigError;
use crate::types::TypeId;

/// An abstract value-producing expression.
///
/// The engine only names where a value comes from; turning an expression into
/// executable instructions is the emission backend's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpr {
    /// Load the intercepted call's parameter at the given index.
    Argument(usize),
    /// Load the receiver of the intercepted call.
    Receiver,
    /// Synthesize a sequence holding the intercepted call's parameters at the
    /// given indices, in order.
    ArgumentPack(Vec<usize>),
    /// Load a synthesized forwarder that replays the intercepted call.
    Forwarder(ForwarderToken),
    /// Materialize the default value of the given carrier type.
    DefaultOf(TypeId),
}

/// Names a forwarder minted by the emission backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwarderToken(pub u64);

/// Correlation key marking a one-to-one binding of an intercepted-call
/// parameter. Used only by ambiguity resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterIndexToken(pub usize);

/// Outcome of binding one candidate parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterBinding {
    /// The parameter can be fed from the intercepted call's context.
    Valid {
        /// The expression producing the value.
        expr: ValueExpr,
        /// Correlation key for ambiguity resolution, when the binding is
        /// uniquely identifiable.
        token: Option<ParameterIndexToken>,
    },
    /// The parameter cannot be fed; the candidate does not apply.
    Illegal,
}

impl ParameterBinding {
    /// An anonymous valid binding.
    pub fn valid(expr: ValueExpr) -> Self {
        ParameterBinding::Valid { expr, token: None }
    }

    /// A valid binding identified by `token`.
    pub fn unique(expr: ValueExpr, token: ParameterIndexToken) -> Self {
        ParameterBinding::Valid {
            expr,
            token: Some(token),
        }
    }

    /// Whether this binding is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, ParameterBinding::Valid { .. })
    }
}

/// Termination outcome stored on a method binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Convert the candidate's return value into the intercepted call's
    /// return slot.
    Return,
    /// Discard the candidate's return value.
    Drop,
}

/// A complete, valid binding of an intercepted call to one candidate.
///
/// Built once per candidate and immutable thereafter; resolution only
/// compares bindings, it never mutates them.
#[derive(Debug, Clone)]
pub struct MethodBinding {
    /// The bound candidate.
    pub candidate: CandidateMethod,
    /// One value expression per candidate parameter, in positional order.
    pub params: Vec<ValueExpr>,
    /// Identity tokens mapped to the candidate parameter index they bound.
    target_indices: FxHashMap<ParameterIndexToken, usize>,
    /// The termination outcome.
    pub termination: Termination,
    /// The candidate's resolution priority.
    pub priority: u32,
}

impl MethodBinding {
    /// The candidate parameter index bound under `token`, if any.
    pub fn target_parameter_index(&self, token: ParameterIndexToken) -> Option<usize> {
        self.target_indices.get(&token).copied()
    }
}

/// Incremental assembly of a [`MethodBinding`], one parameter at a time.
pub(crate) struct MethodBindingBuilder<'a> {
    candidate: &'a CandidateMethod,
    params: Vec<ValueExpr>,
    target_indices: FxHashMap<ParameterIndexToken, usize>,
}

impl<'a> MethodBindingBuilder<'a> {
    pub(crate) fn new(candidate: &'a CandidateMethod) -> Self {
        Self {
            candidate,
            params: Vec::with_capacity(candidate.signature.arity()),
            target_indices: FxHashMap::default(),
        }
    }

    /// Append the binding for the next parameter. A repeated unique claim on
    /// one intercepted-call index is a configuration error.
    pub(crate) fn append(
        &mut self,
        expr: ValueExpr,
        token: Option<ParameterIndexToken>,
    ) -> Result<(), ConfigError> {
        let index = self.params.len();
        self.params.push(expr);
        if let Some(token) = token {
            if self.target_indices.insert(token, index).is_some() {
                return Err(ConfigError::DuplicateUniqueClaim {
                    candidate: self.candidate.name.clone(),
                    index: token.0,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn build(self, termination: Termination) -> MethodBinding {
        debug_assert_eq!(self.params.len(), self.candidate.signature.arity());
        let priority = self.candidate.priority();
        MethodBinding {
            candidate: self.candidate.clone(),
            params: self.params,
            target_indices: self.target_indices,
            termination,
            priority,
        }
    }
}
