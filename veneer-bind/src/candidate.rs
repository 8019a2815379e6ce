//! Candidate method descriptions.

use crate::directive::{Directive, MethodDirective};
use crate::signature::Signature;
use crate::types::MethodId;

/// Resolution priority of candidates without an explicit priority directive.
pub const DEFAULT_PRIORITY: u32 = 1;

/// A method eligible to receive a redirected call.
#[derive(Debug, Clone)]
pub struct CandidateMethod {
    /// The method id.
    pub id: MethodId,
    /// The method's name.
    pub name: String,
    /// The candidate's signature.
    pub signature: Signature,
    /// Directives attached to each parameter, by position.
    param_directives: Vec<Vec<Directive>>,
    /// Directives attached to the method as a whole.
    method_directives: Vec<MethodDirective>,
}

impl CandidateMethod {
    /// Create a candidate without any directives.
    pub fn new(id: MethodId, name: &str, signature: Signature) -> Self {
        Self {
            id,
            name: name.to_string(),
            signature,
            param_directives: Vec::new(),
            method_directives: Vec::new(),
        }
    }

    /// Attach per-parameter directive lists, by position.
    pub fn with_param_directives(mut self, directives: Vec<Vec<Directive>>) -> Self {
        self.param_directives = directives;
        self
    }

    /// Attach method-wide directives.
    pub fn with_method_directives(mut self, directives: Vec<MethodDirective>) -> Self {
        self.method_directives = directives;
        self
    }

    /// The directives attached to the parameter at `param`.
    pub fn directives_for(&self, param: usize) -> &[Directive] {
        self.param_directives.get(param).map_or(&[][..], Vec::as_slice)
    }

    /// Whether this candidate is marked as excluded from binding.
    pub fn is_excluded(&self) -> bool {
        self.method_directives
            .iter()
            .any(|d| matches!(d, MethodDirective::ExcludeFromBinding))
    }

    /// The candidate's resolution priority; the last priority directive wins.
    pub fn priority(&self) -> u32 {
        self.method_directives
            .iter()
            .rev()
            .find_map(|d| match d {
                MethodDirective::Priority(priority) => Some(*priority),
                _ => None,
            })
            .unwrap_or(DEFAULT_PRIORITY)
    }

    /// Intercepted-call indices referenced by explicit positional directives
    /// anywhere on this candidate, regardless of binding mechanic.
    pub fn referenced_argument_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.param_directives
            .iter()
            .flatten()
            .filter_map(|directive| match directive {
                Directive::Argument { index, .. } => Some(*index),
                _ => None,
            })
    }
}
