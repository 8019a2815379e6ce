//! Ambiguity resolution between two valid method bindings.
//!
//! Resolvers rank two complete bindings of the same intercepted call. They
//! are consulted as an ordered chain: for each pair, the first resolver
//! returning a decisive verdict wins and later resolvers are not asked.

use std::cmp::Ordering;

use super::binding::{MethodBinding, ParameterIndexToken};
use crate::signature::Signature;
use crate::types::{AssignabilityOracle, TypeId};

/// Verdict of comparing two bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The left binding dominates.
    Left,
    /// The right binding dominates.
    Right,
    /// Neither binding dominates.
    Ambiguous,
}

/// Ranks two valid bindings of the same intercepted call.
///
/// Implementations must be deterministic and carry no per-call state.
pub trait AmbiguityResolver: Send + Sync {
    /// Compare `left` against `right` for `source`.
    fn resolve(
        &self,
        source: &Signature,
        left: &MethodBinding,
        right: &MethodBinding,
        oracle: &dyn AssignabilityOracle,
    ) -> Resolution;
}

/// Strictly higher explicit priority wins; equal priorities defer to the
/// next resolver in the chain.
pub struct PriorityResolver;

impl AmbiguityResolver for PriorityResolver {
    fn resolve(
        &self,
        _source: &Signature,
        left: &MethodBinding,
        right: &MethodBinding,
        _oracle: &dyn AssignabilityOracle,
    ) -> Resolution {
        match left.priority.cmp(&right.priority) {
            Ordering::Greater => Resolution::Left,
            Ordering::Less => Resolution::Right,
            Ordering::Equal => Resolution::Ambiguous,
        }
    }
}

/// Most-specific-argument-type comparison.
///
/// For every intercepted-call parameter that both bindings claim one-to-one
/// (via unique positional forwarding), the two target parameters' declared
/// types are compared for one-directional assignability: the side whose type
/// is assignable to the other's, but not vice versa, is more specific.
/// Verdicts across shared parameters must agree; a conflict is ambiguous.
/// When no shared parameter distinguishes the bindings, the side with more
/// one-to-one claims wins.
pub struct ArgumentTypeResolver;

impl ArgumentTypeResolver {
    fn compare_rival(
        left_ty: TypeId,
        right_ty: TypeId,
        oracle: &dyn AssignabilityOracle,
    ) -> Option<Resolution> {
        if left_ty == right_ty {
            return None;
        }
        let left_to_right = oracle.is_assignable(left_ty, right_ty);
        let right_to_left = oracle.is_assignable(right_ty, left_ty);
        match (left_to_right, right_to_left) {
            (true, false) => Some(Resolution::Left),
            (false, true) => Some(Resolution::Right),
            _ => Some(Resolution::Ambiguous),
        }
    }

    fn merge(acc: Option<Resolution>, next: Option<Resolution>) -> Option<Resolution> {
        match (acc, next) {
            (None, verdict) => verdict,
            (verdict, None) => verdict,
            (Some(Resolution::Ambiguous), _) | (_, Some(Resolution::Ambiguous)) => {
                Some(Resolution::Ambiguous)
            }
            (Some(a), Some(b)) if a == b => Some(a),
            _ => Some(Resolution::Ambiguous),
        }
    }
}

impl AmbiguityResolver for ArgumentTypeResolver {
    fn resolve(
        &self,
        source: &Signature,
        left: &MethodBinding,
        right: &MethodBinding,
        oracle: &dyn AssignabilityOracle,
    ) -> Resolution {
        let mut verdict: Option<Resolution> = None;
        let mut left_extra = 0usize;
        let mut right_extra = 0usize;
        for source_param in source.params() {
            let token = ParameterIndexToken(source_param.index);
            match (
                left.target_parameter_index(token),
                right.target_parameter_index(token),
            ) {
                (Some(left_index), Some(right_index)) => {
                    let left_ty = left
                        .candidate
                        .signature
                        .param(left_index)
                        .map(|param| param.ty);
                    let right_ty = right
                        .candidate
                        .signature
                        .param(right_index)
                        .map(|param| param.ty);
                    if let (Some(left_ty), Some(right_ty)) = (left_ty, right_ty) {
                        verdict =
                            Self::merge(verdict, Self::compare_rival(left_ty, right_ty, oracle));
                    }
                }
                (Some(_), None) => left_extra += 1,
                (None, Some(_)) => right_extra += 1,
                (None, None) => {}
            }
        }
        match verdict {
            Some(decisive) => decisive,
            None => match left_extra.cmp(&right_extra) {
                Ordering::Greater => Resolution::Left,
                Ordering::Less => Resolution::Right,
                Ordering::Equal => Resolution::Ambiguous,
            },
        }
    }
}

/// The ordered resolver chain.
pub(crate) struct ResolverChain {
    resolvers: Vec<Box<dyn AmbiguityResolver>>,
}

impl ResolverChain {
    pub(crate) fn new(resolvers: Vec<Box<dyn AmbiguityResolver>>) -> Self {
        Self { resolvers }
    }

    /// The default chain: explicit priority first, argument-type specificity
    /// second.
    pub(crate) fn default_chain() -> Self {
        Self::new(vec![
            Box::new(PriorityResolver),
            Box::new(ArgumentTypeResolver),
        ])
    }

    pub(crate) fn push(&mut self, resolver: Box<dyn AmbiguityResolver>) {
        self.resolvers.push(resolver);
    }

    /// Per pair, the first decisive verdict in chain order wins.
    pub(crate) fn resolve(
        &self,
        source: &Signature,
        left: &MethodBinding,
        right: &MethodBinding,
        oracle: &dyn AssignabilityOracle,
    ) -> Resolution {
        for resolver in &self.resolvers {
            match resolver.resolve(source, left, right, oracle) {
                Resolution::Ambiguous => continue,
                decisive => return decisive,
            }
        }
        Resolution::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_agreeing_verdicts() {
        assert_eq!(
            ArgumentTypeResolver::merge(None, Some(Resolution::Left)),
            Some(Resolution::Left)
        );
        assert_eq!(
            ArgumentTypeResolver::merge(Some(Resolution::Left), Some(Resolution::Left)),
            Some(Resolution::Left)
        );
        assert_eq!(ArgumentTypeResolver::merge(None, None), None);
    }

    #[test]
    fn test_merge_conflicts_are_ambiguous() {
        assert_eq!(
            ArgumentTypeResolver::merge(Some(Resolution::Left), Some(Resolution::Right)),
            Some(Resolution::Ambiguous)
        );
        assert_eq!(
            ArgumentTypeResolver::merge(Some(Resolution::Ambiguous), Some(Resolution::Left)),
            Some(Resolution::Ambiguous)
        );
    }
}
