//! Defaults providers: synthetic directives for unannotated parameters.

use rustc_hash::FxHashSet;

use crate::candidate::CandidateMethod;
use crate::directive::Directive;
use crate::signature::Signature;

/// A finite sequence of synthetic directives, consumed left to right.
pub type DefaultsIter = std::vec::IntoIter<Directive>;

/// Supplies synthetic directives for candidate parameters that carry no
/// directive of a registered kind.
///
/// The orchestrator pulls one entry per unannotated parameter, in
/// left-to-right parameter order. Once the sequence is exhausted, remaining
/// unannotated parameters are unbindable.
pub trait DefaultsProvider: Send + Sync {
    /// Precompute the directive sequence for one (source, candidate) pair.
    fn make_iterator(&self, source: &Signature, candidate: &CandidateMethod) -> DefaultsIter;
}

/// The canonical provider for positional defaulting.
///
/// Yields the intercepted call's parameter indices that are not explicitly
/// referenced by any positional directive on the candidate, in ascending
/// order, each wrapped as a unique positional forwarding. A candidate
/// `f(@Argument(0) a, b, c)` against a three-parameter call therefore feeds
/// `b` from index 1 and `c` from index 2.
pub struct NextUnboundDefaults;

impl DefaultsProvider for NextUnboundDefaults {
    fn make_iterator(&self, source: &Signature, candidate: &CandidateMethod) -> DefaultsIter {
        let claimed: FxHashSet<usize> = candidate.referenced_argument_indices().collect();
        (0..source.arity())
            .filter(|index| !claimed.contains(index))
            .map(Directive::argument)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Never yields; every unannotated parameter is unbindable under this
/// provider.
pub struct EmptyDefaults;

impl DefaultsProvider for EmptyDefaults {
    fn make_iterator(&self, _source: &Signature, _candidate: &CandidateMethod) -> DefaultsIter {
        Vec::new().into_iter()
    }
}
