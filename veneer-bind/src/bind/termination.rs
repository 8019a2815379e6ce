//! Return-slot reconciliation policies.

use super::binding::Termination;
use crate::signature::Signature;
use crate::types::AssignabilityOracle;

/// How a candidate's return value is reconciled with the intercepted call's
/// return slot. Exactly one policy is configured per engine, not per
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminationPolicy {
    /// Convert the candidate's return value to the intercepted call's return
    /// type; candidates whose effective return type is not convertible do
    /// not bind.
    #[default]
    Returning,
    /// Discard the candidate's return value; no reconciliation against the
    /// intercepted call's return type is attempted.
    Dropping,
}

impl TerminationPolicy {
    /// Evaluate the policy for one (source, candidate) pair. `None` means
    /// the candidate does not bind under this policy.
    pub(crate) fn evaluate(
        self,
        source: &Signature,
        candidate: &Signature,
        oracle: &dyn AssignabilityOracle,
    ) -> Option<Termination> {
        match self {
            TerminationPolicy::Returning => oracle
                .is_assignable(candidate.effective_return(), source.return_type)
                .then_some(Termination::Return),
            TerminationPolicy::Dropping => Some(Termination::Drop),
        }
    }
}
