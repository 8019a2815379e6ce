//! Per-candidate delegation binding.
//!
//! The delegation binder drives the directive registry, the defaults
//! provider and the termination policy across all parameters of one
//! candidate, producing a complete method binding or eliminating the
//! candidate.
//!
//! # Algorithm
//!
//! 1. A candidate marked as excluded from binding is eliminated outright.
//! 2. The termination policy is evaluated; failure eliminates the candidate.
//! 3. Each parameter, left to right, is bound through the binder registered
//!    for its directive kind. Parameters without a registered-kind directive
//!    pull the next synthetic directive from the defaults provider. Two
//!    registered kinds on one parameter abort the whole resolution.
//! 4. The first illegal parameter binding short-circuits; remaining
//!    parameters are not evaluated.

use tracing::trace;

use super::binders::BindContext;
use super::binding::{MethodBinding, MethodBindingBuilder, ParameterBinding};
use super::defaults::DefaultsProvider;
use super::registry::DirectiveRegistry;
use super::termination::TerminationPolicy;
use crate::candidate::CandidateMethod;
use crate::error::ConfigError;
use crate::signature::Signature;

/// Binds one (source, candidate) pair.
pub(crate) struct DelegationBinder<'a> {
    pub(crate) registry: &'a DirectiveRegistry,
    pub(crate) defaults: &'a dyn DefaultsProvider,
    pub(crate) termination: TerminationPolicy,
}

impl DelegationBinder<'_> {
    /// Attempt a complete binding of `candidate` for `source`.
    ///
    /// `Ok(None)` means the candidate does not apply to this call; `Err`
    /// means the candidate set is misconfigured and the whole resolution
    /// must abort.
    pub(crate) fn bind(
        &self,
        source: &Signature,
        candidate: &CandidateMethod,
        ctx: &BindContext<'_>,
    ) -> Result<Option<MethodBinding>, ConfigError> {
        if candidate.is_excluded() {
            trace!(candidate = %candidate.name, "candidate is excluded from binding");
            return Ok(None);
        }
        let Some(termination) =
            self.termination
                .evaluate(source, &candidate.signature, ctx.oracle)
        else {
            trace!(candidate = %candidate.name, "return slot is not reconcilable");
            return Ok(None);
        };

        // Conflicting registered kinds are a configuration mistake anywhere
        // on the candidate, even past a parameter that would not bind, so
        // they are detected before any parameter is evaluated.
        for target in candidate.signature.params() {
            let mut registered = candidate
                .directives_for(target.index)
                .iter()
                .filter(|directive| self.registry.contains(directive.kind()));
            if let (Some(first), Some(second)) = (registered.next(), registered.next()) {
                return Err(ConfigError::ConflictingDirectives {
                    candidate: candidate.name.clone(),
                    param: target.index,
                    first: first.kind(),
                    second: second.kind(),
                });
            }
        }

        let mut defaults = self.defaults.make_iterator(source, candidate);
        let mut builder = MethodBindingBuilder::new(candidate);
        for target in candidate.signature.params() {
            let mut registered = candidate
                .directives_for(target.index)
                .iter()
                .filter(|directive| self.registry.contains(directive.kind()));
            let picked = match registered.next() {
                Some(only) => only.clone(),
                None => match defaults.next() {
                    Some(directive) => directive,
                    None => {
                        trace!(
                            candidate = %candidate.name,
                            param = target.index,
                            "defaults provider exhausted"
                        );
                        return Ok(None);
                    }
                },
            };
            let Some(binder) = self.registry.lookup(picked.kind()) else {
                // The defaults provider yielded a kind nothing is registered
                // for; the parameter is unbindable.
                trace!(
                    candidate = %candidate.name,
                    param = target.index,
                    kind = %picked.kind(),
                    "no binder registered for default directive"
                );
                return Ok(None);
            };
            match binder.bind(&picked, source, target, ctx)? {
                ParameterBinding::Valid { expr, token } => builder.append(expr, token)?,
                ParameterBinding::Illegal => {
                    trace!(
                        candidate = %candidate.name,
                        param = target.index,
                        "parameter is unbindable"
                    );
                    return Ok(None);
                }
            }
        }
        Ok(Some(builder.build(termination)))
    }
}
