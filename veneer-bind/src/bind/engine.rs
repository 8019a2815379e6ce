//! The delegation resolution engine.
//!
//! [`DelegationEngine::resolve`] is the sole entry point: it attempts a
//! complete binding for every candidate, then selects a unique winner among
//! the successful bindings through the ambiguity resolver chain.
//!
//! Resolution is pure computation over immutable inputs: no I/O, no hidden
//! state, no randomness. Identical unmutated inputs produce identical
//! outcomes, and a configuration error aborts only the current call.

use tracing::debug;

use super::binders::{
    AllArgumentsBinder, ArgumentBinder, BindContext, DefaultValueBinder, ForwarderFactory,
    ParameterBinder, ReceiverBinder, ReplayBinder,
};
use super::binding::MethodBinding;
use super::defaults::{DefaultsProvider, NextUnboundDefaults};
use super::delegation::DelegationBinder;
use super::registry::DirectiveRegistry;
use super::resolver::{AmbiguityResolver, Resolution, ResolverChain};
use super::termination::TerminationPolicy;
use crate::candidate::CandidateMethod;
use crate::error::ConfigError;
use crate::signature::Signature;
use crate::types::AssignabilityOracle;

/// Result of resolving one intercepted call against a candidate set.
#[derive(Debug)]
pub enum ResolutionOutcome {
    /// A unique candidate bound and dominated all others.
    Resolved(MethodBinding),
    /// No candidate bound; a normal outcome the caller must handle.
    NoCandidateBound,
    /// Two or more bindings could not be told apart; carries the tied set.
    Ambiguous(Vec<MethodBinding>),
}

/// The delegation resolution engine.
///
/// Configured once, at construction time, with a binder registry, a defaults
/// provider, a termination policy and a resolver chain; read-only afterwards
/// and safe to share across threads.
pub struct DelegationEngine<'a> {
    registry: DirectiveRegistry,
    defaults: Box<dyn DefaultsProvider>,
    termination: TerminationPolicy,
    resolvers: ResolverChain,
    oracle: &'a dyn AssignabilityOracle,
    forwarder: Option<&'a dyn ForwarderFactory>,
}

impl<'a> DelegationEngine<'a> {
    /// Create an engine with the built-in binder set, the canonical
    /// positional defaults provider, the returning termination policy and
    /// the default resolver chain.
    pub fn new(oracle: &'a dyn AssignabilityOracle) -> Self {
        Self {
            registry: DirectiveRegistry::preloaded(Self::builtin_binders()),
            defaults: Box::new(NextUnboundDefaults),
            termination: TerminationPolicy::default(),
            resolvers: ResolverChain::default_chain(),
            oracle,
            forwarder: None,
        }
    }

    /// Create an engine with a caller-supplied binder set instead of the
    /// built-ins. Fails when two binders share a kind.
    pub fn with_parameter_binders(
        oracle: &'a dyn AssignabilityOracle,
        binders: Vec<Box<dyn ParameterBinder>>,
    ) -> Result<Self, ConfigError> {
        let mut registry = DirectiveRegistry::new();
        for binder in binders {
            registry.register(binder)?;
        }
        Ok(Self {
            registry,
            defaults: Box::new(NextUnboundDefaults),
            termination: TerminationPolicy::default(),
            resolvers: ResolverChain::default_chain(),
            oracle,
            forwarder: None,
        })
    }

    fn builtin_binders() -> Vec<Box<dyn ParameterBinder>> {
        vec![
            Box::new(ArgumentBinder),
            Box::new(AllArgumentsBinder),
            Box::new(ReceiverBinder),
            Box::new(ReplayBinder),
            Box::new(DefaultValueBinder),
        ]
    }

    /// Register an additional parameter binder. Fails if its kind is taken.
    pub fn register_binder(&mut self, binder: Box<dyn ParameterBinder>) -> Result<(), ConfigError> {
        self.registry.register(binder)
    }

    /// Append an ambiguity resolver to the chain.
    pub fn push_resolver(&mut self, resolver: Box<dyn AmbiguityResolver>) {
        self.resolvers.push(resolver);
    }

    /// Replace the termination policy.
    pub fn with_termination(mut self, policy: TerminationPolicy) -> Self {
        self.termination = policy;
        self
    }

    /// Replace the defaults provider.
    pub fn with_defaults_provider(mut self, provider: Box<dyn DefaultsProvider>) -> Self {
        self.defaults = provider;
        self
    }

    /// Supply the forwarder synthesis callback used by the replay strategy.
    pub fn with_forwarder_factory(mut self, factory: &'a dyn ForwarderFactory) -> Self {
        self.forwarder = Some(factory);
        self
    }

    /// Resolve an intercepted call against a candidate set.
    pub fn resolve(
        &self,
        source: &Signature,
        candidates: &[CandidateMethod],
    ) -> Result<ResolutionOutcome, ConfigError> {
        let binder = DelegationBinder {
            registry: &self.registry,
            defaults: self.defaults.as_ref(),
            termination: self.termination,
        };
        let mut bound = Vec::new();
        for candidate in candidates {
            let ctx = BindContext {
                oracle: self.oracle,
                forwarder: self.forwarder,
                candidate,
            };
            match binder.bind(source, candidate, &ctx)? {
                Some(binding) => {
                    debug!(candidate = %candidate.name, "candidate bound");
                    bound.push(binding);
                }
                None => debug!(candidate = %candidate.name, "candidate does not apply"),
            }
        }
        if bound.is_empty() {
            return Ok(ResolutionOutcome::NoCandidateBound);
        }
        if bound.len() == 1 {
            let binding = bound.remove(0);
            debug!(winner = %binding.candidate.name, "single candidate bound");
            return Ok(ResolutionOutcome::Resolved(binding));
        }
        Ok(self.select_winner(source, bound))
    }

    /// Select the dominant binding, if a unique one exists.
    ///
    /// A binding survives when no other binding dominates it under the
    /// resolver chain. A unique survivor resolves the call; several
    /// survivors are reported together; no survivor at all (a dominance
    /// cycle between the bindings) reports every valid binding, so that a
    /// non-transitive tie never picks an arbitrary winner.
    fn select_winner(&self, source: &Signature, mut bound: Vec<MethodBinding>) -> ResolutionOutcome {
        let mut winners: Vec<usize> = Vec::new();
        for (index, binding) in bound.iter().enumerate() {
            let dominated = bound.iter().enumerate().any(|(other_index, other)| {
                index != other_index
                    && self.resolvers.resolve(source, other, binding, self.oracle)
                        == Resolution::Left
            });
            if !dominated {
                winners.push(index);
            }
        }
        match winners.as_slice() {
            [single] => {
                let binding = bound.swap_remove(*single);
                debug!(winner = %binding.candidate.name, "ambiguity resolved");
                ResolutionOutcome::Resolved(binding)
            }
            [] => {
                debug!("dominance cycle among bound candidates");
                ResolutionOutcome::Ambiguous(bound)
            }
            _ => {
                debug!(tied = winners.len(), "ambiguous candidates");
                let tied: Vec<MethodBinding> = bound
                    .into_iter()
                    .enumerate()
                    .filter(|(index, _)| winners.contains(index))
                    .map(|(_, binding)| binding)
                    .collect();
                ResolutionOutcome::Ambiguous(tied)
            }
        }
    }
}
