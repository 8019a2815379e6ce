//! Delegation binding and resolution.
//!
//! This module implements the resolution algorithm that selects which
//! candidate handler method receives an intercepted call, and how each
//! candidate parameter is fed from the call's context.
//!
//! # Algorithm Overview
//!
//! 1. **Bind candidates**: attempt a complete binding of the intercepted
//!    call to every candidate, parameter by parameter
//! 2. **Collect survivors**: keep only candidates whose every parameter and
//!    return slot bound validly
//! 3. **Rank pairwise**: compare survivors through the ordered ambiguity
//!    resolver chain
//! 4. **Select best**: choose the unique dominant binding, or report the
//!    tied set
//!
//! # Module Structure
//!
//! - [`binding`] - Per-parameter results and assembled method bindings
//! - [`binders`] - Parameter binder strategies and their shared context
//! - [`registry`] - The directive kind registry
//! - [`defaults`] - Defaults providers for unannotated parameters
//! - [`termination`] - Return-slot reconciliation policies
//! - [`delegation`] - The per-candidate orchestrator
//! - [`resolver`] - Ambiguity resolvers and the resolver chain
//! - [`engine`] - The resolution engine and its entry point

mod binders;
mod binding;
mod defaults;
mod delegation;
mod engine;
mod registry;
mod resolver;
mod termination;


pub use binders::{
    AllArgumentsBinder, ArgumentBinder, BindContext, DefaultValueBinder, ForwarderFactory,
    ParameterBinder, ReceiverBinder, ReplayBinder,
};

pub use binding::{
    ForwarderToken, MethodBinding, ParameterBinding, ParameterIndexToken, Termination, ValueExpr,
};

pub use defaults::{DefaultsIter, DefaultsProvider, EmptyDefaults, NextUnboundDefaults};

pub use engine::{DelegationEngine, ResolutionOutcome};

pub use registry::DirectiveRegistry;

pub use resolver::{AmbiguityResolver, ArgumentTypeResolver, PriorityResolver, Resolution};

pub use termination::TerminationPolicy;
