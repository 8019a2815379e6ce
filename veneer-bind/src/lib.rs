//! Delegation binding engine for the Veneer interception toolkit.
//!
//! Veneer generates replacement implementations for intercepted calls by
//! delegating each call to the best-matching method on a handler object.
//! This crate is the resolution half of that pipeline: given one intercepted
//! call signature and a set of candidate handler methods, it attempts a
//! complete binding of every candidate parameter to a value derived from the
//! call's context, validates the return slot, and deterministically selects
//! a unique winner or reports the tie.
//!
//! The engine produces only abstract value-producing expressions
//! ([`ValueExpr`]); turning a resolved binding into executable code is the
//! emission backend's job, and type-assignability questions are answered by
//! an [`AssignabilityOracle`] supplied by the hosting type system.
//!
//! # Example
//!
//! ```
//! use veneer_bind::{
//!     CandidateMethod, DelegationEngine, MethodId, ResolutionOutcome, Signature,
//!     SignatureFlags, TypeTable,
//! };
//!
//! let mut table = TypeTable::new();
//! let object = table.intern("Object");
//! let string = table.intern("String");
//! let host = table.intern("Host");
//! table.declare_assignable(string, object);
//!
//! // An intercepted call `Host::greet(String) -> Object`.
//! let source = Signature::new(host, vec![string], object, SignatureFlags::empty());
//!
//! // A handler `log(Object) -> Object`; its parameter is fed positionally.
//! let log = CandidateMethod::new(
//!     MethodId::new(0),
//!     "log",
//!     Signature::new(host, vec![object], object, SignatureFlags::empty()),
//! );
//!
//! let engine = DelegationEngine::new(&table);
//! let outcome = engine.resolve(&source, &[log]).unwrap();
//! assert!(matches!(outcome, ResolutionOutcome::Resolved(_)));
//! ```

pub mod bind;
pub mod candidate;
pub mod directive;
pub mod error;
pub mod signature;
pub mod types;

pub use bind::{
    AmbiguityResolver, BindContext, DelegationEngine, DefaultsProvider, ForwarderFactory,
    ForwarderToken, MethodBinding, ParameterBinder, ParameterBinding, ParameterIndexToken,
    Resolution, ResolutionOutcome, Termination, TerminationPolicy, ValueExpr,
};
pub use candidate::{CandidateMethod, DEFAULT_PRIORITY};
pub use directive::{
    BindingMechanic, CustomDirective, Directive, DirectiveKind, MethodDirective, PackMode,
};
pub use error::ConfigError;
pub use signature::{ParamDescriptor, Signature, SignatureFlags};
pub use types::{AssignabilityOracle, MethodId, TypeId, TypeTable};
