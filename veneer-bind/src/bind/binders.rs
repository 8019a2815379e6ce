//! Parameter binder strategies.
//!
//! Each strategy resolves one directive kind into a value-producing
//! expression for one candidate parameter. Strategies are stateless value
//! types registered into the [`DirectiveRegistry`](super::DirectiveRegistry)
//! at engine construction.
//!
//! Failure is two-tiered: a hard failure (`Err`) is a configuration mistake
//! that aborts the whole resolution call, while a soft failure
//! (`Ok(ParameterBinding::Illegal)`) only eliminates the current candidate.

use super::binding::{ForwarderToken, ParameterBinding, ParameterIndexToken, ValueExpr};
use crate::candidate::CandidateMethod;
use crate::directive::{BindingMechanic, Directive, DirectiveKind, PackMode};
use crate::error::ConfigError;
use crate::signature::{ParamDescriptor, Signature};
use crate::types::AssignabilityOracle;

/// Synthesizes forwarder objects that replay the intercepted call.
///
/// This is the narrow seam into the emission backend; resolution itself
/// never emits code.
pub trait ForwarderFactory: Send + Sync {
    /// A token for a forwarder replaying `source`, or `None` when the
    /// intercepted call has no replayable target.
    fn synthesize(&self, source: &Signature) -> Option<ForwarderToken>;
}

/// Collaborators handed to every binder invocation.
#[derive(Clone, Copy)]
pub struct BindContext<'a> {
    /// The type-assignability oracle.
    pub oracle: &'a dyn AssignabilityOracle,
    /// Forwarder synthesis callback, when the host supplies one.
    pub forwarder: Option<&'a dyn ForwarderFactory>,
    /// The candidate currently being bound.
    pub candidate: &'a CandidateMethod,
}

/// Strategy interface: resolves one directive kind for one candidate
/// parameter. Implementations carry no per-call state.
pub trait ParameterBinder: Send + Sync {
    /// The directive kind this binder handles.
    fn kind(&self) -> DirectiveKind;

    /// Attempt to bind `target` from the intercepted call's context.
    fn bind(
        &self,
        directive: &Directive,
        source: &Signature,
        target: &ParamDescriptor,
        ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError>;
}

/// Positional forwarding: feeds the target parameter from one intercepted
/// call parameter.
///
/// Soft-fails when the referenced index is out of range or the source
/// parameter type is not assignable to the target parameter type. The unique
/// mechanic additionally marks the binding with an identity token so that
/// ambiguity resolvers can compare rival claims on the same index.
pub struct ArgumentBinder;

impl ParameterBinder for ArgumentBinder {
    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Argument
    }

    fn bind(
        &self,
        directive: &Directive,
        source: &Signature,
        target: &ParamDescriptor,
        ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError> {
        let Directive::Argument { index, mechanic } = directive else {
            return Ok(ParameterBinding::Illegal);
        };
        let Some(source_param) = source.param(*index) else {
            // The intercepted call has too few parameters.
            return Ok(ParameterBinding::Illegal);
        };
        if !ctx.oracle.is_assignable(source_param.ty, target.ty) {
            return Ok(ParameterBinding::Illegal);
        }
        let expr = ValueExpr::Argument(*index);
        Ok(match mechanic {
            BindingMechanic::Unique => {
                ParameterBinding::unique(expr, ParameterIndexToken(*index))
            }
            BindingMechanic::Anonymous => ParameterBinding::valid(expr),
        })
    }
}

/// Collect-remaining: feeds the target parameter with a synthesized sequence
/// of the intercepted call's parameters.
///
/// Hard-fails when the annotated parameter's declared type is not a
/// sequence. Strict mode soft-fails as soon as one source parameter is not
/// assignable to the element type; slack mode skips such parameters,
/// possibly yielding an empty pack.
pub struct AllArgumentsBinder;

impl ParameterBinder for AllArgumentsBinder {
    fn kind(&self) -> DirectiveKind {
        DirectiveKind::AllArguments
    }

    fn bind(
        &self,
        directive: &Directive,
        source: &Signature,
        target: &ParamDescriptor,
        ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError> {
        let Directive::AllArguments { mode } = directive else {
            return Ok(ParameterBinding::Illegal);
        };
        let Some(element) = ctx.oracle.element_type(target.ty) else {
            return Err(ConfigError::NotASequence {
                candidate: ctx.candidate.name.clone(),
                param: target.index,
            });
        };
        let mut picked = Vec::with_capacity(source.arity());
        for source_param in source.params() {
            if ctx.oracle.is_assignable(source_param.ty, element) {
                picked.push(source_param.index);
            } else if *mode == PackMode::Strict {
                return Ok(ParameterBinding::Illegal);
            }
        }
        Ok(ParameterBinding::valid(ValueExpr::ArgumentPack(picked)))
    }
}

/// Self-reference: feeds the target parameter with the receiver of the
/// intercepted call. Soft-fails for static calls and for receivers not
/// assignable to the parameter type.
pub struct ReceiverBinder;

impl ParameterBinder for ReceiverBinder {
    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Receiver
    }

    fn bind(
        &self,
        directive: &Directive,
        source: &Signature,
        target: &ParamDescriptor,
        ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError> {
        if !matches!(directive, Directive::Receiver) {
            return Ok(ParameterBinding::Illegal);
        }
        if source.is_static() {
            return Ok(ParameterBinding::Illegal);
        }
        if !ctx.oracle.is_assignable(source.owner, target.ty) {
            return Ok(ParameterBinding::Illegal);
        }
        Ok(ParameterBinding::valid(ValueExpr::Receiver))
    }
}

/// Resupply-as-callable: feeds the target parameter with a freshly
/// synthesized forwarder that replays the intercepted call.
///
/// Soft-fails when no forwarder factory is configured or when the factory
/// declines because the call has no replayable target.
pub struct ReplayBinder;

impl ParameterBinder for ReplayBinder {
    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Replay
    }

    fn bind(
        &self,
        directive: &Directive,
        source: &Signature,
        _target: &ParamDescriptor,
        ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError> {
        if !matches!(directive, Directive::Replay) {
            return Ok(ParameterBinding::Illegal);
        }
        let Some(factory) = ctx.forwarder else {
            return Ok(ParameterBinding::Illegal);
        };
        Ok(match factory.synthesize(source) {
            Some(token) => ParameterBinding::valid(ValueExpr::Forwarder(token)),
            None => ParameterBinding::Illegal,
        })
    }
}

/// Fallback constant: feeds the target parameter with the default value of
/// its carrier type. Always valid.
pub struct DefaultValueBinder;

impl ParameterBinder for DefaultValueBinder {
    fn kind(&self) -> DirectiveKind {
        DirectiveKind::DefaultValue
    }

    fn bind(
        &self,
        directive: &Directive,
        _source: &Signature,
        target: &ParamDescriptor,
        _ctx: &BindContext<'_>,
    ) -> Result<ParameterBinding, ConfigError> {
        if !matches!(directive, Directive::DefaultValue) {
            return Ok(ParameterBinding::Illegal);
        }
        Ok(ParameterBinding::valid(ValueExpr::DefaultOf(target.ty)))
    }
}
