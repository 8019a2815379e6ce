//! Directive model.
//!
//! A directive is a declarative marker attached to a candidate parameter (or
//! to the candidate method as a whole) that selects the binding strategy for
//! it. Built-in kinds are closed variants of [`Directive`]; hosts can ship
//! additional kinds through [`Directive::Custom`] together with a matching
//! binder registration.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// How a positional forwarding participates in ambiguity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingMechanic {
    /// The binding carries an identity token and an intercepted-call index
    /// may be claimed this way at most once per candidate.
    #[default]
    Unique,
    /// The binding carries no identity token and may repeat freely.
    Anonymous,
}

/// How collect-remaining treats non-assignable source parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackMode {
    /// Every source parameter must be assignable to the element type; any
    /// failure makes the whole parameter unbindable.
    #[default]
    Strict,
    /// Non-assignable source parameters are silently skipped.
    Slack,
}

/// Payload of a user-registered directive kind.
///
/// The owning binder downcasts through [`CustomDirective::as_any`].
pub trait CustomDirective: Any + fmt::Debug + Send + Sync {
    /// The kind name this payload belongs to; must match the kind of the
    /// registered binder that handles it.
    fn kind(&self) -> &'static str;

    /// Upcast for downcasting inside the owning binder.
    fn as_any(&self) -> &dyn Any;
}

/// A directive attached to a candidate parameter.
#[derive(Debug, Clone)]
pub enum Directive {
    /// Forward the intercepted call's parameter at `index`.
    Argument {
        /// The intercepted-call parameter index to forward.
        index: usize,
        /// Unique or anonymous participation in ambiguity resolution.
        mechanic: BindingMechanic,
    },
    /// Collect the intercepted call's parameters into a synthesized sequence.
    AllArguments {
        /// Strict or slack treatment of non-assignable parameters.
        mode: PackMode,
    },
    /// Bind the receiver of the intercepted call.
    Receiver,
    /// Bind a synthesized forwarder that replays the intercepted call.
    Replay,
    /// Bind the default value of the parameter's carrier type.
    DefaultValue,
    /// A user-registered directive.
    Custom(Arc<dyn CustomDirective>),
}

impl Directive {
    /// A unique positional forwarding of `index`.
    pub fn argument(index: usize) -> Self {
        Directive::Argument {
            index,
            mechanic: BindingMechanic::Unique,
        }
    }

    /// The registry key for this directive.
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Argument { .. } => DirectiveKind::Argument,
            Directive::AllArguments { .. } => DirectiveKind::AllArguments,
            Directive::Receiver => DirectiveKind::Receiver,
            Directive::Replay => DirectiveKind::Replay,
            Directive::DefaultValue => DirectiveKind::DefaultValue,
            Directive::Custom(payload) => DirectiveKind::Custom(payload.kind()),
        }
    }
}

/// Registry key naming a directive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Positional forwarding.
    Argument,
    /// Collect-remaining.
    AllArguments,
    /// Self-reference.
    Receiver,
    /// Resupply-as-callable.
    Replay,
    /// Fallback constant.
    DefaultValue,
    /// A user-registered kind.
    Custom(&'static str),
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Argument => f.write_str("argument"),
            DirectiveKind::AllArguments => f.write_str("all-arguments"),
            DirectiveKind::Receiver => f.write_str("receiver"),
            DirectiveKind::Replay => f.write_str("replay"),
            DirectiveKind::DefaultValue => f.write_str("default-value"),
            DirectiveKind::Custom(name) => f.write_str(name),
        }
    }
}

/// A directive attached to a candidate method as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodDirective {
    /// The candidate never participates in binding.
    ExcludeFromBinding,
    /// Explicit resolution priority; candidates without one default to
    /// [`crate::candidate::DEFAULT_PRIORITY`].
    Priority(u32),
}
