//! Deployment mode selection and per-mode command bindings.
//!
//! The single switch is `settings.use_original_deployment` in the project
//! config: absent or `false` selects factory mode (the default), `true`
//! opts in to the standard (original) flow. No other field participates.

mod bindings;
mod mode;

pub use bindings::{
    BindingSet, FACTORY_AGENT_PREFIX, FACTORY_DELEGATION_NOTICE, FactoryBindings,
    StandardBindings,
};
pub use mode::{DeploymentMode, select_mode};
