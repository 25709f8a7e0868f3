//! Dependency-injection glue.
//!
//! [`InjectionParams`] is a single-use record of registration directives;
//! [`add_injection_params`] applies it to anything implementing the
//! [`Injector`] registration surface, in a fixed order and with no rollback.
//! [`ServiceRegistry`] is the demo's own concrete injector.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde_yaml::Value;

/// Named parameter defaults handed to delegates.
pub type ParamBag = HashMap<String, Value>;

/// Factory for a registered service: renders the service's output from the
/// parameter bag.
pub type Delegate = Arc<dyn Fn(&ParamBag) -> String + Send + Sync>;

/// Decorates a delegate's output after construction.
pub type Prepare = Arc<dyn Fn(String) -> String + Send + Sync>;

#[derive(Debug)]
pub enum InjectError {
    /// The name is already aliased to a different target.
    AliasConflict { original: String, existing: String },
    /// A delegate is already registered under this name.
    DelegateConflict(String),
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::AliasConflict { original, existing } => {
                write!(f, "'{original}' is already aliased to '{existing}'")
            }
            InjectError::DelegateConflict(name) => {
                write!(f, "a delegate is already registered for '{name}'")
            }
        }
    }
}

impl std::error::Error for InjectError {}

/// The registration surface of a dependency injector.
pub trait Injector {
    fn alias(&mut self, original: &str, alias: &str) -> Result<(), InjectError>;
    fn share(&mut self, name: &str) -> Result<(), InjectError>;
    fn define_param(&mut self, name: &str, value: Value) -> Result<(), InjectError>;
    fn delegate(&mut self, name: &str, factory: Delegate) -> Result<(), InjectError>;
    fn prepare(&mut self, name: &str, hook: Prepare) -> Result<(), InjectError>;
}

/// A single-use record of injector registrations, built fluently by
/// application setup code and applied once.
#[derive(Default)]
pub struct InjectionParams {
    aliases: Vec<(String, String)>,
    shares: Vec<String>,
    params: Vec<(String, Value)>,
    delegates: Vec<(String, Delegate)>,
    prepares: Vec<(String, Prepare)>,
}

impl InjectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, original: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.push((original.into(), alias.into()));
        self
    }

    pub fn share(mut self, name: impl Into<String>) -> Self {
        self.shares.push(name.into());
        self
    }

    pub fn define_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.push((name.into(), value));
        self
    }

    pub fn delegate(mut self, name: impl Into<String>, factory: Delegate) -> Self {
        self.delegates.push((name.into(), factory));
        self
    }

    pub fn prepare(mut self, name: impl Into<String>, hook: Prepare) -> Self {
        self.prepares.push((name.into(), hook));
        self
    }
}

/// Applies a params record to an injector.
///
/// Fixed order: all aliases, then all shares, then all named parameters,
/// then all delegates, then all prepares. The first registration failure
/// propagates immediately; earlier registrations in the same call stay
/// applied.
pub fn add_injection_params<I>(injector: &mut I, params: &InjectionParams) -> Result<(), InjectError>
where
    I: Injector + ?Sized,
{
    for (original, alias) in &params.aliases {
        injector.alias(original, alias)?;
    }

    for share in &params.shares {
        injector.share(share)?;
    }

    for (name, value) in &params.params {
        injector.define_param(name, value.clone())?;
    }

    for (name, factory) in &params.delegates {
        injector.delegate(name, Arc::clone(factory))?;
    }

    for (name, hook) in &params.prepares {
        injector.prepare(name, Arc::clone(hook))?;
    }

    Ok(())
}

/// The demo's concrete injector: a mutable registry of aliases, shared
/// names, parameter defaults, delegates and prepare hooks, with alias
/// chains resolved at lookup time.
#[derive(Default)]
pub struct ServiceRegistry {
    aliases: HashMap<String, String>,
    shared: HashSet<String>,
    params: ParamBag,
    delegates: HashMap<String, Delegate>,
    prepares: HashMap<String, Vec<Prepare>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &ParamBag {
        &self.params
    }

    pub fn is_shared(&self, name: &str) -> bool {
        self.shared.contains(name)
    }

    /// Follows the alias chain from `name` to its concrete target. Hops are
    /// capped at the alias count, which breaks any accidental cycle.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> &'a str {
        let mut current = name;

        for _ in 0..=self.aliases.len() {
            match self.aliases.get(current) {
                Some(next) => current = next,
                None => break,
            }
        }

        current
    }

    /// Builds the service registered under `name` using the stored
    /// parameter defaults.
    pub fn make(&self, name: &str) -> Option<String> {
        self.make_with(name, &ParamBag::new())
    }

    /// Builds the service registered under `name`, with `overrides` taking
    /// precedence over the stored defaults. Prepare hooks registered
    /// against the concrete name decorate the output in registration order.
    pub fn make_with(&self, name: &str, overrides: &ParamBag) -> Option<String> {
        let target = self.resolve_name(name);
        let factory = self.delegates.get(target)?;

        let mut bag = self.params.clone();
        for (key, value) in overrides {
            bag.insert(key.clone(), value.clone());
        }

        let mut rendered = factory(&bag);

        if let Some(hooks) = self.prepares.get(target) {
            for hook in hooks {
                rendered = hook(rendered);
            }
        }

        Some(rendered)
    }
}

impl Injector for ServiceRegistry {
    fn alias(&mut self, original: &str, alias: &str) -> Result<(), InjectError> {
        if let Some(existing) = self.aliases.get(original) {
            if existing != alias {
                return Err(InjectError::AliasConflict {
                    original: original.to_string(),
                    existing: existing.clone(),
                });
            }
        }

        self.aliases.insert(original.to_string(), alias.to_string());
        Ok(())
    }

    fn share(&mut self, name: &str) -> Result<(), InjectError> {
        self.shared.insert(name.to_string());
        Ok(())
    }

    fn define_param(&mut self, name: &str, value: Value) -> Result<(), InjectError> {
        self.params.insert(name.to_string(), value);
        Ok(())
    }

    fn delegate(&mut self, name: &str, factory: Delegate) -> Result<(), InjectError> {
        if self.delegates.contains_key(name) {
            return Err(InjectError::DelegateConflict(name.to_string()));
        }

        self.delegates.insert(name.to_string(), factory);
        Ok(())
    }

    fn prepare(&mut self, name: &str, hook: Prepare) -> Result<(), InjectError> {
        self.prepares.entry(name.to_string()).or_default().push(hook);
        Ok(())
    }
}
