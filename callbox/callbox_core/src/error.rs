//! Error types for the Callbox widget loader.
//!
//! This module defines the error hierarchy used throughout the system. The
//! errors are organized by subsystem, with each subsystem having its own
//! error type. The root error type, `Error`, can wrap any of the
//! subsystem-specific errors, allowing for uniform error handling at the
//! top level.
//!
//! Two lifecycle conditions are deliberately NOT errors: mounting while a
//! widget is already live (a guarded no-op surfaced as a diagnostic log),
//! and unmounting while nothing is mounted (a silent no-op).

use crate::id::ScopeId;
use thiserror::Error;

/// Root error type for the Callbox system.
#[derive(Debug, Error)]
pub enum Error {
    /// Isolation-scope errors
    #[error("Scope error: {0}")]
    Scope(#[from] ScopeError),

    /// Root-component errors
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Global-surface registration errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Convenience result type used throughout the system.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors related to isolation-scope construction and teardown.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// A node referenced by the operation is no longer in the document
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The target element already carries an isolated scope
    #[error("Shadow root already attached to node: {0}")]
    ShadowAlreadyAttached(String),

    /// The host document has no body to attach the container to
    #[error("Host document has no body")]
    MissingBody,

    /// The scope has already been released
    #[error("Scope {0} has been released")]
    Released(ScopeId),
}

/// Errors raised by a root component during instantiation or teardown.
///
/// The controller never wraps or recovers from these; they propagate to the
/// caller unmodified.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Component construction failed
    #[error("Component instantiation failed: {0}")]
    InstantiationFailed(String),

    /// Component teardown failed
    #[error("Component teardown failed: {0}")]
    TeardownFailed(String),
}

/// Errors related to loader configuration and settings validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The identity-enforcing variant requires a public API key
    #[error("Missing required public API key")]
    MissingApiKey,

    /// Configuration or settings payload could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Configuration was parsed but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors related to the one-time global registration surface.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The global surface has already been installed
    #[error("Global widget surface is already installed")]
    AlreadyInstalled,

    /// The global surface has not been installed yet
    #[error("Global widget surface is not installed")]
    NotInstalled,
}
