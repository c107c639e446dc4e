//! Typed lookups against a [`ReadEnv`] source

use std::borrow::Cow;
use std::env::VarError;

use envy_core::{parse_bool, parse_float, parse_int, Cause, ConversionError, Operation, Result};
use tracing::{debug, trace};

use crate::source::{ReadEnv, SystemEnv};

/// Reads variables from a source and converts them to typed values.
///
/// Every lookup treats an unset variable and a variable set to the empty
/// string alike: both fail with [`Cause::NotFound`].
///
/// With a prefix, each key is looked up as `prefix + key`, and errors report
/// the full key that was looked up.
#[derive(Debug, Clone, Default)]
pub struct EnvAccessor<S = SystemEnv> {
    source: S,
    prefix: Option<String>,
}

impl EnvAccessor<SystemEnv> {
    /// An accessor bound to the process environment
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<S: ReadEnv> EnvAccessor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: None,
        }
    }

    /// Prepend `prefix` to every key this accessor looks up
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Return the raw value of `key`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        let key = self.resolve_key(key);
        self.lookup(Operation::GetString, &key)
    }

    /// Parse `key` as a boolean literal (`1 t T TRUE true True` and
    /// `0 f F FALSE false False`).
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.convert(Operation::GetBool, key, parse_bool)
    }

    /// Parse `key` as a signed integer. See [`parse_int`] for the meaning of
    /// `base` and `bit_size`.
    pub fn get_int(&self, key: &str, base: u32, bit_size: u32) -> Result<i64> {
        self.convert(Operation::GetInt, key, |value| {
            parse_int(value, base, bit_size)
        })
    }

    /// Parse `key` as a float rounded to `bit_size` (32 or 64) bits of
    /// precision.
    pub fn get_float(&self, key: &str, bit_size: u32) -> Result<f64> {
        self.convert(Operation::GetFloat, key, |value| parse_float(value, bit_size))
    }

    fn resolve_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{prefix}{key}")),
            None => Cow::Borrowed(key),
        }
    }

    fn lookup(&self, operation: Operation, key: &str) -> Result<String> {
        match self.source.var(key) {
            Ok(value) if !value.is_empty() => Ok(value),
            Ok(_) | Err(VarError::NotPresent) => {
                trace!(key = %key, %operation, "environment variable not set");
                Err(ConversionError::not_found(operation, key))
            }
            Err(VarError::NotUnicode(_)) => {
                debug!(key = %key, %operation, "environment variable is not valid unicode");
                Err(ConversionError::not_unicode(operation, key))
            }
        }
    }

    fn convert<T>(
        &self,
        operation: Operation,
        key: &str,
        parse: impl FnOnce(&str) -> std::result::Result<T, Cause>,
    ) -> Result<T> {
        let key = self.resolve_key(key);
        let value = self.lookup(operation, &key)?;

        parse(&value).map_err(|cause| {
            debug!(key = %key, %operation, %cause, "environment variable could not be converted");
            ConversionError::new(operation, key.into_owned(), cause)
        })
    }
}
