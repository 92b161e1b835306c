//! Update functions and their arguments.
//!
//! A timeline can carry a refresh callback plus the arguments to call it with.
//! The argument shape is a tagged variant so the call site never has to guess
//! how many arguments the callee wants:
//!
//! | `UpdateArgs`   | Callee receives                         |
//! |----------------|-----------------------------------------|
//! | `None`         | `None`                                  |
//! | `Single(v)`    | `Some(&v)`                              |
//! | `Multi(vs)`    | `Some(&Value::Array(vs))`, one value    |
//!
//! `Multi` is deliberately not spread: the callee gets the whole collection as
//! its only argument.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error type returned by update functions. Passed through untouched.
pub type UpdateError = Box<dyn std::error::Error + Send + Sync>;

/// A timeline refresh callback: takes the configured argument (if any) and
/// returns the entries it fetched.
pub type UpdateFn<E> = Box<dyn FnMut(Option<&Value>) -> Result<Vec<E>, UpdateError>>;

/// Arguments an update function is called with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum UpdateArgs {
    /// Call with no argument.
    #[default]
    None,
    /// Call with exactly this value.
    Single(Value),
    /// Call with the whole collection as a single value.
    Multi(Vec<Value>),
}

impl UpdateArgs {
    pub fn single(value: impl Into<Value>) -> Self {
        Self::Single(value.into())
    }

    pub fn multi<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Multi(values.into_iter().map(Into::into).collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Invoke `f` according to the argument policy above.
    pub(crate) fn call<E>(&self, f: &mut UpdateFn<E>) -> Result<Vec<E>, UpdateError> {
        match self {
            Self::None => f(None),
            Self::Single(value) => f(Some(value)),
            Self::Multi(values) => {
                let packed = Value::Array(values.clone());
                f(Some(&packed))
            }
        }
    }
}
