//! Leaf decoders. These are the only decoders that look at the shape of
//! their input; everything else is built from them.

use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::value::Value;
use std::fmt::Display;
use std::sync::OnceLock;

fn type_mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: found.to_string(),
    }
}

/// Always succeeds with a copy of the input.
#[must_use]
pub fn identity<I>() -> Decoder<I, I>
where
    I: Clone + 'static,
{
    Decoder::new(|input: &I| Ok(input.clone()))
}

/// Reads a string.
#[must_use]
pub fn string() -> Decoder<Value, String> {
    Decoder::new(|input: &Value| match input {
        Value::String(s) => Ok(s.clone()),
        Value::Map(_) => Err(type_mismatch("a string", input)),
    })
}

/// Parses a string as an `i64`.
///
/// The whole string must be an integer literal: no surrounding whitespace, no
/// trailing characters, no decimal point. Literals outside the `i64` range
/// are reported as not an integer too.
#[must_use]
pub fn integer() -> Decoder<Value, i64> {
    Decoder::new(|input: &Value| match input {
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| DecodeError::NotAnInteger { input: s.clone() }),
        Value::Map(_) => Err(type_mismatch("a string", input)),
    })
}

/// Ignores the input and succeeds with `value`.
#[must_use]
pub fn succeed<I, O>(value: O) -> Decoder<I, O>
where
    I: 'static,
    O: Clone + Send + Sync + 'static,
{
    Decoder::new(move |_: &I| Ok(value.clone()))
}

/// Ignores the input and fails with `message`.
///
/// # Panics
///
/// Panics if `message` is empty.
#[must_use]
#[track_caller]
pub fn fail<I, O>(message: impl Into<String>) -> Decoder<I, O>
where
    I: 'static,
    O: 'static,
{
    let err = DecodeError::custom(message);
    Decoder::new(move |_: &I| Err(err.clone()))
}

/// Succeeds with `constant` if the input equals it.
///
/// On `Value` input, `literal("visible")` compares against the string
/// `"visible"`.
#[must_use]
pub fn literal<I>(constant: impl Into<I>) -> Decoder<I, I>
where
    I: PartialEq + Display + Clone + Send + Sync + 'static,
{
    let constant = constant.into();
    Decoder::new(move |input: &I| {
        if *input == constant {
            Ok(constant.clone())
        } else {
            Err(DecodeError::Mismatch {
                input: input.to_string(),
                expected: constant.to_string(),
            })
        }
    })
}

/// Runs `inner` against the value stored under `key` in a mapping.
///
/// Fails if the input is not a mapping, or if the key is absent. Whatever
/// `inner` returns is passed through unchanged.
#[must_use]
pub fn from_key<O>(key: impl Into<String>, inner: Decoder<Value, O>) -> Decoder<Value, O>
where
    O: 'static,
{
    let key = key.into();
    Decoder::new(move |input: &Value| match input {
        Value::Map(map) => match map.get(&key) {
            Some(value) => inner.run(value),
            None => {
                log::trace!("key `{key}` not found");
                Err(DecodeError::MissingKey {
                    key: key.clone(),
                    input: input.to_string(),
                })
            }
        },
        Value::String(_) => Err(type_mismatch("a mapping", input)),
    })
}

/// Defers building a decoder until it first runs.
///
/// Needed for recursive schemas, where a decoder refers to itself:
///
/// ```
/// use mon_decode::{from_key, lazy, succeed, Decoder, Value};
///
/// // A chain of `next` links, counted.
/// fn depth() -> Decoder<Value, usize> {
///     from_key("next", lazy(depth)).map(|n| n + 1) | succeed(0)
/// }
///
/// let input = Value::map([("next", Value::map([("next", Value::map([("end", "")]))]))]);
/// assert_eq!(depth().run(&input), Ok(2));
/// ```
#[must_use]
pub fn lazy<I, O, F>(thunk: F) -> Decoder<I, O>
where
    I: 'static,
    O: 'static,
    F: Fn() -> Decoder<I, O> + Send + Sync + 'static,
{
    let cell: OnceLock<Decoder<I, O>> = OnceLock::new();
    Decoder::new(move |input: &I| cell.get_or_init(&thunk).run(input))
}
