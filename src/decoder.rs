use crate::error::DecodeResult;
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

type RunFn<I, O> = dyn Fn(&I) -> DecodeResult<O> + Send + Sync;

/// A reusable rule for turning an input of type `I` into an `O`, or a failure.
///
/// A decoder is a value: it holds no mutable state, so it can be stored,
/// cloned, passed around, and run from many threads at once. Clones share the
/// same underlying closure.
///
/// Every combinator returns a new decoder and leaves its operands untouched.
pub struct Decoder<I, O> {
    run: Arc<RunFn<I, O>>,
    name: Option<&'static str>,
}

impl<I, O> Clone for Decoder<I, O> {
    fn clone(&self) -> Self {
        Decoder {
            run: Arc::clone(&self.run),
            name: self.name,
        }
    }
}

impl<I, O> fmt::Debug for Decoder<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").field("name", &self.name).finish()
    }
}

impl<I: 'static, O: 'static> Decoder<I, O> {
    /// Wraps a function as a decoder. This is the extension point for new
    /// primitives; the function must report bad input as an `Err`, not panic.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&I) -> DecodeResult<O> + Send + Sync + 'static,
    {
        Decoder {
            run: Arc::new(f),
            name: None,
        }
    }

    /// Runs the decoder against `input`.
    ///
    /// # Errors
    /// Returns the first failure encountered while decoding.
    pub fn run(&self, input: &I) -> DecodeResult<O> {
        let result = (self.run)(input);
        if let (Some(name), Err(err)) = (self.name, &result) {
            log::trace!("decoder `{name}` failed: {err}");
        }
        result
    }

    /// Attaches a name, reported in trace logs when this decoder fails.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Transforms a successful value with `f`. Failures pass through and `f`
    /// is not called. Use [`Decoder::and_then`] if the transformation can fail.
    #[must_use]
    pub fn map<P, F>(self, f: F) -> Decoder<I, P>
    where
        P: 'static,
        F: Fn(O) -> P + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.run(input).map(&f))
    }

    /// Chooses the next decoder from the decoded value, and runs it against
    /// the same input this decoder saw.
    ///
    /// This is how a decoder can dispatch on a tag field:
    ///
    /// ```
    /// use mon_decode::{fail, from_key, integer, string, succeed, Decoder, Value};
    ///
    /// let amount: Decoder<Value, i64> = from_key("kind", string()).and_then(|kind| {
    ///     match kind.as_str() {
    ///         "fixed" => from_key("amount", integer()),
    ///         "none" => succeed(0),
    ///         _ => fail("unknown kind"),
    ///     }
    /// });
    ///
    /// let input = Value::map([("kind", "fixed"), ("amount", "7")]);
    /// assert_eq!(amount.run(&input), Ok(7));
    /// ```
    #[must_use]
    pub fn and_then<P, F>(self, f: F) -> Decoder<I, P>
    where
        P: 'static,
        F: Fn(O) -> Decoder<I, P> + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.run(input).and_then(|value| f(value).run(input)))
    }

    /// Runs `other` against the same input only if this decoder fails.
    /// The result of `other` is returned as is, success or failure.
    ///
    /// Also available as the `|` operator.
    #[must_use]
    pub fn or_else(self, other: Decoder<I, O>) -> Decoder<I, O> {
        Decoder::new(move |input| self.run(input).or_else(|_| other.run(input)))
    }

    /// Discards a successful value and yields `constant` instead.
    #[must_use]
    pub fn replace_with<P>(self, constant: P) -> Decoder<I, P>
    where
        P: Clone + Send + Sync + 'static,
    {
        self.map(move |_| constant.clone())
    }
}

impl<I: 'static, O: 'static> BitOr for Decoder<I, O> {
    type Output = Decoder<I, O>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or_else(rhs)
    }
}
