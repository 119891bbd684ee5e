//! Combinators that run several decoders against the same input and combine
//! their results. This is how a mapping with several keys becomes one struct.
//!
//! All of them evaluate left to right and stop at the first failure, so the
//! reported error is always the leftmost failing decoder.

use crate::decoder::Decoder;
use crate::error::DecodeResult;

/// Runs `a` then `b` against the same input, and combines both values.
#[must_use]
pub fn map2<I, A, B, R, F>(a: Decoder<I, A>, b: Decoder<I, B>, f: F) -> Decoder<I, R>
where
    I: 'static,
    A: 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    Decoder::new(move |input| {
        let a = a.run(input)?;
        let b = b.run(input)?;
        Ok(f(a, b))
    })
}

/// A tuple of decoders over the same input, run in order as a unit.
///
/// Implemented for tuples of one to eight decoders.
pub trait DecoderTuple<I>: Send + Sync + 'static {
    /// The tuple of decoded values, in the same order as the decoders.
    type Output;

    /// Runs every decoder in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the failure of the leftmost decoder that fails.
    fn run_all(&self, input: &I) -> DecodeResult<Self::Output>;
}

macro_rules! impl_decoder_tuple {
    ($($out:ident $dec:ident),+) => {
        impl<I: 'static, $($out: 'static),+> DecoderTuple<I> for ($(Decoder<I, $out>,)+) {
            type Output = ($($out,)+);

            fn run_all(&self, input: &I) -> DecodeResult<Self::Output> {
                let ($($dec,)+) = self;
                Ok(($($dec.run(input)?,)+))
            }
        }
    };
}

impl_decoder_tuple!(A a);
impl_decoder_tuple!(A a, B b);
impl_decoder_tuple!(A a, B b, C c);
impl_decoder_tuple!(A a, B b, C c, D d);
impl_decoder_tuple!(A a, B b, C c, D d, E e);
impl_decoder_tuple!(A a, B b, C c, D d, E e, G g);
impl_decoder_tuple!(A a, B b, C c, D d, E e, G g, H h);
impl_decoder_tuple!(A a, B b, C c, D d, E e, G g, H h, J j);

/// Runs a tuple of decoders against the same input and passes the tuple of
/// their values to `f`.
///
/// The number of decoders and the shape `f` destructures must agree, which
/// the compiler checks:
///
/// ```
/// use mon_decode::{from_key, integer, map_n, string, Value};
///
/// let person = map_n(
///     (from_key("name", string()), from_key("age", integer())),
///     |(name, age)| format!("{name} ({age})"),
/// );
/// let input = Value::map([("name", "Ada"), ("age", "36")]);
/// assert_eq!(person.run(&input), Ok("Ada (36)".to_string()));
/// ```
#[must_use]
pub fn map_n<I, T, R, F>(decoders: T, f: F) -> Decoder<I, R>
where
    I: 'static,
    T: DecoderTuple<I>,
    R: 'static,
    F: Fn(T::Output) -> R + Send + Sync + 'static,
{
    Decoder::new(move |input| decoders.run_all(input).map(&f))
}

/// Runs a list of same-typed decoders against the same input and passes
/// their values to `f` as an array.
///
/// # Panics
///
/// Panics when called if `decoders.len()` differs from the array length `f`
/// takes. That is a bug in the schema, so it is caught while the decoder is
/// built, before any input is seen.
#[must_use]
#[track_caller]
pub fn map_array<I, O, R, F, const N: usize>(decoders: Vec<Decoder<I, O>>, f: F) -> Decoder<I, R>
where
    I: 'static,
    O: 'static,
    R: 'static,
    F: Fn([O; N]) -> R + Send + Sync + 'static,
{
    assert_eq!(
        decoders.len(),
        N,
        "map_array: {} decoders given to a function of {} values",
        decoders.len(),
        N
    );
    Decoder::new(move |input| {
        let values = decoders
            .iter()
            .map(|decoder| decoder.run(input))
            .collect::<DecodeResult<Vec<O>>>()?;
        let Ok(values) = <[O; N]>::try_from(values) else {
            unreachable!("decoder count is fixed at construction");
        };
        Ok(f(values))
    })
}

/// Runs every decoder in order and collects their values.
#[must_use]
pub fn sequence<I, O>(decoders: Vec<Decoder<I, O>>) -> Decoder<I, Vec<O>>
where
    I: 'static,
    O: 'static,
{
    Decoder::new(move |input| decoders.iter().map(|decoder| decoder.run(input)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::primitives::{fail, identity, succeed};

    #[test]
    fn test_map2() {
        let sum = map2(succeed::<(), _>(2), succeed(3), |a, b| a + b);
        assert_eq!(sum.run(&()), Ok(5));
    }

    #[test]
    fn test_map2_reports_left_failure() {
        let both = map2(fail::<(), i32>("left"), fail::<(), i32>("right"), |a, b| a + b);
        assert_eq!(both.run(&()), Err(DecodeError::custom("left")));

        let right = map2(succeed::<(), i32>(1), fail::<(), i32>("right"), |a, b| a + b);
        assert_eq!(right.run(&()), Err(DecodeError::custom("right")));
    }

    #[test]
    fn test_map_n_single_and_wide() {
        let one = map_n((identity::<i32>(),), |(x,)| x * 10);
        assert_eq!(one.run(&4), Ok(40));

        let eight = map_n(
            (
                succeed::<(), _>(1),
                succeed(2),
                succeed(3),
                succeed(4),
                succeed(5),
                succeed(6),
                succeed(7),
                succeed(8),
            ),
            |(a, b, c, d, e, g, h, j)| a + b + c + d + e + g + h + j,
        );
        assert_eq!(eight.run(&()), Ok(36));
    }

    #[test]
    fn test_map_array() {
        let decoder = map_array(
            vec![succeed::<(), _>(1), succeed(2), succeed(3)],
            |[a, b, c]: [i32; 3]| a * 100 + b * 10 + c,
        );
        assert_eq!(decoder.run(&()), Ok(123));
    }

    #[test]
    #[should_panic(expected = "map_array")]
    fn test_map_array_arity_mismatch_panics_at_construction() {
        let _ = map_array(
            vec![succeed::<(), i32>(1), succeed(2)],
            |[a, b, c]: [i32; 3]| a + b + c,
        );
    }

    #[test]
    fn test_sequence() {
        let all = sequence(vec![succeed::<(), _>("a"), succeed("b")]);
        assert_eq!(all.run(&()), Ok(vec!["a", "b"]));

        let broken = sequence(vec![succeed::<(), &str>("a"), fail("b"), fail("c")]);
        assert_eq!(broken.run(&()), Err(DecodeError::custom("b")));

        assert_eq!(sequence::<(), i32>(Vec::new()).run(&()), Ok(Vec::new()));
    }
}
