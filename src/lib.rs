//! Composable decoders for loosely-typed data.
//!
//! A [`Decoder`] turns a [`Value`] (a string, or a mapping of string keys to
//! values) into a typed result, or reports the first thing that went wrong.
//! Decoders are built from the primitives in [`primitives`] and combined with
//! the methods on [`Decoder`] and the functions in [`combinators`].
//!
//! ```
//! use mon_decode::{from_key, integer, map2, Value};
//!
//! let point = map2(from_key("x", integer()), from_key("y", integer()), |x, y| (x, y));
//!
//! let input = Value::from_json_str(r#"{"x": "10", "y": "12"}"#).unwrap();
//! assert_eq!(point.run(&input), Ok((10, 12)));
//!
//! let input = Value::from_json_str(r#"{"x": "10"}"#).unwrap();
//! assert_eq!(
//!     point.run(&input).unwrap_err().to_string(),
//!     r#"{"x": "10"} doesn't contain key 'y'"#
//! );
//! ```
//!
//! ## Cargo Features
//!
//! - `yaml`: enable [`Value::from_yaml_str`] (default).

pub mod combinators;
pub mod decoder;
pub mod error;
pub mod primitives;
pub mod value;

pub use combinators::{map2, map_array, map_n, sequence, DecoderTuple};
pub use decoder::Decoder;
pub use error::{DecodeError, DecodeResult, ErrorKind};
pub use primitives::{fail, from_key, identity, integer, lazy, literal, string, succeed};
pub use value::Value;
