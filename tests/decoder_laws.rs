// Algebraic properties every decoder composition must satisfy.

use mon_decode::{
    fail, from_key, identity, integer, literal, map_array, map_n, string, succeed, DecodeError,
    Decoder, Value,
};

fn inputs() -> Vec<Value> {
    vec![
        Value::from(""),
        Value::from("42"),
        Value::from("hello"),
        Value::map([("x", "1")]),
        Value::map([("nested", Value::map([("y", "2")]))]),
    ]
}

#[test]
fn test_identity_returns_input_unchanged() {
    for input in inputs() {
        assert_eq!(identity().run(&input), Ok(input.clone()));
    }
}

#[test]
fn test_map_composition() {
    let f = |s: String| s.len();
    let g = |n: usize| n * 3 + 1;

    let chained = string().map(f).map(g);
    let fused = string().map(move |s| g(f(s)));

    for input in inputs() {
        assert_eq!(chained.run(&input), fused.run(&input));
    }
}

#[test]
fn test_map_propagates_failure_untouched() {
    let decoders: Vec<Decoder<Value, i64>> = vec![
        integer(),
        from_key("missing", integer()),
        fail("explicit failure"),
    ];

    for decoder in decoders {
        for input in inputs() {
            if let Err(original) = decoder.run(&input) {
                let mapped = decoder.clone().map(|n| n + 1).run(&input);
                assert_eq!(mapped, Err(original));
            }
        }
    }
}

#[test]
fn test_or_else_left_bias() {
    for input in inputs() {
        assert_eq!((succeed(1) | fail("never")).run(&input), Ok(1));
        assert_eq!(fail("a").or_else(succeed(2)).run(&input), Ok(2));
    }
}

#[test]
fn test_or_else_returns_right_failure_when_both_fail() {
    let decoder = fail::<Value, i64>("a") | fail("b");
    assert_eq!(decoder.run(&Value::from("")), Err(DecodeError::custom("b")));
}

#[test]
fn test_replace_with_keeps_failures() {
    let decoder = literal::<Value>("yes").replace_with(true);
    assert_eq!(decoder.run(&Value::from("yes")), Ok(true));
    assert_eq!(
        decoder.run(&Value::from("no")).unwrap_err().to_string(),
        "'no' doesn't match 'yes'"
    );
}

#[test]
fn test_and_then_is_not_called_on_failure() {
    let decoder = integer().and_then(|_| -> Decoder<Value, i64> {
        panic!("continuation must not run after a failure")
    });
    assert!(decoder.run(&Value::from("nope")).is_err());
}

#[test]
fn test_first_failure_is_deterministic() {
    let decoder = map_n(
        (
            fail::<Value, i64>("first"),
            fail::<Value, i64>("second"),
            succeed::<Value, i64>(3),
        ),
        |(a, b, c)| a + b + c,
    );
    for input in inputs() {
        assert_eq!(decoder.run(&input), Err(DecodeError::custom("first")));
    }

    let decoder = map_array(
        vec![succeed(1), fail("second"), fail("third")],
        |[a, b, c]: [i64; 3]| a + b + c,
    );
    for input in inputs() {
        assert_eq!(decoder.run(&input), Err(DecodeError::custom("second")));
    }
}

#[test]
#[should_panic(expected = "2 decoders given to a function of 4 values")]
fn test_map_array_arity_is_checked_before_running() {
    let _decoder: Decoder<Value, i64> = map_array(
        vec![integer(), integer()],
        |[a, b, c, d]: [i64; 4]| a + b + c + d,
    );
}

#[test]
#[should_panic]
fn test_unwrap_on_failure_panics() {
    let _ = integer().run(&Value::from("x")).unwrap();
}

#[test]
#[should_panic(expected = "must not be empty")]
fn test_fail_requires_message() {
    let _decoder: Decoder<Value, i64> = fail("");
}
