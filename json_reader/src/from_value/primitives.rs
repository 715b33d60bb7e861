use super::mismatch;
use crate::{ConvertError, FromValue, Value};

fn number(value: Value) -> Result<f64, ConvertError> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(mismatch("number", &other)),
    }
}

// Integers accept whole numbers only, within the target's range
macro_rules! impl_from_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ConvertError> {
                    let n = number(value)?;
                    if n.fract() == 0.0 && n >= <$ty>::MIN as f64 && n < <$ty>::MAX as f64 + 1.0 {
                        Ok(n as $ty)
                    } else {
                        Err(ConvertError::NumberOutOfRange {
                            value: n,
                            target: stringify!($ty),
                        })
                    }
                }
            }
        )*
    };
}

impl_from_value_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        number(value)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        let n = number(value)?;
        let narrowed = n as f32;
        if narrowed.is_finite() {
            Ok(narrowed)
        } else {
            Err(ConvertError::NumberOutOfRange {
                value: n,
                target: "f32",
            })
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}
