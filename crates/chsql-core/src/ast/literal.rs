//! Literal values and conversions from Rust scalars.

use super::expression::Expr;

/// A literal value inlined into the rendered SQL.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal. With the `serde` feature, NaN and the infinities
    /// are encoded as the strings `"nan"`, `"inf"` and `"-inf"`.
    Float(#[cfg_attr(feature = "serde", serde(with = "float_repr"))] f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }

            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Literal(Literal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Goes through the f32's shortest decimal text so `0.1_f32` stays `0.1`
/// instead of picking up the widening error of `f64::from`.
impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Self::Float(widened)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<f32> for Expr {
    fn from(value: f32) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Literal(Literal::from(value))
    }
}

/// Plain strings become string literals, never column references.
/// Use [`Expr::field`] or [`crate::builder::col`] for identifiers.
impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Literal(Literal::Null), Into::into)
    }
}

#[cfg(feature = "serde")]
mod float_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_infinite() {
            serializer.serialize_str(if value.is_sign_positive() { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(text) => match text.as_str() {
                "nan" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"nan\", \"inf\" or \"-inf\", got {other:?}"
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Expr::from(7_u8), Expr::Literal(Literal::Integer(7)));
        assert_eq!(Expr::from(-3_i32), Expr::Literal(Literal::Integer(-3)));
        assert_eq!(
            Expr::from(u32::MAX),
            Expr::Literal(Literal::Integer(4_294_967_295))
        );
    }

    #[test]
    fn test_str_becomes_string_literal() {
        assert_eq!(
            Expr::from("admin"),
            Expr::Literal(Literal::String(String::from("admin")))
        );
    }

    #[test]
    fn test_f32_keeps_shortest_form() {
        assert_eq!(Literal::from(0.1_f32), Literal::Float(0.1));
        assert_eq!(Literal::from(-3.75_f32), Literal::Float(-3.75));
        assert_eq!(Literal::from(f32::INFINITY), Literal::Float(f64::INFINITY));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Expr::from(None::<i64>), Expr::Literal(Literal::Null));
        assert_eq!(Expr::from(Some(true)), Expr::Literal(Literal::Boolean(true)));
    }
}
