//! Four-sided box values (margin, padding, border width) and their shorthand.
use crate::parsers::sides_from_str;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::sync::Arc;

/// Expanded per-side values in top, right, bottom, left order.
///
/// The values sit behind an `Arc` so a node can hand out the same allocation
/// until the value actually changes; consumers that diff by identity can rely
/// on [`BoxSides::ptr_eq`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSides(Arc<[f32; 4]>);

impl BoxSides {
    pub fn zero() -> Self {
        Self::from_array([0.0; 4])
    }

    pub fn uniform(value: f32) -> Self {
        Self::from_array([value; 4])
    }

    pub fn from_array(values: [f32; 4]) -> Self {
        Self(Arc::new(values))
    }

    pub fn top(&self) -> f32 {
        self.0[0]
    }

    pub fn right(&self) -> f32 {
        self.0[1]
    }

    pub fn bottom(&self) -> f32 {
        self.0[2]
    }

    pub fn left(&self) -> f32 {
        self.0[3]
    }

    pub fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    /// Sum of the left and right sides.
    pub fn horizontal(&self) -> f32 {
        self.left() + self.right()
    }

    /// Sum of the top and bottom sides.
    pub fn vertical(&self) -> f32 {
        self.top() + self.bottom()
    }

    /// True if both handles share one allocation.
    pub fn ptr_eq(a: &BoxSides, b: &BoxSides) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Default for BoxSides {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for BoxSides {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_array().serialize(serializer)
    }
}

/// A box shorthand as written by the user: one value or a list of up to four.
#[derive(Debug, Clone, PartialEq)]
pub enum SidesInput {
    Uniform(f32),
    List(Vec<f32>),
}

impl SidesInput {
    /// Expands the shorthand with CSS rules.
    ///
    /// One value applies to all sides, two give `[v0, v1, v0, v1]`, three give
    /// `[v0, v1, v2, v1]`, four are taken as-is. Missing values read as zero and
    /// anything past the fourth is ignored.
    pub fn expand(&self) -> [f32; 4] {
        match self {
            SidesInput::Uniform(v) => [*v; 4],
            SidesInput::List(values) => {
                let at = |i: usize| values.get(i).copied();
                let first = at(0).unwrap_or(0.0);
                let second = at(1).unwrap_or(first);
                let third = at(2).unwrap_or(first);
                let fourth = at(3).unwrap_or(second);
                [first, second, third, fourth]
            }
        }
    }
}

impl From<f32> for SidesInput {
    fn from(value: f32) -> Self {
        SidesInput::Uniform(value)
    }
}

impl From<Vec<f32>> for SidesInput {
    fn from(values: Vec<f32>) -> Self {
        SidesInput::List(values)
    }
}

impl From<&[f32]> for SidesInput {
    fn from(values: &[f32]) -> Self {
        SidesInput::List(values.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for SidesInput {
    fn from(values: [f32; N]) -> Self {
        SidesInput::List(values.to_vec())
    }
}

impl<'de> Deserialize<'de> for SidesInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidesVisitor;
        impl<'de> de::Visitor<'de> for SidesVisitor {
            type Value = SidesInput;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a list of up to four numbers, or a string like '4 8'")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<SidesInput, E> {
                Ok(SidesInput::Uniform(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<SidesInput, E> {
                Ok(SidesInput::Uniform(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<SidesInput, E> {
                Ok(SidesInput::Uniform(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<SidesInput, E> {
                sides_from_str(v).map(SidesInput::List).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<SidesInput, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = Vec::with_capacity(4);
                while let Some(v) = seq.next_element::<f32>()? {
                    values.push(v);
                }
                Ok(SidesInput::List(values))
            }
        }
        deserializer.deserialize_any(SidesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expansion() {
        assert_eq!(SidesInput::from(5.0f32).expand(), [5.0, 5.0, 5.0, 5.0]);
        assert_eq!(SidesInput::from([5.0f32]).expand(), [5.0, 5.0, 5.0, 5.0]);
        assert_eq!(SidesInput::from([5.0f32, 10.0]).expand(), [5.0, 10.0, 5.0, 10.0]);
        assert_eq!(SidesInput::from([5.0f32, 10.0, 15.0]).expand(), [5.0, 10.0, 15.0, 10.0]);
        assert_eq!(
            SidesInput::from([5.0f32, 10.0, 15.0, 20.0]).expand(),
            [5.0, 10.0, 15.0, 20.0]
        );
    }

    #[test]
    fn test_empty_and_oversized_lists() {
        assert_eq!(SidesInput::List(vec![]).expand(), [0.0; 4]);
        assert_eq!(
            SidesInput::from([1.0f32, 2.0, 3.0, 4.0, 5.0]).expand(),
            [1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn test_deserialize_all_forms() {
        let inputs: Vec<SidesInput> = serde_json::from_str(r#"[3, [1, 2], "4 8 12"]"#).unwrap();
        assert_eq!(inputs[0].expand(), [3.0; 4]);
        assert_eq!(inputs[1].expand(), [1.0, 2.0, 1.0, 2.0]);
        assert_eq!(inputs[2].expand(), [4.0, 8.0, 12.0, 8.0]);
    }

    #[test]
    fn test_clone_shares_allocation() {
        let a = BoxSides::uniform(2.0);
        let b = a.clone();
        assert!(BoxSides::ptr_eq(&a, &b));
        assert!(!BoxSides::ptr_eq(&a, &BoxSides::uniform(2.0)));
        assert_eq!(a.horizontal(), 4.0);
    }
}
