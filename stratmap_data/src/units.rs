// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar values as they appear in the documents.
//!
//! Positions are written as CSS percentages (`"45.5%"`), but hand-edited
//! documents also contain bare numbers or numeric strings. Sizes are CSS
//! lengths passed through to the renderer untouched.

use core::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A percentage of the unscaled map size.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f64);

impl Percent {
    /// The numeric value in percent.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses `"12.5%"`, `"12.5"`, or `" 12.5 % "`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        number
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PercentVisitor;

        impl Visitor<'_> for PercentVisitor {
            type Value = Percent;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a percentage such as \"12.5%\" or a number")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Percent, E> {
                Ok(Percent(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Percent, E> {
                Ok(Percent(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Percent, E> {
                Ok(Percent(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Percent, E> {
                Percent::parse(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(PercentVisitor)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A CSS length such as `"40px"` or `"3rem"`, kept verbatim.
///
/// Bare numbers are read as pixel lengths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CssLength(String);

impl CssLength {
    /// Wraps a CSS length.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The CSS text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for an empty value, which renderers treat as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CssLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LengthVisitor;

        impl Visitor<'_> for LengthVisitor {
            type Value = CssLength;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS length string or a pixel count")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CssLength, E> {
                Ok(CssLength(format!("{v}px")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CssLength, E> {
                Ok(CssLength(format!("{v}px")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CssLength, E> {
                Ok(CssLength(format!("{v}px")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CssLength, E> {
                Ok(CssLength(v.to_owned()))
            }
        }

        deserializer.deserialize_any(LengthVisitor)
    }
}
