/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawscal-lang.com
 * Website:  https://www.pawscal-lang.com
 * Github:   https://github.com/samwilcox/pawscal
 *
 * License:
 * This file is part of the PAWSCAL programming language project.
 *
 * PAWSCAL is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawscal-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Serialize, Serializer};

/// PAWSCAL runtime value representation.
///
/// This is the type that flows through the interpreter. Every expression
/// ultimately evaluates to one of these. The language is numeric-only:
/// a value is either an integer or a real, and the tag is part of the
/// observable semantics (`+ - *` preserve the integer kind, `/` always
/// produces a real).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    /// Returns a stable type name string (useful for errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
        }
    }

    /// Human-readable string form, used for the `name = value` report lines.
    ///
    /// Integers render as their digit sequence; reals use standard decimal
    /// conversion with no further formatting guarantees.
    pub fn stringify(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Real(x) => x.to_string(),
        }
    }

    /// Numeric promotion: the value as a real.
    pub fn as_real(&self) -> f64 {
        match self {
            Value::Integer(n) => *n as f64,
            Value::Real(x) => *x,
        }
    }

    /// Extracts the integer payload, if this value is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Real(_) => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Real(x) => serializer.serialize_f64(*x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_keeps_integer_digits() {
        assert_eq!(Value::Integer(42).stringify(), "42");
        assert_eq!(Value::Integer(-7).stringify(), "-7");
    }

    #[test]
    fn promotion_widens_integers() {
        assert_eq!(Value::Integer(3).as_real(), 3.0);
        assert_eq!(Value::Real(2.5).as_real(), 2.5);
        assert_eq!(Value::Real(2.5).as_integer(), None);
    }
}
