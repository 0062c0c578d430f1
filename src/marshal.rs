//! Primitive type marshalling flags.
//!
//! One flag per C primitive the binding layer can marshal. Each flag is a
//! cargo feature resolved at compile time; an absent flag means the type is
//! unsupported for marshalling on this platform and consumers must not
//! generate a code path for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use std::os::raw::{c_char, c_double, c_float, c_long, c_short};

/// Primitive types the marshalling layer may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarshalType {
    Char,
    Short,
    Long,
    Double,
    Float,
}

impl MarshalType {
    /// Every flag the configuration knows about, in canonical order.
    pub const ALL: [MarshalType; 5] = [
        MarshalType::Char,
        MarshalType::Short,
        MarshalType::Long,
        MarshalType::Double,
        MarshalType::Float,
    ];

    /// Parse a C type name (case-insensitive).
    ///
    /// # Errors
    /// Returns [`MarshalTypeError::Empty`] when `spec` is blank, or
    /// [`MarshalTypeError::Unsupported`] when the name is unknown.
    pub fn parse(spec: &str) -> Result<Self, MarshalTypeError> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(MarshalTypeError::Empty);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "char" => Ok(MarshalType::Char),
            "short" => Ok(MarshalType::Short),
            "long" => Ok(MarshalType::Long),
            "double" => Ok(MarshalType::Double),
            "float" => Ok(MarshalType::Float),
            other => Err(MarshalTypeError::Unsupported(other.to_string())),
        }
    }

    /// The C type this flag corresponds to.
    #[must_use]
    pub const fn c_type(self) -> &'static str {
        match self {
            MarshalType::Char => "char",
            MarshalType::Short => "short",
            MarshalType::Long => "long",
            MarshalType::Double => "double",
            MarshalType::Float => "float",
        }
    }

    /// Host size of the corresponding C type in bytes.
    #[must_use]
    pub const fn c_size(self) -> usize {
        match self {
            MarshalType::Char => mem::size_of::<c_char>(),
            MarshalType::Short => mem::size_of::<c_short>(),
            MarshalType::Long => mem::size_of::<c_long>(),
            MarshalType::Double => mem::size_of::<c_double>(),
            MarshalType::Float => mem::size_of::<c_float>(),
        }
    }

    /// Preprocessor symbol emitted for this flag in the C header rendition.
    #[must_use]
    pub const fn define_symbol(self) -> &'static str {
        match self {
            MarshalType::Char => "WITH_TYPE_CHAR",
            MarshalType::Short => "WITH_TYPE_SHORT",
            MarshalType::Long => "WITH_TYPE_LONG",
            MarshalType::Double => "WITH_TYPE_DOUBLE",
            MarshalType::Float => "WITH_TYPE_FLOAT",
        }
    }

    /// Whether marshalling support for this type is compiled in.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        match self {
            MarshalType::Char => cfg!(feature = "type-char"),
            MarshalType::Short => cfg!(feature = "type-short"),
            MarshalType::Long => cfg!(feature = "type-long"),
            MarshalType::Double => cfg!(feature = "type-double"),
            MarshalType::Float => cfg!(feature = "type-float"),
        }
    }
}

impl fmt::Display for MarshalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// The marshalling types compiled into this build, in canonical order.
#[must_use]
pub fn enabled_types() -> Vec<MarshalType> {
    MarshalType::ALL
        .iter()
        .copied()
        .filter(|ty| ty.is_enabled())
        .collect()
}

/// Errors raised when parsing a marshalling type name.
#[derive(Debug, Clone)]
pub enum MarshalTypeError {
    Empty,
    Unsupported(String),
}

impl fmt::Display for MarshalTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarshalTypeError::Empty => write!(f, "type name must not be empty"),
            MarshalTypeError::Unsupported(name) => write!(
                f,
                "unsupported type '{name}'; expected one of char, short, long, double, float"
            ),
        }
    }
}

impl std::error::Error for MarshalTypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_name(name: &str) -> MarshalType {
        match MarshalType::parse(name) {
            Ok(ty) => ty,
            Err(err) => panic!("`{name}` should parse: {err}"),
        }
    }

    #[test]
    fn parses_canonical_names() {
        for ty in MarshalType::ALL {
            assert_eq!(parse_name(ty.c_type()), ty);
        }
        assert_eq!(parse_name("  DOUBLE "), MarshalType::Double);
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        match MarshalType::parse("int") {
            Ok(ty) => panic!("expected unsupported type, parsed {ty:?}"),
            Err(MarshalTypeError::Unsupported(_)) => {}
            Err(err) => panic!("unexpected parse error: {err}"),
        }
        assert!(matches!(
            MarshalType::parse("   "),
            Err(MarshalTypeError::Empty)
        ));
    }

    #[test]
    fn enabled_flags_map_to_real_c_types() {
        // An enabled flag must correspond to a type the marshalling code can
        // actually size on this host.
        for ty in enabled_types() {
            assert!(!ty.c_type().is_empty());
            assert!(ty.c_size() > 0, "{ty} must have a host size");
        }
    }

    #[test]
    fn enabled_types_preserve_canonical_order() {
        let enabled = enabled_types();
        let mut last_index = 0;
        for ty in &enabled {
            let index = MarshalType::ALL
                .iter()
                .position(|candidate| candidate == ty)
                .unwrap_or(usize::MAX);
            assert!(index >= last_index, "order must follow MarshalType::ALL");
            last_index = index;
        }
    }

    #[cfg(feature = "type-float")]
    #[test]
    fn float_flag_is_compiled_in() {
        assert!(MarshalType::Float.is_enabled());
        assert!(enabled_types().contains(&MarshalType::Float));
    }
}
