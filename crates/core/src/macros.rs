//! Helper macros shared by the record and navigation enums.

/// Implements `as_str`, `all`, `Display` and `FromStr` for a fieldless enum
/// whose names are listed next to each variant.
///
/// `FromStr` trims and lowercases its input, and also accepts any extra
/// lowercase aliases given after `|`.
macro_rules! string_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            /// Name used on the command line and in text output
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Every variant, in declaration order
            pub fn all() -> Vec<$ty> {
                vec![$(Self::$variant),+]
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CatalogError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err($crate::error::CatalogError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}
