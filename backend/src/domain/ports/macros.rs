//! `define_port_error!`: declares a port error enum together with snake_case
//! constructors and `is_*` predicates for each variant.
//!
//! Struct-variant fields become constructor parameters accepting anything
//! that converts into the field type.

macro_rules! define_port_error {
    (@build $variant:ident) => {
        Self::$variant
    };
    (@build $variant:ident { $($field:ident),+ }) => {
        Self::$variant { $($field: $field.into()),+ }
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({ $($field:ident : $ty:ty),+ $(,)? })? => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $({ $(
                    #[allow(missing_docs, reason = "fields are described by the variant message")]
                    $field: $ty
                ),+ })?,
            )+
        }

        ::paste::paste! {
            #[allow(missing_docs, reason = "helpers mirror the documented variants")]
            impl $name {
                $(
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),+)?) -> Self {
                        define_port_error!(@build $variant $({ $($field),+ })?)
                    }

                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant { .. })
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Expansion checks against a throwaway error enum.
    use rstest::rstest;

    define_port_error! {
        /// Errors for exercising the macro.
        pub enum LookupError {
            /// Nothing stored.
            Empty => "nothing stored",
            /// Key absent.
            Missing { key: String } => "no entry for {key}",
            /// Backend reported a failure.
            Backend { message: String, attempts: u32 } => "backend failed after {attempts}: {message}",
        }
    }

    #[rstest]
    #[case(LookupError::empty(), "nothing stored")]
    #[case(LookupError::missing("7"), "no entry for 7")]
    #[case(LookupError::backend("timeout", 3_u32), "backend failed after 3: timeout")]
    fn constructors_render_variant_messages(#[case] error: LookupError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn predicates_match_only_their_variant() {
        let error = LookupError::missing("7");
        assert!(error.is_missing());
        assert!(!error.is_empty());
        assert!(!error.is_backend());
    }
}
