//! Helper macro for port error enums.
//!
//! Every port error in this crate is a `thiserror` enum whose variants carry
//! named fields. The macro derives the enum and a snake-case constructor per
//! variant that accepts anything convertible into each field.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Rejected { message: String, attempts: u8 } => "rejected after {attempts}: {message}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::unreachable("connection refused");
        assert_eq!(err.to_string(), "unreachable: connection refused");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::rejected("duplicate key", 1_u8);
        assert_eq!(err.to_string(), "rejected after 1: duplicate key");
        assert_eq!(
            err,
            SamplePortError::Rejected {
                message: "duplicate key".to_owned(),
                attempts: 1,
            }
        );
    }
}
