//! Helper macro for collaborator port error enums.
//!
//! Each collaborator reports failures through its own enum, tagged with the
//! pipeline stage it belongs to so handlers can log where a request broke
//! without matching on every variant. The macro derives `thiserror::Error`,
//! emits a `stage()` accessor and one snake-case constructor per variant
//! whose parameters accept anything convertible into the field types.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident in stage $stage:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            /// Pipeline stage reported when this collaborator fails.
            pub const STAGE: &'static str = $stage;

            pub fn stage(&self) -> &'static str {
                Self::STAGE
            }

            ::paste::paste! {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SessionStoreError in stage "session_store" {
            Query { message: String } => "session query failed: {message}",
            Retry { message: String, attempt: u32 } => "retry {attempt}: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SessionStoreError::query("timeout");
        assert_eq!(err.to_string(), "session query failed: timeout");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SessionStoreError::retry("socket closed", 3_u32);
        assert_eq!(err.to_string(), "retry 3: socket closed");
    }

    #[test]
    fn every_variant_reports_the_declared_stage() {
        assert_eq!(SessionStoreError::STAGE, "session_store");
        assert_eq!(SessionStoreError::query("x").stage(), "session_store");
        assert_eq!(SessionStoreError::retry("x", 1_u32).stage(), "session_store");
    }
}
