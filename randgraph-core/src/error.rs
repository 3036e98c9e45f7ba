//! Error types for the randgraph core library.
//!
//! Generator construction is the only fallible operation in the crate, so the
//! public surface is a single parameter-validation enum plus stable codes.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A generator parameter was rejected while constructing a
/// [`crate::Binomial`].
///
/// Construction either returns a ready generator or one of these errors;
/// no partially configured generator is ever handed out.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidParameter {
    /// The vertex count was negative.
    #[error("invalid number of vertices: {got}")]
    VertexCount {
        /// The rejected vertex count.
        got: i64,
    },
    /// The number of trials per tail vertex was negative.
    #[error("invalid number of trials: {got}")]
    TrialCount {
        /// The rejected trial count.
        got: i64,
    },
    /// The success probability was outside `[0, 1]` or not a number.
    #[error("invalid success probability: {got}")]
    Probability {
        /// The rejected probability.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`InvalidParameter`] variants.
    enum InvalidParameterCode for InvalidParameter {
        /// The vertex count was negative.
        VertexCount => VertexCount { .. } => "RANDGRAPH_INVALID_VERTEX_COUNT",
        /// The number of trials was negative.
        TrialCount => TrialCount { .. } => "RANDGRAPH_INVALID_TRIAL_COUNT",
        /// The success probability was outside `[0, 1]`.
        Probability => Probability { .. } => "RANDGRAPH_INVALID_PROBABILITY",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, InvalidParameter>;
