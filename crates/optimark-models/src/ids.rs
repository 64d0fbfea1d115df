//! Strongly-typed identifier newtypes.
//!
//! Every identifier in the records database is a short string, but they are
//! not interchangeable: a [`SemesterId`] is never a valid [`UserId`]. These
//! wrappers keep them apart at compile time while encoding as plain text.
//!
//! # Example
//!
//! ```ignore
//! use optimark_models::ids::{SemesterId, UserId};
//!
//! fn get_student(id: &UserId) { /* ... */ }
//!
//! let id = UserId::from("B970736R");
//! get_student(&id);                        // OK
//! // get_student(&SemesterId::from("2425S1")); // Compile error!
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgTypeInfo, Postgres},
};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed string ID newtype.
///
/// Generates conversions, formatting, and the SQLx traits needed to bind the
/// ID as a query parameter and decode it from a text column.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Get the identifier as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the inner string value.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <String as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <String as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <String as Encode<'q, Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(
                value: <Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <String as Decode<'r, Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// 8-character identifier of a staff member, student, or user.
    UserId
);

define_id!(
    /// 6-character semester code such as `2425S1`.
    SemesterId
);

define_id!(
    /// 8-hex-character task identifier.
    TaskId
);

impl TaskId {
    /// Length of a task identifier.
    pub const LEN: usize = 8;

    /// Create a new random task ID from the first hex digits of a v4 UUID.
    pub fn new() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple[..Self::LEN].to_owned())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}
