//! Typed UUID wrappers for domain entities.
//!
//! Prevents accidentally mixing up ID types (e.g., passing a `UserId` where
//! a `ListingId` was expected). Each wrapper is transparent to sqlx and
//! serde, so it binds and decodes exactly like a bare `uuid::Uuid`.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{ListingId, UserId};
//!
//! let listing_id = ListingId::new();
//! let user_id = UserId::new();
//!
//! // This would be a compile error:
//! // let wrong: ListingId = user_id;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, sqlx::Type,
        )]
        #[sqlx(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random (v4) ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Unwrap to the underlying UUID.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::from_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier for a car listing.
    ListingId
);

entity_id!(
    /// Identifier for a user (issued by the external auth provider).
    UserId
);

entity_id!(
    /// Identifier for a saved-listing (favorite) row.
    FavoriteId
);
