//! Newtype IDs for type-safe entity references.
//!
//! The platform API identifies every entity with an opaque hex string
//! (`_id` in the wire payloads). Use the `define_id!` macro to create
//! type-safe wrappers so an `AdminId` can never be passed where a
//! `ThreadId` is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use gpdn_core::define_id;
/// define_id!(MemberId);
/// define_id!(ThreadId);
///
/// let member_id = MemberId::new("665f1c2ab1d2c3d4e5f60718");
///
/// // These are different types, so this won't compile:
/// // let _: ThreadId = member_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(AdminId);
define_id!(RoleId);
define_id!(MemberId);
define_id!(ThreadId);
define_id!(ResourceId);
define_id!(BlogId);
define_id!(CategoryId);
define_id!(ServiceId);
define_id!(UnitId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ThreadId::new("665f1c2ab1d2c3d4e5f60718");
        assert_eq!(id.as_str(), "665f1c2ab1d2c3d4e5f60718");
        assert_eq!(id.to_string(), "665f1c2ab1d2c3d4e5f60718");
        assert_eq!(id.clone().into_inner(), "665f1c2ab1d2c3d4e5f60718");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = AdminId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");

        let back: AdminId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_distinct_id_types_compare_by_value() {
        assert_eq!(MemberId::from("x"), MemberId::new("x"));
        assert_ne!(MemberId::from("x"), MemberId::from("y"));
    }
}
