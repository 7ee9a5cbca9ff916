//! Macros for reducing boilerplate when defining records

/// Implement [`Record`](crate::core::Record) for a struct with an `id: String` field
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Amenity {
///     pub id: String,
///     pub name: String,
/// }
///
/// impl_record!(Amenity, "amenity", "amenities");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

/// Implement `as_str`, `Display` and `From<Enum> for FieldValue` for a
/// fieldless status enum, mapping each variant to its wire name
#[macro_export]
macro_rules! impl_wire_enum {
    ($type:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $type {
            /// Name used by the backend API
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($type::$variant => $wire),+
                }
            }

            /// All variants in declaration order
            pub fn all() -> &'static [$type] {
                &[$($type::$variant),+]
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$type> for $crate::core::FieldValue {
            fn from(value: $type) -> Self {
                $crate::core::FieldValue::String(value.as_str().to_string())
            }
        }
    };
}
