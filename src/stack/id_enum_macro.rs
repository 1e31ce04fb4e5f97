/// Defines a closed identifier enum with a `Custom(String)` escape arm.
///
/// Each variant maps to a canonical lowercase identifier (used for serde and
/// `Display`) plus any number of aliases accepted by `from_name`. Lookup is
/// case-insensitive; unknown names are left to the caller, which usually
/// wraps them in `Custom`.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $id:literal $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_name(&s).unwrap_or(Self::Custom(s)))
            }
        }

        impl $enum_name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $id,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name.trim().to_lowercase().as_str() {
                    $(
                        $id $(| $alias)* => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            /// Like `from_name`, but unknown names become a lowercased `Custom`.
            pub fn from_name_or_custom(name: &str) -> Self {
                Self::from_name(name).unwrap_or_else(|| Self::Custom(name.trim().to_lowercase()))
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
