/// Declares a string-backed categorical enum with an `Other(String)` catch-all.
///
/// Known labels are matched case-insensitively after trimming; anything else
/// is kept verbatim in `Other` so deserialisation never fails on an
/// unrecognised bucket.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the known set, kept as supplied.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_recognised(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        // `Other` labels compare trimmed and case-insensitively, like known labels.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    (Self::Other(a), Self::Other(b)) => {
                        a.trim().to_lowercase() == b.trim().to_lowercase()
                    }
                    _ => std::mem::discriminant(self) == std::mem::discriminant(other),
                }
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&std::mem::discriminant(self), state);
                if let Self::Other(raw) = self {
                    std::hash::Hash::hash(&raw.trim().to_lowercase(), state);
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.trim().to_lowercase().as_str() {
                    $( $label => Self::$variant, )+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}
