/// Declares a closed set of values that are shown to users by label.
///
/// Generates `ALL`, `label()`, `Display`, case-insensitive `FromStr`
/// (spaces, hyphens and underscores are interchangeable) and serde impls
/// that use the label as the wire value.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown to users
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = $crate::catalog::domain::label::normalize_label(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| $crate::catalog::domain::label::normalize_label(value.label()) == wanted)
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.label()).collect();
                        format!(
                            "Invalid {}: '{}'. Expected one of: {}",
                            $what,
                            s,
                            expected.join(", ")
                        )
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use labelled_enum;

/// Lower-cases and folds `-`/`_` into spaces so "project-management"
/// matches "Project Management".
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
