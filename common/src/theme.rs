use std::fmt;

// persisted light/dark choice
//
// the stored representation is the bare lowercase name from as_str(), not json, so that
// it stays readable (and writable) from the browser devtools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    // anything other than the literal "dark" is light, including absence
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value store scoped to the client.
///
/// Implementations swallow (and log) their own failures: a store that cannot be read
/// behaves like an empty one.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;

    fn store(&self, key: &str, value: &str);
}

/// Global indicator that downstream styling reads to pick light or dark treatment.
pub trait StyleMarker {
    fn apply(&self, dark: bool);
}
