use std::fmt;

use crate::errors::ServiceError;

const MAX_NAME_CHARS: usize = 128;
const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A record name that is safe to use as a single file name.
///
/// Names come straight from request paths, so anything that could escape the
/// collection directory or collide with the temp-file namespace is refused:
/// path separators, `.`/`..`, leading dots, control characters and the
/// characters Windows reserves in file names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        if raw.is_empty() {
            return Err(ServiceError::invalid_name("name must not be empty"));
        }
        if raw.chars().count() > MAX_NAME_CHARS {
            return Err(ServiceError::invalid_name(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        if raw.starts_with('.') {
            return Err(ServiceError::invalid_name("name must not start with '.'"));
        }
        if raw.ends_with('.') || raw.ends_with(' ') {
            return Err(ServiceError::invalid_name("name must not end with '.' or a space"));
        }
        if let Some(c) = raw
            .chars()
            .find(|c| c.is_control() || FORBIDDEN_CHARS.contains(c))
        {
            return Err(ServiceError::invalid_name(format!(
                "name contains forbidden character {c:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// File name of the record inside its collection directory.
    pub fn file_name(&self) -> String { format!("{}.json", self.0) }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str { &self.0 }
}
