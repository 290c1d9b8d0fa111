//! Placeholder substitution for template names and file contents.
//!
//! A template marks the spots that depend on the module being generated with
//! a literal token (by default `{module-name}`). Scaffolding replaces every
//! occurrence of that token, in path segments and in file bodies, with one
//! caller-supplied value. Matching is a plain substring search: there is no
//! escaping, no conditionals and no nesting.

use std::borrow::Cow;

use crate::domain::DomainError;

/// A token/value pair applied to every name and file of one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    token: String,
    value: String,
}

impl Substitution {
    /// Placeholder used by the stock module template.
    pub const DEFAULT_TOKEN: &'static str = "{module-name}";

    /// Build a substitution.
    ///
    /// The value is used verbatim; it is not checked for path separators or
    /// characters the filesystem rejects.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyPlaceholder`] if `token` is empty, since an empty
    /// needle would match between every character.
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::EmptyPlaceholder);
        }
        Ok(Self {
            token,
            value: value.into(),
        })
    }

    /// Substitution of the default token.
    pub fn module_name(value: impl Into<String>) -> Self {
        Self {
            token: Self::DEFAULT_TOKEN.to_string(),
            value: value.into(),
        }
    }

    /// Replace every non-overlapping occurrence of the token in `text`.
    ///
    /// Borrows `text` unchanged when the token does not occur.
    pub fn render<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains(&self.token) {
            Cow::Owned(text.replace(&self.token, &self.value))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Destination name for a template file or directory name.
    pub fn render_name(&self, name: &str) -> String {
        self.render(name).into_owned()
    }

    /// `true` if `text` still contains the token.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(&self.token)
    }
}
