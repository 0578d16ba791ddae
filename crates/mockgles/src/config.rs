/// Extension reported when no list is configured.
pub const DEFAULT_EXTENSION: &str = "GL_KHR_debug";

/// Configuration of a [`MockGles`](crate::MockGles) instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    /// Extension names reported by `glGetStringi(GL_EXTENSIONS, i)`, in order.
    pub extensions: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        MockConfig {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl MockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reported extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Append one extension to the reported list.
    pub fn add_extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions.push(extension.into());
        self
    }
}
