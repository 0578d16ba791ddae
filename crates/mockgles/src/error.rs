/// Errors raised while setting up the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockGlesError {
    /// Another mock instance is still alive
    AlreadyInUse,
    /// Extension name cannot be represented as a C string
    InvalidExtensionName(String),
    /// Resolver returned null for a required entry point
    MissingEntryPoint(&'static str),
}

impl std::fmt::Display for MockGlesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInUse => write!(f, "MockGLES is already being used by another test."),
            Self::InvalidExtensionName(name) => {
                write!(f, "Extension name contains an interior NUL byte: {:?}", name)
            }
            Self::MissingEntryPoint(name) => write!(f, "Failed to resolve entry point: {}", name),
        }
    }
}

impl std::error::Error for MockGlesError {}
