use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the crate can report. Scheduling itself never fails;
/// these all come from building inputs or from the binary's plumbing.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Domain construction -----------------------------------------------
    /// A field-level or cross-field invariant was violated while building a
    /// window, task, pet or owner.
    #[error("Validation error: {0}")]
    Validation(String),

    // ---- Parsing ------------------------------------------------------------
    /// Malformed text input (window strings, booleans, CLI arguments).
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the config file (missing, unreadable, invalid JSON).
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (plan and config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (plan decode, result encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
