pub trait BlankExt {
    /// True when the value is empty or contains only whitespace.
    fn is_blank(&self) -> bool;
}

impl BlankExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl BlankExt for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}
