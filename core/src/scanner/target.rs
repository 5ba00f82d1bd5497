use std::fmt;

/// A host address built from a subnet prefix and a host suffix.
///
/// The prefix is taken verbatim (`"192.168.1"`, no trailing dot); a
/// malformed prefix simply yields a host that fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTarget<'a> {
    pub prefix: &'a str,
    pub suffix: u16,
}

impl<'a> ScanTarget<'a> {
    pub fn new(prefix: &'a str, suffix: u16) -> Self {
        Self { prefix, suffix }
    }

    pub fn host(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScanTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.suffix)
    }
}
