//! Cross-crate tests: the scanner driving a real log file.

#[cfg(test)]
mod support;
#[cfg(test)]
mod sweep;
