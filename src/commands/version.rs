//! Version command handler

/// Version line shown by `loggar version` and the report footer.
pub fn version_line() -> String {
    format!("loggar v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(not(tarpaulin_include))]
pub fn handle() {
    println!("{}", version_line());
}
