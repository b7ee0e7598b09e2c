//! Version identity for the `-V` flag.
//!
//! The version string is stable and parseable: first token is the program
//! name, second the semver. Dev builds append the git SHA embedded by
//! build.rs; official builds (`--features release`) stay clean.

/// Base version from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name used in the version line and error prefixes.
pub const PROGRAM: &str = "tpt";

/// The line printed for `-V`, e.g. `tpt 1.0.0` or `tpt 1.0.0 (a1b2c3d)`.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() && sha != "unknown" => {
            format!("{} {} ({})", PROGRAM, VERSION, sha)
        }
        _ => format!("{} {}", PROGRAM, VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_is_parseable() {
        let line = version_string();
        let mut tokens = line.split_whitespace();
        assert_eq!(tokens.next(), Some(PROGRAM));
        let semver = tokens.next().unwrap();
        assert_eq!(semver, VERSION);
        assert_eq!(semver.split('.').count(), 3);
    }

    #[test]
    fn version_string_is_stable() {
        assert_eq!(version_string(), version_string());
    }
}
