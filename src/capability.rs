//! The built-in capability table.
//!
//! A fixed, hand-curated mapping from tput capability names to raw
//! ANSI/VT100 escape sequences. No terminfo database is consulted - the
//! sequences here work on every terminal this tool cares about, which is
//! what lets the common cases skip the subprocess entirely. Anything not in
//! this table is delegated to the real tput.

/// How a capability turns into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Fixed byte sequence; arguments are ignored.
    Bytes(&'static [u8]),
    /// One argument spliced verbatim between prefix and suffix.
    Param1 {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `cup`: two 0-based coordinates, each shifted +1 to the 1-based
    /// system terminals expect.
    CursorPos,
}

/// Look up a capability name (exact match; aliases are separate keys).
pub fn lookup(name: &str) -> Option<Rule> {
    use Rule::*;

    let rule = match name {
        "bel" => Bytes(b"\x07"),
        "sgr0" | "me" => Bytes(b"\x1b[0m"),
        "bold" => Bytes(b"\x1b[1m"),
        "dim" => Bytes(b"\x1b[2m"),
        "rev" => Bytes(b"\x1b[7m"),
        "blink" => Bytes(b"\x1b[5m"),
        "setaf" | "AF" => Param1 {
            prefix: "\x1b[38;5;",
            suffix: "m",
        },
        "setab" | "AB" => Param1 {
            prefix: "\x1b[48;5;",
            suffix: "m",
        },
        "sc" => Bytes(b"\x1b[7"),
        "rc" => Bytes(b"\x1b[8"),
        "cnorm" => Bytes(b"\x1b[?25h"),
        "civis" => Bytes(b"\x1b[?25l"),
        "smcup" => Bytes(b"\x1b[?1049h"),
        "rmcup" => Bytes(b"\x1b[?1049l"),
        "clear" => Bytes(b"\x1b[H\x1b[2J"),
        "home" => Bytes(b"\x1b[H"),
        "cuu" => Param1 {
            prefix: "\x1b[",
            suffix: "A",
        },
        "cud" => Param1 {
            prefix: "\x1b[",
            suffix: "B",
        },
        "cuf" => Param1 {
            prefix: "\x1b[",
            suffix: "C",
        },
        "cub" => Param1 {
            prefix: "\x1b[",
            suffix: "D",
        },
        "cup" => CursorPos,
        _ => return None,
    };
    Some(rule)
}

/// Render a rule with the capability's arguments (everything after the
/// capability name) into the exact bytes to write.
///
/// Arguments are not validated: one-arg templates splice the text as-is
/// (missing argument splices nothing), and `cup` coordinates that fail to
/// parse count as 0, matching the shell-arithmetic leniency of the
/// reference tool.
pub fn render(rule: Rule, args: &[String]) -> Vec<u8> {
    match rule {
        Rule::Bytes(bytes) => bytes.to_vec(),
        Rule::Param1 { prefix, suffix } => {
            let arg = args.first().map(String::as_str).unwrap_or("");
            format!("{}{}{}", prefix, arg, suffix).into_bytes()
        }
        Rule::CursorPos => {
            let row = coord(args, 0);
            let col = coord(args, 1);
            format!("\x1b[{};{}H", row + 1, col + 1).into_bytes()
        }
    }
}

fn coord(args: &[String], index: usize) -> i64 {
    args.get(index).and_then(|s| s.parse().ok()).unwrap_or(0)
}
