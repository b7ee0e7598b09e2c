//! Argument scanning for the tput-compatible invocation surface.
//!
//! `tpt [-S] [-T <term>] [-V] <capability> [<args>...]`
//!
//! The scan mirrors POSIX getopts with the option string `ST:V`: leading
//! flags may be clustered, `-T` takes its value attached or as the next
//! token, unknown option characters are silent no-ops, and scanning stops
//! at the first non-option token (or after `--`). The original argument
//! vector is never modified - delegation forwards it byte-for-byte,
//! flags included.

/// Result of scanning an argument vector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `-S`: delegate the entire original argv to the real tput.
    pub force_delegate: bool,
    /// `-T <term>`: accepted for compatibility, never consulted.
    pub term_override: Option<String>,
    /// `-V`: print the version string and exit 0.
    pub show_version: bool,
    /// Positional tokens after the flags: capability name, then its args.
    pub request: Vec<String>,
}

impl Invocation {
    /// The capability name, if any positional tokens remain.
    pub fn capability(&self) -> Option<&str> {
        self.request.first().map(String::as_str)
    }

    /// Arguments after the capability name.
    pub fn capability_args(&self) -> &[String] {
        if self.request.is_empty() {
            &[]
        } else {
            &self.request[1..]
        }
    }
}

/// Scan leading flags off an argument vector.
///
/// A capability name starting with `-` is eaten by the flag scan, exactly
/// as the reference tool's getopts loop does; scripts rely on that, so it
/// stays.
pub fn scan(args: &[String]) -> Invocation {
    let mut inv = Invocation::default();
    let mut i = 0;

    while i < args.len() {
        let token = &args[i];
        if token == "--" {
            i += 1;
            break;
        }
        if token == "-" || !token.starts_with('-') {
            break;
        }

        let mut chars = token[1..].chars();
        while let Some(opt) = chars.next() {
            match opt {
                'S' => inv.force_delegate = true,
                'V' => inv.show_version = true,
                'T' => {
                    // Value is the rest of this token, or the next one
                    let attached: String = chars.collect();
                    if attached.is_empty() {
                        i += 1;
                        inv.term_override = args.get(i).cloned();
                    } else {
                        inv.term_override = Some(attached);
                    }
                    break;
                }
                _ => {} // unknown option characters are no-ops
            }
        }
        i += 1;
    }

    inv.request = args[i.min(args.len())..].to_vec();
    inv
}
