//! Capability dispatch: builtin emission or delegation.
//!
//! The dispatcher is the whole control flow of the tool: scan the leading
//! flags, then either print the version, emit a built-in escape sequence,
//! or hand the untouched argument vector to the real tput. There are
//! exactly two resolution strategies - table hit or delegation - and table
//! membership alone picks between them.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::branding;
use crate::capability;
use crate::cli;
use crate::delegate::Delegate;

/// Dispatcher over a delegate (the real tput in production, a test double
/// in tests).
pub struct Dispatcher<D> {
    delegate: D,
}

impl<D: Delegate> Dispatcher<D> {
    pub fn new(delegate: D) -> Self {
        Self { delegate }
    }

    /// Dispatch a full argument vector, writing builtin output to `out`.
    ///
    /// Returns the exit status: 0 for builtins and `-V`, the delegate's
    /// status for everything forwarded. Builtin output carries no trailing
    /// newline - callers concatenate these sequences into larger drawing
    /// strings and depend on byte-exact output.
    pub fn dispatch<W: Write>(&self, args: &[String], out: &mut W) -> Result<i32> {
        let inv = cli::scan(args);

        if inv.show_version {
            writeln!(out, "{}", branding::version_string())?;
            return Ok(0);
        }

        if inv.force_delegate {
            debug!(argv = ?args, "forced delegation (-S)");
            return self.delegate.run(args);
        }

        let name = match inv.capability() {
            Some(name) => name,
            // No capability at all still goes to the real tput, which
            // produces its own usage error and status
            None => return self.delegate.run(args),
        };

        match capability::lookup(name) {
            Some(rule) => {
                debug!(capability = name, "builtin hit");
                out.write_all(&capability::render(rule, inv.capability_args()))?;
                out.flush()?;
                Ok(0)
            }
            None => {
                debug!(capability = name, "not built in, delegating");
                self.delegate.run(args)
            }
        }
    }
}
