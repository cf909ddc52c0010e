use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::repl::commands::{AUTH_COMMAND_NAMES, INVENTORY_COMMAND_NAMES};

/// Completion and hints for the active screen. Rebuilt on every screen
/// transition so the login screen never offers inventory commands.
pub struct ReplHelper {
    commands: &'static [&'static str],
}

impl ReplHelper {
    pub fn for_auth() -> Self {
        Self {
            commands: AUTH_COMMAND_NAMES,
        }
    }

    pub fn for_inventory() -> Self {
        Self {
            commands: INVENTORY_COMMAND_NAMES,
        }
    }
}

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') || trimmed.contains(' ') {
            return None;
        }
        for name in self.commands {
            if name.starts_with(trimmed) && *name != trimmed {
                return Some(name[trimmed.len()..].to_string());
            }
        }
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let trimmed = prefix.trim_start();

        if !trimmed.starts_with('/') {
            return Ok((0, vec![]));
        }

        // Past the command name -- complete flags
        if let Some(space_idx) = trimmed.find(' ') {
            let cmd = &trimmed[..space_idx];
            let flag_prefix = trimmed[space_idx..].trim_start();
            let flag_start = pos - flag_prefix.len();

            let flags: &[&str] = match cmd {
                "/add" => &["--name", "--quantity", "--price"],
                "/login" | "/register" => &["--user"],
                _ => &[],
            };

            let matches: Vec<Pair> = flags
                .iter()
                .filter(|f| f.starts_with(flag_prefix))
                .map(|f| Pair {
                    display: f.to_string(),
                    replacement: f.to_string(),
                })
                .collect();

            return Ok((flag_start, matches));
        }

        // Complete command names
        let start = pos - trimmed.len();
        let matches: Vec<Pair> = self
            .commands
            .iter()
            .filter(|name| name.starts_with(trimmed))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();

        Ok((start, matches))
    }
}
