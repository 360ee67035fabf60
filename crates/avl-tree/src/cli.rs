//! `avl-tree`: drive a tree from a line-oriented command script.
//!
//! One command per line; blank lines and `#` comments are ignored:
//!
//! | Command | Alias | Effect |
//! |---------|-------|--------|
//! | `insert <k>...` | `i` | insert each key |
//! | `delete <k>...` | `d` | delete each key |
//! | `find <k>` | `f` | `Key: <k>` or `No such element` |
//! | `print` | `p` | ascending keys |
//! | `preorder` | | keys in node, left, right order |
//! | `dump` | | tree shape |
//! | `check` | | invariant check, `ok` or the violation |
//! | `clear` | | release every node |

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::node::Link;
use crate::print::{describe_find, format_in_order, join_keys, print_tree};
use crate::tree::{delete_node, delete_tree, insert, len, pre_order};
use crate::validate::{assert_avl_tree, InvariantError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing key for `{0}`")]
    MissingKey(String),
    #[error("Invalid key `{input}`: {source}")]
    InvalidKey {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    #[error("Flag `{0}` expects a value")]
    MissingFlagValue(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Only `find`, `print`, `preorder`, `dump` and `check` write output.
    pub quiet: bool,
    /// Validate the tree after every mutating command.
    pub check: bool,
    /// Read commands from this file instead of stdin.
    pub script: Option<PathBuf>,
}

impl Options {
    /// Parses `--quiet`, `--check` and `--script <path>`. `args` excludes the
    /// program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--quiet" | "-q" => options.quiet = true,
                "--check" => options.check = true,
                "--script" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::MissingFlagValue("--script".into()))?;
                    options.script = Some(PathBuf::from(path.as_ref()));
                }
                other => return Err(CliError::UnknownFlag(other.to_string())),
            }
        }
        Ok(options)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(Vec<i32>),
    Delete(Vec<i32>),
    Find(i32),
    Print,
    PreOrder,
    Dump,
    Check,
    Clear,
}

impl Command {
    /// Parses one script line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let keys = words.map(parse_key).collect::<Result<Vec<_>, _>>()?;

        let command = match name {
            "insert" | "i" => Command::Insert(non_empty(name, keys)?),
            "delete" | "d" => Command::Delete(non_empty(name, keys)?),
            "find" | "f" => match keys.as_slice() {
                [key] => Command::Find(*key),
                _ => return Err(CliError::MissingKey(name.to_string())),
            },
            "print" | "p" => Command::Print,
            "preorder" => Command::PreOrder,
            "dump" => Command::Dump,
            "check" => Command::Check,
            "clear" => Command::Clear,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Insert(_) | Command::Delete(_) | Command::Clear
        )
    }
}

fn parse_key(word: &str) -> Result<i32, CliError> {
    word.parse().map_err(|source| CliError::InvalidKey {
        input: word.to_string(),
        source,
    })
}

fn non_empty(name: &str, keys: Vec<i32>) -> Result<Vec<i32>, CliError> {
    if keys.is_empty() {
        Err(CliError::MissingKey(name.to_string()))
    } else {
        Ok(keys)
    }
}

// ── Session ───────────────────────────────────────────────────────────────

/// A tree plus the options it is driven with.
#[derive(Debug, Default)]
pub struct Session {
    root: Link,
    options: Options,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Self { root: None, options }
    }

    pub fn root(&self) -> &Link {
        &self.root
    }

    /// Runs one command and returns the line it prints, if any.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, CliError> {
        let mutates = command.mutates();
        let output = match command {
            Command::Insert(keys) => {
                for key in keys {
                    self.root = insert(self.root.take(), key);
                }
                self.echo(format_in_order(&self.root))
            }
            Command::Delete(keys) => {
                for key in keys {
                    self.root = delete_node(self.root.take(), key);
                }
                self.echo(format_in_order(&self.root))
            }
            Command::Find(key) => Some(describe_find(&self.root, key)),
            Command::Print => Some(format_in_order(&self.root)),
            Command::PreOrder => Some(join_keys(&pre_order(&self.root))),
            Command::Dump => Some(print_tree(&self.root)),
            Command::Check => Some(match assert_avl_tree(&self.root) {
                Ok(()) => "ok".to_string(),
                Err(err) => err.to_string(),
            }),
            Command::Clear => {
                let released = delete_tree(self.root.take());
                self.echo(format!("released {released}"))
            }
        };

        if mutates && self.options.check {
            assert_avl_tree(&self.root)?;
        }
        Ok(output)
    }

    fn echo(&self, line: String) -> Option<String> {
        (!self.options.quiet).then_some(line)
    }
}

/// Reads commands from `input` until EOF, writing each command's output line
/// to `output`. Stops at the first error.
pub fn run_script<R, W>(session: &mut Session, input: R, mut output: W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        let Some(command) = Command::parse(&line)? else {
            continue;
        };
        debug!(line = n + 1, ?command, "executing");
        if let Some(out) = session.execute(command)? {
            writeln!(output, "{out}")?;
        }
    }
    info!(nodes = len(session.root()), "script finished");
    Ok(())
}
