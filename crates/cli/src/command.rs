//! Command objects parsed from user input.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use pantry_core::{DomainError, DomainResult, Money};
use pantry_inventory::Item;

/// Top-level program invocation (`pantry <subcommand>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Report the most frequent word in a file.
    Tally(PathBuf),
    /// Interactive inventory + cart session on stdin.
    Shop,
    Help,
}

impl Invocation {
    pub fn parse<I, S>(args: I) -> Result<Self, CommandParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["tally", path] => Ok(Self::Tally(PathBuf::from(path))),
            ["tally"] => Err(CommandParseError::MissingArgument("path")),
            ["tally", _, extra, ..] => Err(CommandParseError::UnexpectedArgument(extra.to_string())),
            ["shop"] | [] => Ok(Self::Shop),
            ["help"] | ["-h"] | ["--help"] => Ok(Self::Help),
            [other, ..] => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

/// One line of session input.
///
/// Multi-field arguments are separated by `|` so names may contain spaces:
/// `add Peanut Butter | Pantry | 25 | 3.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Find { name: String },
    Category { category: String },
    Add(Item),
    Update {
        name: String,
        quantity: u64,
        unit_price: Money,
    },
    Remove { name: String },
    CartAdd { name: String, quantity: i64 },
    CartClear,
    CartShow,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("'{command}' expects {expected} '|'-separated fields, got {found}")]
    FieldCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Parse a stock quantity: a non-negative whole number.
pub fn parse_quantity(input: &str) -> DomainResult<u64> {
    let text = input.trim();
    if text.starts_with('-') {
        return Err(DomainError::invalid_quantity(format!("'{text}' is negative")));
    }
    text.parse()
        .map_err(|_| DomainError::invalid_quantity(format!("'{text}' is not a whole number")))
}

/// Parse a cart quantity. Sign is kept; the cart rejects non-positive values.
pub fn parse_cart_quantity(input: &str) -> DomainResult<i64> {
    let text = input.trim();
    text.parse()
        .map_err(|_| DomainError::invalid_quantity(format!("'{text}' is not a whole number")))
}

fn fields<const N: usize>(
    command: &'static str,
    rest: &str,
) -> Result<[String; N], CommandParseError> {
    let parts: Vec<String> = rest.split('|').map(|p| p.trim().to_string()).collect();
    let found = parts.len();
    let parts: [String; N] = parts
        .try_into()
        .map_err(|_| CommandParseError::FieldCount {
            command,
            expected: N,
            found,
        })?;
    Ok(parts)
}

fn required(what: &'static str, rest: &str) -> Result<String, CommandParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandParseError::MissingArgument(what));
    }
    Ok(rest.to_string())
}

impl FromStr for SessionCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match head.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "find" => Ok(Self::Find {
                name: required("name", rest)?,
            }),
            "category" => Ok(Self::Category {
                category: required("category", rest)?,
            }),
            "add" => {
                let [name, category, quantity, price] = fields::<4>("add", rest)?;
                Ok(Self::Add(Item::new(
                    name,
                    category,
                    parse_quantity(&quantity)?,
                    Money::parse(&price)?,
                )))
            }
            "update" => {
                let [name, quantity, price] = fields::<3>("update", rest)?;
                Ok(Self::Update {
                    name,
                    quantity: parse_quantity(&quantity)?,
                    unit_price: Money::parse(&price)?,
                })
            }
            "remove" => Ok(Self::Remove {
                name: required("name", rest)?,
            }),
            "cart" => {
                let (sub, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match sub.to_lowercase().as_str() {
                    "add" => {
                        let [name, quantity] = fields::<2>("cart add", args)?;
                        Ok(Self::CartAdd {
                            name,
                            quantity: parse_cart_quantity(&quantity)?,
                        })
                    }
                    "clear" => Ok(Self::CartClear),
                    "show" | "" => Ok(Self::CartShow),
                    other => Err(CommandParseError::Unknown(format!("cart {other}"))),
                }
            }
            "new" if rest.eq_ignore_ascii_case("order") => Ok(Self::CartClear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}
