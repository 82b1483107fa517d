//! Command parser
//!
//! Parses a command line into a [`Command`]. Words may be quoted so item
//! names can contain spaces; `--name` and `--name=value` become options.

use crate::Command;

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unclosed quote")]
    UnclosedQuote,

    #[error("Syntax error: {0}")]
    SyntaxError(String),
}

/// Token type
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Word (command name or argument)
    Word(String),
    /// Long option (--name)
    LongOption(String),
    /// Option value (=value after option)
    OptionValue(String),
}

/// Command parser
#[derive(Debug, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a command line
    pub fn parse(&self, input: &str) -> Result<Command, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tokens = self.tokenize(input)?;
        let mut cmd = self.parse_tokens(&tokens)?;
        cmd.raw_args = input
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim().to_string())
            .filter(|rest| !rest.is_empty());
        Ok(cmd)
    }

    /// Tokenize input string
    fn tokenize(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                // Whitespace - skip
                ' ' | '\t' | '\r' | '\n' => {
                    chars.next();
                }

                // Double-quoted string
                '"' => {
                    chars.next();
                    let mut word = String::new();
                    let mut closed = false;

                    while let Some(c) = chars.next() {
                        match c {
                            '"' => {
                                closed = true;
                                break;
                            }
                            '\\' => match chars.next() {
                                Some('"') => word.push('"'),
                                Some('\\') => word.push('\\'),
                                Some(next) => {
                                    word.push('\\');
                                    word.push(next);
                                }
                                None => break,
                            },
                            _ => word.push(c),
                        }
                    }

                    if !closed {
                        return Err(ParseError::UnclosedQuote);
                    }

                    tokens.push(Token::Word(word));
                }

                // Single-quoted string (no escapes)
                '\'' => {
                    chars.next();
                    let mut word = String::new();
                    let mut closed = false;

                    for c in chars.by_ref() {
                        if c == '\'' {
                            closed = true;
                            break;
                        }
                        word.push(c);
                    }

                    if !closed {
                        return Err(ParseError::UnclosedQuote);
                    }

                    tokens.push(Token::Word(word));
                }

                // Long option
                '-' if chars.clone().nth(1) == Some('-') => {
                    chars.next(); // first -
                    chars.next(); // second -

                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_alphanumeric() || c == '-' || c == '_' {
                            name.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    if name.is_empty() {
                        return Err(ParseError::SyntaxError("Empty option name".to_string()));
                    }

                    tokens.push(Token::LongOption(name));

                    // Check for =value
                    if chars.peek() == Some(&'=') {
                        chars.next();
                        let mut value = String::new();
                        while let Some(&c) = chars.peek() {
                            if c == ' ' || c == '\t' {
                                break;
                            }
                            value.push(c);
                            chars.next();
                        }
                        tokens.push(Token::OptionValue(value));
                    }
                }

                // Regular word; a single '-' stays part of it so "-3" and
                // "AK-47" survive intact. Quotes only open a string at the
                // start of a token, so "Kit's" is one word.
                _ => {
                    let mut word = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == ' ' || c == '\t' {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    if !word.is_empty() {
                        tokens.push(Token::Word(word));
                    }
                }
            }
        }

        Ok(tokens)
    }

    /// Parse tokens into command
    fn parse_tokens(&self, tokens: &[Token]) -> Result<Command, ParseError> {
        let mut iter = tokens.iter();

        // First token should be the command name
        let name = match iter.next() {
            Some(Token::Word(w)) => w.to_lowercase(),
            Some(t) => return Err(ParseError::UnexpectedToken(format!("{:?}", t))),
            None => return Err(ParseError::EmptyInput),
        };

        let mut cmd = Command::new(name);
        let mut pending_option: Option<String> = None;

        for token in iter {
            match token {
                Token::Word(w) => {
                    // A flag never swallows the following word
                    if let Some(opt) = pending_option.take() {
                        cmd.options.insert(opt, None);
                    }
                    cmd.args.push(w.clone());
                }

                Token::LongOption(name) => {
                    if let Some(opt) = pending_option.take() {
                        cmd.options.insert(opt, None);
                    }
                    pending_option = Some(name.clone());
                }

                Token::OptionValue(value) => {
                    if let Some(opt) = pending_option.take() {
                        cmd.options.insert(opt, Some(value.clone()));
                    }
                }
            }
        }

        // Handle any remaining pending option
        if let Some(opt) = pending_option {
            cmd.options.insert(opt, None);
        }

        Ok(cmd)
    }
}
