//! Glob pattern parsing.
//!
//! A pattern is parsed left to right into tokens and laid out as one linear
//! program. A brace group becomes a [`Step::Fork`] to the start of each
//! branch, and every branch ends in a [`Step::Jump`] past the group, so the
//! program grows with the length of the pattern and never with the number of
//! combinations its groups spell out.

use crate::error::{Error, Result};

/// One element of a compiled glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A character matched literally.
    Literal(char),
    /// `?`: any single character except the separator.
    AnyChar,
    /// `*`: any run of characters except the separator.
    Star,
    /// `**`: any run of characters, separators included.
    GlobStar,
    /// `[...]`: a character class.
    Class(CharClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Single(char),
    Range(char, char),
}

/// A bracket expression such as `[!a-y_]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharClass {
    negated: bool,
    items: Vec<ClassItem>,
}

impl CharClass {
    /// Whether `c` is accepted. Classes never match the separator.
    pub(crate) fn matches(&self, c: char) -> bool {
        if c == '/' {
            return false;
        }
        let listed = self.items.iter().any(|item| match *item {
            ClassItem::Single(s) => s == c,
            ClassItem::Range(lo, hi) => (lo..=hi).contains(&c),
        });
        listed != self.negated
    }
}

/// One instruction of a compiled glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Consume input matching the token.
    Match(Token),
    /// Continue at any of the listed steps.
    Fork(Vec<usize>),
    /// Continue at the given step.
    Jump(usize),
}

enum Piece {
    Token(Token),
    Group(Vec<Vec<Token>>),
}

struct Parser<'a> {
    pattern: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            chars: pattern.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, index: usize, reason: &str) -> Error {
        Error::GlobSyntax {
            pattern: self.pattern.to_string(),
            index,
            reason: reason.to_string(),
        }
    }

    fn parse(mut self) -> Result<Vec<Piece>> {
        let mut pieces = Vec::new();
        while let Some(&c) = self.chars.get(self.pos) {
            if c == '{' {
                pieces.push(Piece::Group(self.parse_group()?));
            } else {
                pieces.push(Piece::Token(self.parse_token()?));
            }
        }
        Ok(pieces)
    }

    fn parse_group(&mut self) -> Result<Vec<Vec<Token>>> {
        let start = self.pos;
        self.pos += 1;

        let mut alternatives = Vec::new();
        let mut current = Vec::new();
        loop {
            match self.chars.get(self.pos) {
                None => return Err(self.error(start, "unterminated group")),
                Some('{') => return Err(self.error(self.pos, "nested groups are not supported")),
                Some(',') => {
                    self.pos += 1;
                    alternatives.push(std::mem::take(&mut current));
                }
                Some('}') => {
                    self.pos += 1;
                    alternatives.push(current);
                    return Ok(alternatives);
                }
                Some(_) => current.push(self.parse_token()?),
            }
        }
    }

    fn parse_token(&mut self) -> Result<Token> {
        let at = self.pos;
        let Some(&c) = self.chars.get(at) else {
            return Err(self.error(at, "unexpected end of pattern"));
        };
        self.pos += 1;

        let token = match c {
            '*' => {
                if self.chars.get(self.pos) == Some(&'*') {
                    self.pos += 1;
                    Token::GlobStar
                } else {
                    Token::Star
                }
            }
            '?' => Token::AnyChar,
            '[' => Token::Class(self.parse_class(at)?),
            '\\' => Token::Literal(self.escaped(at)?),
            other => Token::Literal(other),
        };
        Ok(token)
    }

    /// Consume the character following a backslash at `at`.
    fn escaped(&mut self, at: usize) -> Result<char> {
        let c = self
            .chars
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.error(at, "no character to escape"))?;
        self.pos += 1;
        Ok(c)
    }

    /// Parse a class body; the opening `[` at `start` is already consumed.
    fn parse_class(&mut self, start: usize) -> Result<CharClass> {
        let negated = self.chars.get(self.pos) == Some(&'!');
        if negated {
            self.pos += 1;
        }

        let mut items = Vec::new();
        loop {
            let Some(&c) = self.chars.get(self.pos) else {
                return Err(self.error(start, "unterminated character class"));
            };
            self.pos += 1;
            if c == ']' {
                break;
            }

            let lo = if c == '\\' { self.escaped(self.pos - 1)? } else { c };

            // `x-y` is a range unless the `-` is the last thing in the class.
            let is_range = self.chars.get(self.pos) == Some(&'-')
                && self.chars.get(self.pos + 1).is_some_and(|&n| n != ']');
            if !is_range {
                items.push(ClassItem::Single(lo));
                continue;
            }

            let dash = self.pos;
            self.pos += 1;
            let Some(&raw) = self.chars.get(self.pos) else {
                return Err(self.error(start, "unterminated character class"));
            };
            self.pos += 1;
            let hi = if raw == '\\' { self.escaped(self.pos - 1)? } else { raw };
            if hi < lo {
                return Err(self.error(dash, "inverted range"));
            }
            items.push(ClassItem::Range(lo, hi));
        }

        if items.is_empty() {
            return Err(self.error(start, "empty character class"));
        }
        Ok(CharClass { negated, items })
    }
}

/// Parse `pattern` into a linear program.
///
/// Step indices in [`Step::Fork`] and [`Step::Jump`] always point forward,
/// and a jump may target one past the last step, which ends the program.
pub(crate) fn parse(pattern: &str) -> Result<Vec<Step>> {
    let pieces = Parser::new(pattern).parse()?;

    let mut program = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Token(token) => program.push(Step::Match(token)),
            Piece::Group(branches) => {
                let mut next = program.len() + 1;
                let starts: Vec<usize> = branches
                    .iter()
                    .map(|branch| {
                        let start = next;
                        next += branch.len() + 1;
                        start
                    })
                    .collect();
                let end = next;

                program.push(Step::Fork(starts));
                for branch in branches {
                    program.extend(branch.into_iter().map(Step::Match));
                    program.push(Step::Jump(end));
                }
            }
        }
    }
    Ok(program)
}
