//! Anchored matching of a compiled glob program against text.
//!
//! Backtracking over `*`, `**` and group forks is memoized on
//! `(step, position)` pairs that are known to fail, which bounds the number
//! of visited states by `steps * (input + 1)` regardless of how many stars or
//! groups a pattern holds.

use super::parser::{Step, Token};

const SEPARATOR: char = '/';

struct Matcher<'a> {
    program: &'a [Step],
    input: &'a [char],
    failed: Vec<bool>,
}

impl Matcher<'_> {
    fn slot(&self, pc: usize, ii: usize) -> usize {
        pc * (self.input.len() + 1) + ii
    }

    fn match_from(&mut self, pc: usize, ii: usize) -> bool {
        let slot = self.slot(pc, ii);
        if self.failed[slot] {
            return false;
        }

        let program = self.program;
        let matched = match program.get(pc) {
            None => ii == self.input.len(),
            Some(Step::Jump(target)) => self.match_from(*target, ii),
            Some(Step::Fork(targets)) => targets.iter().any(|&target| self.match_from(target, ii)),
            Some(Step::Match(Token::Star)) => {
                let mut end = ii;
                loop {
                    if self.match_from(pc + 1, end) {
                        break true;
                    }
                    match self.input.get(end) {
                        Some(&c) if c != SEPARATOR => end += 1,
                        _ => break false,
                    }
                }
            }
            Some(Step::Match(Token::GlobStar)) => {
                (ii..=self.input.len()).any(|end| self.match_from(pc + 1, end))
            }
            Some(Step::Match(Token::AnyChar)) => {
                self.input.get(ii).is_some_and(|&c| c != SEPARATOR) && self.match_from(pc + 1, ii + 1)
            }
            Some(Step::Match(Token::Literal(expected))) => {
                self.input.get(ii) == Some(expected) && self.match_from(pc + 1, ii + 1)
            }
            Some(Step::Match(Token::Class(class))) => {
                self.input.get(ii).is_some_and(|&c| class.matches(c)) && self.match_from(pc + 1, ii + 1)
            }
        };

        if !matched {
            self.failed[slot] = true;
        }
        matched
    }
}

/// Whether `program` matches the whole of `input`.
pub(crate) fn matches(program: &[Step], input: &[char]) -> bool {
    // Jumps may target one past the last step, so that row needs a slot too.
    let mut matcher = Matcher {
        program,
        input,
        failed: vec![false; (program.len() + 1) * (input.len() + 1)],
    };
    matcher.match_from(0, 0)
}
