//! Goal expression parsing.
//!
//! A small recursive-descent parser for the restricted goal grammar:
//!
//! ```text
//! goal       := comparison ( "&&" comparison )*
//! comparison := operand cmp-op operand
//! cmp-op     := "==" | ">=" | "<="
//! operand    := "sum" | term ( ("+"|"-") term )*
//! term       := ["+"|"-"] ( integer | "v[" integer "]" )
//! ```
//!
//! Whitespace is insignificant. `v[i]` reads container `i`'s volume, `sum`
//! is the total volume across all containers, and evaluation is over `i64`.

use thiserror::Error;

use crate::goal::GoalCondition;
use crate::state::State;

/// Error reported when a goal expression fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprParseError {
    /// Input that matches no token of the grammar.
    #[error("unrecognized token {text:?} at position {position}")]
    UnknownToken {
        /// Character offset of the offending input.
        position: usize,
        /// The offending text.
        text: String,
    },

    /// A container reference that is not of the form `v[index]`.
    #[error("malformed container reference at position {position}, expected v[index]")]
    MalformedContainerRef {
        /// Character offset of the reference.
        position: usize,
    },

    /// A numeric literal that does not fit the value range.
    #[error("invalid number {text:?}")]
    InvalidNumber {
        /// The offending digits.
        text: String,
    },

    /// No comparison operator where one was required.
    #[error("expected a comparison operator (==, >= or <=)")]
    ExpectedComparison,

    /// Something other than a number, container reference or `sum` where an
    /// operand was required.
    #[error("expected a number, v[index] or sum")]
    ExpectedOperand,

    /// The expression ended before a comparison was complete.
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    /// Leftover input after a complete expression.
    #[error("unexpected trailing input after the expression")]
    TrailingInput,

    /// A container reference outside `[0, num_containers)`.
    #[error("container index {index} out of range for {num_containers} containers")]
    IndexOutOfRange {
        /// The referenced index.
        index: usize,
        /// Number of containers in the problem instance.
        num_containers: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Sum,
    Number(i64),
    Container(usize),
    Plus,
    Minus,
    AndAnd,
    EqEq,
    Ge,
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmpOp {
    Eq,
    Ge,
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Literal(i64),
    Container(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term {
    sign: i64,
    atom: Atom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    Sum,
    Terms(Vec<Term>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Comparison {
    left: Operand,
    op: CmpOp,
    right: Operand,
}

/// A goal compiled from a textual expression.
///
/// Satisfied iff every `&&`-joined comparison holds for the state.
///
/// # Example
///
/// ```
/// use decant_core::{parse_goal, GoalCondition, State};
///
/// let goal = parse_goal("v[0] == 2 && v[1] >= 3", 2).unwrap();
/// assert!(goal.is_satisfied(&State::new(vec![2, 3])));
/// assert!(!goal.is_satisfied(&State::new(vec![2, 1])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionGoal {
    comparisons: Vec<Comparison>,
}

impl GoalCondition for ExpressionGoal {
    fn is_satisfied(&self, state: &State) -> bool {
        self.comparisons.iter().all(|c| {
            let left = eval_operand(&c.left, state);
            let right = eval_operand(&c.right, state);
            match c.op {
                CmpOp::Eq => left == right,
                CmpOp::Ge => left >= right,
                CmpOp::Le => left <= right,
            }
        })
    }
}

fn eval_operand(operand: &Operand, state: &State) -> i64 {
    match operand {
        Operand::Sum => state.total() as i64,
        Operand::Terms(terms) => terms
            .iter()
            .map(|t| {
                let value = match t.atom {
                    Atom::Literal(n) => n,
                    Atom::Container(i) => state.get(i).map_or(0, i64::from),
                };
                t.sign * value
            })
            .sum(),
    }
}

/// Parses a goal expression for a problem with `num_containers` containers.
///
/// # Errors
///
/// Returns [`ExprParseError`] on unrecognized input, a missing comparison
/// operator, a malformed operand, trailing input, or a container index
/// outside `[0, num_containers)`.
pub fn parse_goal(expr: &str, num_containers: usize) -> Result<ExpressionGoal, ExprParseError> {
    let tokens = lex(expr)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        num_containers,
    };

    let mut comparisons = vec![parser.comparison()?];
    while parser.eat(&Token::AndAnd) {
        comparisons.push(parser.comparison()?);
    }
    if parser.pos < parser.tokens.len() {
        return Err(ExprParseError::TrailingInput);
    }
    Ok(ExpressionGoal { comparisons })
}

fn lex(input: &str) -> Result<Vec<Token>, ExprParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        match c {
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '&' | '=' | '>' | '<' => {
                let follow = if c == '&' { '&' } else { '=' };
                if chars.get(i + 1) != Some(&follow) {
                    return Err(ExprParseError::UnknownToken {
                        position: i,
                        text: c.to_string(),
                    });
                }
                tokens.push(match c {
                    '&' => Token::AndAnd,
                    '=' => Token::EqEq,
                    '>' => Token::Ge,
                    _ => Token::Le,
                });
                i += 2;
            }
            '0'..='9' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<i64>()
                    .map_err(|_| ExprParseError::InvalidNumber { text: text.clone() })?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if word == "sum" {
                    tokens.push(Token::Sum);
                } else if word == "v" {
                    tokens.push(lex_container_ref(&chars, &mut i, start)?);
                } else {
                    return Err(ExprParseError::UnknownToken {
                        position: start,
                        text: word,
                    });
                }
            }
            other => {
                return Err(ExprParseError::UnknownToken {
                    position: i,
                    text: other.to_string(),
                });
            }
        }
    }
    Ok(tokens)
}

/// Lexes the `[index]` part of a container reference, `i` pointing just past
/// the `v`. Whitespace around the index is tolerated.
fn lex_container_ref(
    chars: &[char],
    i: &mut usize,
    start: usize,
) -> Result<Token, ExprParseError> {
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
    if chars.get(*i) != Some(&'[') {
        return Err(ExprParseError::MalformedContainerRef { position: start });
    }
    *i += 1;
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
    let digits_start = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    let text: String = chars[digits_start..*i].iter().collect();
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
    if text.is_empty() || chars.get(*i) != Some(&']') {
        return Err(ExprParseError::MalformedContainerRef { position: start });
    }
    *i += 1;
    let index = text
        .parse::<usize>()
        .map_err(|_| ExprParseError::InvalidNumber { text: text.clone() })?;
    Ok(Token::Container(index))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    num_containers: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn comparison(&mut self) -> Result<Comparison, ExprParseError> {
        let left = self.operand()?;
        let op = match self.bump() {
            Some(Token::EqEq) => CmpOp::Eq,
            Some(Token::Ge) => CmpOp::Ge,
            Some(Token::Le) => CmpOp::Le,
            Some(_) | None => return Err(ExprParseError::ExpectedComparison),
        };
        let right = self.operand()?;
        Ok(Comparison { left, op, right })
    }

    fn operand(&mut self) -> Result<Operand, ExprParseError> {
        if self.eat(&Token::Sum) {
            return Ok(Operand::Sum);
        }
        let mut terms = vec![self.term()?];
        loop {
            let sign = if self.eat(&Token::Plus) {
                1
            } else if self.eat(&Token::Minus) {
                -1
            } else {
                break;
            };
            let mut term = self.term()?;
            term.sign *= sign;
            terms.push(term);
        }
        Ok(Operand::Terms(terms))
    }

    fn term(&mut self) -> Result<Term, ExprParseError> {
        let sign = if self.eat(&Token::Minus) {
            -1
        } else {
            self.eat(&Token::Plus);
            1
        };
        match self.bump() {
            Some(Token::Number(n)) => Ok(Term {
                sign,
                atom: Atom::Literal(n),
            }),
            Some(Token::Container(index)) => {
                if index >= self.num_containers {
                    return Err(ExprParseError::IndexOutOfRange {
                        index,
                        num_containers: self.num_containers,
                    });
                }
                Ok(Term {
                    sign,
                    atom: Atom::Container(index),
                })
            }
            Some(_) => Err(ExprParseError::ExpectedOperand),
            None => Err(ExprParseError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_container_comparison() {
        let goal = parse_goal("v[0]==2", 2).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![2, 5])));
        assert!(!goal.is_satisfied(&State::new(vec![3, 5])));
    }

    #[test]
    fn test_sum_operand() {
        let goal = parse_goal("sum == 8", 3).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![8, 0, 0])));
        assert!(goal.is_satisfied(&State::new(vec![3, 3, 2])));
        assert!(!goal.is_satisfied(&State::new(vec![3, 3, 3])));
    }

    #[test]
    fn test_arithmetic_operands() {
        let goal = parse_goal("v[0] + v[1] >= 5", 2).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![2, 3])));
        assert!(!goal.is_satisfied(&State::new(vec![2, 2])));

        let goal = parse_goal("v[0] - 1 <= 2", 1).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![3])));
        assert!(!goal.is_satisfied(&State::new(vec![4])));
    }

    #[test]
    fn test_signed_terms() {
        let goal = parse_goal("-1 + v[0] == 4", 1).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![5])));

        let goal = parse_goal("v[0] + -2 == 1", 1).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![3])));
    }

    #[test]
    fn test_whitespace_insignificant() {
        let goal = parse_goal("  v[ 0 ]   ==  2  ", 1).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![2])));
    }

    #[test]
    fn test_conjunction() {
        let goal = parse_goal("v[0]==2 && v[1]==3", 2).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![2, 3])));
        assert!(!goal.is_satisfied(&State::new(vec![2, 0])));
    }

    #[test]
    fn test_repeated_conjunction() {
        let goal = parse_goal("v[0]>=1 && v[1]>=1 && sum<=6", 2).unwrap();
        assert!(goal.is_satisfied(&State::new(vec![2, 4])));
        assert!(!goal.is_satisfied(&State::new(vec![0, 4])));
        assert!(!goal.is_satisfied(&State::new(vec![3, 4])));
    }

    #[test]
    fn test_missing_comparison_operator() {
        assert_eq!(
            parse_goal("v[0] + 1", 1),
            Err(ExprParseError::ExpectedComparison)
        );
    }

    #[test]
    fn test_single_equals_is_not_a_comparison() {
        assert_eq!(
            parse_goal("v[0] = 1", 1),
            Err(ExprParseError::UnknownToken {
                position: 5,
                text: "=".to_string()
            })
        );
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            parse_goal("v[2] == 0", 2),
            Err(ExprParseError::IndexOutOfRange {
                index: 2,
                num_containers: 2
            })
        );
    }

    #[test]
    fn test_malformed_container_ref() {
        assert_eq!(
            parse_goal("v[] == 0", 1),
            Err(ExprParseError::MalformedContainerRef { position: 0 })
        );
        assert_eq!(
            parse_goal("v[1 == 0", 2),
            Err(ExprParseError::MalformedContainerRef { position: 0 })
        );
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(
            parse_goal("total == 4", 1),
            Err(ExprParseError::UnknownToken {
                position: 0,
                text: "total".to_string()
            })
        );
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            parse_goal("v[0] == 1 == 2", 1),
            Err(ExprParseError::TrailingInput)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_goal("", 1), Err(ExprParseError::UnexpectedEnd));
        assert_eq!(parse_goal("   ", 1), Err(ExprParseError::UnexpectedEnd));
    }

    #[test]
    fn test_dangling_conjunction() {
        assert_eq!(
            parse_goal("v[0] == 1 &&", 1),
            Err(ExprParseError::UnexpectedEnd)
        );
    }
}
