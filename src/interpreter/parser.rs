use log::{debug, trace};

use crate::{
    error::{InterpretResult, ParseError},
    interpreter::{
        arithmetic::{BinaryOperator, token_to_binary_operator},
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Deepest parenthesis nesting accepted before the line is rejected.
///
/// The grammar itself allows any depth; this limit deliberately rejects
/// valid lines nested deeper than this so that the recursion cannot exhaust
/// the call stack.
pub const MAX_NESTING: usize = 256;

/// Kinds a factor may start with.
const FACTOR_START: &[TokenKind] = &[TokenKind::Integer, TokenKind::LeftParen];

/// Kinds that may follow a complete top-level expression.
const AFTER_EXPRESSION: &[TokenKind] = &[TokenKind::Plus,
                                         TokenKind::Minus,
                                         TokenKind::Multiply,
                                         TokenKind::Divide,
                                         TokenKind::EndOfInput];

/// Kinds that may follow a complete parenthesised expression.
const AFTER_GROUP: &[TokenKind] = &[TokenKind::Plus,
                                    TokenKind::Minus,
                                    TokenKind::Multiply,
                                    TokenKind::Divide,
                                    TokenKind::RightParen];

/// Recursive-descent parser that evaluates while it parses.
///
/// Each grammar rule is a method returning the integer value of the text it
/// matched; no syntax tree is built. The interpreter owns its lexer and keeps
/// exactly one token of look-ahead, which is always a token that has not been
/// consumed yet.
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := INTEGER | "(" expr ")"
/// ```
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Lexer, parser::Interpreter};
///
/// let interpreter = Interpreter::new(Lexer::new("(2 + 3) * 4")).unwrap();
/// assert_eq!(interpreter.evaluate().unwrap(), 20);
/// ```
pub struct Interpreter<'src> {
    lexer:     Lexer<'src>,
    lookahead: Token,
    depth:     usize,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter and pulls the first look-ahead token.
    ///
    /// # Errors
    /// Propagates a lexical error in the first token.
    pub fn new(mut lexer: Lexer<'src>) -> InterpretResult<Self> {
        let lookahead = lexer.next_token()?;
        Ok(Self { lexer,
                  lookahead,
                  depth: 0 })
    }

    /// The next unconsumed token.
    #[must_use]
    pub const fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Evaluates the whole line.
    ///
    /// Parses one expression and then requires the end of input, so trailing
    /// tokens such as the `)` in `1+2)` are reported instead of ignored.
    ///
    /// # Errors
    /// Returns the first lexical, grammar or arithmetic error encountered.
    pub fn evaluate(mut self) -> InterpretResult<i64> {
        let result = self.whole_line();

        match &result {
            Ok(value) => debug!("{:?} evaluated to {value}", self.lexer.source()),
            Err(e) => debug!("{:?} failed: {e}", self.lexer.source()),
        }

        result
    }

    /// Parses and evaluates `term (("+" | "-") term)*`.
    ///
    /// Operands are combined as soon as they are read, which makes the
    /// operators left-associative.
    ///
    /// # Errors
    /// Propagates errors from the operands and from the combination.
    pub fn expr(&mut self) -> InterpretResult<i64> {
        let mut result = self.term()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.lookahead.kind)
               && !op.is_multiplicative()
            {
                result = self.combine(op, result, Self::term)?;
                continue;
            }
            break;
        }
        Ok(result)
    }

    /// Parses and evaluates `factor (("*" | "/") factor)*`.
    ///
    /// # Errors
    /// Propagates errors from the operands; fails with
    /// [`EvalError::DivisionByZero`](crate::error::EvalError::DivisionByZero)
    /// when a divisor evaluates to zero.
    pub fn term(&mut self) -> InterpretResult<i64> {
        let mut result = self.factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.lookahead.kind)
               && op.is_multiplicative()
            {
                result = self.combine(op, result, Self::factor)?;
                continue;
            }
            break;
        }
        Ok(result)
    }

    /// Parses and evaluates `INTEGER | "(" expr ")"`.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if the look-ahead starts neither
    ///   alternative, or a group is not closed.
    /// - [`ParseError::NestingTooDeep`] past [`MAX_NESTING`] open groups.
    pub fn factor(&mut self) -> InterpretResult<i64> {
        match (self.lookahead.kind, self.lookahead.integer()) {
            (TokenKind::Integer, Some(value)) => {
                self.eat(TokenKind::Integer)?;
                Ok(value)
            },
            (TokenKind::LeftParen, _) => {
                let open = self.eat(TokenKind::LeftParen)?;
                if self.depth == MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING,
                                                            position: open.position, }.into());
                }

                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;

                self.eat(TokenKind::RightParen)?;
                Ok(value)
            },
            _ => Err(self.unexpected(FACTOR_START).into()),
        }
    }

    /// Consumes the look-ahead if it has the given kind and pulls the next
    /// token from the lexer.
    ///
    /// Every token the grammar accepts passes through here. Returns the
    /// consumed token.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if the look-ahead has another kind.
    /// - Lexical errors from pulling the following token.
    pub fn eat(&mut self, kind: TokenKind) -> InterpretResult<Token> {
        if !self.lookahead.is(kind) {
            return Err(self.unexpected(expected_for(kind)).into());
        }

        let next = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.lookahead, next);
        trace!("consumed {consumed} at {}", consumed.position);
        Ok(consumed)
    }

    fn whole_line(&mut self) -> InterpretResult<i64> {
        let value = self.expr()?;
        self.eat(TokenKind::EndOfInput)?;
        Ok(value)
    }

    /// Consumes an operator, evaluates its right operand with `operand` and
    /// combines it with `left`.
    fn combine(&mut self,
               op: BinaryOperator,
               left: i64,
               operand: fn(&mut Self) -> InterpretResult<i64>)
               -> InterpretResult<i64> {
        let position = self.eat(op.token_kind())?.position;
        let right = operand(self)?;
        trace!("combining {left} {op} {right} at {position}");
        Ok(op.apply(left, right, position)?)
    }

    fn unexpected(&self, expected: &'static [TokenKind]) -> ParseError {
        ParseError::UnexpectedToken { expected,
                                      found: self.lookahead.kind,
                                      position: self.lookahead.position }
    }
}

/// The accepted kinds to report when `eat(kind)` fails.
///
/// End of input and `)` are only required right after a complete
/// expression, where an operator would also have been accepted.
const fn expected_for(kind: TokenKind) -> &'static [TokenKind] {
    match kind {
        TokenKind::EndOfInput => AFTER_EXPRESSION,
        TokenKind::RightParen => AFTER_GROUP,
        TokenKind::Integer => &[TokenKind::Integer],
        TokenKind::LeftParen => &[TokenKind::LeftParen],
        TokenKind::Plus => &[TokenKind::Plus],
        TokenKind::Minus => &[TokenKind::Minus],
        TokenKind::Multiply => &[TokenKind::Multiply],
        TokenKind::Divide => &[TokenKind::Divide],
    }
}
