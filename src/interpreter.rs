/// Checked integer arithmetic for the binary operators.
///
/// Maps operator tokens to [`arithmetic::BinaryOperator`] and combines two
/// operands, reporting division by zero and overflow as errors.
pub mod arithmetic;
/// The lexer module tokenizes a line of input on demand.
///
/// The lexer reads the raw text and hands out one token per request,
/// skipping whitespace and signalling the end of the line with an explicit
/// end-of-input token.
///
/// # Responsibilities
/// - Converts the character stream into tokens carrying their position.
/// - Parses integer literals, rejecting those outside the `i64` range.
/// - Reports characters that do not belong to the token alphabet.
pub mod lexer;
/// The parser module evaluates expressions by recursive descent.
///
/// Parsing and evaluation happen in a single pass: every grammar rule
/// returns the value of the text it matched.
///
/// # Responsibilities
/// - Applies operator precedence and left-associativity.
/// - Enforces the grammar through a single token-consuming choke point.
/// - Rejects unbalanced parentheses and trailing tokens.
pub mod parser;
/// Token kinds and token values shared by the lexer and the parser.
pub mod token;
