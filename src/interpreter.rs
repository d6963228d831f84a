/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST bottom-up and applies integer arithmetic
/// for every operator node. It is a pure function of the tree.
///
/// # Responsibilities
/// - Evaluates every expression variant through one exhaustive `match`.
/// - Implements floor division and checked arithmetic.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a lazy stream
/// of tokens: integers, the four arithmetic operators and parentheses. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Terminates the stream with an endless tail of end-of-input tokens.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream with one token of lookahead and
/// constructs an AST by recursive descent, encoding precedence and
/// associativity in the shape of the tree.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting the expected and the actual token.
/// - Rejects trailing input after a complete expression.
pub mod parser;
