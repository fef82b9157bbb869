//! Turns source text into located tokens.
//!
//! Only a handful of characters are punctuation: `(`, `)`, `,`, the shorthand
//! `_` and the operators `=>`, `|>`, `->` and `->>`. Everything else that is
//! not whitespace accumulates into an identifier, which is why `+`, `<=` or
//! `to_string` are all plain identifiers naming builtins. An accumulated run is
//! classified when it gets flushed: digit-led runs must be numbers, `true` and
//! `false` are booleans, anything else is an identifier.
//!
//! `--` starts a comment that runs to the end of the line. String literals are
//! delimited by `"` and support the escapes `\a \b \e \f \n \r \t \v \\ \"`
//! and `\xHH`.
mod token;

use std::{iter::Peekable, str::Chars};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::error::scanner::{ScanError, ScanErrorType, ScannerError};

/// A scanner for source code
pub struct Scanner<'a> {
	/// User input source code iterator
	source_iter:  Peekable<Chars<'a>>,
	/// Location of the next character to be consumed
	location:     Location,
	/// Characters of the identifier being accumulated
	lexeme:       String,
	/// Location of the first character of `lexeme`
	lexeme_start: Location,
	tokens:       Vec<Token>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source_iter:  source.chars().peekable(),
			location:     Location::default(),
			lexeme:       String::new(),
			lexeme_start: Location::default(),
			tokens:       Vec::new(),
		}
	}

	/// Scan all tokens from the source code
	pub fn scan_tokens(mut self) -> Result<TokenStream, ScannerError> {
		while let Some((start, c)) = self.advance() {
			self.scan_token(start, c)?;
		}
		self.flush()?;
		Ok(TokenStream::new(self.tokens, self.location))
	}

	/// Scan starting from the character `c` that was just consumed at `start`
	fn scan_token(&mut self, start: Location, c: char) -> Result<(), ScannerError> {
		match c {
			'(' => self.push(LeftParen, start)?,
			')' => self.push(RightParen, start)?,
			',' => self.push(Comma, start)?,
			'_' if self.lexeme.is_empty() => self.push(Shorthand, start)?,
			'=' if self.match_next('>') => self.push(Arrow, start)?,
			'|' if self.match_next('>') => self.push(Pipeline, start)?,
			'-' if self.peek() == Some('>') && self.peek_second() == Some('>') => {
				self.advance();
				self.advance();
				self.push(Mutate, start)?
			}
			'-' if self.match_next('>') => self.push(Assign, start)?,
			'-' if self.match_next('-') => {
				self.flush()?;
				while self.advance().is_some_and(|(_, c)| c != '\n') {}
			}
			'"' => {
				self.flush()?;
				let value = self.string(start)?;
				self.tokens.push(Token::new(StringLiteral(value), start));
			}
			' ' | '\t' | '\r' | '\n' => self.flush()?,
			_ => {
				if self.lexeme.is_empty() {
					self.lexeme_start = start;
				}
				self.lexeme.push(c);
			}
		}
		Ok(())
	}

	/// Flush any pending identifier, then emit `r#type`
	fn push(&mut self, r#type: TokenType, location: Location) -> Result<(), ScannerError> {
		self.flush()?;
		self.tokens.push(Token::new(r#type, location));
		Ok(())
	}

	/// Classify and emit the accumulated identifier, if any
	fn flush(&mut self) -> Result<(), ScannerError> {
		if self.lexeme.is_empty() {
			return Ok(());
		}
		let text = std::mem::take(&mut self.lexeme);
		let r#type = if text == "true" {
			BooleanLiteral(true)
		} else if text == "false" {
			BooleanLiteral(false)
		} else if text.starts_with(|c: char| c.is_ascii_digit()) {
			if !is_number(&text) {
				let error = ScanErrorType::DigitLeadingIdentifier(text);
				return Err(ScanError::new(self.lexeme_start, error).into());
			}
			NumberLiteral(text.parse().context("Failed to parse number literal")?)
		} else {
			Identifier(text)
		};
		self.tokens.push(Token::new(r#type, self.lexeme_start));
		Ok(())
	}

	/// Scan the rest of a string literal whose opening `"` is at `start`
	fn string(&mut self, start: Location) -> Result<String, ScanError> {
		let mut value = String::new();
		loop {
			match self.advance() {
				None => return Err(ScanError::new(start, ScanErrorType::UnterminatedString)),
				Some((_, '"')) => return Ok(value),
				Some((at, '\\')) => value.push(self.escape(at)?),
				Some((_, c)) => value.push(c),
			}
		}
	}

	/// Resolve the escape sequence whose `\` is at `start`
	fn escape(&mut self, start: Location) -> Result<char, ScanError> {
		let unterminated = || ScanError::new(start, ScanErrorType::UnterminatedEscape);
		let (_, c) = self.advance().ok_or_else(unterminated)?;
		Ok(match c {
			'a' => '\x07',
			'b' => '\x08',
			'e' => '\x1b',
			'f' => '\x0c',
			'n' => '\n',
			'r' => '\r',
			't' => '\t',
			'v' => '\x0b',
			'\\' => '\\',
			'"' => '"',
			'x' => {
				let mut digits = String::with_capacity(2);
				for _ in 0..2 {
					digits.push(self.advance().ok_or_else(unterminated)?.1);
				}
				let invalid = || ScanError::new(start, ScanErrorType::InvalidHexEscape(digits.clone()));
				let byte = digits.chars().try_fold(0u8, |acc, c| Some(acc * 16 + c.to_digit(16)? as u8));
				char::from(byte.ok_or_else(invalid)?)
			}
			other => return Err(ScanError::new(start, ScanErrorType::UnknownEscape(other))),
		})
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		if self.peek() != Some(expected) {
			return false;
		}
		self.advance();
		true
	}

	/// Advance to the next character, returning it with its location
	fn advance(&mut self) -> Option<(Location, char)> {
		let c = self.source_iter.next()?;
		let at = self.location;
		if c == '\n' {
			self.location.line += 1;
			self.location.column = 1;
		} else {
			self.location.column += 1;
		}
		Some((at, c))
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().copied() }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.next()
	}
}

/// `digits(.digits)?`
fn is_number(text: &str) -> bool {
	let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
	match text.split_once('.') {
		Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
		None => all_digits(text),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let result = Scanner::new(input).scan_tokens();
		assert!(result.is_ok() == ok, "{input:?}: {result:?}");
	}

	fn types(input: &str) -> Vec<TokenType> {
		let stream = Scanner::new(input).scan_tokens().unwrap();
		stream.remaining().map(|t| t.r#type.clone()).collect()
	}

	fn error(input: &str) -> ScanError {
		match Scanner::new(input).scan_tokens() {
			Err(ScannerError::ScanError(e)) => e,
			other => panic!("expected a scan error for {input:?}, got {other:?}"),
		}
	}

	fn ident(name: &str) -> TokenType { Identifier(name.to_string()) }

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("()", true);
		scan(" ( ) ", true);
		scan("@", true);
		scan("你好", true);
		scan(r#""世界""#, true);
		scan("12345", true);
		scan("12abc", false);
		scan("\"unterminated", false);
	}

	#[test]
	fn scan_punctuation() {
		assert_eq!(types("(,)"), vec![LeftParen, Comma, RightParen]);
		assert_eq!(types("=> |> -> ->>"), vec![Arrow, Pipeline, Assign, Mutate]);
		assert_eq!(types("_"), vec![Shorthand]);
	}

	#[test]
	fn scan_longest_operator_first() {
		assert_eq!(types("a->>b"), vec![ident("a"), Mutate, ident("b")]);
		assert_eq!(types("a->b"), vec![ident("a"), Assign, ident("b")]);
		assert_eq!(types("x|>show"), vec![ident("x"), Pipeline, ident("show")]);
	}

	#[test]
	fn scan_operator_identifiers() {
		assert_eq!(types("+ - * / > >= < <= == !="), ["+", "-", "*", "/", ">", ">=", "<", "<=", "==", "!="].map(ident));
	}

	#[test]
	fn scan_shorthand_inside_identifier() {
		assert_eq!(types("to_string"), vec![ident("to_string")]);
		assert_eq!(types("_x"), vec![Shorthand, ident("x")]);
	}

	#[test]
	fn scan_numbers() {
		assert_eq!(types("0"), vec![NumberLiteral(0.0)]);
		assert_eq!(types("42"), vec![NumberLiteral(42.0)]);
		assert_eq!(types("3.1415926535"), vec![NumberLiteral(3.1415926535)]);
		scan("1.", false);
		scan("1.2.3", false);
		scan("1e5", false);
		assert_eq!(error("9lives").r#type, ScanErrorType::DigitLeadingIdentifier("9lives".to_string()));
	}

	#[test]
	fn scan_booleans() {
		assert_eq!(types("true false"), vec![BooleanLiteral(true), BooleanLiteral(false)]);
		assert_eq!(types("truest"), vec![ident("truest")]);
	}

	#[test]
	fn scan_strings() {
		assert_eq!(types(r#""""#), vec![StringLiteral(String::new())]);
		assert_eq!(types(r#""hello world""#), vec![StringLiteral("hello world".to_string())]);
		assert_eq!(types(r#""-- not a comment""#), vec![StringLiteral("-- not a comment".to_string())]);
		assert_eq!(types(r#"ab"c""#), vec![ident("ab"), StringLiteral("c".to_string())]);
	}

	#[test]
	fn scan_escapes() {
		assert_eq!(types(r#""\x41\n""#), vec![StringLiteral("A\n".to_string())]);
		assert_eq!(types(r#""\"quoted\" \\ \t""#), vec![StringLiteral("\"quoted\" \\ \t".to_string())]);
		assert_eq!(types(r#""\a\b\e\f\r\v""#), vec![StringLiteral("\x07\x08\x1b\x0c\r\x0b".to_string())]);
		assert_eq!(error(r#""\q""#).r#type, ScanErrorType::UnknownEscape('q'));
		assert_eq!(error(r#""\xZZ""#).r#type, ScanErrorType::InvalidHexEscape("ZZ".to_string()));
		assert_eq!(error(r#""\x+1""#).r#type, ScanErrorType::InvalidHexEscape("+1".to_string()));
		assert_eq!(error(r#""\x-1""#).r#type, ScanErrorType::InvalidHexEscape("-1".to_string()));
		assert_eq!(error(r#""abc\"#).r#type, ScanErrorType::UnterminatedEscape);
		assert_eq!(error(r#""\x4"#).r#type, ScanErrorType::UnterminatedEscape);
		assert_eq!(error(r#"  "abc"#).r#type, ScanErrorType::UnterminatedString);
	}

	#[test]
	fn scan_comments() {
		assert!(types("-- a comment").is_empty());
		assert_eq!(types("a -- comment\nb"), vec![ident("a"), ident("b")]);
		assert_eq!(types("a--comment"), vec![ident("a")]);
		assert_eq!(types("- 1"), vec![ident("-"), NumberLiteral(1.0)]);
	}

	#[test]
	fn scan_locations() {
		let stream = Scanner::new("(1, x)\n  |> show").scan_tokens().unwrap();
		let locations: Vec<_> = stream.remaining().map(|t| (t.location.line, t.location.column)).collect();
		assert_eq!(locations, vec![(1, 1), (1, 2), (1, 3), (1, 5), (1, 6), (2, 3), (2, 6)]);
		assert_eq!(stream.end(), Location::new(2, 10));
	}

	#[test]
	fn scan_error_locations() {
		assert_eq!(error("a\n  12x").location, Location::new(2, 3));
		assert_eq!(error("x \"open").location, Location::new(1, 3));
	}

	#[test]
	fn display_tokens() {
		let stream = Scanner::new("(3) -> pi |> \"s\" true").scan_tokens().unwrap();
		let rendered: Vec<_> = stream.remaining().map(|t| t.to_string()).collect();
		assert_eq!(
			rendered,
			vec![
				"1:1:lparen",
				"1:2:number: 3",
				"1:3:rparen",
				"1:5:assign",
				"1:8:identifier: pi",
				"1:11:pipeline",
				"1:14:string: \"s\"",
				"1:18:boolean: true",
			]
		);
	}

	#[test]
	fn token_stream_lookahead() {
		let mut stream = Scanner::new("(a) => a").scan_tokens().unwrap();
		assert_eq!(stream.peek_nth(4).map(|t| &t.r#type), Some(&Arrow));
		assert_eq!(stream.peek_nth(6), None);
		assert_eq!(stream.peek_nth(0), None);
		assert!(stream.expect(LeftParen).is_ok());
		assert!(stream.expect(RightParen).is_err());
		assert_eq!(stream.advance().unwrap().r#type, ident("a"));
		for _ in 0..3 {
			stream.advance().unwrap();
		}
		assert!(stream.is_empty());
		assert!(stream.advance().is_err());
	}
}
