//! Error types for parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::parser::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::parser::lexer::Token>) -> Self {
        use crate::parser::lexer::Token;
        use chumsky::error::RichReason;

        // Check if we found a reserved keyword where an identifier was expected
        let found_token = err.found().cloned();
        let reserved_keyword = found_token.as_ref().and_then(|tok| match tok {
            Token::TopLeft => Some("top-left"),
            Token::TopRight => Some("top-right"),
            Token::TopCenter => Some("top-center"),
            Token::BottomLeft => Some("bottom-left"),
            Token::BottomRight => Some("bottom-right"),
            Token::BottomCenter => Some("bottom-center"),
            Token::CenterLeft => Some("center-left"),
            Token::CenterRight => Some("center-right"),
            Token::Center => Some("center"),
            Token::Up => Some("up"),
            Token::Down => Some("down"),
            Token::Left => Some("left"),
            Token::Right => Some("right"),
            _ => None,
        });

        // Format the message based on the reason
        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                if let Some(keyword) = reserved_keyword {
                    format!(
                        "Cannot use '{}' as a name - it's a reserved anchor or direction keyword",
                        keyword
                    )
                } else {
                    let found_str = match found {
                        Some(tok) => format_token(tok),
                        None => "end of input".to_string(),
                    };
                    format!("Unexpected {}", found_str)
                }
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        // Format expected tokens nicely
        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| {
                match e {
                    chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                    chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                    chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                    chumsky::error::RichPattern::Identifier(s) => {
                        Some(format!("identifier '{}'", s))
                    }
                    chumsky::error::RichPattern::Any => Some("any token".to_string()),
                    chumsky::error::RichPattern::SomethingElse => None, // Skip "something else"
                }
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::parser::lexer::Token) -> String {
    use crate::parser::lexer::Token;
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::String(s) => format!("string \"{}\"", s),
        Token::Number(n) => format!("number {}", n),
        Token::Container => "keyword 'container'".to_string(),
        Token::At => "keyword 'at'".to_string(),
        // Anchor keywords
        Token::TopLeft => "anchor 'top-left'".to_string(),
        Token::TopRight => "anchor 'top-right'".to_string(),
        Token::TopCenter => "anchor 'top-center'".to_string(),
        Token::BottomLeft => "anchor 'bottom-left'".to_string(),
        Token::BottomRight => "anchor 'bottom-right'".to_string(),
        Token::BottomCenter => "anchor 'bottom-center'".to_string(),
        Token::CenterLeft => "anchor 'center-left'".to_string(),
        Token::CenterRight => "anchor 'center-right'".to_string(),
        Token::Center => "anchor 'center'".to_string(),
        // Direction keywords
        Token::Up => "direction 'up'".to_string(),
        Token::Down => "direction 'down'".to_string(),
        Token::Left => "direction 'left'".to_string(),
        Token::Right => "direction 'right'".to_string(),
        // Delimiters
        Token::BracketOpen => "'['".to_string(),
        Token::BracketClose => "']'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Colon => "':'".to_string(),
        _ => format!("{:?}", tok),
    }
}
