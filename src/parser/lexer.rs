//! Lexer for the overlay scene language using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Statement keywords
    #[token("container")]
    Container,
    #[token("at")]
    At,

    // Anchor position keywords (longer hyphenated names win over identifiers)
    #[token("top-left")]
    TopLeft,
    #[token("top-right")]
    TopRight,
    #[token("top-center")]
    TopCenter,
    #[token("bottom-left")]
    BottomLeft,
    #[token("bottom-right")]
    BottomRight,
    #[token("bottom-center")]
    BottomCenter,
    #[token("center-left")]
    CenterLeft,
    #[token("center-right")]
    CenterRight,
    #[token("center")]
    Center,

    // Growth direction keywords
    #[token("up")]
    Up,
    #[token("down")]
    Down,
    #[token("left")]
    Left,
    #[token("right")]
    Right,

    // Delimiters
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_keywords() {
        let tokens: Vec<_> = lex("container at").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Container, Token::At]);
    }

    #[test]
    fn test_position_keywords() {
        let tokens: Vec<_> = lex("top-left top-right top-center bottom-left bottom-right bottom-center center-left center-right center")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::TopLeft,
                Token::TopRight,
                Token::TopCenter,
                Token::BottomLeft,
                Token::BottomRight,
                Token::BottomCenter,
                Token::CenterLeft,
                Token::CenterRight,
                Token::Center,
            ]
        );
    }

    #[test]
    fn test_hyphenated_keyword_beats_identifier() {
        // "center-left" must lex as one keyword, not center + junk
        let tokens: Vec<_> = lex("center-left").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::CenterLeft]);
    }

    #[test]
    fn test_direction_keywords() {
        let tokens: Vec<_> = lex("up down left right").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Up, Token::Down, Token::Left, Token::Right]
        );
    }

    #[test]
    fn test_identifiers_and_strings() {
        let tokens: Vec<_> = lex(r#"favorite "badge large""#).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("favorite".to_string()),
                Token::String("badge large".to_string())
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens: Vec<_> = lex("400 300 7.5").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Number(400.0),
                Token::Number(300.0),
                Token::Number(7.5)
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        let tokens: Vec<_> = lex("container // trailing\n400 300")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![Token::Container, Token::Number(400.0), Token::Number(300.0)]
        );
    }

    #[test]
    fn test_block_comments_skipped() {
        let tokens: Vec<_> = lex("at /* block */ center").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::At, Token::Center]);
    }

    #[test]
    fn test_complete_statement() {
        let tokens: Vec<_> = lex(r#"delete at bottom-right [grow: up, class: "danger"]"#)
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("delete".to_string()),
                Token::At,
                Token::BottomRight,
                Token::BracketOpen,
                Token::Ident("grow".to_string()),
                Token::Colon,
                Token::Up,
                Token::Comma,
                Token::Ident("class".to_string()),
                Token::Colon,
                Token::String("danger".to_string()),
                Token::BracketClose,
            ]
        );
    }
}
