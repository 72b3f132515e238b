//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::layout::types::{AnchorPosition, GrowDirection};
use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse scene source code into an AST
pub fn parse(input: &str) -> Result<Scene, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    scene_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn scene_parser<'a, I>() -> impl Parser<'a, I, Scene, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Basic token parsers
    let identifier = select! {
        Token::Ident(s) => Identifier::new(s),
    }
    .map_with(|id, e| Spanned::new(id, span_range(&e.span())));

    let number = select! {
        Token::Number(n) => n,
    };

    let string_literal = select! {
        Token::String(s) => s,
    };

    let position = select! {
        Token::TopLeft => AnchorPosition::TopLeft,
        Token::TopRight => AnchorPosition::TopRight,
        Token::TopCenter => AnchorPosition::TopCenter,
        Token::BottomLeft => AnchorPosition::BottomLeft,
        Token::BottomRight => AnchorPosition::BottomRight,
        Token::BottomCenter => AnchorPosition::BottomCenter,
        Token::CenterLeft => AnchorPosition::CenterLeft,
        Token::CenterRight => AnchorPosition::CenterRight,
        Token::Center => AnchorPosition::Center,
    }
    .map_with(|position, e| Spanned::new(position, span_range(&e.span())));

    let direction = select! {
        Token::Up => GrowDirection::Up,
        Token::Down => GrowDirection::Down,
        Token::Left => GrowDirection::Left,
        Token::Right => GrowDirection::Right,
    };

    // Modifier keys are plain identifiers; unknown keys are preserved
    let modifier_key = identifier.clone().map(|id| {
        let key = match id.node.as_str() {
            "grow" => ModifierKey::Grow,
            "size" => ModifierKey::Size,
            "gap" => ModifierKey::Gap,
            "offset" => ModifierKey::Offset,
            "class" => ModifierKey::Class,
            other => ModifierKey::Custom(other.to_string()),
        };
        Spanned::new(key, id.span)
    });

    let modifier_value = choice((
        direction
            .map(ModifierValue::Direction)
            .map_with(|v, e| Spanned::new(v, span_range(&e.span()))),
        number
            .clone()
            .map(ModifierValue::Number)
            .map_with(|v, e| Spanned::new(v, span_range(&e.span()))),
        string_literal
            .map(ModifierValue::String)
            .map_with(|v, e| Spanned::new(v, span_range(&e.span()))),
    ));

    let modifier = modifier_key
        .then_ignore(just(Token::Colon))
        .then(modifier_value)
        .map_with(|(key, value), e| Spanned::new(Modifier { key, value }, span_range(&e.span())));

    let modifier_block = modifier
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose));

    // container W H [modifiers]
    let container_decl = just(Token::Container)
        .ignore_then(number.clone())
        .then(number)
        .then(modifier_block.clone().or_not())
        .map(|((width, height), modifiers)| {
            Statement::Container(ContainerDecl {
                width,
                height,
                modifiers: modifiers.unwrap_or_default(),
            })
        });

    // name at position [modifiers] - the position clause is optional when a
    // profile supplies one
    let control_decl = identifier
        .then(just(Token::At).ignore_then(position).or_not())
        .then(modifier_block.or_not())
        .map(|((name, position), modifiers)| {
            Statement::Control(ControlDecl {
                name,
                position,
                modifiers: modifiers.unwrap_or_default(),
            })
        });

    let statement = choice((container_decl, control_decl))
        .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    // A scene is a list of statements
    statement
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|statements| Scene { statements })
}
