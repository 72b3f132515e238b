//! AST types for the overlay scene language

use crate::layout::types::{AnchorPosition, GrowDirection};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node paired with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A control name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A parsed scene: one container plus its overlay controls, in declaration
/// order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub statements: Vec<Spanned<Statement>>,
}

/// A top-level scene statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Container(ContainerDecl),
    Control(ControlDecl),
}

/// `container W H [modifiers]`
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDecl {
    pub width: f64,
    pub height: f64,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// `name at position [modifiers]`
///
/// `position` is `None` when the scene leaves placement to the profile's
/// position table.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDecl {
    pub name: Spanned<Identifier>,
    pub position: Option<Spanned<AnchorPosition>>,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// A `key: value` entry in a bracketed modifier list
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub key: Spanned<ModifierKey>,
    pub value: Spanned<ModifierValue>,
}

/// Recognized modifier keys; unknown keys are preserved and ignored
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierKey {
    Grow,
    Size,
    Gap,
    Offset,
    Class,
    Custom(String),
}

/// A modifier value
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierValue {
    Number(f64),
    String(String),
    Direction(GrowDirection),
}

impl ControlDecl {
    /// The declared growth direction, if a `grow:` modifier is present
    pub fn grow_direction(&self) -> Option<GrowDirection> {
        self.modifiers.iter().find_map(|m| {
            if m.node.key.node == ModifierKey::Grow {
                if let ModifierValue::Direction(direction) = m.node.value.node {
                    return Some(direction);
                }
            }
            None
        })
    }
}
