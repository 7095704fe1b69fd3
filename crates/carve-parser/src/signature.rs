//! Declaration header grammar.
//!
//! A header is the run of tokens between the previous statement boundary and
//! an opening `{` (or a member-ending `;`). After stripping annotations it is
//! classified as:
//!
//! ```text
//! callable    := modifier* type-params? return-type? IDENT '(' balanced ')' dims? throws?
//! type-decl   := modifier* ('class' | 'interface' | '@' 'interface' | 'enum') IDENT ...
//!              | modifier* 'record' IDENT ('(' | '<') ...
//! anonymous   := ... 'new' type-expr '(' balanced ')'
//! return-type := ('void' | primitive | IDENT generic-args? ('.' IDENT generic-args?)*) ('[' ']')*
//! throws      := 'throws' type (',' type)*
//! ```
//!
//! A callable without a return type is constructor-shaped; whether it really
//! is a constructor depends on the enclosing type and is decided by the
//! caller. Everything else (initializers, lambdas, control statements, array
//! initializers) is a plain block.

use crate::tokens::{Token, TokenKind};

const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "native",
    "synchronized",
    "strictfp",
    "default",
    "transient",
    "volatile",
    "sealed",
];

const PRIMITIVES: &[&str] = &[
    "void", "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
];

fn is_identifier(word: &str) -> bool {
    !KEYWORDS.contains(&word) && !word.starts_with(|c: char| c.is_ascii_digit())
}

/// Collapse whitespace runs so signatures are stable across formatting.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Signature {
    pub name: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub type_parameters: Option<String>,
    /// `None` for constructor-shaped headers.
    pub return_type: Option<String>,
    pub parameters: String,
    pub throws: Vec<String>,
    /// Offset of the first non-annotation token.
    pub start: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Header {
    Callable(Signature),
    Type { kind: TypeKind, name: String },
    Anonymous,
    Block,
}

pub(crate) fn classify(header: &[Token], source: &str) -> Header {
    if header.is_empty() {
        return Header::Block;
    }
    if is_anonymous_body(header, source) {
        return Header::Anonymous;
    }

    let mut cursor = Cursor::new(header, source);
    let Some(prefix) = cursor.prefix() else {
        return Header::Block;
    };
    if let Some(declaration) = cursor.type_declaration() {
        return declaration;
    }
    cursor.callable(prefix).map_or(Header::Block, Header::Callable)
}

/// `IDENT` or `IDENT(args)`, optionally annotated: the header of an enum constant body.
pub(crate) fn is_enum_constant(header: &[Token], source: &str) -> bool {
    let mut cursor = Cursor::new(header, source);
    while cursor.at_punct(b'@') {
        if cursor.annotation().is_none() {
            return false;
        }
    }
    if cursor.identifier().is_none() {
        return false;
    }
    if cursor.at(TokenKind::OpenParen) && cursor.balanced_parens().is_none() {
        return false;
    }
    cursor.at_end()
}

/// Header ends in `new Type(args)`, i.e. the brace opens an anonymous class body.
fn is_anonymous_body(header: &[Token], source: &str) -> bool {
    if header.last().map(|token| token.kind) != Some(TokenKind::CloseParen) {
        return false;
    }

    let mut depth = 0usize;
    let mut open = None;
    for (index, token) in header.iter().enumerate().rev() {
        match token.kind {
            TokenKind::CloseParen => depth += 1,
            TokenKind::OpenParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    open = Some(index);
                    break;
                }
            }
            _ => {}
        }
    }
    let Some(open) = open else {
        return false;
    };

    let mut saw_type = false;
    for token in header[..open].iter().rev() {
        match token.kind {
            TokenKind::Word => match token.text(source) {
                "new" => return saw_type,
                "extends" | "super" => {}
                word if is_identifier(word) => saw_type = true,
                _ => return false,
            },
            TokenKind::Punct(b'.' | b'<' | b'>' | b',' | b'?' | b'@') => {}
            _ => return false,
        }
    }
    false
}

struct Prefix {
    annotations: Vec<String>,
    modifiers: Vec<String>,
    start: Option<usize>,
}

struct Cursor<'t, 's> {
    tokens: &'t [Token],
    source: &'s str,
    pos: usize,
}

impl<'t, 's> Cursor<'t, 's> {
    const fn new(tokens: &'t [Token], source: &'s str) -> Self {
        Self {
            tokens,
            source,
            pos: 0,
        }
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_at(0).is_some_and(|token| token.kind == kind)
    }

    fn at_punct(&self, byte: u8) -> bool {
        self.at(TokenKind::Punct(byte))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn word_at(&self, ahead: usize) -> Option<&'s str> {
        self.peek_at(ahead)
            .filter(|token| token.kind == TokenKind::Word)
            .map(|token| token.text(self.source))
    }

    fn word(&self) -> Option<&'s str> {
        self.word_at(0)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat_punct(&mut self, byte: u8) -> bool {
        let matched = self.at_punct(byte);
        if matched {
            self.bump();
        }
        matched
    }

    /// Start of the current token, or the end of input for an exhausted cursor.
    fn offset(&self) -> usize {
        self.peek_at(0)
            .map_or_else(|| self.prev_end(), |token| token.start)
    }

    fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map_or(0, |token| token.end)
    }

    fn normalized(&self, start: usize, end: usize) -> String {
        normalize(&self.source[start..end])
    }

    fn identifier(&mut self) -> Option<&'s str> {
        let word = self.word().filter(|word| is_identifier(word))?;
        self.bump();
        Some(word)
    }

    fn qualified_name(&mut self) -> Option<()> {
        self.identifier()?;
        while self.at_punct(b'.') && self.word_at(1).is_some_and(is_identifier) {
            self.pos += 2;
        }
        Some(())
    }

    /// Consume `( ... )`, returning the byte range between the parentheses.
    fn balanced_parens(&mut self) -> Option<(usize, usize)> {
        let open = *self.peek_at(0).filter(|token| token.kind == TokenKind::OpenParen)?;
        let mut depth = 0usize;
        while let Some(token) = self.peek_at(0).copied() {
            self.bump();
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((open.end, token.start));
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn angle_group(&mut self) -> Option<()> {
        if !self.at_punct(b'<') {
            return None;
        }
        let mut depth = 0usize;
        while let Some(token) = self.peek_at(0).copied() {
            self.bump();
            match token.kind {
                TokenKind::Punct(b'<') => depth += 1,
                TokenKind::Punct(b'>') => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(());
                    }
                }
                TokenKind::OpenBrace | TokenKind::CloseBrace | TokenKind::Punct(b';') => {
                    return None;
                }
                _ => {}
            }
        }
        None
    }

    fn dims(&mut self) {
        while self.at_punct(b'[') && self.peek_at(1).is_some_and(|token| token.is_punct(b']')) {
            self.pos += 2;
        }
    }

    fn annotation(&mut self) -> Option<String> {
        let start = self.offset();
        if !self.eat_punct(b'@') {
            return None;
        }
        self.qualified_name()?;
        if self.at(TokenKind::OpenParen) {
            self.balanced_parens()?;
        }
        Some(self.normalized(start, self.prev_end()))
    }

    /// A type reference, returning its byte range.
    fn type_ref(&mut self) -> Option<(usize, usize)> {
        let start = self.offset();
        if self.word().is_some_and(|word| PRIMITIVES.contains(&word)) {
            self.bump();
        } else {
            self.identifier()?;
            if self.at_punct(b'<') {
                self.angle_group()?;
            }
            while self.at_punct(b'.') && self.word_at(1).is_some_and(is_identifier) {
                self.pos += 2;
                if self.at_punct(b'<') {
                    self.angle_group()?;
                }
            }
        }
        self.dims();
        Some((start, self.prev_end()))
    }

    /// Leading annotations and modifiers, in any interleaving.
    fn prefix(&mut self) -> Option<Prefix> {
        let mut prefix = Prefix {
            annotations: Vec::new(),
            modifiers: Vec::new(),
            start: None,
        };

        loop {
            if self.at_punct(b'@') {
                if self.word_at(1) == Some("interface") {
                    break;
                }
                let annotation = self.annotation()?;
                prefix.annotations.push(annotation);
                continue;
            }

            let Some(word) = self.word() else { break };
            if word == "non"
                && self.peek_at(1).is_some_and(|token| token.is_punct(b'-'))
                && self.word_at(2) == Some("sealed")
            {
                prefix.start.get_or_insert(self.offset());
                prefix.modifiers.push("non-sealed".to_string());
                self.pos += 3;
                continue;
            }
            if !MODIFIERS.contains(&word) {
                break;
            }
            prefix.start.get_or_insert(self.offset());
            prefix.modifiers.push(word.to_string());
            self.bump();
        }

        Some(prefix)
    }

    fn type_declaration(&mut self) -> Option<Header> {
        let saved = self.pos;
        let declaration = self.try_type_declaration();
        if declaration.is_none() {
            self.pos = saved;
        }
        declaration
    }

    fn try_type_declaration(&mut self) -> Option<Header> {
        let kind = if self.at_punct(b'@') && self.word_at(1) == Some("interface") {
            self.bump();
            TypeKind::Annotation
        } else {
            match self.word()? {
                "class" => TypeKind::Class,
                "interface" => TypeKind::Interface,
                "enum" => TypeKind::Enum,
                "record"
                    if self.word_at(1).is_some_and(is_identifier)
                        && self.peek_at(2).is_some_and(|token| {
                            token.kind == TokenKind::OpenParen || token.is_punct(b'<')
                        }) =>
                {
                    TypeKind::Record
                }
                _ => return None,
            }
        };
        self.bump();
        let name = self.identifier()?.to_string();
        Some(Header::Type { kind, name })
    }

    fn callable(&mut self, prefix: Prefix) -> Option<Signature> {
        let start = prefix.start.unwrap_or_else(|| self.offset());

        let type_parameters = if self.at_punct(b'<') {
            let begin = self.offset();
            self.angle_group()?;
            Some(self.normalized(begin, self.prev_end()))
        } else {
            None
        };

        let constructor_shaped = self.word().is_some_and(is_identifier)
            && self
                .peek_at(1)
                .is_some_and(|token| token.kind == TokenKind::OpenParen);
        let return_type = if constructor_shaped {
            None
        } else {
            let (begin, end) = self.type_ref()?;
            Some(self.normalized(begin, end))
        };

        let name = self.identifier()?.to_string();
        let (params_start, params_end) = self.balanced_parens()?;
        self.dims();

        let mut throws = Vec::new();
        if self.word() == Some("throws") {
            self.bump();
            loop {
                let (begin, end) = self.type_ref()?;
                throws.push(self.normalized(begin, end));
                if !self.eat_punct(b',') {
                    break;
                }
            }
        }

        if !self.at_end() {
            return None;
        }

        Some(Signature {
            name,
            modifiers: prefix.modifiers,
            annotations: prefix.annotations,
            type_parameters,
            return_type,
            parameters: self.normalized(params_start, params_end),
            throws,
            start,
            text: self.normalized(start, self.prev_end()),
        })
    }
}
