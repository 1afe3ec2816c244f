use crate::ast::LayoutNode;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{decode_entities, tokenize, Token};
use indexmap::IndexMap;

/// Recursive-descent parser for the layout XML subset
pub struct Parser<'src> {
    tokens: Vec<(Result<Token<'src>, ()>, std::ops::Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: tokenize(source),
            pos: 0,
        }
    }

    /// Parse a complete document: exactly one root element.
    pub fn parse_document(&mut self) -> ParseResult<LayoutNode> {
        let root = self.parse_element()?;
        if !self.is_at_end() {
            return Err(ParseError::invalid_syntax(
                self.current_pos(),
                "Expected a single root element",
            ));
        }
        Ok(root)
    }

    fn parse_element(&mut self) -> ParseResult<LayoutNode> {
        self.expect_token(Token::TagStart, "<")?;
        let tag = self.expect_name()?.to_string();
        let attributes = self.parse_attributes()?;

        match self.peek()? {
            Token::SelfClose => {
                self.advance();
                Ok(LayoutNode {
                    tag,
                    attributes,
                    children: Vec::new(),
                })
            }
            Token::TagEnd => {
                self.advance();
                let children = self.parse_children(&tag)?;
                Ok(LayoutNode {
                    tag,
                    attributes,
                    children,
                })
            }
            other => Err(ParseError::unexpected_token(
                self.current_pos(),
                "'>' or '/>'",
                format!("{:?}", other),
            )),
        }
    }

    fn parse_attributes(&mut self) -> ParseResult<IndexMap<String, String>> {
        let mut attributes = IndexMap::new();
        while let Token::Name(key) = self.peek()? {
            let key = key.to_string();
            let key_pos = self.current_pos();
            self.advance();
            self.expect_token(Token::Eq, "=")?;
            let value = self.expect_string()?;
            if attributes
                .insert(key.clone(), decode_entities(value))
                .is_some()
            {
                return Err(ParseError::DuplicateAttribute { pos: key_pos, key });
            }
        }
        Ok(attributes)
    }

    fn parse_children(&mut self, open_tag: &str) -> ParseResult<Vec<LayoutNode>> {
        let mut children = Vec::new();
        loop {
            match self.peek()? {
                Token::TagStart => {
                    children.push(self.parse_element()?);
                }
                Token::CloseTagStart => {
                    let pos = self.current_pos();
                    self.advance();
                    let close_tag = self.expect_name()?;
                    if close_tag != open_tag {
                        return Err(ParseError::MismatchedClosingTag {
                            pos,
                            expected: open_tag.to_string(),
                            found: close_tag.to_string(),
                        });
                    }
                    self.expect_token(Token::TagEnd, ">")?;
                    return Ok(children);
                }
                other => {
                    return Err(ParseError::unexpected_token(
                        self.current_pos(),
                        "child element or closing tag",
                        format!("{:?}", other),
                    ));
                }
            }
        }
    }

    fn peek(&self) -> ParseResult<&Token<'src>> {
        match self.tokens.get(self.pos) {
            Some((Ok(token), _)) => Ok(token),
            Some((Err(()), span)) => Err(ParseError::lexer_error(span.start)),
            None => Err(ParseError::unexpected_eof(self.current_pos())),
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn current_pos(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, span)| span.start)
            .unwrap_or(0)
    }

    fn expect_token(&mut self, expected: Token<'src>, display: &str) -> ParseResult<()> {
        let token = self.peek()?;
        if *token == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                self.current_pos(),
                display,
                format!("{:?}", token),
            ))
        }
    }

    fn expect_name(&mut self) -> ParseResult<&'src str> {
        match self.peek()? {
            Token::Name(name) => {
                let name = *name;
                self.advance();
                Ok(name)
            }
            other => Err(ParseError::unexpected_token(
                self.current_pos(),
                "name",
                format!("{:?}", other),
            )),
        }
    }

    fn expect_string(&mut self) -> ParseResult<&'src str> {
        match self.peek()? {
            Token::String(value) | Token::SingleQuoteString(value) => {
                let value = *value;
                self.advance();
                Ok(value)
            }
            other => Err(ParseError::unexpected_token(
                self.current_pos(),
                "quoted value",
                format!("{:?}", other),
            )),
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Parse a layout resource document into its root element.
pub fn parse(source: &str) -> ParseResult<LayoutNode> {
    Parser::new(source).parse_document()
}
