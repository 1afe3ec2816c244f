//! Lexer for layout resource XML using logos
//!
//! Logos provides extremely fast lexing via compile-time DFA generation.
//! Comments and the XML prolog are skipped at this level so the parser only
//! ever sees structural tokens.

use logos::Logos;

fn skip_comment<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> logos::Skip {
    match lex.remainder().find("-->") {
        Some(end) => lex.bump(end + 3),
        None => lex.bump(lex.remainder().len()),
    }
    logos::Skip
}

fn skip_prolog<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> logos::Skip {
    match lex.remainder().find("?>") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(lex.remainder().len()),
    }
    logos::Skip
}

/// Token types for the layout XML subset
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token<'src> {
    #[token("<!--", skip_comment)]
    Comment,

    #[token("<?", skip_prolog)]
    Prolog,

    #[token("</")]
    CloseTagStart,

    #[token("<")]
    TagStart,

    #[token("/>")]
    SelfClose,

    #[token(">")]
    TagEnd,

    #[token("=")]
    Eq,

    /// Tag or attribute name; namespace prefixes (`android:id`) and dotted
    /// class tags (`com.example.Custom`) are single names.
    #[regex(r"[A-Za-z_][A-Za-z0-9_:.\-]*", |lex| lex.slice())]
    Name(&'src str),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        &s[1..s.len()-1]
    })]
    String(&'src str),

    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        &s[1..s.len()-1]
    })]
    SingleQuoteString(&'src str),
}

/// Decode the five named XML entities in an attribute value.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Tokenize a source string into (token, byte range) pairs.
///
/// Lexically invalid input surfaces as an `Err` entry carrying its position;
/// the parser turns it into a `ParseError::LexerError`.
pub fn tokenize(source: &str) -> Vec<(Result<Token, ()>, std::ops::Range<usize>)> {
    Token::lexer(source).spanned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic_element() {
        let tokens = tokenize(r#"<TextView android:id="@+id/title" />"#);
        assert!(tokens.iter().all(|(t, _)| t.is_ok()));
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_comment_and_prolog_skipped() {
        let tokens = tokenize("<?xml version=\"1.0\"?>\n<!-- header -->\n<View/>");
        let kinds: Vec<_> = tokens.into_iter().map(|(t, _)| t.unwrap()).collect();
        assert_eq!(
            kinds,
            vec![Token::TagStart, Token::Name("View"), Token::SelfClose]
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("plain"), "plain");
    }
}
