//! Stylesheet parsing on top of the `cssparser` rule parsers.

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError, ParseErrorKind,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    StyleSheetParser,
};

use crate::{
    error::{Error, Result},
    font_face::FontFaceRule,
};

/// A top-level rule of a stylesheet.
///
/// Only `@font-face` is read in depth; everything else is kept as an opaque
/// marker so rule order survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    FontFace(FontFaceRule),
    /// Any other at-rule, by lower-cased name (`media`, `import`, ...).
    AtRule { name: String },
    /// A style rule, by its raw selector text.
    Style { prelude: String },
}

/// A parsed stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<CssRule>,
}

impl Stylesheet {
    /// Parse stylesheet text. Syntax errors are reported, not skipped.
    pub fn parse(css: &str) -> Result<Self> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rule_parser = TopLevelRuleParser;

        let mut rules = Vec::new();
        for result in StyleSheetParser::new(&mut parser, &mut rule_parser) {
            match result {
                Ok(rule) => rules.push(rule),
                Err((error, _)) => return Err(parse_error(&error)),
            }
        }

        Ok(Self { rules })
    }

    /// Consume the stylesheet, keeping its `@font-face` rules in source order.
    pub fn into_font_face_rules(self) -> Vec<FontFaceRule> {
        self.rules
            .into_iter()
            .filter_map(|rule| match rule {
                CssRule::FontFace(face) => Some(face),
                _ => None,
            })
            .collect()
    }
}

/// Select the `@font-face` rules, preserving source order.
pub fn font_face_rules(rules: &[CssRule]) -> Vec<&FontFaceRule> {
    rules
        .iter()
        .filter_map(|rule| match rule {
            CssRule::FontFace(face) => Some(face),
            _ => None,
        })
        .collect()
}

fn parse_error(error: &ParseError<'_, ()>) -> Error {
    let message = match &error.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {token:?}")
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_owned()
        }
        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(name)) => {
            format!("invalid @{name} rule")
        }
        ParseErrorKind::Basic(other) => format!("{other:?}"),
        ParseErrorKind::Custom(()) => "invalid declaration".to_owned(),
    };

    Error::Parse { line: error.location.line + 1, column: error.location.column, message }
}

/// Drain the remaining tokens of the current block or delimited range.
fn skip_rest(input: &mut Parser<'_, '_>) {
    while input.next().is_ok() {}
}

struct TopLevelRuleParser;

enum AtRulePrelude {
    FontFace,
    Other(String),
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser {
    type Prelude = AtRulePrelude;
    type AtRule = CssRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        skip_rest(input);
        if name.eq_ignore_ascii_case("font-face") {
            Ok(AtRulePrelude::FontFace)
        } else {
            Ok(AtRulePrelude::Other(name.to_ascii_lowercase()))
        }
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> std::result::Result<Self::AtRule, ()> {
        match prelude {
            AtRulePrelude::FontFace => Err(()),
            AtRulePrelude::Other(name) => Ok(CssRule::AtRule { name }),
        }
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::AtRule, ParseError<'i, Self::Error>> {
        match prelude {
            AtRulePrelude::FontFace => {
                let mut body_parser = FontFaceBodyParser;
                let mut declarations = Vec::new();
                for result in RuleBodyParser::new(input, &mut body_parser) {
                    declarations.push(result.map_err(|(error, _)| error)?);
                }
                Ok(CssRule::FontFace(FontFaceRule::new(declarations)))
            }
            AtRulePrelude::Other(name) => {
                skip_rest(input);
                Ok(CssRule::AtRule { name })
            }
        }
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser {
    type Prelude = String;
    type QualifiedRule = CssRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        skip_rest(input);
        Ok(input.slice_from(start).trim().to_owned())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        skip_rest(input);
        Ok(CssRule::Style { prelude })
    }
}

/// Reads the declarations of an `@font-face` block as raw text.
struct FontFaceBodyParser;

impl<'i> DeclarationParser<'i> for FontFaceBodyParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        skip_rest(input);
        Ok((name.to_ascii_lowercase(), input.slice_from(start).trim().to_owned()))
    }
}

impl<'i> AtRuleParser<'i> for FontFaceBodyParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for FontFaceBodyParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for FontFaceBodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
