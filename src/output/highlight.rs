//! Token classification for syntax-colored trace content.
//!
//! `tokenize` is total: any input yields spans whose concatenation is the
//! original string, whatever the nesting of parentheses or brackets.

use regex::Regex;
use std::sync::OnceLock;

/// Visual category of a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Gas,
    Contract,
    Function,
    CallType,
    Return,
    Event,
    Hex,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

impl<'a> Span<'a> {
    fn new(kind: SpanKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?P<gas>^\[\d+\])",
            r"|(?P<contract>[A-Za-z0-9_]+)::(?P<function>[A-Za-z0-9_]+)",
            r"|(?P<calltype>\[(?:staticcall|delegatecall|call)\])",
            r"|(?P<ret>← \[(?:Return|Stop)\])",
            r"|(?P<event>emit [A-Za-z0-9_]+)",
            r"|(?P<hex>0x[0-9a-fA-F]+)",
        ))
        .unwrap()
    })
}

/// Split content into styled spans
pub fn tokenize(content: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in token_regex().captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(Span::new(SpanKind::Plain, &content[cursor..whole.start()]));
        }

        if let (Some(contract), Some(function)) = (caps.name("contract"), caps.name("function")) {
            spans.push(Span::new(SpanKind::Contract, contract.as_str()));
            spans.push(Span::new(
                SpanKind::Plain,
                &content[contract.end()..function.start()],
            ));
            spans.push(Span::new(SpanKind::Function, function.as_str()));
        } else {
            let kind = [
                ("gas", SpanKind::Gas),
                ("calltype", SpanKind::CallType),
                ("ret", SpanKind::Return),
                ("event", SpanKind::Event),
                ("hex", SpanKind::Hex),
            ]
            .into_iter()
            .find(|(name, _)| caps.name(name).is_some())
            .map(|(_, kind)| kind)
            .unwrap_or(SpanKind::Plain);
            spans.push(Span::new(kind, whole.as_str()));
        }

        cursor = whole.end();
    }

    if cursor < content.len() {
        spans.push(Span::new(SpanKind::Plain, &content[cursor..]));
    }

    spans
}
