//! Line-oriented markdown tokenizer

/// Inline run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

/// One line of parsed content, or the break between two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Heading { level: u8, spans: Vec<Inline> },
    ListItem(Vec<Inline>),
    Line(Vec<Inline>),
    LineBreak,
}

const MAX_HEADING_LEVEL: usize = 3;

/// Parse markdown source into block tokens separated by [`Token::LineBreak`].
///
/// Every `\n` produces exactly one break, so blank lines survive as empty
/// [`Token::Line`]s between breaks.
pub fn tokenize(source: &str) -> Vec<Token> {
    split_lines(source, parse_block)
}

/// Tokens for text that is not treated as markdown: each line is a single
/// text run.
pub fn plain(source: &str) -> Vec<Token> {
    split_lines(source, |line| {
        if line.is_empty() {
            Token::Line(Vec::new())
        } else {
            Token::Line(vec![Inline::Text(line.to_string())])
        }
    })
}

fn split_lines(source: &str, mut block: impl FnMut(&str) -> Token) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            tokens.push(Token::LineBreak);
        }
        tokens.push(block(line));
    }
    tokens
}

fn parse_block(line: &str) -> Token {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&hashes) {
        if let Some(text) = line[hashes..].strip_prefix(' ') {
            return Token::Heading {
                level: hashes as u8,
                spans: parse_inline(text),
            };
        }
    }

    if let Some(text) = line.strip_prefix("- ") {
        return Token::ListItem(parse_inline(text));
    }

    Token::Line(parse_inline(line))
}

/// Split a line into text, bold and italic runs. Bold markers are matched
/// before italic ones; an unclosed or empty marker stays literal.
fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut pending = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**").filter(|end| *end > 0) {
                flush(&mut pending, &mut spans);
                spans.push(Inline::Bold(after[..end].to_string()));
                rest = &after[end + 2..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*').filter(|end| *end > 0) {
                flush(&mut pending, &mut spans);
                spans.push(Inline::Italic(after[..end].to_string()));
                rest = &after[end + 1..];
                continue;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            pending.push(ch);
        }
        rest = chars.as_str();
    }

    flush(&mut pending, &mut spans);
    spans
}

fn flush(pending: &mut String, spans: &mut Vec<Inline>) {
    if !pending.is_empty() {
        spans.push(Inline::Text(std::mem::take(pending)));
    }
}
