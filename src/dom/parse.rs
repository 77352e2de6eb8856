//! Minimal HTML fragment parser.
//!
//! Covers the subset server-rendered form markup actually uses: elements,
//! double/single/unquoted attribute values, bare attributes, text, comments,
//! void and self-closed elements. No entity decoding and no error recovery;
//! malformed input is a typed error. Whitespace-only text between tags is
//! dropped so that rendered and re-serialized fragments stay comparable.

use indexmap::IndexMap;

use super::arena::{Document, NodeId};
use super::{is_void_tag, DomError};

pub fn parse(html: &str) -> Result<Document, DomError> {
    let mut doc = Document::new();
    let root = doc.root();
    let mut parser = Parser { html, pos: 0 };
    parser.run(&mut doc, root)?;
    Ok(doc)
}

struct Parser<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn run(&mut self, doc: &mut Document, root: NodeId) -> Result<(), DomError> {
        let mut stack = vec![root];

        while self.pos < self.html.len() {
            let rest = &self.html[self.pos..];
            let parent = *stack
                .last()
                .ok_or_else(|| DomError::Parse(self.pos, "parser stack underflow".into()))?;

            if let Some(after_comment) = rest.strip_prefix("<!--") {
                let end = after_comment
                    .find("-->")
                    .ok_or_else(|| DomError::Parse(self.pos, "unterminated comment".into()))?;
                self.pos += 4 + end + 3;
            } else if rest.starts_with("</") {
                let end = rest
                    .find('>')
                    .ok_or_else(|| DomError::Parse(self.pos, "unterminated closing tag".into()))?;
                let tag = rest[2..end].trim().to_ascii_lowercase();
                if stack.len() == 1 {
                    return Err(DomError::Parse(
                        self.pos,
                        format!("unexpected closing tag </{tag}>"),
                    ));
                }
                if doc.tag(parent) != Some(tag.as_str()) {
                    return Err(DomError::Parse(
                        self.pos,
                        format!("mismatched closing tag </{tag}>"),
                    ));
                }
                stack.pop();
                self.pos += end + 1;
            } else if rest.starts_with('<') {
                self.pos += 1;
                let tag = self.read_tag_name()?;
                let (attrs, self_closed) = self.read_attrs()?;
                let element = doc.create_element(parent, &tag, attrs);
                if !self_closed && !is_void_tag(&tag) {
                    stack.push(element);
                }
            } else {
                let next = rest.find('<').map(|i| self.pos + i).unwrap_or(self.html.len());
                let text = &self.html[self.pos..next];
                if !text.trim().is_empty() {
                    doc.create_text(parent, text);
                }
                self.pos = next;
            }
        }

        if stack.len() > 1 {
            let tag = doc.tag(stack[stack.len() - 1]).unwrap_or("?").to_string();
            return Err(DomError::Parse(self.pos, format!("unclosed element <{tag}>")));
        }
        Ok(())
    }

    fn read_tag_name(&mut self) -> Result<String, DomError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(DomError::Parse(start, "missing tag name".into()));
        }
        Ok(self.html[start..self.pos].to_ascii_lowercase())
    }

    /// Reads attributes up to and including the closing `>`. Returns the
    /// attribute map and whether the tag was self-closed with `/>`.
    fn read_attrs(&mut self) -> Result<(IndexMap<String, String>, bool), DomError> {
        let mut attrs = IndexMap::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(DomError::Parse(self.pos, "unterminated tag".into())),
                Some('>') => {
                    self.pos += 1;
                    return Ok((attrs, false));
                }
                Some('/') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some('>') {
                        self.pos += 1;
                        return Ok((attrs, true));
                    }
                    return Err(DomError::Parse(self.pos, "stray '/' in tag".into()));
                }
                Some(_) => {
                    let name = self.read_attr_name()?;
                    self.skip_whitespace();
                    let value = if self.peek() == Some('=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        self.read_attr_value()?
                    } else {
                        // Bare attribute such as `required`.
                        String::new()
                    };
                    attrs.insert(name, value);
                }
            }
        }
    }

    fn read_attr_name(&mut self) -> Result<String, DomError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            self.pos += c.len_utf8();
        }
        if self.pos == start {
            return Err(DomError::Parse(start, "missing attribute name".into()));
        }
        Ok(self.html[start..self.pos].to_ascii_lowercase())
    }

    fn read_attr_value(&mut self) -> Result<String, DomError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                let end = self.html[start..]
                    .find(quote)
                    .map(|i| start + i)
                    .ok_or_else(|| {
                        DomError::Parse(start, "unterminated attribute value".into())
                    })?;
                self.pos = end + 1;
                Ok(self.html[start..end].to_string())
            }
            Some(_) => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '>' {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                Ok(self.html[start..self.pos].to_string())
            }
            None => Err(DomError::Parse(self.pos, "missing attribute value".into())),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.html[self.pos..].chars().next()
    }
}
