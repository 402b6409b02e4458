//! Line-oriented INI parser
//!
//! Produces a [`Document`] with sections and keys in file order. Errors
//! carry the 1-based line number of the offending line.

use crate::document::{Document, Section, Value};
use crate::error::{Error, Result};

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// An entry whose value may still grow through continuation lines.
struct OpenEntry {
    key: String,
    indent: usize,
    first: String,
    items: Vec<String>,
    /// Indentation of the first continuation line, once seen.
    item_indent: Option<usize>,
}

impl OpenEntry {
    fn into_value(self) -> Value {
        if self.items.is_empty() {
            return Value::Scalar(self.first);
        }
        let mut items = Vec::with_capacity(self.items.len() + 1);
        if !self.first.is_empty() {
            items.push(self.first);
        }
        items.extend(self.items);
        Value::List(items)
    }
}

#[derive(Default)]
struct Parser {
    doc: Document,
    section: Option<Section>,
    entry: Option<OpenEntry>,
}

impl Parser {
    fn line(&mut self, lineno: usize, raw: &str) -> Result<()> {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIXES) {
            return Ok(());
        }

        let indent = raw.len() - raw.trim_start().len();
        let content = strip_inline_comment(trimmed);

        if let Some(entry) = self.entry.as_mut() {
            if indent > entry.indent {
                match entry.item_indent {
                    Some(expected) if indent < expected => {
                        return Err(Error::parse(
                            lineno,
                            format!(
                                "inconsistent indentation in value of `{}`: expected at least {} columns, found {}",
                                entry.key, expected, indent
                            ),
                        ));
                    }
                    Some(_) => {}
                    None => entry.item_indent = Some(indent),
                }
                if !content.is_empty() {
                    entry.items.push(content.to_string());
                }
                return Ok(());
            }
        }
        self.close_entry();

        if content.starts_with('[') {
            return self.header(lineno, content);
        }
        self.key_value(lineno, indent, content)
    }

    fn header(&mut self, lineno: usize, content: &str) -> Result<()> {
        let name = content
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.contains(['[', ']']))
            .ok_or_else(|| {
                Error::parse(lineno, format!("malformed section header `{content}`"))
            })?;

        let duplicate = self.doc.has_section(name)
            || self.section.as_ref().is_some_and(|s| s.name() == name);
        if duplicate {
            return Err(Error::parse(lineno, format!("duplicate section `[{name}]`")));
        }

        self.close_section();
        self.section = Some(Section::new(name));
        Ok(())
    }

    fn key_value(&mut self, lineno: usize, indent: usize, content: &str) -> Result<()> {
        let Some((key, value)) = content.split_once('=') else {
            return Err(Error::parse(
                lineno,
                format!("malformed line `{content}`: expected `key = value`"),
            ));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::parse(lineno, "missing key before `=`"));
        }

        let Some(section) = self.section.as_ref() else {
            return Err(Error::parse(
                lineno,
                format!("`{key}` appears before any section header"),
            ));
        };
        if section.contains_key(key) {
            return Err(Error::parse(
                lineno,
                format!("duplicate key `{key}` in section `[{}]`", section.name()),
            ));
        }

        self.entry = Some(OpenEntry {
            key: key.to_string(),
            indent,
            first: value.trim().to_string(),
            items: Vec::new(),
            item_indent: None,
        });
        Ok(())
    }

    fn close_entry(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        if let Some(section) = self.section.as_mut() {
            let key = entry.key.clone();
            section.insert(key, entry.into_value());
        }
    }

    fn close_section(&mut self) {
        if let Some(section) = self.section.take() {
            self.doc.push_section(section);
        }
    }

    fn finish(mut self) -> Document {
        self.close_entry();
        self.close_section();
        self.doc
    }
}

/// Drop a trailing comment introduced by whitespace followed by `#` or `;`.
fn strip_inline_comment(content: &str) -> &str {
    let mut prev_ws = false;
    for (idx, ch) in content.char_indices() {
        if prev_ws && COMMENT_PREFIXES.contains(&ch) {
            return content[..idx].trim_end();
        }
        prev_ws = ch.is_whitespace();
    }
    content
}

pub(crate) fn parse(source: &str) -> Result<Document> {
    let mut parser = Parser::default();
    for (idx, line) in source.lines().enumerate() {
        parser.line(idx + 1, line)?;
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_inline_comment_requires_leading_whitespace() {
        assert_eq!(strip_inline_comment("a = b ; note"), "a = b");
        assert_eq!(strip_inline_comment("a = b\t# note"), "a = b");
        assert_eq!(strip_inline_comment("-DNAME=\"a#b\""), "-DNAME=\"a#b\"");
        assert_eq!(strip_inline_comment("url = x;y"), "url = x;y");
    }

    #[test]
    fn first_line_value_leads_list() {
        let doc = parse("[s]\nflags = -Os\n  -Wall\n").unwrap();
        assert_eq!(
            doc.section("s").unwrap().get("flags"),
            Some(&Value::list(["-Os", "-Wall"]))
        );
    }
}
