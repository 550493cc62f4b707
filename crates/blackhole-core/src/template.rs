//! Shader template rendering.
//!
//! Templates are Mustache: `{{key}}` substitutes, `{{#key}} ... {{/key}}` and
//! `{{^key}} ... {{/key}}` branch on truthiness, `{{! ... }}` is a comment.
//! Rendering goes through the `mustache` crate, which HTML-escapes `{{key}}`.
//! Substituted values are numbers and plain names, so escaping leaves them be.
//!
//! Before rendering, every tag is checked against the context. An unknown key
//! is an error, including inside sections that end up hidden, so a typo fails
//! for every parameter combination instead of only the ones that reach it.
//! Partials and delimiter changes are rejected.

use crate::error::TemplateError;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::fmt;

/// A value the template can substitute or branch on.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl TemplateValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            TemplateValue::Bool(b) => *b,
            TemplateValue::Int(i) => *i != 0,
            TemplateValue::Float(f) => *f != 0.0,
            TemplateValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Bool(b) => write!(f, "{b}"),
            TemplateValue::Int(i) => write!(f, "{i}"),
            // shader languages want a decimal point on float literals
            TemplateValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            TemplateValue::Float(v) => write!(f, "{v}"),
            TemplateValue::Text(s) => f.write_str(s),
        }
    }
}

/// Explicit key/value substitution map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateContext {
    values: FnvHashMap<&'static str, TemplateValue>,
}

impl TemplateContext {
    pub fn insert(&mut self, key: &'static str, value: TemplateValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&TemplateValue, TemplateError> {
        self.get(key)
            .ok_or_else(|| TemplateError::UnknownKey(key.to_string()))
    }
}

/// Turns template text plus a context into final program text.
pub trait TemplateEngine {
    fn render(&self, template: &str, ctx: &TemplateContext) -> Result<String, TemplateError>;
}

/// Mustache rendering with strict key checking.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mustache;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Usage {
    Value,
    Section,
}

/// Every key the template names and how it is used. Fails on unknown keys,
/// unbalanced sections and tags the engine should never see.
fn key_usage<'t>(
    template: &'t str,
    ctx: &TemplateContext,
) -> Result<FnvHashMap<&'t str, Usage>, TemplateError> {
    let mut usage: FnvHashMap<&'t str, Usage> = FnvHashMap::default();
    let mut open: SmallVec<[&'t str; 8]> = SmallVec::new();
    let mut rest = template;
    let mut offset = 0usize;

    while let Some(start) = rest.find("{{") {
        let tag_at = offset + start;
        let after_open = &rest[start + 2..];
        let (inner, close_len) = match after_open.strip_prefix('{') {
            Some(raw) => (raw, 3),
            None => (after_open, 2),
        };
        let close = if close_len == 3 { "}}}" } else { "}}" };
        let len = inner
            .find(close)
            .ok_or(TemplateError::UnterminatedTag(tag_at))?;
        let tag = inner[..len].trim();
        let consumed = (after_open.len() - inner.len()) + start + 2 + len + close_len;
        rest = &rest[consumed..];
        offset += consumed;

        let mut chars = tag.chars();
        let (name, kind) = match chars.next() {
            None => return Err(TemplateError::EmptyTag(tag_at)),
            Some('!') => continue,
            Some('>' | '=') => return Err(TemplateError::UnsupportedTag(tag_at)),
            Some('#' | '^') => {
                let name = chars.as_str().trim();
                open.push(name);
                (name, Usage::Section)
            }
            Some('/') => {
                let name = chars.as_str().trim();
                let expected = open
                    .pop()
                    .ok_or_else(|| TemplateError::UnexpectedClose(name.to_string()))?;
                if expected != name {
                    return Err(TemplateError::MismatchedClose {
                        expected: expected.to_string(),
                        found: name.to_string(),
                    });
                }
                continue;
            }
            Some('&') => (chars.as_str().trim(), Usage::Value),
            Some(_) => (tag, Usage::Value),
        };
        if name.is_empty() {
            return Err(TemplateError::EmptyTag(tag_at));
        }
        ctx.lookup(name)?;
        match usage.insert(name, kind) {
            Some(previous) if previous != kind => {
                return Err(TemplateError::MixedUsage(name.to_string()))
            }
            _ => {}
        }
    }
    if let Some(name) = open.pop() {
        return Err(TemplateError::UnclosedSection(name.to_string()));
    }
    Ok(usage)
}

impl TemplateEngine for Mustache {
    fn render(&self, template: &str, ctx: &TemplateContext) -> Result<String, TemplateError> {
        let usage = key_usage(template, ctx)?;

        // sections branch on booleans, everything else is substituted as text
        let mut data = mustache::MapBuilder::new();
        for (name, kind) in &usage {
            let value = ctx.lookup(name)?;
            data = match kind {
                Usage::Section => data.insert_bool(*name, value.is_truthy()),
                Usage::Value => data.insert_str(*name, value.to_string()),
            };
        }

        let compiled =
            mustache::compile_str(template).map_err(|e| TemplateError::Engine(e.to_string()))?;
        let mut out = Vec::with_capacity(template.len());
        compiled
            .render_data(&mut out, &data.build())
            .map_err(|e| TemplateError::Engine(e.to_string()))?;
        String::from_utf8(out).map_err(|e| TemplateError::Engine(e.to_string()))
    }
}
