use crate::error::GenError;
use crate::types::{PropertyKind, ShaderProperty};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub trait PropertySource {
    fn shader_names(&self) -> Vec<String>;

    // None when the source has never heard of `target`.
    fn shader_properties(&self, target: &str) -> Result<Option<Vec<ShaderProperty>>>;
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShaderEntry {
    pub name: String,
    pub properties: Vec<ShaderProperty>,
}

#[derive(Debug, Clone, Default)]
pub struct ShaderCatalog {
    pub shaders: Vec<ShaderEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestJson {
    #[serde(default)]
    shaders: Vec<ManifestShader>,
}

#[derive(Debug, Deserialize)]
struct ManifestShader {
    name: String,
    #[serde(default)]
    properties: Vec<ManifestProperty>,
}

#[derive(Debug, Deserialize)]
struct ManifestProperty {
    name: String,
    kind: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    index: Option<usize>,
}

impl ShaderCatalog {
    pub fn new(shaders: Vec<ShaderEntry>) -> Self {
        Self { shaders }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed reading {}", path.display()))?;
        let is_manifest = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_manifest {
            Self::from_manifest_json(&raw)
                .with_context(|| format!("Invalid property manifest {}", path.display()))
        } else {
            Self::from_shaderlab(&raw)
                .with_context(|| format!("Invalid shader source {}", path.display()))
        }
    }

    pub fn from_manifest_json(raw: &str) -> Result<Self> {
        let manifest: ManifestJson = serde_json::from_str(raw)?;
        let shaders = manifest
            .shaders
            .into_iter()
            .map(|shader| ShaderEntry {
                name: shader.name,
                properties: shader
                    .properties
                    .into_iter()
                    .enumerate()
                    .map(|(pos, p)| ShaderProperty {
                        kind: PropertyKind::from_keyword(&p.kind),
                        name: p.name,
                        description: p.description,
                        index: p.index.unwrap_or(pos),
                    })
                    .collect(),
            })
            .collect();
        Ok(Self { shaders })
    }

    pub fn from_shaderlab(raw: &str) -> Result<Self> {
        Ok(Self {
            shaders: vec![parse_shaderlab(raw)?],
        })
    }
}

impl PropertySource for ShaderCatalog {
    fn shader_names(&self) -> Vec<String> {
        self.shaders.iter().map(|s| s.name.clone()).collect()
    }

    fn shader_properties(&self, target: &str) -> Result<Option<Vec<ShaderProperty>>> {
        Ok(self
            .shaders
            .iter()
            .find(|s| s.name == target)
            .map(|s| s.properties.clone()))
    }
}

// Blanks out `//` and `/* */` comments, keeping newlines so positions still map
// to the same source line.
fn strip_comments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_quotes = false;
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' || c == '\n' {
                in_quotes = false;
            }
            out.push(c);
            continue;
        }
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_quotes = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = ' ';
                for next in chars.by_ref() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn line(&self) -> usize {
        1 + self.chars[..self.pos.min(self.chars.len())]
            .iter()
            .filter(|c| **c == '\n')
            .count()
    }

    fn error(&self, message: impl Into<String>) -> GenError {
        GenError::ShaderLab {
            line: self.line(),
            message: message.into(),
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, c: char, what: &str) -> Result<(), GenError> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected `{}` {}", c, what)))
        }
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn quoted(&mut self, what: &str) -> Result<String, GenError> {
        self.expect('"', what)?;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let text = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(text);
            }
            self.pos += 1;
        }
        Err(self.error("unterminated string"))
    }

    // Positioned on `open`; consumes through the matching `close`.
    fn skip_balanced(&mut self, open: char, close: char) -> Result<(), GenError> {
        let start_line = self.line();
        let mut depth = 0usize;
        let mut in_quotes = false;
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '"' => in_quotes = !in_quotes,
                _ if in_quotes => {}
                c if c == open => depth += 1,
                c if c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(GenError::ShaderLab {
            line: start_line,
            message: format!("unclosed `{}`", open),
        })
    }

    // Moves past the next standalone occurrence of `keyword` outside strings.
    fn find_keyword(&mut self, keyword: &str) -> bool {
        let kw: Vec<char> = keyword.chars().collect();
        let is_ident = |c: &char| c.is_alphanumeric() || *c == '_';
        let mut in_quotes = false;
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c == '"' {
                in_quotes = !in_quotes;
            } else if !in_quotes
                && self.chars[self.pos..].starts_with(&kw)
                && (self.pos == 0 || !is_ident(&self.chars[self.pos - 1]))
                && !self.chars.get(self.pos + kw.len()).is_some_and(is_ident)
            {
                self.pos += kw.len();
                return true;
            }
            self.pos += 1;
        }
        false
    }
}

// Reads the `Shader "Name"` header and the declarations inside `Properties { }`.
// Declarations may share lines with each other or with the braces.
pub fn parse_shaderlab(raw: &str) -> Result<ShaderEntry, GenError> {
    let text = strip_comments(raw);
    let mut s = Scanner::new(&text);

    if !s.find_keyword("Shader") {
        return Err(GenError::ShaderLab {
            line: 1,
            message: "no `Shader \"...\"` header found".to_string(),
        });
    }
    s.skip_ws();
    let name = s.quoted("before the shader name")?;

    let mut properties = Vec::new();
    if !s.find_keyword("Properties") {
        return Ok(ShaderEntry { name, properties });
    }
    s.skip_ws();
    s.expect('{', "after Properties")?;

    loop {
        s.skip_ws();
        match s.peek() {
            None => return Err(s.error("unterminated Properties block")),
            Some('}') => break,
            Some(_) => {
                if let Some(property) = parse_property(&mut s, properties.len())? {
                    properties.push(property);
                }
            }
        }
    }
    Ok(ShaderEntry { name, properties })
}

// [Attr]* _Name ("Description", Kind) = default
// Returns `None` for attributes left dangling at the end of the block.
fn parse_property(s: &mut Scanner, index: usize) -> Result<Option<ShaderProperty>, GenError> {
    while s.peek() == Some('[') {
        s.skip_balanced('[', ']')?;
        s.skip_ws();
    }
    if matches!(s.peek(), None | Some('}')) {
        return Ok(None);
    }

    let name = s.word();
    if name.is_empty() {
        return Err(s.error("expected a property name"));
    }
    s.skip_ws();
    s.expect('(', &format!("after property {}", name))?;
    s.skip_ws();
    let description = s.quoted(&format!("to open the description of {}", name))?;
    s.skip_ws();
    s.expect(',', &format!("before the type of {}", name))?;
    s.skip_ws();
    let keyword = s.word();
    if keyword.is_empty() {
        return Err(s.error(format!("property {} is missing its type", name)));
    }
    s.skip_ws();
    if s.peek() == Some('(') {
        s.skip_balanced('(', ')')?;
        s.skip_ws();
    }
    s.expect(')', &format!("to close property {}", name))?;
    s.skip_ws();
    s.expect('=', &format!("before the default of {}", name))?;
    s.skip_ws();
    skip_default_value(s, &name)?;

    Ok(Some(ShaderProperty {
        kind: PropertyKind::from_keyword(&keyword),
        name,
        description,
        index,
    }))
}

// `0.5`, `(1,1,1,1)` or `"white" {}`
fn skip_default_value(s: &mut Scanner, name: &str) -> Result<(), GenError> {
    match s.peek() {
        Some('(') => s.skip_balanced('(', ')'),
        Some('"') => {
            s.quoted("")?;
            s.skip_ws();
            if s.peek() == Some('{') {
                s.skip_balanced('{', '}')?;
            }
            Ok(())
        }
        _ => {
            let start = s.pos;
            while s.peek().is_some_and(|c| !c.is_whitespace() && c != '}') {
                s.pos += 1;
            }
            if s.pos == start {
                Err(s.error(format!("property {} is missing its default value", name)))
            } else {
                Ok(())
            }
        }
    }
}
