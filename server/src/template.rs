//! Minimal form template: `{{Name}}` placeholders and `{{#Name}}...{{/Name}}` sections.
//!
//! Placeholder values are HTML-escaped. A section is emitted only when its
//! value is non-empty.

use std::path::{Path, PathBuf};

use contact_card::ContactRecord;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Could not read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse template: {0}")]
    Parse(String),
    #[error("Unknown placeholder: {0}")]
    UnknownPlaceholder(String),
}

/// Values the form template can reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub contact: ContactRecord,
    /// Public URL of the generated wallpaper, empty before any submission.
    pub qr_code: String,
}

impl FormView {
    pub fn submitted(contact: ContactRecord, qr_code: String) -> Self {
        Self { contact, qr_code }
    }

    fn value(&self, name: &str) -> Option<&str> {
        let c = &self.contact;
        let v = match name {
            "FirstName" => &c.first_name,
            "SurName" => &c.sur_name,
            "Company" => &c.company,
            "Title" => &c.title,
            "Email" => &c.email,
            "Phone" => &c.phone,
            "QRCode" => &self.qr_code,
            _ => return None,
        };
        Some(v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Var(String),
    Section(String, Vec<Node>),
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Read and parse a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut rest = source;
        let nodes = parse_nodes(&mut rest, None)?;
        Ok(Self { nodes })
    }

    pub fn render(&self, view: &FormView) -> Result<String, TemplateError> {
        let mut out = String::new();
        render_nodes(&self.nodes, view, &mut out)?;
        Ok(out)
    }
}

fn parse_nodes<'a>(rest: &mut &'a str, section: Option<&str>) -> Result<Vec<Node>, TemplateError> {
    let mut nodes = Vec::new();

    loop {
        let current: &'a str = *rest;
        let Some(start) = current.find("{{") else {
            if let Some(name) = section {
                return Err(TemplateError::Parse(format!("section {name:?} is never closed")));
            }
            if !current.is_empty() {
                nodes.push(Node::Text(current.to_string()));
            }
            *rest = "";
            return Ok(nodes);
        };

        if start > 0 {
            nodes.push(Node::Text(current[..start].to_string()));
        }
        let after_open = &current[start + 2..];
        let end = after_open
            .find("}}")
            .ok_or_else(|| TemplateError::Parse("unterminated tag".into()))?;
        let tag = after_open[..end].trim();
        *rest = &after_open[end + 2..];

        if let Some(name) = tag.strip_prefix('#') {
            let name = name.trim();
            let children = parse_nodes(rest, Some(name))?;
            nodes.push(Node::Section(name.to_string(), children));
        } else if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            return match section {
                Some(open) if open == name => Ok(nodes),
                _ => Err(TemplateError::Parse(format!("unexpected closing tag {name:?}"))),
            };
        } else if tag.is_empty() {
            return Err(TemplateError::Parse("empty tag".into()));
        } else {
            nodes.push(Node::Var(tag.to_string()));
        }
    }
}

fn render_nodes(nodes: &[Node], view: &FormView, out: &mut String) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) => {
                let value = view
                    .value(name)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(name.clone()))?;
                escape_html_into(value, out);
            }
            Node::Section(name, children) => {
                let value = view
                    .value(name)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(name.clone()))?;
                if !value.is_empty() {
                    render_nodes(children, view, out)?;
                }
            }
        }
    }
    Ok(())
}

fn escape_html_into(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
