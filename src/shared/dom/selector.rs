// src/shared/dom/selector.rs

//! The selector subset the page skeleton is addressed with: type, `#id`,
//! `.class`, `:nth-child(n)`, the descendant combinator and comma lists.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("Invalid :nth-child argument: {0}")]
    InvalidNthChild(String),

    #[error("Unsupported pseudo-class: {0}")]
    UnsupportedPseudo(String),
}

/// What the matcher needs to know about an element.
pub trait SelectorTarget: Sized {
    fn tag_name(&self) -> &str;
    fn element_id(&self) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
    /// 1-based position among the parent's element children.
    fn sibling_index(&self) -> usize;
    fn parent_element(&self) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub nth_child: Option<usize>,
}

impl Compound {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(target.tag_name()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if target.element_id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| target.has_class(c)) {
            return false;
        }
        match self.nth_child {
            Some(n) => target.sibling_index() == n,
            None => true,
        }
    }
}

/// A descendant chain, outermost compound first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub compounds: Vec<Compound>,
}

impl ComplexSelector {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        let Some((last, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(target) {
            return false;
        }

        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = target.parent_element();
        while let Some(wanted) = remaining.peek() {
            let Some(node) = current else {
                return false;
            };
            if wanted.matches(&node) {
                remaining.next();
            }
            current = node.parent_element();
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub alternatives: Vec<ComplexSelector>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for group in input.split(',') {
            let compounds = group
                .split_whitespace()
                .map(parse_compound)
                .collect::<Result<Vec<_>, _>>()?;
            if compounds.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(ComplexSelector { compounds });
        }
        Ok(Self { alternatives })
    }

    pub fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(target))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    let chars: Vec<char> = input.chars().collect();
    let mut compound = Compound::default();
    let mut pos = 0;

    let read_ident = |start: usize| -> (String, usize) {
        let mut end = start;
        while end < chars.len() && is_ident_char(chars[end]) {
            end += 1;
        }
        (chars[start..end].iter().collect(), end)
    };

    if pos < chars.len() && (chars[pos].is_ascii_alphabetic() || chars[pos] == '*') {
        if chars[pos] == '*' {
            pos += 1;
        } else {
            let (tag, end) = read_ident(pos);
            compound.tag = Some(tag);
            pos = end;
        }
    }

    while pos < chars.len() {
        let marker = chars[pos];
        match marker {
            '#' | '.' => {
                let (ident, end) = read_ident(pos + 1);
                if ident.is_empty() {
                    return Err(SelectorError::UnexpectedChar {
                        found: marker,
                        position: pos,
                    });
                }
                if marker == '#' {
                    compound.id = Some(ident);
                } else {
                    compound.classes.push(ident);
                }
                pos = end;
            }
            ':' => {
                let (name, end) = read_ident(pos + 1);
                if name != "nth-child" {
                    return Err(SelectorError::UnsupportedPseudo(name));
                }
                let rest: String = chars[end..].iter().collect();
                let Some(close) = rest.find(')') else {
                    return Err(SelectorError::InvalidNthChild(rest));
                };
                let Some(arg) = rest[..close].strip_prefix('(') else {
                    return Err(SelectorError::InvalidNthChild(rest));
                };
                let n = arg
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| SelectorError::InvalidNthChild(arg.to_string()))?;
                compound.nth_child = Some(n);
                pos = end + rest[..=close].chars().count();
            }
            other => {
                return Err(SelectorError::UnexpectedChar {
                    found: other,
                    position: pos,
                })
            }
        }
    }

    Ok(compound)
}
