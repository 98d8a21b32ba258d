//! XML wire support: a small element tree read and written through
//! `quick-xml`, plus the extraction primitives mirroring [`super::json`].
//!
//! Namespace prefixes are stripped on read; element names are the
//! lowerCamelCase wire field names shared with the JSON encoding.

use std::fmt;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{ParseError, XmlDecode};

/// One parsed XML element: local name, accumulated text content, attributes
/// and child elements in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: text.into(),
            ..Element::default()
        }
    }

    /// Attach an attribute, e.g. an `xmlns` when embedding into a SOAP body.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// This element or its first descendant with the given local name,
    /// depth-first. Tolerates enclosing wrappers (SOAP body) around a
    /// message root.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut Writer<W>) {
        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if self.text.is_empty() && self.children.is_empty() {
            writer.write_event(Event::Empty(start)).unwrap();
            return;
        }
        writer.write_event(Event::Start(start)).unwrap();
        if !self.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&self.text)))
                .unwrap();
        }
        for child in &self.children {
            child.write_into(writer);
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .unwrap();
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Writing to an in-memory sink cannot fail.
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer);
        f.write_str(&String::from_utf8(writer.into_inner()).unwrap())
    }
}

/// Parse a document and return its root element.
pub fn parse(raw: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(raw);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(element_from_start(&e)?),
            Ok(Event::Empty(e)) => {
                let el = element_from_start(&e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => return Ok(el),
                }
            }
            Ok(Event::End(_)) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| ParseError::MalformedPayload("unbalanced end tag".into()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => return Ok(el),
                }
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| ParseError::MalformedPayload(e.to_string()))?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::MalformedPayload(
                    "document ended before the root element closed".into(),
                ));
            }
            Ok(_) => {} // declarations, comments, PIs
            Err(e) => return Err(ParseError::MalformedPayload(e.to_string())),
        }
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::MalformedPayload(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::MalformedPayload(e.to_string()))?
            .into_owned();
        el.attributes.push((key, value));
    }
    Ok(el)
}

/// Mandatory child element: absent fails the whole parse.
pub fn require<T: XmlDecode>(el: &Element, name: &str) -> Result<T, ParseError> {
    match el.child(name) {
        None => Err(ParseError::MissingMandatoryField(name.into())),
        Some(c) => T::decode_xml(c).map_err(|e| e.at(name)),
    }
}

/// Optional child element: absence reads back as `None`.
pub fn optional<T: XmlDecode>(el: &Element, name: &str) -> Result<Option<T>, ParseError> {
    match el.child(name) {
        None => Ok(None),
        Some(c) => T::decode_xml(c).map(Some).map_err(|e| e.at(name)),
    }
}

/// Mandatory repeated element. XML cannot distinguish an absent collection
/// from an empty one, so zero occurrences reports the empty-collection
/// failure.
pub fn require_list<T: XmlDecode>(el: &Element, name: &str) -> Result<Vec<T>, ParseError> {
    let items = collect::<T>(el, name)?;
    if items.is_empty() {
        return Err(ParseError::EmptyMandatoryCollection(name.into()));
    }
    Ok(items)
}

/// Optional repeated element; zero occurrences reads back as `None`.
pub fn optional_list<T: XmlDecode>(el: &Element, name: &str) -> Result<Option<Vec<T>>, ParseError> {
    let items = collect::<T>(el, name)?;
    Ok(if items.is_empty() { None } else { Some(items) })
}

fn collect<T: XmlDecode>(el: &Element, name: &str) -> Result<Vec<T>, ParseError> {
    el.children_named(name)
        .map(|c| T::decode_xml(c).map_err(|e| e.at(name)))
        .collect()
}
