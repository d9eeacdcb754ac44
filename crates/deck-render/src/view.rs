//! Renderable view tree.
//!
//! Both renderers build [`View`] values; the sinks turn them into an HTML
//! fragment (through a `quick_xml::Writer`, so text is always escaped) or
//! into plain text for a terminal.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Tags written as `<tag/>` with no closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<View>,
}

/// Start an element.
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

/// Element holding a single text child.
pub fn text_el(tag: &str, text: impl Into<String>) -> Element {
    Element::new(tag).text(text)
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Add a class, appending to an existing `class` attribute.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(&class);
            }
            None => self.attrs.push(("class".to_string(), class)),
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present.
    #[must_use]
    pub fn maybe(self, child: Option<impl Into<View>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(View::Text(text.into()))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    fn write_html<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (name, value) in &self.attrs {
            start.push_attribute((name.as_str(), value.as_str()));
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            child.write_html(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.tag.as_str())))?;
        Ok(())
    }
}

impl From<Element> for View {
    fn from(element: Element) -> Self {
        View::Element(element)
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::Text(text.to_string())
    }
}

impl View {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            View::Element(element) => Some(element),
            View::Text(_) => None,
        }
    }

    /// Write this view through an existing writer (indentation is the writer's choice).
    pub fn write_html<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            View::Element(element) => element.write_html(writer),
            View::Text(text) if text.is_empty() => Ok(()),
            View::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
                Ok(())
            }
        }
    }

    /// Compact HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_html(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// All text in document order, concatenated without separators.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Text(text) => out.push_str(text),
            View::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element with `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let View::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.collect_tag(tag, found);
            }
        }
    }

    /// Text of the first `h1`, if any.
    pub fn first_heading(&self) -> Option<String> {
        self.find_all("h1")
            .first()
            .map(|heading| heading.text_content())
    }

    /// Plain-text rendering.
    ///
    /// `h1` is underlined with `=`, `h2` with `-`, list items are bulleted
    /// and table rows become `| a | b |` lines. Other block elements emit
    /// their inline text on a line of its own.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        text_lines(self, &mut lines);
        let mut out = String::new();
        let mut blank = true;
        for line in lines {
            if line.is_empty() {
                if !blank {
                    out.push('\n');
                }
                blank = true;
            } else {
                out.push_str(&line);
                out.push('\n');
                blank = false;
            }
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }
}

fn is_inline(tag: &str) -> bool {
    matches!(tag, "span" | "strong" | "em" | "code" | "a" | "small" | "b" | "i")
}

fn inline_text(element: &Element) -> String {
    element
        .text_content()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_lines(view: &View, lines: &mut Vec<String>) {
    let element = match view {
        View::Text(text) => {
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !text.is_empty() {
                lines.push(text);
            }
            return;
        }
        View::Element(element) => element,
    };
    match element.tag.as_str() {
        "h1" | "h2" => {
            let heading = inline_text(element);
            let rule = if element.tag == "h1" { "=" } else { "-" };
            let underline = rule.repeat(heading.chars().count().max(1));
            lines.push(String::new());
            lines.push(heading);
            lines.push(underline);
            lines.push(String::new());
        }
        "li" => lines.push(format!("• {}", inline_text(element))),
        "tr" => {
            let cells: Vec<String> = element
                .children
                .iter()
                .filter_map(View::as_element)
                .map(inline_text)
                .collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        "style" | "script" | "head" => {}
        "p" | "h3" | "blockquote" => {
            let text = inline_text(element);
            if !text.is_empty() {
                lines.push(text);
            }
        }
        tag if is_inline(tag) => {
            let text = inline_text(element);
            if !text.is_empty() {
                lines.push(text);
            }
        }
        "ul" | "ol" | "table" => {
            for child in &element.children {
                text_lines(child, lines);
            }
            lines.push(String::new());
        }
        _ => {
            for child in &element.children {
                text_lines(child, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_text_and_attributes() {
        let view: View = el("p")
            .class("note")
            .text("Bias <in> & out")
            .into();
        let html = view.to_html().unwrap();
        assert!(html.starts_with(r#"<p class="note">"#));
        assert!(html.contains("Bias &lt;in&gt; &amp; out"));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn void_and_empty_elements() {
        let view: View = el("div")
            .child(el("br"))
            .child(el("td"))
            .into();
        assert_eq!(view.to_html().unwrap(), "<div><br/><td></td></div>");
    }

    #[test]
    fn text_rendering_blocks() {
        let view: View = el("div")
            .child(text_el("h1", "Key Takeaways"))
            .child(
                el("ul")
                    .child(text_el("li", "Quality over quantity"))
                    .child(el("li").child(text_el("strong", "Bias:")).text(" check sampling")),
            )
            .child(
                el("table").child(
                    el("tr")
                        .child(text_el("th", "Method"))
                        .child(text_el("th", "Use")),
                ),
            )
            .child(text_el("p", "Next up"))
            .into();
        assert_eq!(
            view.to_text(),
            "Key Takeaways\n=============\n\n• Quality over quantity\n• Bias: check sampling\n\n| Method | Use |\n\nNext up\n"
        );
    }

    #[test]
    fn find_and_text_content() {
        let view: View = el("section")
            .child(text_el("h1", "One"))
            .child(el("div").child(text_el("h1", "Two")))
            .into();
        let headings: Vec<String> = view
            .find_all("h1")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(headings, ["One", "Two"]);
        assert_eq!(view.first_heading().as_deref(), Some("One"));
        assert_eq!(view.text_content(), "OneTwo");
    }
}
