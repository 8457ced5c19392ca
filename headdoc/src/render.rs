//! Markup rendering for the document model
//!
//! Each routine is a pure function of the model at call time. Block-level
//! lines are prefixed with the document's indentation and terminated with its
//! line ending.

use itertools::Itertools;

use crate::escape::escape_html;
use crate::model::DocumentModel;
use crate::tables;
use crate::value::Value;

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const DEFAULT_CHARSET: &str = "UTF-8";

/// Logical page sections that have a render routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// DOCTYPE declaration
    Doctype,
    /// `Content-type` meta tag
    Charset,
    /// `<title>` element
    Title,
    /// Named meta tags
    Metas,
    /// Description meta tag
    Description,
    /// Keywords meta tag
    Keywords,
    /// Stylesheet links
    Stylesheets,
    /// Inline `<style>` blocks
    CssBlocks,
    /// External scripts
    Scripts,
    /// Inline scripts in the head
    ScriptBlocks,
    /// Inline scripts at the end of the body
    ScriptBlocksBottom,
    /// Opening `<html>` tag
    HtmlOpen,
    /// Closing `</html>` tag
    HtmlClose,
}

/// Section names accepted by [`Renderer::render`]
pub const SECTIONS: [(&str, Section); 13] = [
    ("doctype", Section::Doctype),
    ("charset", Section::Charset),
    ("title", Section::Title),
    ("metas", Section::Metas),
    ("description", Section::Description),
    ("keywords", Section::Keywords),
    ("stylesheets", Section::Stylesheets),
    ("cssBlocks", Section::CssBlocks),
    ("scripts", Section::Scripts),
    ("scriptBlocks", Section::ScriptBlocks),
    ("scriptBlocksBottom", Section::ScriptBlocksBottom),
    ("htmlOpen", Section::HtmlOpen),
    ("htmlClose", Section::HtmlClose),
];

impl Section {
    /// Look up a section by name
    pub fn from_name(name: &str) -> Option<Self> {
        SECTIONS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, section)| *section)
    }
}

/// Renders markup fragments from a borrowed [`DocumentModel`]
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    doc: &'a DocumentModel,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over `doc`
    pub fn new(doc: &'a DocumentModel) -> Self {
        Self { doc }
    }

    /// Render a section by name
    ///
    /// # Returns
    /// * `Some(String)` - Markup for a known section
    /// * `None` - No section with that name
    pub fn render(&self, name: &str) -> Option<String> {
        Section::from_name(name).map(|section| self.section(section))
    }

    /// Render one section
    pub fn section(&self, section: Section) -> String {
        match section {
            Section::Doctype => self.doctype(),
            Section::Charset => self.charset(),
            Section::Title => self.title(),
            Section::Metas => self.metas(),
            Section::Description => self.description(),
            Section::Keywords => self.keywords(),
            Section::Stylesheets => self.stylesheets(),
            Section::CssBlocks => self.css_blocks(),
            Section::Scripts => self.scripts(),
            Section::ScriptBlocks => self.script_blocks(),
            Section::ScriptBlocksBottom => self.script_blocks_bottom(),
            Section::HtmlOpen => self.html_open(),
            Section::HtmlClose => self.html_close(),
        }
    }

    /// DOCTYPE declaration, or nothing for an empty or unknown doctype
    pub fn doctype(&self) -> String {
        tables::doctype_declaration(self.doc.doctype())
            .map(|declaration| format!("{}{}", declaration, self.doc.eol()))
            .unwrap_or_default()
    }

    /// `Content-type` meta tag carrying the charset (`UTF-8` when unset)
    pub fn charset(&self) -> String {
        let charset = match self.doc.charset() {
            "" => DEFAULT_CHARSET,
            charset => charset,
        };
        self.line(&format!(
            "<meta http-equiv=\"Content-type\" content=\"text/html; charset={}\" />",
            charset
        ))
    }

    /// `<title>` with all title entries joined by the separator
    pub fn title(&self) -> String {
        let title = self
            .container("title")
            .iter()
            .join(self.doc.separator());
        self.line(&format!("<title>{}</title>", escape_html(&title)))
    }

    /// Meta tags from the metas container
    ///
    /// A `charset` entry, or an `http-equiv` entry while the document charset
    /// is set, becomes the `Content-type` tag. Other entries need content;
    /// the content is escaped but the name is not.
    pub fn metas(&self) -> String {
        let mut output = String::new();
        for item in self.container("metas") {
            let Some(name) = item.text_field("name") else {
                continue;
            };
            if name == "charset" || (name == "http-equiv" && !self.doc.charset().is_empty()) {
                output.push_str(&self.charset());
                continue;
            }
            match item.text_field("content") {
                Some(content) if !content.is_empty() => {
                    output.push_str(&self.line(&format!(
                        "<meta name=\"{}\" content=\"{}\" />",
                        name,
                        escape_html(content)
                    )));
                }
                _ => {}
            }
        }
        output
    }

    /// Description meta tag, or nothing when the description is empty
    pub fn description(&self) -> String {
        self.named_meta("description", self.doc.description())
    }

    /// Keywords meta tag, or nothing when no keywords are set
    pub fn keywords(&self) -> String {
        self.named_meta("keywords", self.doc.keywords())
    }

    /// `<link>` tags for every stylesheet
    ///
    /// Record entries without an `href` are skipped. Values are not escaped.
    pub fn stylesheets(&self) -> String {
        let mut output = String::new();
        for item in self.container("stylesheets") {
            let (href, media) = match item {
                Value::Text(href) => (href.as_str(), None),
                Value::Record(_) => match item.text_field("href") {
                    Some(href) => (href, item.text_field("media")),
                    None => continue,
                },
                _ => continue,
            };
            let media = media
                .filter(|media| !media.is_empty())
                .map(|media| format!(" media=\"{}\"", media))
                .unwrap_or_default();
            output.push_str(&self.line(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\"{} />",
                href, media
            )));
        }
        output
    }

    /// Inline `<style>` blocks
    pub fn css_blocks(&self) -> String {
        self.blocks("cssBlocks", "style")
    }

    /// `<script src>` tags for every external script
    pub fn scripts(&self) -> String {
        let mut output = String::new();
        for item in self.container("scripts") {
            let src = match item {
                Value::Text(src) => src.as_str(),
                _ => match item.text_field("src") {
                    Some(src) => src,
                    None => continue,
                },
            };
            let mut tag = format!("<script src=\"{}\"", src);
            if let Some(kind) = item.text_field("type").filter(|kind| !kind.is_empty()) {
                tag.push_str(&format!(" type=\"{}\"", kind));
            }
            if item.flag("defer") {
                tag.push_str(" defer=\"defer\"");
            }
            if item.flag("async") {
                tag.push_str(" async=\"async\"");
            }
            tag.push_str("></script>");
            output.push_str(&self.line(&tag));
        }
        output
    }

    /// Inline scripts for the head
    pub fn script_blocks(&self) -> String {
        self.blocks("scriptBlocks", "script")
    }

    /// Inline scripts for the end of the body
    pub fn script_blocks_bottom(&self) -> String {
        self.blocks("scriptBlocksBottom", "script")
    }

    /// Opening `<html>` tag with namespace, language and direction
    ///
    /// The language attribute is only emitted for a valid ISO 639-1 primary
    /// subtag; XHTML doctypes use `xml:lang` and add the XHTML namespace.
    pub fn html_open(&self) -> String {
        let xhtml = self.doc.is_xhtml();
        let mut tag = String::from("<html");
        if xhtml {
            tag.push_str(&format!(" xmlns=\"{}\"", XHTML_NAMESPACE));
        }

        let code = self.doc.language_code();
        if tables::is_valid_language(&code) {
            let attribute = if xhtml { "xml:lang" } else { "lang" };
            tag.push_str(&format!(" {}=\"{}\"", attribute, code));
        }

        let direction = self.doc.direction();
        if !direction.is_empty() {
            tag.push_str(&format!(" dir=\"{}\"", escape_html(direction)));
        }

        tag.push('>');
        tag.push_str(self.doc.eol());
        tag
    }

    /// Closing `</html>` tag
    pub fn html_close(&self) -> String {
        "</html>".to_string()
    }

    fn line(&self, markup: &str) -> String {
        format!("{}{}{}", self.doc.indent(), markup, self.doc.eol())
    }

    fn named_meta(&self, name: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        self.line(&format!(
            "<meta name=\"{}\" content=\"{}\" />",
            name,
            escape_html(content)
        ))
    }

    fn blocks(&self, key: &str, element: &str) -> String {
        let indent = self.doc.indent();
        let eol = self.doc.eol();
        let mut output = String::new();
        for item in self.container(key) {
            let Some(content) = item.text_field("content") else {
                continue;
            };
            let kind = item.text_field("type").unwrap_or_default();
            output.push_str(&format!(
                "{indent}<{element} type=\"{kind}\">{eol}{content}{eol}{indent}</{element}>{eol}"
            ));
        }
        output
    }

    fn container(&self, key: &str) -> Vec<&'a Value> {
        self.doc
            .container(key)
            .map(|container| container.iter().collect())
            .unwrap_or_default()
    }
}

/// Set the doctype, then render its declaration
pub fn render_doctype_as(doc: &mut DocumentModel, doctype: &str) -> String {
    doc.set_doctype(doctype);
    doc.renderer().doctype()
}
