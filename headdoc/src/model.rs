//! Document model for assembling the head elements of an HTML page
//!
//! The model owns seven core containers plus any custom slots added at
//! runtime. Generic mutation ([`DocumentModel::append`] and friends) validates
//! the slot name before touching anything and reports a [`ValidationError`].
//! The `add_*` and title helpers build records on top of the core containers
//! and silently ignore empty input.

use std::collections::HashMap;

use crate::container::NamedContainer;
use crate::error::ValidationError;
use crate::render::Renderer;
use crate::tables;
use crate::value::Value;

/// Containers every document starts with, in creation order
pub const CORE_CONTAINERS: [&str; 7] = [
    "title",
    "metas",
    "stylesheets",
    "cssBlocks",
    "scripts",
    "scriptBlocks",
    "scriptBlocksBottom",
];

/// A custom slot added with [`DocumentModel::add_container`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Ordered container of items
    Container(NamedContainer),
    /// Single value, `None` until assigned
    Scalar(Option<Value>),
}

/// The seven core containers; they can never be removed or demoted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CoreContainers {
    title: NamedContainer,
    metas: NamedContainer,
    stylesheets: NamedContainer,
    css_blocks: NamedContainer,
    scripts: NamedContainer,
    script_blocks: NamedContainer,
    script_blocks_bottom: NamedContainer,
}

impl CoreContainers {
    fn get(&self, key: &str) -> Option<&NamedContainer> {
        match key {
            "title" => Some(&self.title),
            "metas" => Some(&self.metas),
            "stylesheets" => Some(&self.stylesheets),
            "cssBlocks" => Some(&self.css_blocks),
            "scripts" => Some(&self.scripts),
            "scriptBlocks" => Some(&self.script_blocks),
            "scriptBlocksBottom" => Some(&self.script_blocks_bottom),
            _ => None,
        }
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut NamedContainer> {
        match key {
            "title" => Some(&mut self.title),
            "metas" => Some(&mut self.metas),
            "stylesheets" => Some(&mut self.stylesheets),
            "cssBlocks" => Some(&mut self.css_blocks),
            "scripts" => Some(&mut self.scripts),
            "scriptBlocks" => Some(&mut self.script_blocks),
            "scriptBlocksBottom" => Some(&mut self.script_blocks_bottom),
            _ => None,
        }
    }
}

/// Head-element model for one page
///
/// Built once per page, mutated by application code through the fluent API,
/// then handed to a [`Renderer`]. Not meant to be shared between threads
/// while it is being mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentModel {
    doctype: String,
    charset: String,
    language: String,
    direction: String,
    description: String,
    keywords: String,
    separator: String,
    eol: String,
    indent: String,
    core: CoreContainers,
    custom: HashMap<String, Slot>,
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentModel {
    /// Create a document with empty core containers and default settings
    ///
    /// # Returns
    /// * `DocumentModel` - doctype `html5`, separator `" - "`, LF line
    ///   endings and tab indentation; every other setting empty
    pub fn new() -> Self {
        Self {
            doctype: "html5".to_string(),
            charset: String::new(),
            language: String::new(),
            direction: String::new(),
            description: String::new(),
            keywords: String::new(),
            separator: " - ".to_string(),
            eol: "\n".to_string(),
            indent: "\t".to_string(),
            core: CoreContainers::default(),
            custom: HashMap::new(),
        }
    }

    /// Create a renderer over the current state of this document
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(self)
    }

    /// Check whether `key` names one of the core containers
    pub fn is_core(key: &str) -> bool {
        CORE_CONTAINERS.contains(&key)
    }

    // --- scalar settings -------------------------------------------------

    /// Doctype identifier (e.g. `html5`)
    pub fn doctype(&self) -> &str {
        &self.doctype
    }

    /// Character set; empty renders as `UTF-8`
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Language tag (e.g. `en-GB`)
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Text direction (`ltr`/`rtl`)
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Meta description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Meta keywords
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Separator placed between title entries
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Line terminator appended to rendered lines
    pub fn eol(&self) -> &str {
        &self.eol
    }

    /// Indentation prefixed to rendered lines
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Set the doctype
    pub fn set_doctype(&mut self, doctype: &str) -> &mut Self {
        self.doctype = doctype.to_string();
        self
    }

    /// Set the charset
    pub fn set_charset(&mut self, charset: &str) -> &mut Self {
        self.charset = charset.to_string();
        self
    }

    /// Set the language
    pub fn set_language(&mut self, language: &str) -> &mut Self {
        self.language = language.to_string();
        self
    }

    /// Set the direction
    pub fn set_direction(&mut self, direction: &str) -> &mut Self {
        self.direction = direction.to_string();
        self
    }

    /// Set the description
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    /// Set the keywords
    pub fn set_keywords(&mut self, keywords: &str) -> &mut Self {
        self.keywords = keywords.to_string();
        self
    }

    /// Set the separator
    pub fn set_separator(&mut self, separator: &str) -> &mut Self {
        self.separator = separator.to_string();
        self
    }

    /// Set the indent
    pub fn set_indent(&mut self, indent: &str) -> &mut Self {
        self.indent = indent.to_string();
        self
    }

    /// Set the line terminator
    ///
    /// # Parameters
    /// * `eol` - `unix` (LF), `mac` (CR), `win` (CRLF), or any other string
    ///   used verbatim as the terminator
    pub fn set_eol(&mut self, eol: &str) -> &mut Self {
        self.eol = match eol {
            "unix" => "\n".to_string(),
            "mac" => "\r".to_string(),
            "win" => "\r\n".to_string(),
            other => other.to_string(),
        };
        self
    }

    /// Check whether the current doctype is an XHTML variant
    pub fn is_xhtml(&self) -> bool {
        tables::is_xhtml(&self.doctype)
    }

    /// Primary language subtag, lower-cased (`en-GB` gives `en`)
    pub fn language_code(&self) -> String {
        self.language
            .split('-')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    // --- property dispatch ----------------------------------------------

    /// Read a property by name
    ///
    /// Names with a dedicated getter are answered first. Otherwise a custom
    /// slot of that name is returned: a container as a list, a scalar as its
    /// value. Core containers, unassigned scalars and unknown names give
    /// `None`.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.property(name) {
            return Some(value);
        }
        match self.custom.get(name)? {
            Slot::Container(container) => Some(Value::List(container.to_sequence())),
            Slot::Scalar(value) => value.clone(),
        }
    }

    fn property(&self, name: &str) -> Option<Value> {
        let value = match name {
            "doctype" => Value::from(self.doctype.as_str()),
            "charset" => Value::from(self.charset.as_str()),
            "language" => Value::from(self.language.as_str()),
            "direction" => Value::from(self.direction.as_str()),
            "description" => Value::from(self.description.as_str()),
            "keywords" => Value::from(self.keywords.as_str()),
            "separator" => Value::from(self.separator.as_str()),
            "eol" => Value::from(self.eol.as_str()),
            "indent" => Value::from(self.indent.as_str()),
            "isXhtml" => Value::Bool(self.is_xhtml()),
            "languageCode" => Value::from(self.language_code()),
            _ => return None,
        };
        Some(value)
    }

    /// Write a property by name
    ///
    /// Names without a dedicated setter are accepted and discarded.
    pub fn set_property(&mut self, name: &str, value: &str) -> &mut Self {
        match name {
            "doctype" => self.set_doctype(value),
            "charset" => self.set_charset(value),
            "language" => self.set_language(value),
            "direction" => self.set_direction(value),
            "description" => self.set_description(value),
            "keywords" => self.set_keywords(value),
            "separator" => self.set_separator(value),
            "eol" => self.set_eol(value),
            "indent" => self.set_indent(value),
            "title" => self.set_title(value),
            _ => self,
        }
    }

    // --- container mutation API -----------------------------------------

    /// Borrow a container (core or custom) by name
    pub fn container(&self, key: &str) -> Option<&NamedContainer> {
        if let Some(container) = self.core.get(key) {
            return Some(container);
        }
        match self.custom.get(key) {
            Some(Slot::Container(container)) => Some(container),
            _ => None,
        }
    }

    fn container_mut(&mut self, key: &str) -> Result<&mut NamedContainer, ValidationError> {
        if let Some(container) = self.core.get_mut(key) {
            return Ok(container);
        }
        match self.custom.get_mut(key) {
            Some(Slot::Container(container)) => Ok(container),
            Some(Slot::Scalar(_)) => Err(rejected(ValidationError::NotAContainer {
                key: key.to_string(),
            })),
            None => Err(rejected(missing(key))),
        }
    }

    fn has_slot(&self, key: &str) -> bool {
        Self::is_core(key) || self.custom.contains_key(key)
    }

    /// Append a value to the container named `key`
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - For chaining
    /// * `Err(ValidationError)` - `key` is missing or names a scalar slot
    pub fn append(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        self.container_mut(key)?.append(value);
        Ok(self)
    }

    /// Prepend a value to the container named `key`
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - For chaining
    /// * `Err(ValidationError)` - `key` is missing or names a scalar slot
    pub fn prepend(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        self.container_mut(key)?.prepend(value);
        Ok(self)
    }

    /// Replace the contents of slot `key`
    ///
    /// Containers have all items replaced (an empty value leaves them as they
    /// are); scalar slots are assigned directly.
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - For chaining
    /// * `Err(ValidationError)` - `key` does not exist
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self, ValidationError> {
        let value = value.into();
        if let Some(container) = self.core.get_mut(key) {
            container.replace_all(value);
        } else {
            match self.custom.get_mut(key) {
                Some(Slot::Container(container)) => container.replace_all(value),
                Some(Slot::Scalar(slot)) => *slot = Some(value),
                None => return Err(rejected(missing(key))),
            }
        }
        Ok(self)
    }

    /// Create a new custom slot
    ///
    /// # Parameters
    /// * `key` - Slot name, must be non-empty and unused
    /// * `is_container` - `true` for an empty container, `false` for an
    ///   unassigned scalar
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - For chaining
    /// * `Err(ValidationError)` - Empty or duplicate name
    pub fn add_container(
        &mut self,
        key: &str,
        is_container: bool,
    ) -> Result<&mut Self, ValidationError> {
        if key.is_empty() {
            return Err(rejected(ValidationError::EmptyKey));
        }
        if self.has_slot(key) {
            return Err(rejected(ValidationError::DuplicateKey {
                key: key.to_string(),
            }));
        }

        let slot = if is_container {
            Slot::Container(NamedContainer::new())
        } else {
            Slot::Scalar(None)
        };
        self.custom.insert(key.to_string(), slot);
        log::debug!(
            "Added {} slot '{}'",
            if is_container { "container" } else { "scalar" },
            key
        );
        Ok(self)
    }

    /// Remove a custom slot
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - For chaining
    /// * `Err(ValidationError)` - `key` is a core container or does not exist
    pub fn remove_container(&mut self, key: &str) -> Result<&mut Self, ValidationError> {
        if Self::is_core(key) {
            return Err(rejected(ValidationError::CoreContainer {
                key: key.to_string(),
            }));
        }
        if self.custom.remove(key).is_none() {
            return Err(rejected(missing(key)));
        }
        log::debug!("Removed slot '{}'", key);
        Ok(self)
    }

    /// Check whether a slot named `key` exists
    ///
    /// # Returns
    /// * `Ok(bool)` - Existence of the slot
    /// * `Err(ValidationError)` - `key` is empty
    pub fn contains(&self, key: &str) -> Result<bool, ValidationError> {
        if key.is_empty() {
            return Err(rejected(ValidationError::EmptyKey));
        }
        Ok(self.has_slot(key))
    }

    /// Contents of slot `key` as a plain ordered sequence
    ///
    /// Containers give their items. Scalars give a single item, nothing when
    /// unassigned, a list's items, or a record's field values.
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - Snapshot of the slot
    /// * `Err(ValidationError)` - `key` does not exist
    pub fn to_sequence(&self, key: &str) -> Result<Vec<Value>, ValidationError> {
        if let Some(container) = self.core.get(key) {
            return Ok(container.to_sequence());
        }
        match self.custom.get(key) {
            Some(Slot::Container(container)) => Ok(container.to_sequence()),
            Some(Slot::Scalar(None)) => Ok(Vec::new()),
            Some(Slot::Scalar(Some(Value::List(items)))) => Ok(items.clone()),
            Some(Slot::Scalar(Some(Value::Record(fields)))) => {
                Ok(fields.values().cloned().collect())
            }
            Some(Slot::Scalar(Some(value))) => Ok(vec![value.clone()]),
            None => Err(rejected(missing(key))),
        }
    }

    // --- convenience setters --------------------------------------------

    /// Replace the title with a single entry; empty input is ignored
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        if !title.is_empty() {
            self.core.title.replace_all(title);
        }
        self
    }

    /// Add a title entry before the existing ones; empty input is ignored
    pub fn prepend_title(&mut self, title: &str) -> &mut Self {
        if !title.is_empty() {
            self.core.title.prepend(title);
        }
        self
    }

    /// Add a title entry after the existing ones; empty input is ignored
    pub fn append_title(&mut self, title: &str) -> &mut Self {
        if !title.is_empty() {
            self.core.title.append(title);
        }
        self
    }

    /// Add a meta tag record
    ///
    /// `charset` is stored by name alone. `http-equiv` keeps its content only
    /// when one is given. Any other name needs non-empty content, otherwise
    /// nothing is stored.
    ///
    /// # Parameters
    /// * `name` - Meta name
    /// * `content` - Meta content
    /// * `prepend` - Insert before existing metas instead of after
    pub fn add_meta(&mut self, name: &str, content: &str, prepend: bool) -> &mut Self {
        let record = match name {
            "" => return self,
            "charset" => Value::record([("name", name)]),
            "http-equiv" if content.is_empty() => Value::record([("name", name)]),
            _ if content.is_empty() => return self,
            _ => Value::record([("name", name), ("content", content)]),
        };
        push(&mut self.core.metas, record, prepend);
        self
    }

    /// Add a stylesheet reference
    ///
    /// Stored as `{href, media}` when a media query is given, otherwise as
    /// the bare href. Empty `href` is ignored.
    pub fn add_stylesheet(&mut self, href: &str, media: Option<&str>, prepend: bool) -> &mut Self {
        if href.is_empty() {
            return self;
        }
        let item = match media {
            Some(media) if !media.is_empty() => {
                Value::record([("href", href), ("media", media)])
            }
            _ => Value::from(href),
        };
        push(&mut self.core.stylesheets, item, prepend);
        self
    }

    /// Add an external script reference stored as `{src, type, defer, async}`
    ///
    /// Empty `src` or `kind` is ignored.
    pub fn add_script(
        &mut self,
        src: &str,
        kind: &str,
        defer: bool,
        is_async: bool,
        prepend: bool,
    ) -> &mut Self {
        if src.is_empty() || kind.is_empty() {
            return self;
        }
        let record = Value::record([
            ("src", Value::from(src)),
            ("type", Value::from(kind)),
            ("defer", Value::from(defer)),
            ("async", Value::from(is_async)),
        ]);
        push(&mut self.core.scripts, record, prepend);
        self
    }

    /// Add an inline script block to the head
    ///
    /// Empty content is ignored; an empty `kind` means `text/javascript`.
    pub fn add_script_block(&mut self, content: &str, kind: &str, prepend: bool) -> &mut Self {
        if let Some(record) = block_record(content, kind, "text/javascript") {
            push(&mut self.core.script_blocks, record, prepend);
        }
        self
    }

    /// Add an inline script block rendered at the end of the body
    ///
    /// Empty content is ignored; an empty `kind` means `text/javascript`.
    pub fn add_script_block_bottom(
        &mut self,
        content: &str,
        kind: &str,
        prepend: bool,
    ) -> &mut Self {
        if let Some(record) = block_record(content, kind, "text/javascript") {
            push(&mut self.core.script_blocks_bottom, record, prepend);
        }
        self
    }

    /// Add an inline style block
    ///
    /// Empty content is ignored; an empty `kind` means `text/css`.
    pub fn add_css_block(&mut self, content: &str, kind: &str, prepend: bool) -> &mut Self {
        if let Some(record) = block_record(content, kind, "text/css") {
            push(&mut self.core.css_blocks, record, prepend);
        }
        self
    }

    /// Join `text` onto the keywords with `", "`
    ///
    /// Appending onto empty keywords stores `text` alone. Prepending always
    /// joins, so prepending onto empty keywords leaves a trailing `", "`.
    pub fn add_keywords(&mut self, text: &str, prepend: bool) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.keywords = if prepend {
            format!("{}, {}", text, self.keywords)
        } else if self.keywords.is_empty() {
            text.to_string()
        } else {
            format!("{}, {}", self.keywords, text)
        };
        self
    }
}

fn push(container: &mut NamedContainer, item: Value, prepend: bool) {
    if prepend {
        container.prepend(item);
    } else {
        container.append(item);
    }
}

fn block_record(content: &str, kind: &str, default_kind: &str) -> Option<Value> {
    if content.is_empty() {
        return None;
    }
    let kind = if kind.is_empty() { default_kind } else { kind };
    Some(Value::record([("content", content), ("type", kind)]))
}

fn missing(key: &str) -> ValidationError {
    if key.is_empty() {
        ValidationError::EmptyKey
    } else {
        ValidationError::MissingKey {
            key: key.to_string(),
        }
    }
}

fn rejected(err: ValidationError) -> ValidationError {
    log::warn!("Rejected document mutation: {}", err);
    err
}
