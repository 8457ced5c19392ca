//! Page configuration loaded from a TOML file
//!
//! A `PageConfig` describes a page's head settings and entries. Applying it
//! drives the same public API application code would use, so a bad custom
//! slot surfaces as [`ConfigError::Validation`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::ValidationError;
use crate::model::DocumentModel;
use crate::value::Value;

/// Page description read from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Doctype identifier (e.g. `html5`, `xhtml1-strict`)
    pub doctype: Option<String>,
    /// Character set
    pub charset: Option<String>,
    /// Language tag (e.g. `en-GB`)
    pub language: Option<String>,
    /// Text direction
    pub direction: Option<String>,
    /// Meta description
    pub description: Option<String>,
    /// Keywords, joined in order
    pub keywords: Vec<String>,
    /// Title separator
    pub separator: Option<String>,
    /// Line ending token (`unix`, `mac`, `win`) or literal terminator
    pub eol: Option<String>,
    /// Indentation string
    pub indent: Option<String>,
    /// Title entries, in order
    pub title: Vec<String>,
    /// Meta tags
    pub metas: Vec<MetaEntry>,
    /// Stylesheet references
    pub stylesheets: Vec<StylesheetEntry>,
    /// External scripts
    pub scripts: Vec<ScriptEntry>,
    /// Inline style blocks
    pub css_blocks: Vec<BlockEntry>,
    /// Inline scripts in the head
    pub script_blocks: Vec<BlockEntry>,
    /// Inline scripts at the end of the body
    pub script_blocks_bottom: Vec<BlockEntry>,
    /// Custom containers and their items
    pub containers: BTreeMap<String, Vec<Value>>,
    /// Custom scalar slots
    pub scalars: BTreeMap<String, Value>,
    /// Body markup placed between the head and the bottom scripts
    pub body: Option<String>,
}

/// A `<meta>` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    /// Meta name (`charset` and `http-equiv` are special)
    pub name: String,
    /// Meta content
    #[serde(default)]
    pub content: String,
    /// Insert before existing metas
    #[serde(default)]
    pub prepend: bool,
}

/// A stylesheet entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetEntry {
    /// Stylesheet URL
    pub href: String,
    /// Optional media query
    pub media: Option<String>,
    /// Insert before existing stylesheets
    #[serde(default)]
    pub prepend: bool,
}

/// An external script entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Script URL
    pub src: String,
    /// MIME type, `text/javascript` when omitted
    #[serde(rename = "type", default = "default_script_type")]
    pub kind: String,
    /// Emit `defer`
    #[serde(default)]
    pub defer: bool,
    /// Emit `async`
    #[serde(rename = "async", default)]
    pub is_async: bool,
    /// Insert before existing scripts
    #[serde(default)]
    pub prepend: bool,
}

/// An inline style or script block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Block body, emitted verbatim
    pub content: String,
    /// MIME type; the lane's default when omitted
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Insert before existing blocks
    #[serde(default)]
    pub prepend: bool,
}

fn default_script_type() -> String {
    "text/javascript".to_string()
}

impl PageConfig {
    /// Load a page configuration from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the page `.toml` file
    ///
    /// # Returns
    /// * `Ok(PageConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse a page configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save the configuration as pretty TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Build a fresh document from this configuration
    ///
    /// # Returns
    /// * `Ok(DocumentModel)` - Document with every entry applied
    /// * `Err(ConfigError::Validation)` - A custom slot was rejected
    pub fn build(&self) -> Result<DocumentModel, ConfigError> {
        let mut doc = DocumentModel::new();
        self.apply(&mut doc)?;
        Ok(doc)
    }

    /// Apply every setting and entry to an existing document
    ///
    /// # Returns
    /// * `Ok(())` - All entries applied
    /// * `Err(ValidationError)` - A custom slot clashes with an existing one
    pub fn apply(&self, doc: &mut DocumentModel) -> Result<(), ValidationError> {
        let scalars = [
            ("doctype", &self.doctype),
            ("charset", &self.charset),
            ("language", &self.language),
            ("direction", &self.direction),
            ("description", &self.description),
            ("separator", &self.separator),
            ("eol", &self.eol),
            ("indent", &self.indent),
        ];
        for (name, value) in scalars {
            if let Some(value) = value {
                doc.set_property(name, value);
            }
        }

        for keywords in &self.keywords {
            doc.add_keywords(keywords, false);
        }
        for title in &self.title {
            doc.append_title(title);
        }
        for meta in &self.metas {
            doc.add_meta(&meta.name, &meta.content, meta.prepend);
        }
        for sheet in &self.stylesheets {
            doc.add_stylesheet(&sheet.href, sheet.media.as_deref(), sheet.prepend);
        }
        for script in &self.scripts {
            doc.add_script(
                &script.src,
                &script.kind,
                script.defer,
                script.is_async,
                script.prepend,
            );
        }
        for block in &self.css_blocks {
            doc.add_css_block(&block.content, &block.kind, block.prepend);
        }
        for block in &self.script_blocks {
            doc.add_script_block(&block.content, &block.kind, block.prepend);
        }
        for block in &self.script_blocks_bottom {
            doc.add_script_block_bottom(&block.content, &block.kind, block.prepend);
        }

        for (name, items) in &self.containers {
            doc.add_container(name, true)?;
            for item in items {
                doc.append(name, item.clone())?;
            }
        }
        for (name, value) in &self.scalars {
            doc.add_container(name, false)?.set(name, value.clone())?;
        }

        log::info!(
            "Applied page configuration ({} custom containers, {} custom scalars)",
            self.containers.len(),
            self.scalars.len()
        );
        Ok(())
    }
}

/// Errors that can occur when loading or saving a page configuration
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The page description was rejected by the document model
    #[error("Invalid page: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_toml() {
        let toml_content = r#"
doctype = "xhtml1-strict"
charset = "UTF-8"
language = "fr-CA"
title = ["Accueil", "Mon Site"]
keywords = ["cuisine", "recettes"]

[[metas]]
name = "author"
content = "Marie"

[[stylesheets]]
href = "print.css"
media = "print"

[[scripts]]
src = "app.js"
defer = true
"#;

        let config = PageConfig::parse(toml_content).unwrap();
        assert_eq!(config.doctype.as_deref(), Some("xhtml1-strict"));
        assert_eq!(config.title, vec!["Accueil", "Mon Site"]);
        assert_eq!(config.metas[0].name, "author");
        assert_eq!(config.stylesheets[0].media.as_deref(), Some("print"));
        assert_eq!(config.scripts[0].kind, "text/javascript");
        assert!(config.scripts[0].defer);
        assert!(!config.scripts[0].is_async);
    }

    #[test]
    fn test_build_applies_settings() {
        let config = PageConfig {
            doctype: Some("html4-strict".to_string()),
            eol: Some("win".to_string()),
            keywords: vec!["a".to_string(), "b".to_string()],
            title: vec!["One".to_string(), "Two".to_string()],
            ..PageConfig::default()
        };

        let doc = config.build().unwrap();
        assert_eq!(doc.doctype(), "html4-strict");
        assert_eq!(doc.eol(), "\r\n");
        assert_eq!(doc.keywords(), "a, b");
        assert_eq!(doc.to_sequence("title").unwrap().len(), 2);
    }

    #[test]
    fn test_custom_slots() {
        let config = PageConfig::parse(
            r#"
[containers]
feeds = ["/rss.xml", { href = "/atom.xml", type = "application/atom+xml" }]

[scalars]
canonical = "https://example.com/"
"#,
        )
        .unwrap();

        let doc = config.build().unwrap();
        assert_eq!(doc.to_sequence("feeds").unwrap().len(), 2);
        assert_eq!(
            doc.to_sequence("canonical").unwrap(),
            vec![Value::from("https://example.com/")]
        );
    }

    #[test]
    fn test_custom_slot_clashing_with_core_fails() {
        let config = PageConfig::parse(
            r#"
[containers]
scripts = ["x.js"]
"#,
        )
        .unwrap();

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::DuplicateKey { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Invalid page: A slot named 'scripts' already exists"
        );
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("headdoc_config_roundtrip.toml");
        let config = PageConfig {
            title: vec!["Saved".to_string()],
            ..PageConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = PageConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.title, vec!["Saved"]);
    }
}
