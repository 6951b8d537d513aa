//! Instrument documents — the nested element tree an interpreter consumes.
//!
//! A document is loaded by the caller; this module only decodes already
//! loaded text. YAML is the native encoding, JSON is accepted as well:
//!
//! ```yaml
//! instrument: snare
//! operations:
//!   - class: AmplitudeModulator
//!     children:
//!       - class: Sound
//!         type: wav
//!         location: kits/rock/snare.wav
//!       - class: Trigger
//! ```

use serde::{Deserialize, Serialize};

use super::error::DocumentError;

/// Root of an instrument document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Instrument name, used for logging and the published tree.
    #[serde(default)]
    pub instrument: String,
    /// Top-level elements. A well-formed document reduces to exactly one.
    #[serde(default)]
    pub operations: Vec<Element>,
}

impl Document {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            operations: Vec::new(),
        }
    }

    /// Single-root document.
    pub fn with_root(instrument: impl Into<String>, root: Element) -> Self {
        Self {
            instrument: instrument.into(),
            operations: vec![root],
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, DocumentError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// One element: an operation tag plus optional leaf data and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Operation tag looked up in the registry.
    pub class: String,
    /// Display label; the tag is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sound-file category for `Sound` elements.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sound_type: Option<String>,
    /// Sound-file location for `Sound` elements.
    #[serde(default, alias = "text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn trigger() -> Self {
        Self::new("Trigger")
    }

    pub fn sound(location: impl Into<String>, sound_type: impl Into<String>) -> Self {
        Self {
            class: "Sound".to_string(),
            sound_type: Some(sound_type.into()),
            location: Some(location.into()),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Name for the node built from this element.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml_document() {
        let yaml = r#"
instrument: snare
operations:
  - class: AmplitudeModulator
    name: snare hit
    children:
      - class: Sound
        type: wav
        location: kits/rock/snare.wav
      - class: Trigger
"#;
        let doc = Document::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.instrument, "snare");
        assert_eq!(doc.operations.len(), 1);

        let root = &doc.operations[0];
        assert_eq!(root.class, "AmplitudeModulator");
        assert_eq!(root.display_name(), "snare hit");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].sound_type.as_deref(), Some("wav"));
        assert_eq!(
            root.children[0].location.as_deref(),
            Some("kits/rock/snare.wav")
        );
        assert_eq!(root.children[1].display_name(), "Trigger");
    }

    #[test]
    fn text_is_alias_for_location() {
        let yaml = "operations:\n  - class: Sound\n    type: wav\n    text: hat.wav\n";
        let doc = Document::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.operations[0].location.as_deref(), Some("hat.wav"));
    }

    #[test]
    fn parse_json_document() {
        let json = r#"{"instrument":"kick","operations":[{"class":"Trigger"}]}"#;
        let doc = Document::from_json_str(json).unwrap();
        assert_eq!(doc.operations, vec![Element::trigger()]);
    }

    #[test]
    fn missing_operations_is_empty() {
        let doc = Document::from_yaml_str("instrument: ghost\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn malformed_yaml_is_error() {
        assert!(matches!(
            Document::from_yaml_str("operations: [class: "),
            Err(DocumentError::Yaml(_))
        ));
    }

    #[test]
    fn element_without_class_is_error() {
        assert!(Document::from_yaml_str("operations:\n  - name: nameless\n").is_err());
    }

    #[test]
    fn yaml_round_trip_keeps_structure() {
        let doc = Document::with_root(
            "tom",
            Element::new("Mixer")
                .with_child(Element::sound("tom.wav", "wav").named("tom"))
                .with_child(Element::trigger()),
        );
        let yaml = doc.to_yaml_string().unwrap();
        assert_eq!(Document::from_yaml_str(&yaml).unwrap(), doc);
    }
}
