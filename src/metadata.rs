//! Read-only schema metadata consumed by naming strategies.
//!
//! These types mirror the shape a metadata provider hands to a code generator:
//! entities with attributes, choice lists ("option sets") with options, and
//! localized labels. Nothing here is mutated by the naming engine.

use crate::alphabet::LanguageCode;
use smallvec::SmallVec;
use std::fmt;

/// Stable metadata identity of a schema object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MetadataId(pub u128);

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedLabel {
    pub language: LanguageCode,
    pub label: String,
}

impl LocalizedLabel {
    pub fn new(language: LanguageCode, label: impl Into<String>) -> Self {
        Self {
            language,
            label: label.into(),
        }
    }
}

/// All localized variants of one display string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    pub localized_labels: Vec<LocalizedLabel>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: LanguageCode, text: impl Into<String>) -> Self {
        self.localized_labels.push(LocalizedLabel::new(language, text));
        self
    }

    /// Every label text tagged with `language`, in metadata order.
    pub fn texts_for(&self, language: LanguageCode) -> SmallVec<[&str; 2]> {
        self.localized_labels
            .iter()
            .filter(|l| l.language == language)
            .map(|l| l.label.as_str())
            .collect()
    }

    /// The first label text tagged with `language`.
    pub fn text_for(&self, language: LanguageCode) -> Option<&str> {
        self.localized_labels
            .iter()
            .find(|l| l.language == language)
            .map(|l| l.label.as_str())
    }
}

/// One enumerated value of a choice list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionMetadata {
    pub value: i32,
    pub label: Label,
}

impl OptionMetadata {
    pub fn new(value: i32, label: Label) -> Self {
        Self { value, label }
    }
}

/// A choice list ("option set"). Global lists are shared across entities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceListMetadata {
    pub id: MetadataId,
    pub name: String,
    /// `None` when the provider did not say; treated as local.
    pub is_global: Option<bool>,
    pub options: Vec<OptionMetadata>,
}

impl ChoiceListMetadata {
    pub fn local(id: MetadataId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_global: Some(false),
            options: Vec::new(),
        }
    }

    pub fn global(id: MetadataId, name: impl Into<String>) -> Self {
        Self {
            is_global: Some(true),
            ..Self::local(id, name)
        }
    }

    pub fn with_option(mut self, option: OptionMetadata) -> Self {
        self.options.push(option);
        self
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.is_global == Some(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeType {
    Picklist,
    State,
    Status,
    Boolean,
    #[default]
    String,
    Integer,
    Lookup,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeMetadata {
    pub logical_name: String,
    pub schema_name: String,
    pub attribute_type: AttributeType,
    /// Choice list backing this attribute, for enum-typed attributes.
    pub option_set: Option<MetadataId>,
}

impl AttributeMetadata {
    pub fn new(
        logical_name: impl Into<String>,
        schema_name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            schema_name: schema_name.into(),
            attribute_type,
            option_set: None,
        }
    }

    pub fn picklist(
        logical_name: impl Into<String>,
        schema_name: impl Into<String>,
        option_set: MetadataId,
    ) -> Self {
        Self {
            option_set: Some(option_set),
            ..Self::new(logical_name, schema_name, AttributeType::Picklist)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityMetadata {
    pub logical_name: String,
    pub schema_name: String,
    pub attributes: Vec<AttributeMetadata>,
}

impl EntityMetadata {
    pub fn new(logical_name: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            schema_name: schema_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The picklist attribute backed by `choice_list`, if the entity lists one.
    pub fn picklist_attribute(&self, choice_list: &ChoiceListMetadata) -> Option<&AttributeMetadata> {
        self.attributes.iter().find(|a| {
            a.attribute_type == AttributeType::Picklist && a.option_set == Some(choice_list.id)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRole {
    Referencing,
    Referenced,
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Referencing => "Referencing",
            Self::Referenced => "Referenced",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipMetadata {
    pub schema_name: String,
    pub referenced_entity: String,
    pub referencing_entity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePair {
    pub message_name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestField {
    pub name: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageResponse {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseField {
    pub name: String,
    pub index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_id_displays_as_guid() {
        let id = MetadataId(0x0123_4567_89ab_cdef_0011_2233_4455_6677);
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0011-223344556677");
        assert_eq!(
            MetadataId::default().to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn label_lookup_by_language() {
        let label = Label::new()
            .with(LanguageCode::ENGLISH, "Red")
            .with(LanguageCode::RUSSIAN, "Красный")
            .with(LanguageCode::RUSSIAN, "Алый");

        assert_eq!(label.text_for(LanguageCode::ENGLISH), Some("Red"));
        assert_eq!(label.text_for(LanguageCode::UKRAINIAN), None);
        assert_eq!(
            label.texts_for(LanguageCode::RUSSIAN).as_slice(),
            &["Красный", "Алый"]
        );
        assert!(label.texts_for(LanguageCode::UKRAINIAN).is_empty());
    }

    #[test]
    fn unknown_globality_is_local() {
        let mut list = ChoiceListMetadata::local(MetadataId(1), "colour");
        assert!(!list.is_global());
        list.is_global = None;
        assert!(!list.is_global());
        assert!(ChoiceListMetadata::global(MetadataId(1), "colour").is_global());
    }

    #[test]
    fn picklist_attribute_matches_type_and_identity() {
        let list = ChoiceListMetadata::local(MetadataId(7), "new_colour");
        let entity = EntityMetadata::new("account", "Account")
            .with_attribute(AttributeMetadata::new("name", "Name", AttributeType::String))
            .with_attribute(AttributeMetadata {
                option_set: Some(MetadataId(7)),
                ..AttributeMetadata::new("statuscode", "StatusCode", AttributeType::Status)
            })
            .with_attribute(AttributeMetadata::picklist("new_colour", "new_Colour", MetadataId(7)));

        let found = entity.picklist_attribute(&list).map(|a| a.logical_name.as_str());
        assert_eq!(found, Some("new_colour"));

        let other = ChoiceListMetadata::local(MetadataId(8), "new_size");
        assert!(entity.picklist_attribute(&other).is_none());
    }
}
