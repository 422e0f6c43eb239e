use crate::{
    alphabet::LanguageCode,
    metadata::{
        AttributeMetadata, ChoiceListMetadata, EntityMetadata, EntityRole, MessagePair,
        MessageRequest, MessageResponse, OptionMetadata, RelationshipMetadata, RequestField,
        ResponseField,
    },
    naming::{DEFAULT_UNRESOLVED_MARKER, NamingError, NamingStrategy, identifier::ensure_valid_identifier},
};

/// Upstream strategy that names everything from schema names and labels.
///
/// Options are named from their label in `label_language`, keeping ASCII
/// letters, digits and underscores. When nothing usable remains the option
/// gets `{marker}{value}`, the way external generators report an unresolved
/// label, so a [`super::service::NamingService`] can take over.
#[derive(Debug, Clone)]
pub struct SchemaNamingStrategy {
    service_context: String,
    label_language: LanguageCode,
    unresolved_marker: String,
}

impl Default for SchemaNamingStrategy {
    fn default() -> Self {
        Self {
            service_context: "ServiceContext".to_string(),
            label_language: LanguageCode::ENGLISH,
            unresolved_marker: DEFAULT_UNRESOLVED_MARKER.to_string(),
        }
    }
}

impl SchemaNamingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_context(mut self, name: impl Into<String>) -> Self {
        self.service_context = name.into();
        self
    }

    pub fn label_language(mut self, language: LanguageCode) -> Self {
        self.label_language = language;
        self
    }

    pub fn unresolved_marker(mut self, marker: impl Into<String>) -> Self {
        self.unresolved_marker = marker.into();
        self
    }
}

fn identifier_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

impl NamingStrategy for SchemaNamingStrategy {
    fn name_for_entity(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
        Ok(entity.schema_name.clone())
    }

    fn name_for_attribute(
        &mut self,
        _entity: &EntityMetadata,
        attribute: &AttributeMetadata,
    ) -> Result<String, NamingError> {
        Ok(attribute.schema_name.clone())
    }

    fn name_for_choice_list(
        &mut self,
        _entity: &EntityMetadata,
        choice_list: &ChoiceListMetadata,
    ) -> Result<String, NamingError> {
        Ok(choice_list.name.clone())
    }

    fn name_for_option(
        &mut self,
        _choice_list: &ChoiceListMetadata,
        option: &OptionMetadata,
    ) -> Result<String, NamingError> {
        let name = option
            .label
            .text_for(self.label_language)
            .map(identifier_chars)
            .unwrap_or_default();
        if name.is_empty() {
            return Ok(format!("{}{}", self.unresolved_marker, option.value));
        }
        Ok(ensure_valid_identifier(name).into_owned())
    }

    fn name_for_relationship(
        &mut self,
        _entity: &EntityMetadata,
        relationship: &RelationshipMetadata,
        reflexive_role: Option<EntityRole>,
    ) -> Result<String, NamingError> {
        Ok(match reflexive_role {
            Some(role) => format!("{role}{}", relationship.schema_name),
            None => relationship.schema_name.clone(),
        })
    }

    fn name_for_service_context(&mut self) -> Result<String, NamingError> {
        Ok(self.service_context.clone())
    }

    fn name_for_entity_set(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
        Ok(format!("{}Set", entity.schema_name))
    }

    fn name_for_message_pair(&mut self, pair: &MessagePair) -> Result<String, NamingError> {
        Ok(pair.message_name.clone())
    }

    fn name_for_request_field(
        &mut self,
        _request: &MessageRequest,
        field: &RequestField,
    ) -> Result<String, NamingError> {
        Ok(field.name.clone())
    }

    fn name_for_response_field(
        &mut self,
        _response: &MessageResponse,
        field: &ResponseField,
    ) -> Result<String, NamingError> {
        Ok(field.name.clone())
    }
}
