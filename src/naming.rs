//! Naming strategies for generated code.
//!
//! A [`NamingStrategy`] answers "what identifier should this schema object get?"
//! for every kind of object a code generator emits. Strategies compose as
//! decorators: [`service::NamingService`] wraps an upstream strategy, overrides
//! choice-list and option naming, and forwards everything else unchanged.

pub mod identifier;
pub mod registry;
pub mod schema;
pub mod service;

use crate::{
    alphabet::LanguageCode,
    metadata::{
        AttributeMetadata, ChoiceListMetadata, EntityMetadata, EntityRole, MessagePair,
        MessageRequest, MessageResponse, OptionMetadata, RelationshipMetadata, RequestField,
        ResponseField,
    },
};
use thiserror::Error;

/// Marker substring an upstream strategy embeds in an option name it could not resolve.
pub const DEFAULT_UNRESOLVED_MARKER: &str = "UnknownLabel";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error(
        "option {option_value} of choice list `{choice_list}` has no label for language {language}"
    )]
    MissingFallbackLabel {
        choice_list: String,
        option_value: i32,
        language: LanguageCode,
    },

    #[error(
        "option {option_value} of choice list `{choice_list}` has {count} labels for language {language}"
    )]
    AmbiguousFallbackLabel {
        choice_list: String,
        option_value: i32,
        language: LanguageCode,
        count: usize,
    },

    #[error("upstream naming failed: {0}")]
    Upstream(String),
}

/// The full capability set a code generator asks of its naming callback.
///
/// Methods take `&mut self`: an implementation may keep per-run state, and one
/// instance serves a single generation run. Callers that parallelize a run
/// must serialize access (e.g. behind a `Mutex`).
pub trait NamingStrategy {
    fn name_for_entity(&mut self, entity: &EntityMetadata) -> Result<String, NamingError>;

    fn name_for_attribute(
        &mut self,
        entity: &EntityMetadata,
        attribute: &AttributeMetadata,
    ) -> Result<String, NamingError>;

    fn name_for_choice_list(
        &mut self,
        entity: &EntityMetadata,
        choice_list: &ChoiceListMetadata,
    ) -> Result<String, NamingError>;

    fn name_for_option(
        &mut self,
        choice_list: &ChoiceListMetadata,
        option: &OptionMetadata,
    ) -> Result<String, NamingError>;

    fn name_for_relationship(
        &mut self,
        entity: &EntityMetadata,
        relationship: &RelationshipMetadata,
        reflexive_role: Option<EntityRole>,
    ) -> Result<String, NamingError>;

    fn name_for_service_context(&mut self) -> Result<String, NamingError>;

    fn name_for_entity_set(&mut self, entity: &EntityMetadata) -> Result<String, NamingError>;

    fn name_for_message_pair(&mut self, pair: &MessagePair) -> Result<String, NamingError>;

    fn name_for_request_field(
        &mut self,
        request: &MessageRequest,
        field: &RequestField,
    ) -> Result<String, NamingError>;

    fn name_for_response_field(
        &mut self,
        response: &MessageResponse,
        field: &ResponseField,
    ) -> Result<String, NamingError>;
}

/// Forward every `NamingStrategy` method through a pointer-like wrapper.
macro_rules! forward_naming_strategy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S: NamingStrategy + ?Sized> NamingStrategy for $ty {
                #[inline]
                fn name_for_entity(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
                    (**self).name_for_entity(entity)
                }

                #[inline]
                fn name_for_attribute(
                    &mut self,
                    entity: &EntityMetadata,
                    attribute: &AttributeMetadata,
                ) -> Result<String, NamingError> {
                    (**self).name_for_attribute(entity, attribute)
                }

                #[inline]
                fn name_for_choice_list(
                    &mut self,
                    entity: &EntityMetadata,
                    choice_list: &ChoiceListMetadata,
                ) -> Result<String, NamingError> {
                    (**self).name_for_choice_list(entity, choice_list)
                }

                #[inline]
                fn name_for_option(
                    &mut self,
                    choice_list: &ChoiceListMetadata,
                    option: &OptionMetadata,
                ) -> Result<String, NamingError> {
                    (**self).name_for_option(choice_list, option)
                }

                #[inline]
                fn name_for_relationship(
                    &mut self,
                    entity: &EntityMetadata,
                    relationship: &RelationshipMetadata,
                    reflexive_role: Option<EntityRole>,
                ) -> Result<String, NamingError> {
                    (**self).name_for_relationship(entity, relationship, reflexive_role)
                }

                #[inline]
                fn name_for_service_context(&mut self) -> Result<String, NamingError> {
                    (**self).name_for_service_context()
                }

                #[inline]
                fn name_for_entity_set(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
                    (**self).name_for_entity_set(entity)
                }

                #[inline]
                fn name_for_message_pair(&mut self, pair: &MessagePair) -> Result<String, NamingError> {
                    (**self).name_for_message_pair(pair)
                }

                #[inline]
                fn name_for_request_field(
                    &mut self,
                    request: &MessageRequest,
                    field: &RequestField,
                ) -> Result<String, NamingError> {
                    (**self).name_for_request_field(request, field)
                }

                #[inline]
                fn name_for_response_field(
                    &mut self,
                    response: &MessageResponse,
                    field: &ResponseField,
                ) -> Result<String, NamingError> {
                    (**self).name_for_response_field(response, field)
                }
            }
        )*
    };
}

forward_naming_strategy!(Box<S>, &mut S);
