//! Choice-list and option naming on top of an upstream strategy.
//!
//! Option names fall back to a transliterated localized label whenever the
//! upstream name is empty or carries the unresolved marker. Fallback names are
//! made into valid identifiers and deduplicated per choice list.

use crate::{
    alphabet::{Alphabet, DEFAULT_ALPHABET, LanguageCode},
    metadata::{
        AttributeMetadata, ChoiceListMetadata, EntityMetadata, EntityRole, MessagePair,
        MessageRequest, MessageResponse, OptionMetadata, RelationshipMetadata, RequestField,
        ResponseField,
    },
    naming::{
        DEFAULT_UNRESOLVED_MARKER, NamingError, NamingStrategy, identifier::ensure_valid_identifier,
        registry::NameRegistry,
    },
    transliterator::Transliterator,
};
use std::borrow::Cow;
use tracing::{debug, warn};

/// What to do when an option has no label in the fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingLabelPolicy {
    /// Fail with [`NamingError::MissingFallbackLabel`].
    #[default]
    Error,
    /// Name the option after its value: `Option_42`, `Option_neg1`.
    Placeholder,
}

/// What to do when an option has several labels in the fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousLabelPolicy {
    /// Fail with [`NamingError::AmbiguousFallbackLabel`].
    #[default]
    Error,
    /// Use the first label in metadata order.
    First,
}

pub struct NamingService<S: NamingStrategy> {
    upstream: S,
    transliterator: Transliterator,
    unresolved_marker: Cow<'static, str>,
    missing_label: MissingLabelPolicy,
    ambiguous_label: AmbiguousLabelPolicy,
    registry: NameRegistry,
}

impl<S: NamingStrategy> NamingService<S> {
    pub fn builder(upstream: S) -> NamingServiceBuilder<S> {
        NamingServiceBuilder::new(upstream)
    }

    /// Wrap `upstream` with the default alphabet and policies.
    pub fn new(upstream: S) -> Self {
        Self::builder(upstream).build()
    }

    #[inline]
    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    #[inline]
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    #[inline]
    pub fn upstream(&self) -> &S {
        &self.upstream
    }

    /// Forget every issued option name; the next call starts a new run.
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    pub fn into_upstream(self) -> S {
        self.upstream
    }

    fn is_resolved(&self, name: &str) -> bool {
        !name.is_empty() && !name.contains(self.unresolved_marker.as_ref())
    }

    /// The option's label in the fallback language, after applying the policies.
    fn fallback_label<'o>(
        &self,
        choice_list: &ChoiceListMetadata,
        option: &'o OptionMetadata,
    ) -> Result<Option<&'o str>, NamingError> {
        let language = self.transliterator.fallback_language();
        let texts = option.label.texts_for(language);
        match (texts.as_slice(), self.missing_label, self.ambiguous_label) {
            ([text], _, _) => Ok(Some(*text)),
            ([], MissingLabelPolicy::Error, _) => Err(NamingError::MissingFallbackLabel {
                choice_list: choice_list.name.clone(),
                option_value: option.value,
                language,
            }),
            ([], MissingLabelPolicy::Placeholder, _) => {
                warn!(
                    choice_list = %choice_list.name,
                    option = option.value,
                    %language,
                    "No fallback label, naming option after its value"
                );
                Ok(None)
            }
            (many, _, AmbiguousLabelPolicy::Error) => Err(NamingError::AmbiguousFallbackLabel {
                choice_list: choice_list.name.clone(),
                option_value: option.value,
                language,
                count: many.len(),
            }),
            ([first, ..], _, AmbiguousLabelPolicy::First) => {
                warn!(
                    choice_list = %choice_list.name,
                    option = option.value,
                    %language,
                    count = texts.len(),
                    "Several fallback labels, using the first"
                );
                Ok(Some(*first))
            }
        }
    }
}

fn placeholder_name(value: i32) -> String {
    if value < 0 {
        format!("Option_neg{}", value.unsigned_abs())
    } else {
        format!("Option_{value}")
    }
}

impl<S: NamingStrategy> NamingStrategy for NamingService<S> {
    fn name_for_choice_list(
        &mut self,
        entity: &EntityMetadata,
        choice_list: &ChoiceListMetadata,
    ) -> Result<String, NamingError> {
        // Global lists already have a system-wide unique name.
        if choice_list.is_global() {
            return self.upstream.name_for_choice_list(entity, choice_list);
        }

        // Status-reason lists on custom entities are local but not listed
        // among the entity's attributes.
        let Some(attribute) = entity.picklist_attribute(choice_list) else {
            return self.upstream.name_for_choice_list(entity, choice_list);
        };

        let entity_name = self.upstream.name_for_entity(entity)?;
        let attribute_name = self.upstream.name_for_attribute(entity, attribute)?;
        Ok(format!("{entity_name}_{attribute_name}"))
    }

    fn name_for_option(
        &mut self,
        choice_list: &ChoiceListMetadata,
        option: &OptionMetadata,
    ) -> Result<String, NamingError> {
        let default_name = self.upstream.name_for_option(choice_list, option)?;
        if self.is_resolved(&default_name) {
            // kept verbatim, but later fallback names must not collide with it
            self.registry.reserve(choice_list, &default_name);
            return Ok(default_name);
        }

        debug!(
            choice_list = %choice_list.name,
            option = option.value,
            default_name = %default_name,
            "Upstream option name unresolved, transliterating fallback label"
        );

        let candidate = match self.fallback_label(choice_list, option)? {
            Some(text) => self.transliterator.transliterate(text),
            None => Cow::Owned(placeholder_name(option.value)),
        };
        let candidate = ensure_valid_identifier(candidate).into_owned();
        Ok(self.registry.ensure_unique(choice_list, candidate))
    }

    fn name_for_entity(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
        self.upstream.name_for_entity(entity)
    }

    fn name_for_attribute(
        &mut self,
        entity: &EntityMetadata,
        attribute: &AttributeMetadata,
    ) -> Result<String, NamingError> {
        self.upstream.name_for_attribute(entity, attribute)
    }

    fn name_for_relationship(
        &mut self,
        entity: &EntityMetadata,
        relationship: &RelationshipMetadata,
        reflexive_role: Option<EntityRole>,
    ) -> Result<String, NamingError> {
        self.upstream
            .name_for_relationship(entity, relationship, reflexive_role)
    }

    fn name_for_service_context(&mut self) -> Result<String, NamingError> {
        self.upstream.name_for_service_context()
    }

    fn name_for_entity_set(&mut self, entity: &EntityMetadata) -> Result<String, NamingError> {
        self.upstream.name_for_entity_set(entity)
    }

    fn name_for_message_pair(&mut self, pair: &MessagePair) -> Result<String, NamingError> {
        self.upstream.name_for_message_pair(pair)
    }

    fn name_for_request_field(
        &mut self,
        request: &MessageRequest,
        field: &RequestField,
    ) -> Result<String, NamingError> {
        self.upstream.name_for_request_field(request, field)
    }

    fn name_for_response_field(
        &mut self,
        response: &MessageResponse,
        field: &ResponseField,
    ) -> Result<String, NamingError> {
        self.upstream.name_for_response_field(response, field)
    }
}

pub struct NamingServiceBuilder<S: NamingStrategy> {
    upstream: S,
    alphabet: Option<Alphabet>,
    fallback_language: Option<LanguageCode>,
    unresolved_marker: Cow<'static, str>,
    missing_label: MissingLabelPolicy,
    ambiguous_label: AmbiguousLabelPolicy,
}

impl<S: NamingStrategy> NamingServiceBuilder<S> {
    pub fn new(upstream: S) -> Self {
        Self {
            upstream,
            alphabet: None,
            fallback_language: None,
            unresolved_marker: Cow::Borrowed(DEFAULT_UNRESOLVED_MARKER),
            missing_label: MissingLabelPolicy::default(),
            ambiguous_label: AmbiguousLabelPolicy::default(),
        }
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Label language fed to the alphabet.
    ///
    /// Defaults to the chosen alphabet's own language, or to
    /// [`DEFAULT_FALLBACK_LANGUAGE`](crate::alphabet::DEFAULT_FALLBACK_LANGUAGE) when no
    /// alphabet was chosen either.
    pub fn fallback_language(mut self, language: LanguageCode) -> Self {
        self.fallback_language = Some(language);
        self
    }

    pub fn unresolved_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.unresolved_marker = marker.into();
        self
    }

    pub fn missing_label(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_label = policy;
        self
    }

    pub fn ambiguous_label(mut self, policy: AmbiguousLabelPolicy) -> Self {
        self.ambiguous_label = policy;
        self
    }

    pub fn build(self) -> NamingService<S> {
        let transliterator = match (self.alphabet, self.fallback_language) {
            (None, None) => Transliterator::default(),
            (Some(alphabet), None) => Transliterator::for_alphabet(alphabet),
            (None, Some(language)) => Transliterator::new(DEFAULT_ALPHABET, language),
            (Some(alphabet), Some(language)) => Transliterator::new(alphabet, language),
        };
        NamingService {
            upstream: self.upstream,
            transliterator,
            unresolved_marker: self.unresolved_marker,
            missing_label: self.missing_label,
            ambiguous_label: self.ambiguous_label,
            registry: NameRegistry::new(),
        }
    }
}
