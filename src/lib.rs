pub mod alphabet;
pub mod metadata;
pub mod naming;
pub mod transliterator;

#[cfg(test)]
mod testing;

pub use alphabet::{Alphabet, LanguageCode, RUS, UKR, all_alphabets};
pub use metadata::{ChoiceListMetadata, EntityMetadata, Label, MetadataId, OptionMetadata};
pub use naming::registry::NameRegistry;
pub use naming::schema::SchemaNamingStrategy;
pub use naming::service::{AmbiguousLabelPolicy, MissingLabelPolicy, NamingService};
pub use naming::{NamingError, NamingStrategy};
pub use transliterator::Transliterator;
