#[cfg(test)]
mod unit_tests {

    use crate::{
        ChoiceListMetadata, LanguageCode, Label, MetadataId, NamingService, NamingStrategy,
        OptionMetadata, RUS, SchemaNamingStrategy, Transliterator, UKR,
        naming::identifier::ensure_valid_identifier,
    };

    fn russian_option(value: i32, text: &str) -> OptionMetadata {
        OptionMetadata::new(value, Label::new().with(LanguageCode::RUSSIAN, text))
    }

    #[test]
    fn russian_example_phrase() {
        let t = Transliterator::for_alphabet(RUS);
        assert_eq!(t.transliterate("привет мир"), "privet_mir");
    }

    #[test]
    fn sanitizer_examples() {
        assert_eq!(ensure_valid_identifier("1abc"), "_1abc");
        assert_eq!(ensure_valid_identifier("_valid_Name2"), "_valid_Name2");
    }

    #[test]
    fn default_engine_uses_russian_table_on_ukrainian_labels() {
        let mut svc = NamingService::new(SchemaNamingStrategy::new());
        assert_eq!(svc.transliterator().alphabet(), RUS);
        assert_eq!(svc.transliterator().fallback_language(), LanguageCode::UKRAINIAN);

        let list = ChoiceListMetadata::local(MetadataId(1), "greeting");
        let opt = OptionMetadata::new(1, Label::new().with(LanguageCode::UKRAINIAN, "привет мир"));
        assert_eq!(svc.name_for_option(&list, &opt).unwrap(), "privet_mir");
    }

    #[test]
    fn ukrainian_table_is_opt_in() {
        let svc = NamingService::builder(SchemaNamingStrategy::new())
            .alphabet(UKR)
            .build();
        assert_eq!(svc.transliterator().alphabet(), UKR);
        assert_eq!(svc.transliterator().fallback_language(), LanguageCode::UKRAINIAN);
    }

    #[test]
    fn three_reds_in_one_list() {
        let mut svc = NamingService::builder(SchemaNamingStrategy::new())
            .alphabet(RUS)
            .build();
        let list = ChoiceListMetadata::local(MetadataId(1), "colour");
        let names: Vec<_> = (0..3)
            .map(|v| svc.name_for_option(&list, &russian_option(v, "Ред")).unwrap())
            .collect();
        assert_eq!(names, ["Red", "Red_2", "Red_3"]);
    }

    #[test]
    fn english_name_blocks_later_fallback_name() {
        let mut svc = NamingService::builder(SchemaNamingStrategy::new())
            .alphabet(RUS)
            .build();
        let list = ChoiceListMetadata::local(MetadataId(1), "colour");
        let english = OptionMetadata::new(1, Label::new().with(LanguageCode::ENGLISH, "Red"));
        assert_eq!(svc.name_for_option(&list, &english).unwrap(), "Red");
        assert_eq!(svc.name_for_option(&list, &russian_option(2, "Ред")).unwrap(), "Red_2");
    }

    #[test]
    fn same_name_in_two_lists() {
        let mut svc = NamingService::builder(SchemaNamingStrategy::new())
            .alphabet(RUS)
            .build();
        let colours = ChoiceListMetadata::local(MetadataId(1), "colour");
        let flags = ChoiceListMetadata::local(MetadataId(2), "flag");
        assert_eq!(svc.name_for_option(&colours, &russian_option(1, "Ред")).unwrap(), "Red");
        assert_eq!(svc.name_for_option(&flags, &russian_option(1, "Ред")).unwrap(), "Red");
    }

    #[test]
    fn english_label_wins_over_transliteration() {
        let mut svc = NamingService::builder(SchemaNamingStrategy::new())
            .alphabet(RUS)
            .build();
        let list = ChoiceListMetadata::local(MetadataId(1), "colour");
        let opt = OptionMetadata::new(
            1,
            Label::new()
                .with(LanguageCode::ENGLISH, "Crimson")
                .with(LanguageCode::RUSSIAN, "Малиновый"),
        );
        assert_eq!(svc.name_for_option(&list, &opt).unwrap(), "Crimson");
    }
}
