#[cfg(test)]
mod tests {
    use occ_coder::algorithm::occupation::aggregate::{aggregate, to_category6, to_field_group};
    use occ_coder::algorithm::occupation::rules::{RuleBlock, RuleTier};
    use occ_coder::algorithm::occupation::{NormalizedText, normalize};
    use occ_coder::{Category6, Classifier, DetailedCode, FieldGroup, RuleTable};

    fn text(raw: &str) -> NormalizedText {
        normalize(Some(raw)).unwrap()
    }

    fn code(value: i16) -> DetailedCode {
        DetailedCode::from_code(value).unwrap()
    }

    #[test]
    fn test_homemaker_markers_classify_as_sentinel() {
        let classifier = Classifier::new();
        for raw in [
            "Hausfrau",
            "haushalt",
            "Familie",
            "Hausfrau und Mutter",
            "führt den Haushalt",
            "Familienfrau",
            "  HAUSFRAU  ",
        ] {
            assert_eq!(
                classifier.classify(&text(raw)),
                Some(DetailedCode::Homemaker),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_single_match_yields_rule_code() {
        let classifier = Classifier::new();
        let mut checked = 0;
        for rule in RuleTable::builtin().rules() {
            let Some(normalized) = normalize(Some(rule.pattern)) else {
                continue;
            };
            let trace = classifier.explain(&normalized);
            if trace.matches.len() == 1 {
                assert_eq!(trace.result, Some(rule.target_code), "{}", rule.pattern);
                assert_eq!(classifier.classify(&normalized), Some(rule.target_code));
                checked += 1;
            }
        }
        assert!(checked > 100, "only {checked} isolated patterns");
    }

    #[test]
    fn test_later_rule_wins_on_constructed_pair() {
        static BLOCKS: [RuleBlock; 2] = [
            RuleBlock {
                name: "leadership",
                tier: RuleTier::GenericOverride,
                code: DetailedCode::Homemaker,
                patterns: &["leiter"],
            },
            RuleBlock {
                name: "teaching_override",
                tier: RuleTier::CatchAllOverride,
                code: DetailedCode::DontKnow,
                patterns: &["schulleiter"],
            },
        ];
        let table = RuleTable::from_blocks(&BLOCKS);
        let classifier = Classifier::with_table(&table);

        assert_eq!(classifier.classify(&text("Abteilungsleiter")), Some(DetailedCode::Homemaker));
        let trace = classifier.explain(&text("Schulleiter"));
        assert_eq!(trace.matches.len(), 2);
        assert_eq!(trace.result, Some(DetailedCode::DontKnow));
        assert!(trace.is_layered());
    }

    #[test]
    fn test_builtin_domain_block_overrides_generic_leadership() {
        let classifier = Classifier::new();
        let trace = classifier.explain(&text("Schulleiter"));
        let first = trace.matches.first().unwrap();
        assert_eq!(first.pattern, "leiter");
        assert_eq!(first.code, code(410));
        assert_eq!(trace.result, Some(code(111)));
        assert_eq!(trace.overridden().count(), 1);
    }

    #[test]
    fn test_order_of_words_does_not_matter() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify(&text("Lehrer und Landwirt")),
            classifier.classify(&text("Landwirt und Lehrer"))
        );
    }

    #[test]
    fn test_aggregation_is_total_over_detailed_codes() {
        for detailed in DetailedCode::all() {
            let category = to_category6(to_field_group(detailed), detailed);
            assert!(category.is_some(), "{detailed} has no category");
            assert_eq!(aggregate(detailed), category);
            assert_eq!(aggregate(detailed), aggregate(detailed));
        }
    }

    #[test]
    fn test_every_rule_target_aggregates() {
        for rule in RuleTable::builtin().rules() {
            assert!(aggregate(rule.target_code).is_some(), "{}", rule.pattern);
        }
    }

    #[test]
    fn test_landwirt_end_to_end() {
        let detailed = Classifier::new().classify(&text("landwirt")).unwrap();
        assert_eq!(detailed, code(811));
        assert_eq!(to_field_group(detailed), Some(FieldGroup::Agriculture));
        let category = aggregate(detailed).unwrap();
        assert_eq!(category, Category6::Agriculture);
        assert_eq!(category.code(), 6);
        assert_eq!(
            category.label(),
            "Landwirtschaft, Forstwirtschaft, Fischerei und Tiermedizin"
        );
    }

    #[test]
    fn test_arzt_end_to_end() {
        let detailed = Classifier::new().classify(&text("er ist arzt")).unwrap();
        assert_eq!(detailed, code(914));
        assert_eq!(to_field_group(detailed), Some(FieldGroup::HealthWelfare));
        assert_eq!(aggregate(detailed).map(Category6::code), Some(1));
    }

    #[test]
    fn test_hausfrau_bypasses_field_group() {
        let detailed = Classifier::new().classify(&text("hausfrau")).unwrap();
        assert_eq!(detailed.code(), -14);
        assert_eq!(to_field_group(detailed), None);
        assert_eq!(aggregate(detailed), Some(Category6::Homemaker));
        assert_eq!(Category6::Homemaker.code(), -14);
    }

    #[test]
    fn test_bauer_trades_are_not_farmers() {
        let classifier = Classifier::new();
        for (raw, expected) in [
            ("Zimmermann / Holzbauer", 722),
            ("Holzbauer", 722),
            ("Modellbauer", 722),
            ("Möbelbauer", 722),
            ("Fensterbauer", 722),
            ("Brunnenbauer", 732),
            ("Heizungsbauer", 732),
            ("Flugzeugbauer", 716),
            ("Landschaftsbauer", 812),
        ] {
            assert_eq!(classifier.classify(&text(raw)), Some(code(expected)), "{raw}");
        }
        assert_eq!(classifier.classify(&text("Bauer")), Some(code(811)));
        assert_eq!(
            aggregate(code(722)).map(Category6::code),
            Some(4),
            "carpentry belongs to engineering trades"
        );
    }

    #[test]
    fn test_subject_teachers_stay_in_education() {
        let classifier = Classifier::new();
        for raw in [
            "Biologielehrerin",
            "Chemielehrer",
            "Physiklehrer",
            "Informatiklehrer",
            "Geschichtslehrerin",
            "Geografielehrer",
            "Geographielehrerin",
            "Wirtschaftslehrer",
        ] {
            let detailed = classifier.classify(&text(raw));
            assert_eq!(detailed, Some(code(114)), "{raw}");
            assert_eq!(detailed.and_then(aggregate), Some(Category6::EducationHealthSocial), "{raw}");
        }
    }

    #[test]
    fn test_unmatched_text_is_unclassified() {
        let classifier = Classifier::new();
        let trace = classifier.explain(&text("Qwertz"));
        assert!(trace.matches.is_empty());
        assert_eq!(trace.result, None);
        assert_eq!(trace.to_string(), "'qwertz' => unclassified");
    }

    #[test]
    fn test_blank_input_is_not_text() {
        assert!(normalize(None).is_none());
        assert!(normalize(Some("")).is_none());
        assert!(normalize(Some(" \t ")).is_none());
        assert_eq!(text(" Bäuerin ").as_str(), "bäuerin");
    }
}
