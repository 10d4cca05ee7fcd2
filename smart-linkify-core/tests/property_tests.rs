// smart-linkify-core/tests/property_tests.rs
use proptest::prelude::*;
use smart_linkify_core::format::escape_html;
use smart_linkify_core::{linkify, EntityKind, LinkifyEngine, LinkifyOptions};

fn everything_on() -> LinkifyOptions {
    LinkifyOptions {
        detect_emails: Some(true),
        detect_phones: Some(true),
        ..Default::default()
    }
    .with_hashtag_url(|t| format!("https://tags.test/{}", t))
    .with_mention_url(|u| format!("https://users.test/{}", u))
}

fn only(kind: EntityKind) -> LinkifyOptions {
    LinkifyOptions {
        detect_emails: Some(kind == EntityKind::Email),
        detect_phones: Some(kind == EntityKind::Phone),
        ..Default::default()
    }
}

proptest! {
    /// Text without dots, digits, `@` or `#` can not contain an entity.
    #[test]
    fn prop_entity_free_text_is_unchanged(text in "[a-zA-Z ,;!?\\n]{0,200}") {
        prop_assert_eq!(linkify(&text, &everything_on()).unwrap(), text);
    }

    #[test]
    fn prop_accepted_matches_never_overlap(text in "[a-z0-9@#.:/ _+()-]{0,160}") {
        let options = everything_on();
        let matches = LinkifyEngine::new(&options).find_matches(&text).unwrap();
        for pair in matches.windows(2) {
            prop_assert!(pair[0].candidate.end <= pair[1].candidate.start, "overlap in {:?}", text);
        }
        for m in &matches {
            prop_assert!(m.candidate.start < m.candidate.end && m.candidate.end <= text.len());
        }
    }

    #[test]
    fn prop_urls_never_supersede_emails_or_phones(text in "[a-z0-9@.:/ ()-]{0,160}") {
        let options = everything_on();
        let all = LinkifyEngine::new(&options).find_matches(&text).unwrap();

        let emails_only = only(EntityKind::Email);
        for email in LinkifyEngine::new(&emails_only).find_matches(&text).unwrap() {
            if email.candidate.kind != EntityKind::Email {
                continue;
            }
            prop_assert!(all.iter().any(|m| m.candidate == email.candidate), "email lost in {:?}", text);
        }

        let phones_only = only(EntityKind::Phone);
        for phone in LinkifyEngine::new(&phones_only).find_matches(&text).unwrap() {
            if phone.candidate.kind != EntityKind::Phone {
                continue;
            }
            let kept = all.iter().any(|m| m.candidate == phone.candidate);
            let beaten_by_email = all
                .iter()
                .any(|m| m.candidate.kind == EntityKind::Email && m.candidate.overlaps(&phone.candidate));
            prop_assert!(kept || beaten_by_email, "phone lost to a lower priority match in {:?}", text);
        }
    }

    /// A non-ASCII letter next to an ASCII entity ends the entity; it never hides it.
    #[test]
    fn prop_non_ascii_neighbours_keep_entities(
        before in "[éüßжλ是 ]{0,3}",
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        tag in "[a-z_]{1,12}",
        user in "[a-z_]{1,15}",
        after in "[éüßжλ是]{1,3}",
    ) {
        let options = everything_on();
        let engine = LinkifyEngine::new(&options);
        let cases = [
            (EntityKind::Email, format!("{}@{}.com", local, domain)),
            (EntityKind::Hashtag, format!("#{}", tag)),
            (EntityKind::Mention, format!("@{}", user)),
        ];
        for (kind, entity) in cases {
            let text = format!("{}{}{}", before, entity, after);
            let matches = engine.find_matches(&text).unwrap();
            prop_assert_eq!(matches.len(), 1, "in {:?}", text);
            prop_assert_eq!(matches[0].candidate.kind, kind);
            prop_assert_eq!(&matches[0].candidate.original_text, &entity);
        }
    }

    #[test]
    fn prop_linkify_is_pure(text in "[a-z0-9@#.:/ <>&\"'-]{0,120}") {
        let options = everything_on();
        prop_assert_eq!(linkify(&text, &options).unwrap(), linkify(&text, &options).unwrap());
    }

    #[test]
    fn prop_display_text_is_escaped_exactly_once(text in "[a-z0-9@#.:/ <>&\"'?=-]{0,120}") {
        let options = everything_on();
        for m in LinkifyEngine::new(&options).find_matches(&text).unwrap() {
            let escaped = escape_html(&m.candidate.display_text);
            prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
            let expected = format!(">{}</a>", escaped);
            prop_assert!(m.rendered_markup.contains(&expected));
        }
    }

    #[test]
    fn prop_sanitized_output_has_no_raw_script(body in "[a-z .]{0,40}") {
        let options = LinkifyOptions { sanitize_input: Some(true), ..Default::default() };
        let text = format!("<script>{}</script> example.com", body);
        let out = linkify(&text, &options).unwrap();
        prop_assert!(!out.contains("<script"));
    }
}
