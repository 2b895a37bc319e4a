//! Property-based and scenario tests for search ranking

use proptest::prelude::*;
use zapwiki_content::{builtin, Article, Catalog, ContentStore, Section};
use zapwiki_search::{normalize, SearchIndex, MAX_RESULTS};

fn builtin_index() -> SearchIndex {
    let store = ContentStore::new(builtin::zap_post_catalog(), builtin::HOME_SLUG).unwrap();
    SearchIndex::build(&store)
}

#[test]
fn test_guia_finds_welcome_by_summary() {
    let hits = builtin_index().search("guia");

    let welcome = hits
        .iter()
        .find(|hit| hit.slug == "bem-vindo")
        .expect("bem-vindo should match 'guia'");
    assert!(welcome.score >= 2);
    assert!(welcome.matched.summary);
}

#[test]
fn test_unaccented_query_matches_accented_title() {
    let hits = builtin_index().search("acoes");

    let credits = hits
        .iter()
        .find(|hit| hit.slug == "creditos-e-acoes")
        .expect("creditos-e-acoes should match 'acoes'");
    assert!(credits.score >= 3);
    assert_eq!(hits[0].slug, "creditos-e-acoes");
}

#[test]
fn test_accented_query_matches_too() {
    let plain = builtin_index().search("configuracoes");
    let accented = builtin_index().search("CONFIGURAÇÕES");
    assert_eq!(plain, accented);
    assert_eq!(plain[0].slug, "perfil-configuracoes");
}

#[test]
fn test_body_only_match_scores_one() {
    let hits = builtin_index().search("meia-noite");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "creditos-e-acoes");
    assert_eq!(hits[0].score, 1);
}

#[test]
fn test_markup_attributes_are_matchable() {
    // Payload serialization keeps attribute values such as layout classes
    let hits = builtin_index().search("list-disc");
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.score == 1));
}

#[test]
fn test_broad_query_is_capped() {
    let hits = builtin_index().search("e");
    assert_eq!(hits.len(), MAX_RESULTS);
    assert!(hits.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn test_failed_extraction_does_not_abort_indexing() {
    let mut deep = serde_json::json!("escondido");
    for _ in 0..200 {
        deep = serde_json::Value::Array(vec![deep]);
    }
    let catalog = Catalog::new()
        .add_article(
            Article::new("quebrado", "Quebrado", "C")
                .add_section(Section::new("a", "A", zapwiki_content::ContentPayload::Opaque(deep)))
                .add_section(Section::new("b", "B", "visível")),
        )
        .add_article(Article::new("ok", "Outro", "C").add_section(Section::new("a", "A", "escondido")));

    let index = SearchIndex::build(&ContentStore::new(catalog, "ok").unwrap());
    assert_eq!(index.len(), 2);

    let hidden: Vec<String> = index.search("escondido").into_iter().map(|h| h.slug).collect();
    assert_eq!(hidden, vec!["ok"]);
    assert_eq!(index.search("visivel").len(), 1);
}

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ÿ ]{1,24}"
}

proptest! {
    #[test]
    fn prop_title_substring_scores_at_least_three(
        title in title_strategy(),
        start in 0usize..24,
        len in 1usize..24,
    ) {
        let normalized: Vec<char> = normalize(&title).chars().collect();
        let start = start.min(normalized.len().saturating_sub(1));
        let end = (start + len).min(normalized.len());
        let query: String = normalized[start..end].iter().collect();
        prop_assume!(!query.trim().is_empty());

        let catalog = Catalog::new()
            .add_article(Article::new("alvo", title.clone(), "C"))
            .add_article(Article::new("outro", "Nada a ver", "C").with_summary("123"));
        let index = SearchIndex::build(&ContentStore::new(catalog, "alvo").unwrap());

        let hits = index.search(&query);
        let hit = hits.iter().find(|hit| hit.slug == "alvo");
        prop_assert!(hit.is_some(), "query {:?} should match title {:?}", query, title);
        prop_assert!(hit.unwrap().score >= 3);
    }

    #[test]
    fn prop_results_never_exceed_cap(query in ".{0,6}") {
        prop_assert!(builtin_index().search(&query).len() <= MAX_RESULTS);
    }

    #[test]
    fn prop_scores_are_positive_and_sorted(query in "[a-zçãé ]{1,5}") {
        let hits = builtin_index().search(&query);
        prop_assert!(hits.iter().all(|hit| (1..=6).contains(&hit.score)));
        prop_assert!(hits.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn prop_search_ignores_accents_and_case(query in "[A-Za-zÀ-ÿ]{1,6}") {
        let index = builtin_index();
        prop_assert_eq!(index.search(&query), index.search(&normalize(&query)));
    }

    #[test]
    fn prop_whitespace_query_is_empty(query in "[ \t\n]{0,8}") {
        prop_assert!(builtin_index().search(&query).is_empty());
    }
}
