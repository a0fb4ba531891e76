use crate::core::filter::{filter_and_sort, matches, QueryVariants, SearchOptions};
use crate::core::script::ScriptMap;
use crate::core::types::{FilterState, Level, TermEntry};

/// Helper to create test entries
fn entry(category: &str, level: Level, tw: &str, cn: &str, note: &str) -> TermEntry {
    TermEntry {
        category: category.to_string(),
        level,
        form_tw: tw.to_string(),
        form_cn: cn.to_string(),
        note: note.to_string(),
    }
}

/// Small mixed-level dataset used by most tests
fn dataset() -> Vec<TermEntry> {
    vec![
        entry("飲食", Level::Low, "番茄", "西红柿", ""),
        entry("交通", Level::High, "計程車", "出租车", "taxi"),
        entry("資訊", Level::Mid, "滑鼠", "鼠标", "mouse"),
        entry("交通", Level::High, "捷運", "地铁", ""),
        entry("資訊", Level::Unknown, "游標", "光标", ""),
    ]
}

fn plain_options(map: &ScriptMap) -> SearchOptions<'_> {
    SearchOptions {
        min_query_len: 1,
        allow_simp_input: false,
        script_map: map,
    }
}

#[test]
fn test_empty_filter_returns_full_set_sorted() {
    let map = ScriptMap::new();
    let result = filter_and_sort(&dataset(), &FilterState::default(), &plain_options(&map));

    assert_eq!(result.len(), 5);
    // Descending by rank: high, high, mid, low, unknown
    let levels: Vec<Level> = result.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            Level::High,
            Level::High,
            Level::Mid,
            Level::Low,
            Level::Unknown
        ]
    );
}

#[test]
fn test_sort_is_stable_within_rank() {
    let map = ScriptMap::new();
    let result = filter_and_sort(&dataset(), &FilterState::default(), &plain_options(&map));

    // The two high entries keep their dataset order: 計程車 before 捷運
    assert_eq!(result[0].form_tw, "計程車");
    assert_eq!(result[1].form_tw, "捷運");
}

#[test]
fn test_source_list_is_not_mutated() {
    let map = ScriptMap::new();
    let entries = dataset();
    let before = entries.clone();

    let _ = filter_and_sort(&entries, &FilterState::default(), &plain_options(&map));
    assert_eq!(entries, before);
}

#[test]
fn test_substring_match_is_case_insensitive() {
    let map = ScriptMap::new();
    let state = FilterState::new("TAXI", None, None);
    let result = filter_and_sort(&dataset(), &state, &plain_options(&map));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].form_tw, "計程車");
}

#[test]
fn test_query_matches_any_haystack_field() {
    let map = ScriptMap::new();
    let options = plain_options(&map);

    // category, tw form, cn form, note — one hit each
    for (query, expected_tw) in [
        ("飲食", "番茄"),
        ("捷運", "捷運"),
        ("鼠标", "滑鼠"),
        ("mouse", "滑鼠"),
    ] {
        let state = FilterState::new(query, None, None);
        let result = filter_and_sort(&dataset(), &state, &options);
        assert_eq!(result.len(), 1, "query {query:?}");
        assert_eq!(result[0].form_tw, expected_tw, "query {query:?}");
    }
}

#[test]
fn test_filter_and_sort_is_idempotent() {
    let map = ScriptMap::new();
    let options = plain_options(&map);
    let state = FilterState::new("", None, Some(Level::High));

    let once = filter_and_sort(&dataset(), &state, &options);
    let twice = filter_and_sort(&once, &state, &options);
    assert_eq!(once, twice);
}

#[test]
fn test_facets_commute() {
    let map = ScriptMap::new();
    let options = plain_options(&map);

    let by_category = FilterState::new("", Some("交通".to_string()), None);
    let by_level = FilterState::new("", None, Some(Level::High));
    let combined = FilterState::new("", Some("交通".to_string()), Some(Level::High));

    let category_then_level =
        filter_and_sort(&filter_and_sort(&dataset(), &by_category, &options), &by_level, &options);
    let level_then_category =
        filter_and_sort(&filter_and_sort(&dataset(), &by_level, &options), &by_category, &options);
    let one_pass = filter_and_sort(&dataset(), &combined, &options);

    assert_eq!(category_then_level, level_then_category);
    assert_eq!(one_pass, category_then_level);
}

#[test]
fn test_level_facet_never_matches_unknown() {
    let map = ScriptMap::new();

    for level in [Level::High, Level::Mid, Level::Low] {
        let state = FilterState::new("", None, Some(level));
        let result = filter_and_sort(&dataset(), &state, &plain_options(&map));
        assert!(result.iter().all(|e| e.level == level));
    }
}

#[test]
fn test_simplified_query_matches_traditional_form() {
    // Example from the glossary: 计程车 typed in simplified script must
    // find the entry whose tw form is 計程車.
    let map: ScriptMap = [("计", "計"), ("车", "車")]
        .into_iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect();

    let entries = vec![
        entry("交通", Level::High, "計程車", "出租车", ""),
        entry("飲食", Level::Low, "蕃茄", "番茄", ""),
    ];

    let options = SearchOptions {
        min_query_len: 1,
        allow_simp_input: true,
        script_map: &map,
    };

    let state = FilterState::new("计程车", None, None);
    let result = filter_and_sort(&entries, &state, &options);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].form_tw, "計程車");
}

#[test]
fn test_alternate_variant_disabled_without_flag() {
    let map: ScriptMap = [("计".to_string(), "計".to_string())].into_iter().collect();

    let options = SearchOptions {
        min_query_len: 1,
        allow_simp_input: false,
        script_map: &map,
    };

    let variants = QueryVariants::build("计程车", &options);
    let target = entry("交通", Level::High, "計程車", "出租车", "");

    // Literal query misses, and no alternate rendering is computed
    assert!(!matches(&target, &variants));
}

#[test]
fn test_short_query_applies_no_text_filter() {
    let map = ScriptMap::new();
    let options = SearchOptions {
        min_query_len: 2,
        allow_simp_input: false,
        script_map: &map,
    };

    // One character falls below the threshold: full set comes back
    let state = FilterState::new("茄", None, None);
    let result = filter_and_sort(&dataset(), &state, &options);
    assert_eq!(result.len(), 5);

    // Two characters is enough to filter
    let state = FilterState::new("番茄", None, None);
    let result = filter_and_sort(&dataset(), &state, &options);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_min_length_counts_characters_not_bytes() {
    let map = ScriptMap::new();
    let options = SearchOptions {
        min_query_len: 2,
        allow_simp_input: false,
        script_map: &map,
    };

    // 滑鼠 is 6 bytes but 2 characters, so the filter is active
    let variants = QueryVariants::build("滑鼠", &options);
    assert!(variants.is_active());
}

#[test]
fn test_whitespace_query_is_inactive() {
    let map = ScriptMap::new();
    let variants = QueryVariants::build("   ", &plain_options(&map));
    assert!(!variants.is_active());
}

#[test]
fn test_cleared_state_restores_initial_listing() {
    let map = ScriptMap::new();
    let options = plain_options(&map);

    let narrowed = FilterState::new("捷運", Some("交通".to_string()), Some(Level::High));
    let narrow_result = filter_and_sort(&dataset(), &narrowed, &options);
    assert_eq!(narrow_result.len(), 1);

    let cleared = filter_and_sort(&dataset(), &FilterState::cleared(), &options);
    let initial = filter_and_sort(&dataset(), &FilterState::default(), &options);
    assert_eq!(cleared, initial);
    assert_eq!(cleared.len(), 5);
}

#[test]
fn test_no_match_yields_empty_result() {
    let map = ScriptMap::new();
    let state = FilterState::new("高鐵", None, None);
    let result = filter_and_sort(&dataset(), &state, &plain_options(&map));
    assert!(result.is_empty());
}
