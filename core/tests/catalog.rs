use epicfolio_core::catalog::{
    featured_projects, project_matches, FEATURED_PROJECT_COUNT, PROJECT_CATALOG,
    PROJECT_CATEGORIES,
};

#[test]
fn featured_prefix_has_six_entries() {
    assert_eq!(featured_projects().len(), FEATURED_PROJECT_COUNT);
    assert_eq!(PROJECT_CATALOG.len(), 10);
}

#[test]
fn every_entry_belongs_to_a_listed_category() {
    for entry in PROJECT_CATALOG {
        assert!(
            PROJECT_CATEGORIES.contains(&entry.category),
            "unlisted category {}",
            entry.category
        );
        assert!(!entry.tags.is_empty());
    }
}

#[test]
fn all_category_and_empty_query_pass_everything() {
    for entry in PROJECT_CATALOG {
        assert!(project_matches(entry, "All", ""));
        assert!(project_matches(entry, "All", "   "));
    }
}

#[test]
fn category_filter_narrows() {
    let web = PROJECT_CATALOG
        .iter()
        .filter(|entry| project_matches(entry, "Web", ""))
        .count();
    assert_eq!(web, 3);
    for entry in PROJECT_CATALOG {
        if project_matches(entry, "Enterprise", "") {
            assert_eq!(entry.category, "Enterprise");
        }
    }
}

#[test]
fn search_is_case_insensitive_over_title_blurb_and_tags() {
    let entry = &PROJECT_CATALOG[0];
    assert!(project_matches(entry, "All", "sportshub"));
    assert!(project_matches(entry, "All", "MERN"));
    assert!(project_matches(entry, "All", "dashboards"));
    assert!(!project_matches(entry, "All", "salesforce"));
    // Category and query must both hold.
    assert!(!project_matches(entry, "Enterprise", "sportshub"));
}
