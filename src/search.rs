//! Project Search
//!
//! Case-insensitive substring filter over project cards.

use crate::models::Project;

/// Normalized search term: lower-cased and trimmed
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Text a card is matched against: title, description and tags, each
/// lower-cased, joined by spaces.
pub fn card_haystack(title: &str, description: &str, tags: &[String]) -> String {
    let tags = tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {} {}", title.to_lowercase(), description.to_lowercase(), tags)
        .trim()
        .to_string()
}

pub fn project_matches(project: &Project, term: &str) -> bool {
    let term = normalize_term(term);
    if term.is_empty() {
        return true;
    }
    let haystack = card_haystack(
        &project.name,
        project.description.as_deref().unwrap_or(""),
        &project.display_tags(),
    );
    haystack.contains(&term)
}

/// Outcome of applying a term to the full card set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Ids of visible cards, in card order
    pub visible: Vec<u32>,
    /// Whether the single "no results" placeholder is shown
    pub show_no_results: bool,
}

pub fn filter_projects(projects: &[Project], term: &str) -> FilterOutcome {
    let visible: Vec<u32> = projects
        .iter()
        .filter(|p| project_matches(p, term))
        .map(|p| p.id)
        .collect();
    let show_no_results = !normalize_term(term).is_empty() && visible.is_empty() && !projects.is_empty();
    FilterOutcome { visible, show_no_results }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, name: &str, description: &str, tags: &[&str]) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            color: "blue".to_string(),
            status: "active".to_string(),
            creator_name: None,
            task_count: 0,
            member_count: 1,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Website Redesign", "New landing page", &["Design"]),
            project(2, "Mobile App", "iOS and Android", &["engineering"]),
            project(3, "Q3 Planning", "", &[]),
        ]
    }

    #[test]
    fn test_matches_title_description_and_tags() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, "REDESIGN").visible, vec![1]);
        assert_eq!(filter_projects(&projects, "android").visible, vec![2]);
        assert_eq!(filter_projects(&projects, "design").visible, vec![1]);
        assert_eq!(filter_projects(&projects, "  engineering ").visible, vec![2]);
    }

    #[test]
    fn test_status_tag_is_searchable() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, "active").visible, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_and_whitespace_match_everything() {
        let projects = sample();
        for term in ["", "   "] {
            let out = filter_projects(&projects, term);
            assert_eq!(out.visible, vec![1, 2, 3]);
            assert!(!out.show_no_results);
        }
    }

    #[test]
    fn test_no_results_placeholder() {
        let projects = sample();
        let out = filter_projects(&projects, "zzz");
        assert!(out.visible.is_empty());
        assert!(out.show_no_results);
        // clearing the term removes it again
        let out = filter_projects(&projects, "");
        assert!(!out.show_no_results);
        assert_eq!(out.visible.len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let projects = sample();
        for term in ["app", "q3", "nothing", ""] {
            let once = filter_projects(&projects, term);
            let visible: Vec<Project> = projects
                .iter()
                .filter(|p| once.visible.contains(&p.id))
                .cloned()
                .collect();
            let twice = filter_projects(&visible, term);
            assert_eq!(once.visible, twice.visible);
            assert_eq!(filter_projects(&projects, term), once);
        }
    }

    #[test]
    fn test_haystack_shape() {
        assert_eq!(
            card_haystack("Alpha", "First ONE", &["X".into(), "y".into()]),
            "alpha first one x y"
        );
        assert_eq!(card_haystack("Alpha", "", &[]), "alpha");
    }
}
