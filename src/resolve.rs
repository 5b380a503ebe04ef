//! Partial-name resolution.
//!
//! A query resolves to an installed version only when exactly one version
//! contains it as a case-sensitive substring. Otherwise the query is passed
//! through verbatim and the switch's existence check decides.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one installed version contains the query.
    Unique(String),
    /// No installed version contains the query.
    NoMatch(String),
    /// Several installed versions contain the query.
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

impl Resolution {
    /// The identifier to hand to the switch: the unique match, or the query unchanged.
    pub fn version_id(&self) -> &str {
        match self {
            Resolution::Unique(version) => version,
            Resolution::NoMatch(query) | Resolution::Ambiguous { query, .. } => query,
        }
    }

    /// Installed versions the query could have meant, when it was ambiguous
    pub fn candidates(&self) -> &[String] {
        match self {
            Resolution::Ambiguous { candidates, .. } => candidates,
            _ => &[],
        }
    }
}

/// Resolve `query` against the installed `versions`
pub fn resolve(query: &str, versions: &[String]) -> Resolution {
    let mut matches: Vec<&String> = versions.iter().filter(|v| v.contains(query)).collect();

    let resolution = match matches.len() {
        0 => Resolution::NoMatch(query.to_string()),
        1 => Resolution::Unique(matches.remove(0).clone()),
        _ => Resolution::Ambiguous {
            query: query.to_string(),
            candidates: matches.into_iter().cloned().collect(),
        },
    };

    debug!("Resolved '{}' to {:?}", query, resolution);
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed() -> Vec<String> {
        ["jdk-11.0.2", "jdk-17.0.1", "jdk1.8.0_202"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_single_substring_match_resolves() {
        let versions = installed();
        assert_eq!(resolve("17", &versions), Resolution::Unique("jdk-17.0.1".into()));
        assert_eq!(resolve("1.8", &versions).version_id(), "jdk1.8.0_202");
        assert_eq!(resolve("11.0.2", &versions).version_id(), "jdk-11.0.2");
    }

    #[test]
    fn test_full_name_resolves_to_itself() {
        let versions = installed();
        for v in &versions {
            assert_eq!(resolve(v, &versions).version_id(), v);
        }
    }

    #[test]
    fn test_no_match_is_verbatim() {
        let versions = installed();
        let resolution = resolve("21", &versions);
        assert_eq!(resolution, Resolution::NoMatch("21".into()));
        assert_eq!(resolution.version_id(), "21");
        assert!(resolution.candidates().is_empty());
    }

    #[test]
    fn test_ambiguous_is_verbatim_with_candidates() {
        let versions = installed();
        let resolution = resolve("jdk-1", &versions);
        assert_eq!(resolution.version_id(), "jdk-1");
        assert_eq!(resolution.candidates(), ["jdk-11.0.2", "jdk-17.0.1"]);
    }

    #[test]
    fn test_case_sensitive() {
        let versions = installed();
        assert_eq!(resolve("JDK-17", &versions).version_id(), "JDK-17");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let versions = installed();
        assert!(matches!(resolve("", &versions), Resolution::Ambiguous { .. }));
        assert!(matches!(resolve("", &versions[..1]), Resolution::Unique(_)));
    }

    #[test]
    fn test_nothing_installed() {
        assert_eq!(resolve("17", &[]).version_id(), "17");
    }
}
