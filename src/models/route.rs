use crate::access::level::AccessLevel;
use serde::Deserialize;

/// One navigation attempt: where the user is trying to go.
///
/// `full_path` keeps the query string so a login redirect can send the user
/// back to exactly where they were headed. `access` is the requirement the
/// route declares; routes that declare nothing are public.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTarget {
    pub path: String,
    pub full_path: String,
    pub access: AccessLevel,
}

impl RouteTarget {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            full_path: path.clone(),
            path,
            access: AccessLevel::NotLogin,
        }
    }

    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    pub fn with_full_path(mut self, full_path: impl Into<String>) -> Self {
        self.full_path = full_path.into();
        self
    }
}

/// A single access rule from configuration: every path under `prefix`
/// requires at least `access`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRule {
    pub prefix: String,
    pub access: AccessLevel,
}

/// The gateway's view of the route table's access metadata.
///
/// Built once from config rules and never mutated afterwards. Lookup picks
/// the longest matching prefix, so `/admin/users` under both `/` and
/// `/admin` rules takes the `/admin` requirement. Paths with no matching
/// rule are public.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(mut rules: Vec<RouteRule>) -> Self {
        // "/admin/" and "/admin" are the same rule; canonicalize so a
        // trailing slash cannot leave the path unmatched and public.
        for rule in &mut rules {
            while rule.prefix.len() > 1 && rule.prefix.ends_with('/') {
                rule.prefix.pop();
            }
        }
        // Longest prefix first so lookup can take the first hit.
        rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { rules }
    }

    pub fn requirement_for(&self, path: &str) -> AccessLevel {
        self.rules
            .iter()
            .find(|rule| Self::prefix_matches(&rule.prefix, path))
            .map(|rule| rule.access)
            .unwrap_or(AccessLevel::NotLogin)
    }

    /// Build the [`RouteTarget`] for an incoming path and optional query.
    pub fn target_for(&self, path: &str, query: Option<&str>) -> RouteTarget {
        let full_path = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.to_string(),
        };
        RouteTarget::new(path)
            .with_full_path(full_path)
            .with_access(self.requirement_for(path))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn prefix_matches(prefix: &str, path: &str) -> bool {
        if prefix == "/" {
            return true;
        }
        match path.strip_prefix(prefix) {
            // Match whole segments only: /admin covers /admin and
            // /admin/users but not /administration.
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteRule {
                prefix: "/admin".to_string(),
                access: AccessLevel::Admin,
            },
            RouteRule {
                prefix: "/app".to_string(),
                access: AccessLevel::User,
            },
            RouteRule {
                prefix: "/app/chat".to_string(),
                access: AccessLevel::User,
            },
        ])
    }

    #[test]
    fn test_unmatched_path_is_public() {
        assert_eq!(table().requirement_for("/"), AccessLevel::NotLogin);
        assert_eq!(table().requirement_for("/about"), AccessLevel::NotLogin);
    }

    #[test]
    fn test_exact_prefix_match() {
        assert_eq!(table().requirement_for("/admin"), AccessLevel::Admin);
        assert_eq!(table().requirement_for("/app"), AccessLevel::User);
    }

    #[test]
    fn test_nested_path_inherits_prefix_rule() {
        assert_eq!(table().requirement_for("/admin/users"), AccessLevel::Admin);
    }

    #[test]
    fn test_partial_segment_does_not_match() {
        assert_eq!(
            table().requirement_for("/administration"),
            AccessLevel::NotLogin
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = RouteTable::new(vec![
            RouteRule {
                prefix: "/app".to_string(),
                access: AccessLevel::User,
            },
            RouteRule {
                prefix: "/app/admin".to_string(),
                access: AccessLevel::Admin,
            },
        ]);
        assert_eq!(table.requirement_for("/app/admin"), AccessLevel::Admin);
        assert_eq!(table.requirement_for("/app/other"), AccessLevel::User);
    }

    #[test]
    fn test_trailing_slash_prefix_still_protects() {
        let table = RouteTable::new(vec![RouteRule {
            prefix: "/admin/".to_string(),
            access: AccessLevel::Admin,
        }]);
        assert_eq!(table.requirement_for("/admin/users"), AccessLevel::Admin);
        assert_eq!(table.requirement_for("/admin"), AccessLevel::Admin);
        assert_eq!(
            table.requirement_for("/administration"),
            AccessLevel::NotLogin
        );
    }

    #[test]
    fn test_root_rule_covers_everything() {
        let table = RouteTable::new(vec![RouteRule {
            prefix: "/".to_string(),
            access: AccessLevel::User,
        }]);
        assert_eq!(table.requirement_for("/anything"), AccessLevel::User);
    }

    #[test]
    fn test_target_for_keeps_query_in_full_path() {
        let target = table().target_for("/admin/users", Some("page=2"));
        assert_eq!(target.path, "/admin/users");
        assert_eq!(target.full_path, "/admin/users?page=2");
        assert_eq!(target.access, AccessLevel::Admin);
    }

    #[test]
    fn test_target_for_without_query() {
        let target = table().target_for("/about", None);
        assert_eq!(target.full_path, "/about");
        assert_eq!(target.access, AccessLevel::NotLogin);
    }
}
