/// Decorators that may prefix a constraint, two-character operators first
/// so that `>=` is never read as `>` followed by `=`.
const DECORATORS: [&str; 8] = [">=", "<=", "^", "~", ">", "<", "=", "v"];

/// Constraints that always count as "below any target"
const WILDCARD_CONSTRAINTS: [&str; 2] = ["*", "latest"];

/// Prefix of branch-based constraints (`dev-main`, `dev-master`, ...)
const DEV_BRANCH_PREFIX: &str = "dev-";

/// MajorVersionReducer reduces a free-form constraint string to one integer
///
/// The reduction is deliberately coarse: only the major component of the
/// first alternative (`a|b`) or first clause (`a b`) is kept.
///
/// Steps, in order:
/// 1. `*`, `latest` and `dev-*` reduce to 0
/// 2. one leading decorator is stripped
/// 3. `a|b` keeps `a` and strips one decorator again
/// 4. otherwise `a b` keeps `a`
/// 5. the leading digit run is parsed, 0 if there is none
pub struct MajorVersionReducer;

impl MajorVersionReducer {
    /// Returns the effective major version of a constraint
    ///
    /// # Examples
    /// ```
    /// use dep_audit::audit::services::MajorVersionReducer;
    ///
    /// assert_eq!(MajorVersionReducer::reduce("^3.2"), 3);
    /// assert_eq!(MajorVersionReducer::reduce(">=2.0 <4.0"), 2);
    /// assert_eq!(MajorVersionReducer::reduce("dev-main"), 0);
    /// ```
    pub fn reduce(constraint: &str) -> u64 {
        let constraint = constraint.trim();
        if WILDCARD_CONSTRAINTS.contains(&constraint) || constraint.starts_with(DEV_BRANCH_PREFIX)
        {
            return 0;
        }

        let stripped = Self::strip_decorator(constraint);

        let clause = if let Some((first, _)) = stripped.split_once('|') {
            Self::strip_decorator(first.trim())
        } else if let Some((first, _)) = stripped.split_once(' ') {
            first
        } else {
            stripped
        };

        Self::leading_integer(clause)
    }

    /// `reduce(constraint) < target`
    pub fn is_below(constraint: &str, target: u64) -> bool {
        Self::reduce(constraint) < target
    }

    /// Strips at most one decorator, plus any whitespace that followed it
    fn strip_decorator(constraint: &str) -> &str {
        DECORATORS
            .iter()
            .find_map(|decorator| constraint.strip_prefix(decorator))
            .map(str::trim_start)
            .unwrap_or(constraint)
    }

    fn leading_integer(text: &str) -> u64 {
        let end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        text[..end].parse().unwrap_or(0)
    }
}
