//! Dialect-specific SQL expression templates.

/// Named SQL templates with `{}` placeholders, one instance per dialect.
///
/// The defaults are ANSI-flavored; dialects override the expressions their
/// engine spells differently, typically with struct update syntax:
///
/// ```rust
/// use dialect_core::SqlExpressions;
///
/// let exprs = SqlExpressions {
///     regex_like: "{} regexp '{}'",
///     ..SqlExpressions::default()
/// };
/// assert_eq!(exprs.count_all, "COUNT(*)");
/// ```
///
/// An instance is constant for its adapter's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlExpressions {
    pub count_all: &'static str,
    pub count_conditional: &'static str,
    pub distinct_count: &'static str,
    pub null_count: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub avg: &'static str,
    pub sum: &'static str,
    pub regex_like: &'static str,
}

impl Default for SqlExpressions {
    fn default() -> Self {
        Self {
            count_all: "COUNT(*)",
            count_conditional: "SUM(CASE WHEN {} THEN 1 ELSE 0 END)",
            distinct_count: "COUNT(DISTINCT {})",
            null_count: "SUM(CASE WHEN {} IS NULL THEN 1 ELSE 0 END)",
            min: "MIN({})",
            max: "MAX({})",
            avg: "AVG({})",
            sum: "SUM({})",
            regex_like: "REGEXP_LIKE({}, '{}')",
        }
    }
}

/// Substitute successive `{}` placeholders in a template.
///
/// Surplus placeholders are left intact so the caller notices a template
/// and argument-count mismatch in the generated SQL instead of silently
/// losing an argument.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for arg in args {
        if let Some(pos) = out.find("{}") {
            out.replace_range(pos..pos + 2, arg);
        } else {
            break;
        }
    }
    out
}
