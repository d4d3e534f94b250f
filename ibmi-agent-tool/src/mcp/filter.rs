// Annotation-based MCP tool filtering
//
// MCP servers attach metadata to every tool they advertise: the standard
// behavior hints (readOnlyHint, destructiveHint, openWorldHint) plus
// server-specific keys such as the IBM i server's `toolsets` categories.
// This module narrows a tool listing to the subset an agent should see,
// matching declarative criteria against that metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{debug, warn};

/// Annotation key carrying the IBM i server's toolset categories.
pub const TOOLSETS_ANNOTATION: &str = "toolsets";
/// MCP standard hint: the tool does not modify its environment.
pub const READ_ONLY_HINT: &str = "readOnlyHint";
/// MCP standard hint: the tool may perform destructive updates.
pub const DESTRUCTIVE_HINT: &str = "destructiveHint";
/// MCP standard hint: the tool interacts with an open world of entities.
pub const OPEN_WORLD_HINT: &str = "openWorldHint";

/// Metadata view of one discoverable MCP tool.
///
/// Descriptors are read-only inputs to filtering: the filter never
/// mutates them and never fabricates new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub annotations: Map<String, Value>,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), annotations: Map::new() }
    }

    /// Attach an annotation value.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Look up an annotation value; absent keys are `None`, never an error.
    pub fn annotation(&self, key: &str) -> Option<&Value> {
        self.annotations.get(key)
    }
}

/// Predicate over a raw annotation value (`None` when the tool does not
/// carry the annotation).
pub type AnnotationPredicate = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// Predicate over a whole tool descriptor, for criteria that cannot be
/// expressed per annotation key.
pub type DescriptorPredicate = Arc<dyn Fn(&ToolDescriptor) -> bool + Send + Sync>;

/// One matching rule for a single annotation key.
#[derive(Clone)]
pub enum FilterValue {
    /// Exact type-and-value equality. Against a list-valued annotation,
    /// matches when the list contains the scalar.
    Scalar(Value),
    /// Matches when the annotation value is one of these, or when a
    /// list-valued annotation shares at least one element with them.
    AnyOf(Vec<Value>),
    /// Arbitrary predicate over the raw annotation value. A panicking
    /// predicate counts as "no match".
    Predicate(AnnotationPredicate),
}

impl FilterValue {
    /// Wrap a closure as a predicate filter value.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        FilterValue::Predicate(Arc::new(predicate))
    }

    /// Decide whether a tool's annotation value satisfies this rule.
    pub fn matches(&self, annotation: Option<&Value>) -> bool {
        match self {
            FilterValue::Predicate(predicate) => {
                match catch_unwind(AssertUnwindSafe(|| predicate(annotation))) {
                    Ok(matched) => matched,
                    Err(_) => {
                        warn!("annotation predicate panicked; treating as no match");
                        false
                    }
                }
            }
            FilterValue::AnyOf(wanted) => match annotation {
                Some(Value::Array(actual)) => actual.iter().any(|value| wanted.contains(value)),
                Some(actual) => wanted.contains(actual),
                None => false,
            },
            FilterValue::Scalar(wanted) => match annotation {
                Some(Value::Array(actual)) => actual.contains(wanted),
                Some(actual) => actual == wanted,
                None => false,
            },
        }
    }
}

impl std::fmt::Debug for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            FilterValue::AnyOf(values) => f.debug_tuple("AnyOf").field(values).finish(),
            FilterValue::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Scalar(Value::Bool(value))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Scalar(Value::from(value))
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Scalar(Value::String(value))
    }
}

/// A JSON array becomes membership semantics, everything else exact match.
impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => FilterValue::AnyOf(items),
            other => FilterValue::Scalar(other),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::AnyOf(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for FilterValue {
    fn from(values: &[&str]) -> Self {
        FilterValue::AnyOf(values.iter().map(|v| Value::String((*v).to_string())).collect())
    }
}

/// Declarative matching criteria over annotation keys.
///
/// Entries combine with AND logic and are evaluated in insertion order;
/// within a single `AnyOf` entry the values combine with OR logic. An
/// empty spec matches every tool.
///
/// # Example
///
/// ```rust
/// use ibmi_agent_tool::mcp::FilterSpec;
///
/// // Performance tools that are also read-only
/// let spec = FilterSpec::for_toolsets(["performance"]).with("readOnlyHint", true);
/// assert_eq!(spec.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a matching rule for an annotation key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[(String, FilterValue)] {
        &self.entries
    }

    /// True when every entry matches the tool's annotations.
    pub fn matches(&self, tool: &ToolDescriptor) -> bool {
        self.entries.iter().all(|(key, value)| value.matches(tool.annotation(key)))
    }

    /// Tools tagged with at least one of the given toolset categories.
    pub fn for_toolsets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<Value> =
            names.into_iter().map(|name| Value::String(name.into())).collect();
        Self::new().with(TOOLSETS_ANNOTATION, FilterValue::AnyOf(names))
    }

    /// Tools advertising the MCP read-only hint.
    pub fn read_only() -> Self {
        Self::new().with(READ_ONLY_HINT, true)
    }

    /// Tools advertising the MCP non-destructive hint.
    pub fn non_destructive() -> Self {
        Self::new().with(DESTRUCTIVE_HINT, false)
    }

    /// Tools advertising the MCP closed-world hint.
    pub fn closed_world() -> Self {
        Self::new().with(OPEN_WORLD_HINT, false)
    }

    /// Read-only, non-destructive, closed-world tools.
    pub fn safe() -> Self {
        Self::new()
            .with(READ_ONLY_HINT, true)
            .with(DESTRUCTIVE_HINT, false)
            .with(OPEN_WORLD_HINT, false)
    }
}

/// Filters a tool listing by annotations and an optional custom predicate.
///
/// The custom predicate runs first; a rejecting (or panicking) predicate
/// excludes the tool before any annotation is checked. Annotation entries
/// then apply in order, short-circuiting on the first non-match. Malformed
/// metadata and predicate failures degrade to exclusion so that one broken
/// tool cannot take down an entire listing.
///
/// With `debug` enabled, each decision is logged through `tracing`; the
/// logging never changes the outcome.
#[derive(Clone, Default)]
pub struct AnnotationToolFilter {
    spec: FilterSpec,
    custom: Option<DescriptorPredicate>,
    debug: bool,
}

impl AnnotationToolFilter {
    pub fn new(spec: FilterSpec) -> Self {
        Self { spec, custom: None, debug: false }
    }

    /// Add a predicate over whole descriptors, applied before the spec.
    pub fn with_custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ToolDescriptor) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    /// Log per-tool inclusion/exclusion rationale.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// True when no criteria are configured at all.
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty() && self.custom.is_none()
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Decide whether one tool belongs in the filtered result set.
    pub fn should_include(&self, tool: &ToolDescriptor) -> bool {
        if let Some(custom) = &self.custom {
            let passed = match catch_unwind(AssertUnwindSafe(|| custom(tool))) {
                Ok(passed) => passed,
                Err(_) => {
                    warn!(tool = %tool.name, "custom tool predicate panicked; excluding tool");
                    false
                }
            };
            if !passed {
                if self.debug {
                    debug!(tool = %tool.name, "excluding tool: custom predicate rejected");
                }
                return false;
            }
        }

        for (key, filter_value) in self.spec.entries() {
            let annotation = tool.annotation(key);
            if !filter_value.matches(annotation) {
                if self.debug {
                    debug!(
                        tool = %tool.name,
                        annotation = %key,
                        value = ?annotation,
                        "excluding tool"
                    );
                }
                return false;
            }
        }

        if self.debug {
            debug!(tool = %tool.name, "including tool");
        }
        true
    }

    /// Narrow a tool listing to the tools matching all criteria.
    ///
    /// The result preserves the input's relative order and contains only
    /// members of the input.
    pub fn filter_tools(&self, tools: Vec<ToolDescriptor>) -> Vec<ToolDescriptor> {
        if self.is_empty() {
            if self.debug {
                debug!(count = tools.len(), "no filters configured, keeping all tools");
            }
            return tools;
        }

        let total = tools.len();
        let kept: Vec<ToolDescriptor> =
            tools.into_iter().filter(|tool| self.should_include(tool)).collect();
        if self.debug {
            debug!(kept = kept.len(), total, "annotation filtering complete");
        }
        kept
    }
}

impl From<FilterSpec> for AnnotationToolFilter {
    fn from(spec: FilterSpec) -> Self {
        Self::new(spec)
    }
}

impl std::fmt::Debug for AnnotationToolFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationToolFilter")
            .field("spec", &self.spec)
            .field("custom", &self.custom.as_ref().map(|_| "Predicate(..)"))
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn performance_tool() -> ToolDescriptor {
        ToolDescriptor::new("system_status", "Summarize system workload")
            .with_annotation(TOOLSETS_ANNOTATION, json!(["performance", "sysadmin"]))
            .with_annotation(READ_ONLY_HINT, true)
    }

    #[test]
    fn test_scalar_exact_match() {
        let value = FilterValue::from(true);
        assert!(value.matches(Some(&json!(true))));
        assert!(!value.matches(Some(&json!(false))));
        assert!(!value.matches(Some(&json!("true"))));
        assert!(!value.matches(None));
    }

    #[test]
    fn test_scalar_filter_matches_list_annotation() {
        // Membership when the annotation itself is a list.
        let value = FilterValue::from("performance");
        assert!(value.matches(Some(&json!(["performance", "sysadmin"]))));
        assert!(!value.matches(Some(&json!(["security"]))));
    }

    #[test]
    fn test_list_filter_against_scalar_annotation() {
        let value = FilterValue::from(vec!["performance", "security"]);
        assert!(value.matches(Some(&json!("performance"))));
        assert!(!value.matches(Some(&json!("sysadmin"))));
    }

    #[test]
    fn test_list_filter_intersects_list_annotation() {
        let value = FilterValue::from(vec!["sysadmin", "security"]);
        assert!(value.matches(Some(&json!(["performance", "sysadmin"]))));
        assert!(!value.matches(Some(&json!(["performance"]))));
    }

    #[test]
    fn test_predicate_filter() {
        let value = FilterValue::predicate(|annotation| {
            annotation.and_then(Value::as_str).is_some_and(|s| s.starts_with("sys"))
        });
        assert!(value.matches(Some(&json!("sysadmin"))));
        assert!(!value.matches(Some(&json!("performance"))));
        assert!(!value.matches(None));
    }

    #[test]
    fn test_predicate_panic_is_no_match() {
        let value = FilterValue::predicate(|_| panic!("broken predicate"));
        assert!(!value.matches(Some(&json!("anything"))));
    }

    #[test]
    fn test_value_conversion_splits_arrays() {
        assert!(matches!(FilterValue::from(json!(["a", "b"])), FilterValue::AnyOf(_)));
        assert!(matches!(FilterValue::from(json!("a")), FilterValue::Scalar(_)));
        assert!(matches!(FilterValue::from(json!(7)), FilterValue::Scalar(_)));
    }

    #[test]
    fn test_spec_and_logic() {
        let spec = FilterSpec::for_toolsets(["performance"]).with(READ_ONLY_HINT, true);
        assert!(spec.matches(&performance_tool()));

        let writable = performance_tool().with_annotation(READ_ONLY_HINT, false);
        assert!(!spec.matches(&writable));
    }

    #[test]
    fn test_spec_missing_annotation_never_matches() {
        let spec = FilterSpec::for_toolsets(["performance"]);
        let untagged = ToolDescriptor::new("mystery", "no annotations at all");
        assert!(!spec.matches(&untagged));
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        let spec = FilterSpec::new();
        assert!(spec.is_empty());
        assert!(spec.matches(&ToolDescriptor::new("anything", "")));
    }

    #[test]
    fn test_safe_preset_keys() {
        let spec = FilterSpec::safe();
        let keys: Vec<&str> = spec.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec![READ_ONLY_HINT, DESTRUCTIVE_HINT, OPEN_WORLD_HINT]);
    }

    #[test]
    fn test_filter_custom_predicate_runs_first() {
        let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(["performance"]))
            .with_custom(|tool| tool.name.contains("status"));

        assert!(filter.should_include(&performance_tool()));

        let other = ToolDescriptor::new("active_jobs", "")
            .with_annotation(TOOLSETS_ANNOTATION, json!(["performance"]));
        assert!(!filter.should_include(&other));
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let tool = performance_tool();
        let encoded = serde_json::to_string(&tool).unwrap();
        let decoded: ToolDescriptor = serde_json::from_str(&encoded).unwrap();
        assert_eq!(tool, decoded);
    }

    #[test]
    fn test_descriptor_defaults_on_deserialize() {
        let decoded: ToolDescriptor = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert_eq!(decoded.name, "bare");
        assert!(decoded.description.is_empty());
        assert!(decoded.annotations.is_empty());
    }
}
