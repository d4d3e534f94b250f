use ibmi_agent_tool::mcp::{AnnotationToolFilter, FilterSpec, FilterValue, ToolDescriptor};
use serde_json::json;

fn sample_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new("system_status", "Summarize system workload")
            .with_annotation("toolsets", json!(["performance"]))
            .with_annotation("readOnlyHint", true),
        ToolDescriptor::new("security_audit", "Audit authority settings")
            .with_annotation("toolsets", json!(["security"]))
            .with_annotation("readOnlyHint", true),
        ToolDescriptor::new("active_job_info", "Inspect active jobs")
            .with_annotation("toolsets", json!(["performance"]))
            .with_annotation("readOnlyHint", false),
        ToolDescriptor::new("describe_sql_object", "Describe an SQL object"),
        ToolDescriptor::new("where_is_service", "Locate a service"),
    ]
}

fn names(tools: &[ToolDescriptor]) -> Vec<&str> {
    tools.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let tools = sample_tools();
    let filter = AnnotationToolFilter::new(FilterSpec::new());
    let kept = filter.filter_tools(tools.clone());
    assert_eq!(kept, tools);
}

#[test]
fn result_is_an_ordered_subset_of_the_input() {
    let tools = sample_tools();
    let filter = AnnotationToolFilter::new(FilterSpec::read_only());
    let kept = filter.filter_tools(tools.clone());

    assert!(kept.len() <= tools.len());
    for tool in &kept {
        assert!(tools.contains(tool));
    }
    // Relative order survives filtering.
    let positions: Vec<usize> =
        kept.iter().map(|t| tools.iter().position(|o| o == t).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn filtering_is_idempotent() {
    let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(["performance"]));
    let once = filter.filter_tools(sample_tools());
    let twice = filter.filter_tools(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn scalar_hint_match_is_exact() {
    let tools = sample_tools();

    let read_only = AnnotationToolFilter::new(FilterSpec::new().with("readOnlyHint", true));
    assert_eq!(names(&read_only.filter_tools(tools.clone())), vec![
        "system_status",
        "security_audit"
    ]);

    let writable = AnnotationToolFilter::new(FilterSpec::new().with("readOnlyHint", false));
    assert_eq!(names(&writable.filter_tools(tools)), vec!["active_job_info"]);
}

#[test]
fn toolset_list_matches_on_intersection() {
    let tool = ToolDescriptor::new("collection_services", "Monitoring insight")
        .with_annotation("toolsets", json!(["performance", "sysadmin"]));

    for wanted in [vec!["performance"], vec!["sysadmin", "security"]] {
        let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(wanted));
        assert!(filter.should_include(&tool));
    }

    let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(["security"]));
    assert!(!filter.should_include(&tool));
}

#[test]
fn multiple_keys_combine_with_and() {
    let filter = AnnotationToolFilter::new(
        FilterSpec::for_toolsets(["performance"]).with("readOnlyHint", true),
    );
    // active_job_info is in the performance toolset but not read-only.
    assert_eq!(names(&filter.filter_tools(sample_tools())), vec!["system_status"]);
}

#[test]
fn missing_annotation_is_no_match_not_an_error() {
    let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(["performance"]));
    let kept = filter.filter_tools(sample_tools());
    assert!(!kept.iter().any(|t| t.name == "describe_sql_object"));
    assert!(!kept.iter().any(|t| t.name == "where_is_service"));
}

#[test]
fn panicking_custom_predicate_excludes_only_that_tool() {
    let filter = AnnotationToolFilter::new(FilterSpec::new()).with_custom(|tool| {
        if tool.name == "security_audit" {
            panic!("boom");
        }
        true
    });

    let kept = filter.filter_tools(sample_tools());
    assert_eq!(names(&kept), vec![
        "system_status",
        "active_job_info",
        "describe_sql_object",
        "where_is_service"
    ]);
}

#[test]
fn predicate_filter_value_sees_absent_annotations() {
    let spec = FilterSpec::new()
        .with("toolsets", FilterValue::predicate(|annotation| annotation.is_none()));
    let filter = AnnotationToolFilter::new(spec);
    assert_eq!(names(&filter.filter_tools(sample_tools())), vec![
        "describe_sql_object",
        "where_is_service"
    ]);
}

#[test]
fn toolset_scenario_preserves_relative_order() {
    // A and C are performance tools, B is security, D and E are untagged.
    let filter = AnnotationToolFilter::new(FilterSpec::for_toolsets(["performance"]));
    let kept = filter.filter_tools(sample_tools());
    assert_eq!(names(&kept), vec!["system_status", "active_job_info"]);
}

#[test]
fn debug_flag_never_changes_the_result() {
    let spec = FilterSpec::for_toolsets(["performance"]).with("readOnlyHint", true);
    let quiet = AnnotationToolFilter::new(spec.clone());
    let chatty = AnnotationToolFilter::new(spec).with_debug(true);
    assert_eq!(quiet.filter_tools(sample_tools()), chatty.filter_tools(sample_tools()));
}

#[test]
fn safe_preset_requires_all_three_hints() {
    let safe_tool = ToolDescriptor::new("system_values", "Configuration parameters")
        .with_annotation("readOnlyHint", true)
        .with_annotation("destructiveHint", false)
        .with_annotation("openWorldHint", false);
    let open_world_tool = ToolDescriptor::new("http_server", "HTTP performance")
        .with_annotation("readOnlyHint", true)
        .with_annotation("destructiveHint", false)
        .with_annotation("openWorldHint", true);

    let filter = AnnotationToolFilter::new(FilterSpec::safe());
    let kept = filter.filter_tools(vec![safe_tool, open_world_tool]);
    assert_eq!(names(&kept), vec!["system_values"]);
}
