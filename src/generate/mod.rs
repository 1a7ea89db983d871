//! Dispatch-function synthesis from classified handler records.
//!
//! Emits one `dispatch_edit` definition as plain text: a sequence of
//! name-guarded calls into the type-generic editors, then fall-through
//! calls to the preserved custom handlers. Bucket order is fixed (bool,
//! int, float, string, list, custom) and within-bucket order follows
//! extraction order, so re-runs on an unchanged input diff clean.

use crate::classify::{BucketCounts, HandlerKind, HandlerRecord};

/// The generated dispatch function plus per-bucket emission counts.
#[derive(Debug)]
pub struct GeneratedDispatch {
    /// Complete text of the dispatch function definition.
    pub text: String,

    /// Guards actually emitted per bucket. List records without legal
    /// values are not emitted and not counted.
    pub counts: BucketCounts,
}

/// Builds the consolidated dispatch function. No file I/O happens here;
/// the caller persists the text.
pub fn generate_dispatch(handlers: &[HandlerRecord]) -> GeneratedDispatch {
    let generic = |kind: HandlerKind| {
        handlers
            .iter()
            .filter(move |h| h.kind == kind && !h.is_custom)
    };

    let mut counts = BucketCounts::default();
    let mut lines: Vec<String> = Vec::new();

    lines.push(
        "void cls_config::dispatch_edit(const std::string& name, std::string& parm, enum PARM_ACT pact)"
            .to_string(),
    );
    lines.push("{".to_string());

    lines.push("    /* Boolean parameters */".to_string());
    for h in generic(HandlerKind::Bool) {
        counts.bools += 1;
        lines.push(format!(
            "    if (name == \"{}\") return edit_generic_bool({}, parm, pact, {});",
            h.name, h.variable, h.default
        ));
    }

    lines.push(String::new());
    lines.push("    /* Integer parameters */".to_string());
    for h in generic(HandlerKind::Int) {
        counts.ints += 1;
        lines.push(format!(
            "    if (name == \"{}\") return edit_generic_int({}, parm, pact, {}, {}, {});",
            h.name,
            h.variable,
            h.default,
            h.min.as_deref().unwrap_or("1"),
            h.max.as_deref().unwrap_or("INT_MAX")
        ));
    }

    lines.push(String::new());
    lines.push("    /* Float parameters */".to_string());
    for h in generic(HandlerKind::Float) {
        counts.floats += 1;
        lines.push(format!(
            "    if (name == \"{}\") return edit_generic_float({}, parm, pact, {}f, {}f, {}f);",
            h.name,
            h.variable,
            h.default,
            h.min.as_deref().unwrap_or("-1.0"),
            h.max.as_deref().unwrap_or("1.0")
        ));
    }

    lines.push(String::new());
    lines.push("    /* String parameters */".to_string());
    for h in generic(HandlerKind::Text) {
        counts.strings += 1;
        lines.push(format!(
            "    if (name == \"{}\") return edit_generic_string({}, parm, pact, \"{}\");",
            h.name, h.variable, h.default
        ));
    }

    lines.push(String::new());
    lines.push("    /* List parameters */".to_string());
    for h in generic(HandlerKind::List) {
        if h.legal_values.is_empty() {
            continue;
        }
        counts.lists += 1;
        let values = h
            .legal_values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "    static const std::vector<std::string> {}_values = {{{}}};",
            h.name, values
        ));
        lines.push(format!(
            "    if (name == \"{}\") return edit_generic_list({}, parm, pact, \"{}\", {}_values);",
            h.name, h.variable, h.default, h.name
        ));
    }

    lines.push(String::new());
    lines.push("    /* Custom handlers (non-standard logic) */".to_string());
    for h in handlers.iter().filter(|h| h.is_custom) {
        counts.custom += 1;
        lines.push(format!(
            "    if (name == \"{}\") return edit_{}(parm, pact);",
            h.name, h.name
        ));
    }

    lines.push("}".to_string());

    GeneratedDispatch {
        text: lines.join("\n"),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, kind: HandlerKind) -> HandlerRecord {
        HandlerRecord {
            name: name.to_string(),
            variable: name.to_string(),
            kind,
            default: "0".to_string(),
            min: None,
            max: None,
            legal_values: Vec::new(),
            is_custom: false,
        }
    }

    #[test]
    fn test_bucket_order_is_fixed() {
        // Custom record first in the input; the bool guard must still come
        // out first.
        let mut custom = record("device_id", HandlerKind::Text);
        custom.is_custom = true;
        let records = vec![custom, record("pause", HandlerKind::Bool)];

        let generated = generate_dispatch(&records);
        let bool_pos = generated.text.find("edit_generic_bool").unwrap();
        let custom_pos = generated.text.find("edit_device_id(parm, pact)").unwrap();
        assert!(bool_pos < custom_pos);
        assert_eq!(generated.counts.bools, 1);
        assert_eq!(generated.counts.custom, 1);
    }

    #[test]
    fn test_int_guard_shape() {
        let mut h = record("threshold", HandlerKind::Int);
        h.default = "50".to_string();
        h.min = Some("1".to_string());
        h.max = Some("100".to_string());
        let generated = generate_dispatch(&[h]);
        assert!(generated.text.contains(
            "    if (name == \"threshold\") return edit_generic_int(threshold, parm, pact, 50, 1, 100);"
        ));
    }

    #[test]
    fn test_float_guard_suffixes() {
        let mut h = record("gain", HandlerKind::Float);
        h.default = "0.5".to_string();
        h.min = Some("-1.0".to_string());
        h.max = Some("1.0".to_string());
        let generated = generate_dispatch(&[h]);
        assert!(generated.text.contains(
            "edit_generic_float(gain, parm, pact, 0.5f, -1.0f, 1.0f);"
        ));
    }

    #[test]
    fn test_list_emits_values_vector_before_guard() {
        let mut h = record("picture_type", HandlerKind::List);
        h.default = "jpeg".to_string();
        h.legal_values = vec!["jpeg".to_string(), "ppm".to_string()];
        let generated = generate_dispatch(&[h]);
        let vector_pos = generated
            .text
            .find("static const std::vector<std::string> picture_type_values = {\"jpeg\", \"ppm\"};")
            .unwrap();
        let guard_pos = generated
            .text
            .find("edit_generic_list(picture_type, parm, pact, \"jpeg\", picture_type_values);")
            .unwrap();
        assert!(vector_pos < guard_pos);
    }

    #[test]
    fn test_list_without_values_not_emitted() {
        let h = record("empty_list", HandlerKind::List);
        let generated = generate_dispatch(&[h]);
        assert!(!generated.text.contains("empty_list"));
        assert_eq!(generated.counts.lists, 0);
    }

    #[test]
    fn test_unknown_kind_lands_in_no_bucket() {
        let h = record("mystery", HandlerKind::Unknown);
        let generated = generate_dispatch(&[h]);
        assert!(!generated.text.contains("mystery"));
        assert_eq!(generated.counts, BucketCounts::default());
    }

    #[test]
    fn test_within_bucket_order_follows_input() {
        let records = vec![record("zebra", HandlerKind::Bool), record("apple", HandlerKind::Bool)];
        let generated = generate_dispatch(&records);
        let zebra = generated.text.find("\"zebra\"").unwrap();
        let apple = generated.text.find("\"apple\"").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_function_shape() {
        let generated = generate_dispatch(&[]);
        assert!(generated.text.starts_with(
            "void cls_config::dispatch_edit(const std::string& name, std::string& parm, enum PARM_ACT pact)\n{"
        ));
        assert!(generated.text.ends_with("\n}"));
    }
}
