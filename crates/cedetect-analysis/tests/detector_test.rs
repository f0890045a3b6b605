//! Detector tests — catalog coverage, alias resolution, export and name
//! filtering, first-match ordering, and batch behavior.

use std::path::{Path, PathBuf};

use cedetect_analysis::catalog::{self, accepted_signatures};
use cedetect_analysis::Detector;
use cedetect_core::errors::ParseError;
use cedetect_core::types::{FunctionArg, FunctionDetails, FunctionSignature};

// ---- Helpers ----

fn detector() -> Detector {
    Detector::new(accepted_signatures()).expect("create detector")
}

fn check(source: &str, name_filter: &str) -> Option<FunctionDetails> {
    detector()
        .check_file(&PathBuf::from("fn.go"), source, name_filter)
        .expect("check file")
}

/// Render a catalog argument the way a Go file with the canonical imports
/// would spell it.
fn go_type(arg: &FunctionArg) -> String {
    let mut rendered = String::new();
    if arg.pointer {
        rendered.push('*');
    }
    match arg.import_path.as_deref() {
        Some(catalog::CE_IMPORT) => rendered.push_str("event."),
        Some(catalog::CE_PROTOCOL_IMPORT) => rendered.push_str("protocol."),
        Some(catalog::CONTEXT_IMPORT) => rendered.push_str("context."),
        Some(other) => panic!("unexpected import path in catalog: {other}"),
        None => {}
    }
    rendered.push_str(&arg.name);
    rendered
}

/// Synthesize a Go file declaring one exported function with exactly the
/// given shape.
fn synthesize(sig: &FunctionSignature) -> String {
    let params: Vec<String> = sig
        .ins
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("p{i} {}", go_type(arg)))
        .collect();
    let results: Vec<String> = sig.outs.iter().map(go_type).collect();
    let result_clause = match results.len() {
        0 => String::new(),
        1 => format!(" {}", results[0]),
        _ => format!(" ({})", results.join(", ")),
    };

    format!(
        "package check\n\n\
         import (\n\
         \t\"context\"\n\
         \tevent \"github.com/cloudevents/sdk-go/v2\"\n\
         \t\"github.com/cloudevents/sdk-go/v2/protocol\"\n\
         )\n\n\
         func Handler({}){} {{\n\tpanic(\"not implemented\")\n}}\n",
        params.join(", "),
        result_clause,
    )
}

// ---- Catalog coverage ----

#[test]
fn every_catalog_shape_is_detected() {
    let mut detector = detector();
    for sig in accepted_signatures() {
        let source = synthesize(sig);
        let details = detector
            .check_file(&PathBuf::from("fn.go"), &source, "")
            .expect("parse synthesized source")
            .unwrap_or_else(|| panic!("catalog shape not detected: {sig}\n{source}"));

        assert_eq!(details.name, "Handler");
        assert_eq!(details.package, "check");
        assert_eq!(&details.signature, sig);
    }
}

// ---- Alias resolution ----

#[test]
fn renamed_and_implicit_aliases_resolve_alike() {
    // Explicit rename of the event package.
    let renamed = "package check\n\n\
        import ev \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func Receive(e ev.Event) error { return nil }\n";
    // Implicit alias: final path segment, `v2`.
    let implicit = "package check\n\n\
        import \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func Receive(e v2.Event) error { return nil }\n";

    let a = check(renamed, "").expect("renamed alias accepted");
    let b = check(implicit, "").expect("implicit alias accepted");
    assert_eq!(a.signature, b.signature);
}

// ---- Export filtering ----

#[test]
fn unexported_functions_are_never_returned() {
    let source = "package check\n\n\
        import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func receive(e event.Event) error { return nil }\n";
    assert_eq!(check(source, ""), None);
}

// ---- Name filtering ----

const TWO_HANDLERS: &str = "package check\n\n\
    import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
    func First(e event.Event) error { return nil }\n\n\
    func Second(e event.Event) error { return nil }\n";

#[test]
fn empty_filter_takes_the_first_match_in_source_order() {
    let details = check(TWO_HANDLERS, "").expect("one handler accepted");
    assert_eq!(details.name, "First");
}

#[test]
fn name_filter_selects_a_later_declaration() {
    let details = check(TWO_HANDLERS, "Second").expect("filtered handler accepted");
    assert_eq!(details.name, "Second");
}

#[test]
fn name_filter_with_no_match_is_absent() {
    assert_eq!(check(TWO_HANDLERS, "Missing"), None);
}

#[test]
fn non_matching_declarations_before_the_hit_are_skipped() {
    let source = "package check\n\n\
        import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func Setup(port int) {}\n\n\
        func Receive(e event.Event) error { return nil }\n";
    let details = check(source, "").expect("handler after non-matching function");
    assert_eq!(details.name, "Receive");
}

// ---- Shapes outside the catalog ----

#[test]
fn variadic_event_parameter_is_rejected() {
    let source = "package check\n\n\
        import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func Receive(es ...event.Event) error { return nil }\n";
    assert_eq!(check(source, ""), None);
}

#[test]
fn extra_trailing_parameter_is_rejected() {
    let source = "package check\n\n\
        import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
        func Receive(e event.Event, n int) error { return nil }\n";
    assert_eq!(check(source, ""), None);
}

#[test]
fn swapped_context_and_event_are_rejected() {
    let source = "package check\n\n\
        import (\n\t\"context\"\n\tevent \"github.com/cloudevents/sdk-go/v2\"\n)\n\n\
        func Receive(e event.Event, ctx context.Context) error { return nil }\n";
    assert_eq!(check(source, ""), None);
}

#[test]
fn event_type_from_another_package_is_rejected() {
    let source = "package check\n\n\
        import event \"example.com/homegrown/event\"\n\n\
        func Receive(e event.Event) error { return nil }\n";
    assert_eq!(check(source, ""), None);
}

// ---- Errors ----

#[test]
fn malformed_source_is_a_parse_error_not_absent() {
    let err = detector()
        .check_file(&PathBuf::from("broken.go"), "package check\n\nfunc Receive(\n", "")
        .unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

// ---- End-to-end scenarios ----

#[test]
fn scenario_context_event_error_in_widgets_package() {
    let source = "package widgets\n\n\
        import (\n\t\"context\"\n\tevent \"github.com/cloudevents/sdk-go/v2\"\n)\n\n\
        func HandleOrder(ctx context.Context, e event.Event) error { return nil }\n";
    let details = check(source, "").expect("accepted");
    assert_eq!(details.name, "HandleOrder");
    assert_eq!(details.package, "widgets");
    assert_eq!(
        details.signature.to_string(),
        "func(context.Context, github.com/cloudevents/sdk-go/v2.Event) error"
    );
}

#[test]
fn scenario_batch_stops_at_the_first_file_with_a_match() {
    let files: [(&str, &str); 3] = [
        ("a.go", "package check\n\nfunc Helper(n int) int { return n }\n"),
        ("b.go", "package check\n\nfunc AlsoNot(s string) {}\n"),
        (
            "c.go",
            "package check\n\n\
             import event \"github.com/cloudevents/sdk-go/v2\"\n\n\
             func Receive(e event.Event) error { return nil }\n",
        ),
    ];

    let mut detector = detector();
    let mut hit: Option<(PathBuf, FunctionDetails)> = None;
    for (name, source) in files {
        let path = Path::new(name).to_path_buf();
        if let Some(details) = detector.check_file(&path, source, "").expect("well-formed file") {
            hit = Some((path, details));
            break;
        }
    }

    let (path, details) = hit.expect("third file matches");
    assert_eq!(path, Path::new("c.go"));
    assert_eq!(details.name, "Receive");
}
