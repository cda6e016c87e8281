//! End-to-end compile tests.

use horizon_lattice_markup::prelude::*;
use horizon_lattice_markup::stylesheet::StyleFragment;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn utility_rule(document: &CompiledDocument, class: &str) -> String {
    document
        .stylesheet
        .utilities
        .iter()
        .find(|rule| rule.class_name == class)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn sorted(classes: &[String]) -> Vec<String> {
    let mut classes = classes.to_vec();
    classes.sort();
    classes
}

#[test]
fn token_order_does_not_change_classes() {
    init_tracing();
    let a = compile("c t=a dir=col align=c pad=8 s=14");
    let b = compile("c t=a s=14 align=c pad=8 dir=col");

    let a = &a.root.children[0];
    let b = &b.root.children[0];
    assert_eq!(a.classes.len(), 3);
    assert_eq!(sorted(&a.classes), sorted(&b.classes));
}

#[test]
fn identical_styles_share_one_rule() {
    let document = compile("p t=a pad=8\np t=b pad=8\np t=c pad=\"8\"");

    assert_eq!(document.stylesheet.utilities.len(), 1);
    for paragraph in &document.root.children {
        assert_eq!(paragraph.classes, vec!["n-behmg9"]);
    }
}

#[test]
fn repeated_compiles_are_identical() {
    let source = r#"
$primary=#2196f3

@keyframes pulse {
  0% op=0
  100% op=1
}

c .card pad=16 bg=$primary {
  h2 t="Title"
  p t="Body" anim=pulse 1s withInitial
  @mobile pad=8
}

@tablet {
  .card pad=8
}
"#;
    let compiler = Compiler::default();
    let first = compiler.compile(source);
    let second = compiler.compile(source);

    assert_eq!(first, second);
    assert_eq!(first.stylesheet_text(), second.stylesheet_text());
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn keyframes_do_not_leak_between_compiles() {
    let compiler = Compiler::default();
    let with_keyframes =
        compiler.compile("@keyframes pulse {\n  0% op=0\n}\np t=a anim=pulse 1s withInitial");
    let without = compiler.compile("p t=a anim=pulse 1s withInitial");

    let rule = |document: &CompiledDocument| {
        let class = &document.root.children[0].classes[0];
        utility_rule(document, class)
    };
    assert!(rule(&with_keyframes).contains("opacity: 0;"));
    assert!(!rule(&without).contains("opacity"));
    assert!(without.stylesheet.fragments.is_empty());
}

#[test]
fn variables_become_custom_properties() {
    let document = compile("$primary=#2196f3\nc t=x bg=$primary");

    assert_eq!(
        document.stylesheet.variables,
        vec![("primary".to_string(), "#2196f3".to_string())]
    );
    let element = &document.root.children[0];
    assert_eq!(element.classes, vec!["n-spkqlq"]);
    assert_eq!(
        utility_rule(&document, "n-spkqlq"),
        ".n-spkqlq { background-color: var(--primary); }"
    );

    let text = document.stylesheet_text();
    assert!(text.starts_with(":root {\n  --primary: #2196f3;\n}"));
    assert!(!text.contains("background-color: #2196f3"));
}

#[test]
fn undeclared_variables_are_reported() {
    let document = compile("$primary=#2196f3\np t=x tc=$accent");

    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(document.diagnostics[0].line, 2);
    let class = &document.root.children[0].classes[0];
    assert_eq!(
        utility_rule(&document, class),
        format!(".{class} {{ color: var(--accent); }}")
    );
}

#[test]
fn pixel_coercion() {
    let document = compile("p t=a pad=8\np t=b pad=50%\np t=c pad=\"8 16\"");
    let rule = |index: usize| {
        let class = &document.root.children[index].classes[0];
        utility_rule(&document, class)
    };

    assert_eq!(rule(0), ".n-behmg9 { padding: 8px; }");
    assert!(rule(1).contains("padding: 50%;"));
    assert_eq!(rule(2), ".n-mivsqk { padding: 8px 16px; }");
}

#[test]
fn single_line_block() {
    let document = compile(r#"c pad=8 { p t="hi" }"#);

    assert_eq!(document.root.children.len(), 1);
    let group = &document.root.children[0];
    assert_eq!(group.classes, vec!["n-behmg9"]);
    assert_eq!(group.children.len(), 1);
    assert_eq!(group.children[0].tag, "p");
    assert_eq!(group.children[0].text.as_deref(), Some("hi"));
    assert_eq!(
        utility_rule(&document, "n-behmg9"),
        ".n-behmg9 { padding: 8px; }"
    );
}

#[test]
fn indentation_nests_two_columns_per_level() {
    let document = compile("c .outer\n  c .inner\n    p t=deep");

    let outer = &document.root.children[0];
    let inner = &outer.children[0];
    assert_eq!(outer.classes, vec!["outer"]);
    assert_eq!(inner.classes, vec!["inner"]);
    assert_eq!(inner.children[0].text.as_deref(), Some("deep"));
    assert_eq!(document.root.subtree_size(), 4);
}

#[test]
fn media_block_forces_priority() {
    let document = compile("@maxw=600 {\n  .card pad=8\n}\nc .card t=x");

    let text = document.stylesheet_text();
    assert!(
        text.contains("@media (max-width: 600px) {\n  .n-el90dd { padding: 8px !important; }\n}")
    );
    assert_eq!(document.root.children[0].classes, vec!["card", "n-el90dd"]);
}

#[test]
fn media_class_never_aliases_a_base_class() {
    let document = compile("@mobile {\n  p pad=8\n}\np t=x pad=8");

    let paragraph = &document.root.children[0];
    assert_eq!(paragraph.classes, vec!["n-behmg9", "n-el90dd"]);
    assert_eq!(document.stylesheet.utilities.len(), 1);
}

#[test]
fn selector_less_media_rule_goes_to_the_element_before_it() {
    let document = compile("c .card t=x pad=16\n@mobile {\n  pad=8\n}\np t=after");

    assert_eq!(document.root.children[0].classes, vec!["card", "n-1ojlwc", "n-el90dd"]);
    assert!(document.root.children[1].classes.is_empty());
    assert!(document.stylesheet_text().contains(".n-el90dd { padding: 8px !important; }"));
    assert!(!document.has_diagnostics());
}

#[test]
fn selector_less_media_rule_without_element_is_reported() {
    let document = compile("@mobile {\n  pad=8\n}\np t=x");

    assert!(document.root.children[0].classes.is_empty());
    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(document.diagnostics[0].line, 1);
}

#[test]
fn dedented_child_inside_braces_is_clean() {
    let document = compile("c {\n    p t=a\n  p t=b\n}\np t=c");

    assert_eq!(
        document.to_html(),
        "<div id=\"app\"><section><p>a</p><p>b</p></section><p>c</p></div>"
    );
    assert!(document.diagnostics.is_empty());
}

#[test]
fn keyframe_initial_state_is_prepended() {
    let document = compile(
        "@keyframes pulse {\n  0% op=0\n  100% op=1\n}\nc .dot t=x anim=pulse 1s withInitial",
    );

    let StyleFragment::Keyframes(keyframes) = &document.stylesheet.fragments[0] else {
        panic!("expected keyframes");
    };
    assert_eq!(
        keyframes.to_string(),
        "@keyframes pulse {\n  0% { opacity: 0; }\n  100% { opacity: 1; }\n}"
    );

    let element = &document.root.children[0];
    let class = element.classes.last().unwrap();
    assert_eq!(
        utility_rule(&document, class),
        format!(".{class} {{ opacity: 0; animation: pulse 1s ease-in-out forwards; }}")
    );
}

#[test]
fn animation_without_marker_has_no_initial_state() {
    let document = compile("@keyframes pulse {\n  from op=0\n}\np t=x anim=pulse");

    let class = &document.root.children[0].classes[0];
    assert_eq!(
        utility_rule(&document, class),
        format!(".{class} {{ animation: pulse 1s ease-in-out forwards; }}")
    );
}

#[test]
fn full_stylesheet_text() {
    let options = CompileOptions {
        emit_baseline: false,
        ..CompileOptions::default()
    };
    let source = "$gap=12px\nc .card pad=8 {\n  p t=\"hi\" s=14\n}\n@mobile {\n  .card pad=8\n}";
    let document = Compiler::new(options).compile(source);

    assert_eq!(
        document.stylesheet_text(),
        ":root {\n  --gap: 12px;\n}\n\n\
         .n-behmg9 { padding: 8px; }\n.n-ebjztc { font-size: 14px; }\n\n\
         @media (max-width: 600px) {\n  .n-el90dd { padding: 8px !important; }\n}\n"
    );

    let card = &document.root.children[0];
    assert_eq!(card.tag, "article");
    assert_eq!(card.classes, vec!["card", "n-behmg9", "n-el90dd"]);
    assert!(!document.has_diagnostics());
}

#[test]
fn baseline_follows_the_variables() {
    let text = compile("p t=x").stylesheet_text();

    let root = text.find(":root {").unwrap();
    let body = text.find("body {").unwrap();
    assert!(root < body);
    assert!(text.contains("  background-color: var(--background);\n"));
    assert!(text.contains("  --primary: #9333ea;\n"));
}

#[test]
fn inline_media_fragments_follow_top_level_ones() {
    let document =
        compile("p t=a pad=16\n  @mobile pad=8\n@keyframes spin {\n  to trf=rotate(360deg)\n}");

    let fragments: Vec<_> = document.stylesheet.all_fragments().collect();
    assert_eq!(fragments.len(), 2);
    assert!(matches!(fragments[0], StyleFragment::Keyframes(_)));
    assert!(matches!(fragments[1], StyleFragment::Media(_)));
    assert_eq!(document.root.children[0].classes, vec!["n-1ojlwc", "n-el90dd"]);
}

#[test]
fn malformed_input_is_recovered() {
    let document = compile("blink t=hi\n@print {\n  c pad=8\n}\np t=x loose\n}\nc {\n  p t=open");

    assert_eq!(document.root.children.len(), 3);
    let mut lines: Vec<usize> = document.diagnostics.iter().map(|d| d.line).collect();
    lines.sort_unstable();
    assert_eq!(lines, vec![1, 2, 5, 6, 7]);
}

#[test]
fn html_output() {
    let document = compile("a t=\"Docs & more\" h=/docs");
    assert_eq!(
        document.to_html(),
        "<div id=\"app\"><a href=\"/docs\">Docs &amp; more</a></div>"
    );
}
