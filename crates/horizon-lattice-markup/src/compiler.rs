//! The compile pipeline.
//!
//! A compile runs three passes over the document lines, in order:
//!
//! 1. **Variables**: every `$name=value` line is collected. When none are
//!    declared the configured palette is used instead.
//! 2. **Directives**: `@` blocks at the document's base indentation are
//!    collected and processed into stylesheet fragments. Their lines, and the
//!    variable lines, are removed from the markup.
//! 3. **Markup**: the remaining lines are parsed into the element forest,
//!    responsive bindings from pass 2 are applied, and the forest is wrapped
//!    in the root grouping element.
//!
//! All state lives in a [`CompileContext`] created for the call, so nothing
//! carries over between compiles.

use crate::context::CompileContext;
use crate::directive::{collect_block, process_top_level};
use crate::element::{DEFAULT_CONTAINER_TAG, Element};
use crate::logging::{span_names, targets};
use crate::options::CompileOptions;
use crate::parser::BlockParser;
use crate::source::{Diagnostic, LineCursor, SourceLine, split_lines};
use crate::stylesheet::Stylesheet;
use crate::theme::{VariableTable, baseline_declarations, is_variable_line};
use crate::Result;

/// Compiles markup documents.
///
/// A compiler only holds options; every call to [`compile`](Self::compile)
/// starts from empty registries.
///
/// # Example
///
/// ```ignore
/// let compiler = Compiler::new(CompileOptions::default());
/// let document = compiler.compile("c .card pad=8 {\n  p t=\"hi\"\n}");
/// println!("{}", document.stylesheet);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a compiler with the given options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// The options this compiler uses.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a document.
    ///
    /// Never fails: problems in the input are skipped and reported in
    /// [`CompiledDocument::diagnostics`].
    pub fn compile(&self, source: &str) -> CompiledDocument {
        let _compile = tracing::debug_span!(
            target: targets::COMPILER,
            "compile",
            name = span_names::COMPILE,
            bytes = source.len()
        )
        .entered();

        let lines = split_lines(source);
        let mut ctx = CompileContext::new(&self.options);

        {
            let _pass = pass_span(span_names::VARIABLES).entered();
            ctx.variables = VariableTable::collect(&lines);
            if ctx.variables.is_empty() {
                ctx.variables = VariableTable::from_palette(&self.options.palette);
            }
            tracing::trace!(target: targets::COMPILER, "{} variable(s)", ctx.variables.len());
        }

        let markup = {
            let _pass = pass_span(span_names::DIRECTIVES).entered();
            collect_directives(&mut ctx, &lines)
        };

        let root = {
            let _pass = pass_span(span_names::MARKUP).entered();
            build_tree(&mut ctx, &markup)
        };

        assemble(ctx, root)
    }
}

fn pass_span(name: &'static str) -> tracing::Span {
    tracing::debug_span!(target: targets::COMPILER, "pass", name)
}

/// Process top-level directives and return the lines left for markup.
fn collect_directives<'a>(
    ctx: &mut CompileContext<'_>,
    lines: &[SourceLine<'a>],
) -> Vec<SourceLine<'a>> {
    let base = lines
        .iter()
        .filter(|line| !line.is_blank() && !line.is_comment() && !is_variable_line(line))
        .map(|line| line.indent)
        .min()
        .unwrap_or(0);

    let mut markup = Vec::with_capacity(lines.len());
    let mut cursor = LineCursor::new(lines);
    while let Some(line) = cursor.next() {
        if is_variable_line(line) {
            continue;
        }
        if line.is_directive() && line.indent == base {
            let block = collect_block(line, &mut cursor);
            process_top_level(ctx, &block);
            continue;
        }
        markup.push(*line);
    }
    markup
}

fn build_tree(ctx: &mut CompileContext<'_>, markup: &[SourceLine<'_>]) -> Element {
    let mut forest = BlockParser::new(ctx).parse(markup);

    for binding in &ctx.bindings {
        let matched: usize = forest
            .iter_mut()
            .map(|element| binding.apply(element))
            .sum();
        if matched == 0 {
            tracing::debug!(
                target: targets::DIRECTIVE,
                "responsive class {} matched no element",
                binding.class_name
            );
        }
    }

    let mut root = Element::new(DEFAULT_CONTAINER_TAG).with_id(ctx.options.root_id.as_str());
    for element in forest {
        root.push_child(element);
    }
    root
}

fn assemble(ctx: CompileContext<'_>, root: Element) -> CompiledDocument {
    let CompileContext {
        options,
        variables,
        classes,
        keyframes,
        mut stylesheet,
        diagnostics,
        ..
    } = ctx;

    stylesheet.variables = variables
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    if options.emit_baseline {
        stylesheet.baseline = baseline_declarations();
    }

    tracing::debug!(
        target: targets::COMPILER,
        "compiled {} element(s), {} generated class(es), {} animation initial state(s), {} diagnostic(s)",
        root.subtree_size(),
        classes.len(),
        keyframes.len(),
        diagnostics.len()
    );

    CompiledDocument {
        root,
        stylesheet,
        diagnostics,
    }
}

/// The output of one compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    /// Grouping element holding the compiled forest.
    pub root: Element,
    pub stylesheet: Stylesheet,
    /// Problems skipped while compiling, in the order found.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledDocument {
    /// The stylesheet text.
    pub fn stylesheet_text(&self) -> String {
        self.stylesheet.to_string()
    }

    /// The element tree as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// The element tree as HTML.
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Whether anything was skipped while compiling.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PaletteEntry;
    use crate::stylesheet::StyleFragment;

    #[test]
    fn empty_document() {
        let document = Compiler::default().compile("");

        assert_eq!(document.root.tag, "div");
        assert_eq!(document.root.id.as_deref(), Some("app"));
        assert!(document.root.children.is_empty());
        assert_eq!(document.stylesheet.variables.len(), 5);
        assert!(!document.has_diagnostics());
    }

    #[test]
    fn declared_variables_replace_the_palette() {
        let document = Compiler::default().compile("$brand=#abc\np t=hi tc=$brand");

        assert_eq!(
            document.stylesheet.variables,
            vec![("brand".to_string(), "#abc".to_string())]
        );
        assert_eq!(document.root.children.len(), 1);
        assert!(!document.has_diagnostics());
    }

    #[test]
    fn top_level_directives_leave_the_markup() {
        let source = "@keyframes fade {\n  from op=0\n  to op=1\n}\np t=hi\n@mobile {\n  p pad=4\n}";
        let document = Compiler::default().compile(source);

        assert_eq!(document.root.children.len(), 1);
        assert_eq!(document.stylesheet.fragments.len(), 2);
        assert!(matches!(document.stylesheet.fragments[0], StyleFragment::Keyframes(_)));
        assert!(matches!(document.stylesheet.fragments[1], StyleFragment::Media(_)));

        let paragraph = &document.root.children[0];
        assert_eq!(paragraph.classes.len(), 1);
        assert!(document.stylesheet.utilities.is_empty());
    }

    #[test]
    fn bindings_skip_the_root() {
        let document = Compiler::default().compile("@mobile {\n  c pad=4\n}\nc .box t=a");

        assert!(document.root.classes.is_empty());
        assert_eq!(document.root.children[0].classes.len(), 2);
    }

    #[test]
    fn options_shape_the_output() {
        let options = CompileOptions::default()
            .class_prefix("ui-")
            .root_id("page")
            .palette(vec![PaletteEntry::new("ink", "#111111")]);
        let options = CompileOptions {
            emit_baseline: false,
            ..options
        };
        let document = Compiler::new(options).compile("p t=hi pad=8");

        assert_eq!(document.root.id.as_deref(), Some("page"));
        assert!(document.root.children[0].classes[0].starts_with("ui-"));
        assert!(document.stylesheet.baseline.is_empty());
        assert_eq!(
            document.stylesheet.variables,
            vec![("ink".to_string(), "#111111".to_string())]
        );
    }

    #[test]
    fn json_output() {
        let document = Compiler::default().compile("p t=hi");
        let json: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();

        assert_eq!(json["id"], "app");
        assert_eq!(json["children"][0]["tag"], "p");
        assert_eq!(json["children"][0]["text"], "hi");
    }
}
