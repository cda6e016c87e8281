//! The hybrid indentation/brace block parser.

use super::line::{ElementLine, LineBody, LineHead, line_tokens, split_line};
use crate::context::CompileContext;
use crate::directive::{AnchoredClass, collect_block, process_inline};
use crate::element::{DEFAULT_CONTAINER_TAG, Element, ElementKind, InferenceInput};
use crate::logging::targets;
use crate::options::INDENT_UNIT;
use crate::source::{Diagnostic, LineCursor, SourceLine};
use crate::style::{ResolveMode, StyleKey};

/// Builds the element forest from markup lines.
///
/// Inside a scope elements are collected flat with their depth,
/// `(indent - base) / 2`, and folded into a tree when the scope ends. A `{`
/// at the end of a line opens a child scope that runs until its matching
/// `}`, whatever the indentation of the lines in between; a line indented
/// less than the scope's first line sits at the scope's top depth.
/// `{ ... }` on one line holds a single child element.
///
/// Elements that end up with no text, children, id, class or attribute are
/// dropped when they are attached.
#[derive(Debug)]
pub struct BlockParser<'c, 'o> {
    ctx: &'c mut CompileContext<'o>,
}

impl<'c, 'o> BlockParser<'c, 'o> {
    /// Create a parser writing classes and diagnostics into `ctx`.
    pub fn new(ctx: &'c mut CompileContext<'o>) -> Self {
        Self { ctx }
    }

    /// Parse markup lines into top-level elements.
    pub fn parse(&mut self, lines: &[SourceLine<'_>]) -> Vec<Element> {
        let base = lines
            .iter()
            .filter(|line| !line.is_blank() && !line.is_comment())
            .map(|line| line.indent)
            .min()
            .unwrap_or(0);

        let mut cursor = LineCursor::new(lines);
        self.parse_scope(&mut cursor, base, None)
    }

    /// Parse one scope.
    ///
    /// `opener` is the line whose `{` opened the scope, or `None` for the
    /// document scope.
    fn parse_scope<'a>(
        &mut self,
        cursor: &mut LineCursor<'_, 'a>,
        base: usize,
        opener: Option<&SourceLine<'a>>,
    ) -> Vec<Element> {
        let mut emitted: Vec<(usize, Element)> = Vec::new();
        let mut closed = opener.is_none();
        let mut end = usize::MAX;

        while let Some(&line) = cursor.peek() {
            if line.is_blank() || line.is_comment() {
                cursor.next();
                continue;
            }
            if line.text == "}" {
                cursor.next();
                if opener.is_some() {
                    closed = true;
                    end = line.number;
                    break;
                }
                self.ctx.diagnose(&line, "Skipping unmatched '}'");
                continue;
            }
            cursor.next();
            if line.text == "{" {
                self.ctx.diagnose(&line, "Skipping '{' with no element to open");
                continue;
            }

            if line.is_directive() {
                let block = collect_block(&line, cursor);
                if let Some(class) = process_inline(self.ctx, &block) {
                    match emitted.last_mut() {
                        Some((_, element)) => element.add_class(class),
                        None => self.ctx.diagnose(
                            &line,
                            format!("Responsive class '{class}' has no element to attach to"),
                        ),
                    }
                }
                continue;
            }

            self.attach_anchored(&mut emitted, line.number);
            let depth = line.indent.saturating_sub(base) / INDENT_UNIT;
            let element = self.element(&line, cursor);
            emitted.push((depth, element));
        }

        if let Some(opener) = opener
            && !closed
        {
            self.ctx.diagnose(opener, "Block is not closed, closing it implicitly");
        }

        self.attach_anchored(&mut emitted, end);
        fold(emitted)
    }

    /// Give media classes anchored before line `boundary` to the last element
    /// emitted in this scope.
    fn attach_anchored(&mut self, emitted: &mut [(usize, Element)], boundary: usize) {
        let count = self
            .ctx
            .anchored
            .partition_point(|anchored| anchored.line < boundary);
        let anchored: Vec<_> = self.ctx.anchored.drain(..count).collect();

        for AnchoredClass {
            line,
            column,
            class_name,
        } in anchored
        {
            match emitted.last_mut() {
                Some((_, element)) => element.add_class(class_name),
                None => self.ctx.report(Diagnostic::new(
                    format!("Responsive class '{class_name}' has no element to attach to"),
                    line,
                    column,
                )),
            }
        }
    }

    fn element<'a>(&mut self, line: &SourceLine<'a>, cursor: &mut LineCursor<'_, 'a>) -> Element {
        let tokens = line_tokens(line.text);
        let split = split_line(&tokens);
        self.report_trailing(line, split.trailing);

        match split.body {
            LineBody::Inline(inner) => self.inline_element(line, split.head, inner),
            LineBody::Open => self.block_element(line, split.head, cursor),
            LineBody::None if cursor.peek_content().is_some_and(|next| next.text == "{") => {
                while cursor.next().is_some_and(|skipped| skipped.text != "{") {}
                self.block_element(line, split.head, cursor)
            }
            LineBody::None => {
                let has_children = cursor.peek_content().is_some_and(|next| {
                    next.indent > line.indent && next.text != "}" && !next.is_directive()
                });
                self.build(line, split.head, has_children)
            }
        }
    }

    fn block_element<'a>(
        &mut self,
        line: &SourceLine<'a>,
        head: &[&str],
        cursor: &mut LineCursor<'_, 'a>,
    ) -> Element {
        let next = cursor.peek_content().copied();
        let has_children = next.is_some_and(|next| next.text != "}" && !next.is_directive());
        let mut element = self.build(line, head, has_children);

        let base = next.map_or(line.indent, |next| next.indent);
        for child in self.parse_scope(cursor, base, Some(line)) {
            element.push_child(child);
        }
        element
    }

    fn inline_element(&mut self, line: &SourceLine<'_>, head: &[&str], inner: &[&str]) -> Element {
        let mut element = self.build(line, head, !inner.is_empty());
        if inner.is_empty() {
            return element;
        }

        let split = split_line(inner);
        self.report_trailing(line, split.trailing);
        let child = match split.body {
            LineBody::Inline(nested) => self.inline_element(line, split.head, nested),
            LineBody::Open => {
                self.ctx.diagnose(line, "Unmatched '{' inside a single-line block");
                self.build(line, split.head, false)
            }
            LineBody::None => self.build(line, split.head, false),
        };

        if child.is_empty() {
            tracing::trace!(
                target: targets::PARSER,
                "line {}: dropping empty <{}>",
                line.number,
                child.tag
            );
        } else {
            element.push_child(child);
        }
        element
    }

    fn report_trailing(&mut self, line: &SourceLine<'_>, trailing: &[&str]) {
        if !trailing.is_empty() {
            self.ctx.diagnose(
                line,
                format!("Skipping '{}' after the block", trailing.join(" ")),
            );
        }
    }

    /// Build one element from the tokens before its block.
    fn build(&mut self, line: &SourceLine<'_>, tokens: &[&str], has_children: bool) -> Element {
        let ElementLine {
            head,
            id,
            classes,
            text,
            pairs,
            skipped,
        } = ElementLine::parse(tokens);

        match &head {
            LineHead::Unknown(code) => self.ctx.diagnose(
                line,
                format!("Unknown element type '{code}', using a container"),
            ),
            LineHead::Missing => self
                .ctx
                .diagnose(line, "Element line has no type, using a container"),
            LineHead::Kind(_) | LineHead::Selector => {}
        }
        for word in &skipped {
            self.ctx.diagnose(line, format!("Skipping '{word}'"));
        }

        let kind = head.kind();
        let input = InferenceInput {
            classes: &classes,
            id: id.as_deref(),
            text: text.as_deref(),
            has_children,
        };
        let tag = kind.map_or(DEFAULT_CONTAINER_TAG, |kind| kind.tag(&input));

        let mut element = Element::new(tag);
        element.id = id;
        for class in classes {
            element.add_class(class);
        }
        if let Some(text) = text {
            element.set_text(text);
        }

        let is_link = kind.is_some_and(ElementKind::is_link);
        let mut styles = Vec::new();
        for (key, value) in &pairs {
            match key.as_str() {
                "h" if is_link => element.set_attribute("href", value.as_str()),
                "role" => element.set_attribute("role", value.as_str()),
                "aria" => match value.split_once(':') {
                    Some((name, aria)) if !name.is_empty() && !aria.is_empty() => {
                        element.set_attribute(format!("aria-{name}"), aria);
                    }
                    _ => self
                        .ctx
                        .diagnose(line, format!("Expected aria=name:value, got '{value}'")),
                },
                _ => match StyleKey::parse(key) {
                    Some(style) => styles.push((style, value.as_str())),
                    None => element.set_attribute(key.as_str(), value.as_str()),
                },
            }
        }

        for group in self.ctx.resolve_groups(line, &styles, ResolveMode::Normal) {
            let class = self.ctx.register_utility(group);
            element.add_class(class);
        }

        tracing::trace!(
            target: targets::PARSER,
            "line {}: <{}> with {} class(es)",
            line.number,
            element.tag,
            element.classes.len()
        );
        element
    }
}

/// Fold `(depth, element)` pairs into a forest.
///
/// An element becomes a child of the nearest earlier element with a smaller
/// depth. Empty elements are dropped as they are attached, after their own
/// children.
fn fold(emitted: Vec<(usize, Element)>) -> Vec<Element> {
    let mut roots = Vec::new();
    let mut stack: Vec<(usize, Element)> = Vec::new();

    for (depth, element) in emitted {
        while stack.last().is_some_and(|(open, _)| *open >= depth) {
            attach_top(&mut stack, &mut roots);
        }
        stack.push((depth, element));
    }
    while !stack.is_empty() {
        attach_top(&mut stack, &mut roots);
    }

    roots
}

fn attach_top(stack: &mut Vec<(usize, Element)>, roots: &mut Vec<Element>) {
    let Some((_, element)) = stack.pop() else {
        return;
    };
    if element.is_empty() {
        tracing::trace!(target: targets::PARSER, "dropping empty <{}>", element.tag);
        return;
    }
    match stack.last_mut() {
        Some((_, parent)) => parent.push_child(element),
        None => roots.push(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompileOptions;
    use crate::source::split_lines;
    use crate::stylesheet::Stylesheet;

    /// What a parse left in the context.
    struct Output {
        stylesheet: Stylesheet,
        diagnostics: Vec<Diagnostic>,
    }

    fn parse(source: &str) -> (Vec<Element>, Output) {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        let lines = split_lines(source);
        let forest = BlockParser::new(&mut ctx).parse(&lines);
        let output = Output {
            stylesheet: ctx.stylesheet,
            diagnostics: ctx.diagnostics,
        };
        (forest, output)
    }

    #[test]
    fn single_line_block_child() {
        let (forest, out) = parse(r#"c pad=8 { p t="hi" }"#);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].tag, "section");
        assert_eq!(forest[0].classes, vec!["n-behmg9"]);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].tag, "p");
        assert_eq!(forest[0].children[0].text.as_deref(), Some("hi"));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn brace_block_matches_single_line_form() {
        let (braced, _) = parse("c pad=8 {\n  p t=\"hi\"\n}");
        let (inline, _) = parse(r#"c pad=8 { p t="hi" }"#);
        assert_eq!(braced, inline);
    }

    #[test]
    fn brace_on_next_line() {
        let (forest, out) = parse("c pad=8\n{\n  p t=hi\n}");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children[0].text.as_deref(), Some("hi"));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn indentation_sets_depth() {
        let (forest, _) = parse("c .outer\n  c .middle\n    p t=deep\n  p t=sibling\np t=top");

        assert_eq!(forest.len(), 2);
        let outer = &forest[0];
        assert_eq!(outer.children.len(), 2);
        assert_eq!(outer.children[0].children[0].text.as_deref(), Some("deep"));
        assert_eq!(outer.children[1].text.as_deref(), Some("sibling"));
        assert_eq!(forest[1].text.as_deref(), Some("top"));
    }

    #[test]
    fn indented_document_uses_its_own_base() {
        let (forest, _) = parse("    c .a\n      p t=x");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children[0].text.as_deref(), Some("x"));
    }

    #[test]
    fn empty_elements_are_pruned() {
        let (forest, _) = parse("c {\n  p\n  p t=kept\n}\nc");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].text.as_deref(), Some("kept"));
    }

    #[test]
    fn inline_directive_attaches_to_previous_element() {
        let (forest, out) = parse("c .card pad=16 {\n  p t=a\n}\n@mobile pad=8");
        assert_eq!(forest[0].classes, vec!["card", "n-1ojlwc", "n-el90dd"]);
        assert_eq!(out.stylesheet.inline_fragments.len(), 1);
    }

    #[test]
    fn nested_inline_directive() {
        let (forest, _) = parse("c .card {\n  p t=a pad=16\n  @mobile pad=8\n}");
        let paragraph = &forest[0].children[0];
        assert_eq!(paragraph.classes, vec!["n-1ojlwc", "n-el90dd"]);
    }

    #[test]
    fn dedent_inside_braces_stays_in_the_block() {
        let (forest, out) = parse("c {\n    p t=a\n  p t=b\n}\np t=c");

        assert_eq!(forest.len(), 2);
        let texts: Vec<_> = forest[0]
            .children
            .iter()
            .map(|child| child.text.as_deref())
            .collect();
        assert_eq!(texts, vec![Some("a"), Some("b")]);
        assert_eq!(forest[1].text.as_deref(), Some("c"));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn unclosed_block_is_closed_at_end() {
        let (forest, out) = parse("c {\n  p t=a");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].line, 1);
    }

    #[test]
    fn stray_closing_brace_is_skipped() {
        let (forest, out) = parse("p t=a\n}\np t=b");
        assert_eq!(forest.len(), 2);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].line, 2);
    }

    #[test]
    fn attributes_and_links() {
        let (forest, _) = parse(
            "a t=Docs h=/docs role=link aria=label:Documentation target=_blank\np t=x h=10",
        );

        let link = &forest[0];
        assert_eq!(link.tag, "a");
        assert_eq!(link.attribute("href"), Some("/docs"));
        assert_eq!(link.attribute("role"), Some("link"));
        assert_eq!(link.attribute("aria-label"), Some("Documentation"));
        assert_eq!(link.attribute("target"), Some("_blank"));
        assert!(link.classes.is_empty());

        let paragraph = &forest[1];
        assert_eq!(paragraph.attribute("href"), None);
        assert_eq!(paragraph.classes.len(), 1);
    }

    #[test]
    fn selector_lines_are_plain_groups() {
        let (forest, _) = parse(".footer-links {\n  p t=a\n}");
        assert_eq!(forest[0].tag, "div");
        assert_eq!(forest[0].classes, vec!["footer-links"]);
    }

    #[test]
    fn container_inference_sees_classes_and_text() {
        let (forest, _) = parse("c .site-header t=Welcome\nc t=\"Copyright 2024\"");
        assert_eq!(forest[0].tag, "header");
        assert_eq!(forest[1].tag, "footer");
    }

    #[test]
    fn unknown_type_and_stray_tokens_are_reported() {
        let (forest, out) = parse("blink t=hi loose");
        assert_eq!(forest[0].tag, "div");
        assert_eq!(out.diagnostics.len(), 2);
    }

    #[test]
    fn related_style_tokens_share_a_class() {
        let (forest, out) = parse("c .wrapper dir=col disp=flex t=x");
        assert_eq!(forest[0].classes, vec!["wrapper", "n-2m6mx9"]);
        assert_eq!(out.stylesheet.utilities.len(), 1);
    }
}
