//! Turning directive blocks into stylesheet fragments.

use super::{
    AnchoredClass, DirectiveBlock, DirectiveKind, ResponsiveBinding, RuleLine, is_initial_step,
    is_keyframe_step, parse_rule_lines,
};
use crate::classes::ClassScope;
use crate::context::CompileContext;
use crate::logging::targets;
use crate::style::{ResolveMode, StyleKey};
use crate::stylesheet::{KeyframeStep, KeyframesBlock, MediaBlock, StyleFragment};

/// Process a directive at the document's base indentation.
///
/// Media rules become media-scoped classes. Rules naming a selector record a
/// binding so the class reaches the matching elements; the others are
/// anchored to the directive's position. Keyframes are written literally and
/// their initial state is registered.
pub fn process_top_level(ctx: &mut CompileContext<'_>, block: &DirectiveBlock<'_>) {
    report_unclosed(ctx, block);

    match &block.kind {
        DirectiveKind::Media(breakpoint) => {
            let query = breakpoint.query(&ctx.options.breakpoints);
            let media = media_block(ctx, &query, block);
            tracing::debug!(
                target: targets::DIRECTIVE,
                "{} on line {}: {} rule(s)",
                breakpoint,
                block.header.number,
                media.rules.len()
            );
            if !media.rules.is_empty() {
                ctx.stylesheet.fragments.push(StyleFragment::Media(media));
            }
        }
        DirectiveKind::Keyframes(name) => {
            let keyframes = keyframes_block(ctx, name, block);
            ctx.stylesheet
                .fragments
                .push(StyleFragment::Keyframes(keyframes));
        }
        DirectiveKind::Unknown(header) => {
            ctx.diagnose(&block.header, format!("Unknown directive '{header}' skipped"));
        }
    }
}

/// Process a directive nested under an element.
///
/// A media directive yields one forced class built from its first content
/// line, for the caller to attach to the preceding element. Keyframes are
/// handled as at top level and yield no class.
pub fn process_inline(ctx: &mut CompileContext<'_>, block: &DirectiveBlock<'_>) -> Option<String> {
    report_unclosed(ctx, block);

    match &block.kind {
        DirectiveKind::Media(breakpoint) => {
            let query = breakpoint.query(&ctx.options.breakpoints);
            inline_media_class(ctx, &query, block)
        }
        DirectiveKind::Keyframes(name) => {
            let keyframes = keyframes_block(ctx, name, block);
            ctx.stylesheet
                .inline_fragments
                .push(StyleFragment::Keyframes(keyframes));
            None
        }
        DirectiveKind::Unknown(header) => {
            ctx.diagnose(&block.header, format!("Unknown directive '{header}' skipped"));
            None
        }
    }
}

fn report_unclosed(ctx: &mut CompileContext<'_>, block: &DirectiveBlock<'_>) {
    if !block.closed {
        ctx.diagnose(&block.header, "Directive block not closed before end of input");
    }
}

fn media_block(ctx: &mut CompileContext<'_>, query: &str, block: &DirectiveBlock<'_>) -> MediaBlock {
    let scope = ClassScope::Media(query.to_string());
    let mut media = MediaBlock::new(query);

    for rule in parse_rule_lines(&block.body, &mut ctx.diagnostics) {
        let pairs = style_pairs(ctx, &rule);
        let groups = ctx.resolve_groups(&rule.line, &pairs, ResolveMode::Forced);

        for group in groups {
            let (class_name, new_rule) = ctx.register_class(&scope, group.declarations);
            if let Some(new_rule) = new_rule {
                media.rules.push(new_rule);
            }
            match &rule.selector {
                Some(selector) => ctx
                    .bindings
                    .push(ResponsiveBinding::new(selector, class_name)),
                None => ctx
                    .anchored
                    .push(AnchoredClass::new(&block.header, class_name)),
            }
        }
    }

    media
}

fn inline_media_class(
    ctx: &mut CompileContext<'_>,
    query: &str,
    block: &DirectiveBlock<'_>,
) -> Option<String> {
    let mut content = block
        .body
        .iter()
        .filter(|line| !line.is_lone_brace() && !line.is_comment())
        .filter(|line| !line.text.starts_with(['.', '#']) && line.text.contains('='));

    let Some(first) = content.next() else {
        ctx.diagnose(&block.header, "Inline directive has no style line");
        return None;
    };
    if let Some(extra) = content.next() {
        ctx.diagnose(extra, "Only the first style line of an inline directive is used");
    }

    let rules = parse_rule_lines(std::slice::from_ref(first), &mut ctx.diagnostics);
    let rule = rules.first()?;
    let pairs = style_pairs(ctx, rule);
    let declarations = ctx.resolve_flat(&rule.line, &pairs, ResolveMode::Forced);
    if declarations.is_empty() {
        return None;
    }

    let (class_name, new_rule) =
        ctx.register_class(&ClassScope::Media(query.to_string()), declarations);
    if let Some(new_rule) = new_rule {
        ctx.stylesheet.push_inline_media_rule(query, new_rule);
    }
    Some(class_name)
}

fn keyframes_block(
    ctx: &mut CompileContext<'_>,
    name: &str,
    block: &DirectiveBlock<'_>,
) -> KeyframesBlock {
    let mut keyframes = KeyframesBlock {
        name: name.to_string(),
        steps: Vec::new(),
    };

    for rule in parse_rule_lines(&block.body, &mut ctx.diagnostics) {
        let Some(selector) = rule.selector.as_deref().filter(|s| is_keyframe_step(s)) else {
            ctx.diagnose(&rule.line, format!("Skipping invalid keyframe step in '{name}'"));
            continue;
        };

        let pairs = style_pairs(ctx, &rule);
        let declarations = ctx.resolve_flat(&rule.line, &pairs, ResolveMode::Normal);
        if is_initial_step(selector) {
            ctx.keyframes.register(name, declarations.clone());
        }
        keyframes.steps.push(KeyframeStep {
            selector: selector.to_string(),
            declarations,
        });
    }

    tracing::debug!(
        target: targets::DIRECTIVE,
        "@keyframes {} on line {}: {} step(s)",
        name,
        block.header.number,
        keyframes.steps.len()
    );
    keyframes
}

/// The style pairs of a rule. Other keys are reported and dropped.
fn style_pairs<'r>(
    ctx: &mut CompileContext<'_>,
    rule: &'r RuleLine<'_>,
) -> Vec<(StyleKey, &'r str)> {
    let mut pairs = Vec::with_capacity(rule.pairs.len());
    for (key, value) in &rule.pairs {
        match StyleKey::parse(key) {
            Some(style) => pairs.push((style, value.as_str())),
            None => ctx.diagnose(&rule.line, format!("'{key}' is not a style key")),
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::collect_block;
    use crate::options::CompileOptions;
    use crate::source::{LineCursor, split_lines};

    fn run(ctx: &mut CompileContext<'_>, source: &str, inline: bool) -> Option<String> {
        let lines = split_lines(source);
        let mut cursor = LineCursor::new(&lines);
        let header = cursor.next().copied().unwrap();
        let block = collect_block(&header, &mut cursor);
        if inline {
            process_inline(ctx, &block)
        } else {
            process_top_level(ctx, &block);
            None
        }
    }

    #[test]
    fn top_level_media_binds_selectors() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@mobile {\n  .card pad=8\n}", false);

        assert_eq!(ctx.stylesheet.fragments.len(), 1);
        let StyleFragment::Media(media) = &ctx.stylesheet.fragments[0] else {
            panic!("expected a media fragment");
        };
        assert_eq!(media.query, "(max-width: 600px)");
        assert_eq!(media.rules[0].class_name, "n-el90dd");
        assert_eq!(media.rules[0].declarations[0].to_string(), "padding: 8px !important;");
        assert_eq!(ctx.bindings.len(), 1);
        assert_eq!(ctx.bindings[0].class_name, "n-el90dd");
        assert!(ctx.stylesheet.utilities.is_empty());
    }

    #[test]
    fn selector_less_media_rule_is_anchored() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@mobile {\n  pad=8\n}", false);

        assert!(ctx.bindings.is_empty());
        assert_eq!(ctx.anchored.len(), 1);
        assert_eq!(ctx.anchored[0].line, 1);
        assert_eq!(ctx.anchored[0].class_name, "n-el90dd");
    }

    #[test]
    fn empty_media_block_adds_nothing() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@tablet {\n}", false);

        assert!(ctx.stylesheet.fragments.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn keyframes_register_initial_state() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@keyframes pulse {\n  0% op=0\n  100% op=1\n  middle op=0.5\n}", false);

        let StyleFragment::Keyframes(keyframes) = &ctx.stylesheet.fragments[0] else {
            panic!("expected a keyframes fragment");
        };
        assert_eq!(keyframes.steps.len(), 2);
        assert_eq!(
            ctx.keyframes.initial_state("pulse"),
            Some(&[crate::style::Declaration::new("opacity", "0")][..])
        );
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].line, 4);
    }

    #[test]
    fn inline_media_returns_one_class() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        let class = run(&mut ctx, "@mobile pad=8", true);

        assert_eq!(class.as_deref(), Some("n-el90dd"));
        assert!(ctx.stylesheet.fragments.is_empty());
        assert_eq!(ctx.stylesheet.inline_fragments.len(), 1);
    }

    #[test]
    fn inline_media_uses_first_style_line() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        let class = run(&mut ctx, "@maxw=600 {\n  pad=16\n  pad=8\n}", true);

        assert_eq!(class.as_deref(), Some("n-q48no2"));
        assert_eq!(ctx.diagnostics.len(), 1);
    }

    #[test]
    fn unknown_and_unclosed_directives_are_reported() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@print {\n  c pad=8", false);

        assert!(ctx.stylesheet.is_empty());
        assert_eq!(ctx.diagnostics.len(), 2);
    }

    #[test]
    fn non_style_keys_are_dropped() {
        let options = CompileOptions::default();
        let mut ctx = CompileContext::new(&options);
        run(&mut ctx, "@mobile {\n  .card pad=8 href=x\n}", false);

        assert_eq!(ctx.bindings.len(), 1);
        assert_eq!(ctx.diagnostics.len(), 1);
    }
}
