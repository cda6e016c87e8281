//! Style token resolution.

use crate::directive::KeyframeRegistry;
use crate::logging::targets;
use crate::theme::{VariableTable, substitute_references};

use super::{Declaration, ResolveMode, StyleKey, normalize_color};

/// Resolves style tokens to declarations.
///
/// Borrows the compile-scoped variable table and keyframe registry; lookups
/// never modify either.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'c> {
    variables: &'c VariableTable,
    keyframes: &'c KeyframeRegistry,
    default_duration: &'c str,
}

impl<'c> StyleResolver<'c> {
    /// Create a resolver over compile-scoped state.
    pub fn new(
        variables: &'c VariableTable,
        keyframes: &'c KeyframeRegistry,
        default_duration: &'c str,
    ) -> Self {
        Self {
            variables,
            keyframes,
            default_duration,
        }
    }

    /// Resolve a style key and raw value to zero or more declarations.
    pub fn resolve(&self, key: StyleKey, raw: &str, mode: ResolveMode) -> Vec<Declaration> {
        let value = self.prepare_value(key, raw);
        if value.is_empty() {
            tracing::trace!(target: targets::STYLE, "{}= has an empty value", key.code());
            return Vec::new();
        }

        let declarations = match key {
            StyleKey::FontSize => vec![Declaration::new("font-size", value)],
            StyleKey::TextColor => vec![Declaration::new("color", value)],
            StyleKey::Background => vec![Declaration::new("background-color", value)],
            StyleKey::Padding => vec![Declaration::new("padding", value)],
            StyleKey::BorderRadius => vec![Declaration::new("border-radius", value)],
            StyleKey::Opacity => vec![Declaration::new("opacity", value)],
            StyleKey::MaxWidth => vec![Declaration::new("max-width", value)],
            StyleKey::MinWidth => vec![Declaration::new("min-width", value)],
            StyleKey::Width => vec![Declaration::new("width", value)],
            StyleKey::Height => vec![Declaration::new("height", value)],
            StyleKey::Gap => vec![Declaration::new("gap", value)],
            StyleKey::Display => vec![Declaration::new("display", value)],
            StyleKey::Transform => vec![Declaration::new("transform", value)],
            StyleKey::Direction => resolve_direction(&value),
            StyleKey::Align => resolve_align(value),
            StyleKey::Wrap => match value.as_str() {
                "wrap" => vec![Declaration::new("flex-wrap", "wrap")],
                _ => Vec::new(),
            },
            StyleKey::Animation => self.resolve_animation(&value),
        };
        if declarations.is_empty() {
            tracing::trace!(
                target: targets::STYLE,
                "{}={} resolves to no declaration",
                key.code(),
                raw
            );
        }

        declarations
            .into_iter()
            .map(|decl| decl.with_mode(mode))
            .collect()
    }

    /// Names referenced by a raw value that no variable declares.
    pub fn undeclared_references<'v>(&self, raw: &'v str) -> Vec<&'v str> {
        self.variables.undeclared_references(raw)
    }

    fn prepare_value(&self, key: StyleKey, raw: &str) -> String {
        let raw = raw.trim();
        if raw.contains('$') {
            let substituted = substitute_references(raw);
            return if key.coerces_pixels() {
                coerce_pixels(&substituted)
            } else {
                substituted.into_owned()
            };
        }
        if key.is_color() {
            return normalize_color(raw);
        }
        if key.coerces_pixels() {
            return coerce_pixels(raw);
        }
        raw.to_string()
    }

    fn resolve_animation(&self, value: &str) -> Vec<Declaration> {
        let mut parts = value.split_whitespace();
        let Some(name) = parts.next() else {
            return Vec::new();
        };
        let duration = parts.next().unwrap_or(self.default_duration);
        let wants_initial = parts.next().is_some();

        let mut declarations = Vec::new();
        if wants_initial && let Some(initial) = self.keyframes.initial_state(name) {
            declarations.extend(initial.iter().cloned());
        }
        declarations.push(Declaration::new(
            "animation",
            format!("{name} {duration} ease-in-out forwards"),
        ));
        declarations
    }
}

/// Append `px` to every whitespace-separated part made only of digits.
fn coerce_pixels(value: &str) -> String {
    value
        .split_whitespace()
        .map(|part| {
            if part.chars().all(|c| c.is_ascii_digit()) {
                format!("{part}px")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_direction(value: &str) -> Vec<Declaration> {
    let direction = match value {
        "col" | "column" => "column",
        "row" => "row",
        _ => return Vec::new(),
    };
    vec![
        Declaration::new("display", "flex"),
        Declaration::new("flex-direction", direction),
    ]
}

fn resolve_align(value: String) -> Vec<Declaration> {
    if value == "c" {
        vec![
            Declaration::new("align-items", "center"),
            Declaration::new("justify-content", "center"),
        ]
    } else {
        vec![Declaration::new("align-items", value)]
    }
}
