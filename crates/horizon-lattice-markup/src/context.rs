//! Compile-scoped state.

use crate::classes::{ClassRegistry, ClassScope};
use crate::directive::{AnchoredClass, KeyframeRegistry, ResponsiveBinding};
use crate::logging::targets;
use crate::options::CompileOptions;
use crate::source::{Diagnostic, SourceLine};
use crate::style::{
    Declaration, ResolveMode, StyleGroup, StyleGroups, StyleKey, StyleResolver, join_declarations,
    merge_declarations,
};
use crate::stylesheet::{Stylesheet, UtilityRule};
use crate::theme::VariableTable;

/// Everything one compile accumulates.
///
/// Created at the start of [`Compiler::compile`](crate::Compiler::compile),
/// threaded by `&mut` through every pass, and consumed into the compiled
/// document at the end. Nothing in here outlives a compile.
#[derive(Debug)]
pub struct CompileContext<'o> {
    pub options: &'o CompileOptions,
    pub variables: VariableTable,
    pub classes: ClassRegistry,
    pub keyframes: KeyframeRegistry,
    /// Stylesheet under construction. Variables and the baseline are filled
    /// in at assembly.
    pub stylesheet: Stylesheet,
    pub bindings: Vec<ResponsiveBinding>,
    /// Classes from selector-less media rules, in source order.
    pub anchored: Vec<AnchoredClass>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'o> CompileContext<'o> {
    /// Create an empty context.
    pub fn new(options: &'o CompileOptions) -> Self {
        Self {
            options,
            variables: VariableTable::new(),
            classes: ClassRegistry::new(options.class_prefix.clone()),
            keyframes: KeyframeRegistry::new(),
            stylesheet: Stylesheet::new(),
            bindings: Vec::new(),
            anchored: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// A resolver over the current variables and keyframes.
    pub fn resolver(&self) -> StyleResolver<'_> {
        StyleResolver::new(
            &self.variables,
            &self.keyframes,
            &self.options.default_animation_duration,
        )
    }

    /// Record a recovered problem.
    pub fn diagnose(&mut self, line: &SourceLine<'_>, message: impl Into<String>) {
        self.report(Diagnostic::at(line, message));
    }

    /// Record a recovered problem at an explicit position.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(target: targets::PARSER, "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Resolve style pairs, one result per pair in source order.
    ///
    /// References to undeclared variables still resolve, and are reported.
    pub fn resolve_pairs(
        &mut self,
        line: &SourceLine<'_>,
        pairs: &[(StyleKey, &str)],
        mode: ResolveMode,
    ) -> Vec<(StyleKey, Vec<Declaration>)> {
        let mut undeclared = Vec::new();
        let resolved: Vec<_> = {
            let resolver = self.resolver();
            pairs
                .iter()
                .map(|&(key, raw)| {
                    undeclared.extend(
                        resolver
                            .undeclared_references(raw)
                            .into_iter()
                            .map(str::to_string),
                    );
                    (key, resolver.resolve(key, raw, mode))
                })
                .collect()
        };

        for name in undeclared {
            self.diagnose(line, format!("Undeclared variable '${name}'"));
        }
        resolved
    }

    /// Resolve style pairs into category groups.
    pub fn resolve_groups(
        &mut self,
        line: &SourceLine<'_>,
        pairs: &[(StyleKey, &str)],
        mode: ResolveMode,
    ) -> StyleGroups {
        let mut groups = StyleGroups::new();
        for (key, declarations) in self.resolve_pairs(line, pairs, mode) {
            groups.insert(key.category(), declarations);
        }
        groups
    }

    /// Resolve style pairs into one flat declaration list.
    pub fn resolve_flat(
        &mut self,
        line: &SourceLine<'_>,
        pairs: &[(StyleKey, &str)],
        mode: ResolveMode,
    ) -> Vec<Declaration> {
        let mut flat = Vec::new();
        for (_, declarations) in self.resolve_pairs(line, pairs, mode) {
            merge_declarations(&mut flat, declarations);
        }
        flat
    }

    /// Register declarations as a class in `scope`.
    ///
    /// Returns the class name, and the rule to emit when the declarations
    /// were not registered before.
    pub fn register_class(
        &mut self,
        scope: &ClassScope,
        declarations: Vec<Declaration>,
    ) -> (String, Option<UtilityRule>) {
        let css = join_declarations(&declarations);
        let registration = self.classes.register(scope, &css);
        let rule = registration
            .is_new
            .then(|| UtilityRule::new(registration.class_name.clone(), declarations));
        (registration.class_name, rule)
    }

    /// Register an element style group as a base utility class.
    pub fn register_utility(&mut self, group: StyleGroup) -> String {
        let (class_name, rule) = self.register_class(&ClassScope::Base, group.declarations);
        if let Some(rule) = rule {
            self.stylesheet.utilities.push(rule);
        }
        class_name
    }
}
