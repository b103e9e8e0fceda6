use tracing::Span;

use super::require::Require;

/// Construction parameters for a [`Common`]
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// name the resource is reported under
    pub name: String,
    /// span every diagnostic of the resource is recorded in
    pub span: Span,
}

impl CommonConfig {
    /// Build a config with a fresh `resource` span for a resource of
    ///  the given kind (e.g. "l2-network") and name
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        let name = name.into();
        let span = tracing::info_span!("resource", kind, name = %name);
        Self { name, span }
    }
}

/// Identity, diagnostics and assertions for a single resource
#[derive(Debug, Clone)]
pub struct Common {
    name: String,
    span: Span,
}

impl Common {
    pub fn new(config: CommonConfig) -> Self {
        Self {
            name: config.name,
            span: config.span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Assertion facility bound to this resource
    pub fn require(&self) -> Require<'_> {
        Require::new(&self.name, &self.span)
    }
}
