use url::Url;

/// The three kinds of module specifier an import statement can carry.
///
/// x-ref: https://nodejs.org/api/esm.html#import-specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `./foo.js`, `../bar` — resolved relative to the importing file.
    Relative,
    /// `file:///path/to/module` — a complete, self-describing locator.
    Absolute,
    /// `left-pad`, `@scope/name` — a package name for package resolution.
    Bare,
}

impl SpecifierKind {
    pub fn is_bare(self) -> bool {
        matches!(self, SpecifierKind::Bare)
    }
}

/// Classify a module specifier. Total: every string maps to exactly one kind.
pub fn classify(specifier: &str) -> SpecifierKind {
    // Any leading dot means relative, with no further disambiguation; a lone
    // "." is accepted here just as it is by the runtime's loader.
    if specifier.starts_with('.') {
        return SpecifierKind::Relative;
    }

    // URL-like specifiers are absolute. Everything that parses as neither a
    // relative path nor a URL falls through to bare, including the empty
    // string; callers must not expect a bare "" to resolve to anything.
    if Url::parse(specifier).is_ok() {
        return SpecifierKind::Absolute;
    }

    SpecifierKind::Bare
}
