//! Module renderer: lays out the final source file.
//!
//! Order is fixed: framework includes, implementing-kernel includes, the
//! namespace directive, the `REGISTER_OP` statement, then the kernel class
//! and the kernel registration when present, each after a blank line.
//! Headers written as `<name>` are included with angle brackets. Nothing
//! else is checked here; the parts are emitted as given.

use opgen_core::Fragment;

use crate::GeneratorConfig;

/// Fragments making up one generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParts {
    /// Headers declaring the implementing kernel, after the framework headers
    pub headers:             Vec<String>,
    pub registration:        Fragment,
    pub kernel_class:        Option<Fragment>,
    pub kernel_registration: Option<Fragment>,
}

/// Build the module fragment for `parts`
pub fn assemble_module(parts: ModuleParts, config: &GeneratorConfig) -> Fragment {
    let mut children: Vec<Fragment> = config
        .framework_headers
        .iter()
        .chain(&parts.headers)
        .map(|h| header_include(h))
        .collect();

    children.push(Fragment::blank());
    children.push(Fragment::statement(format!("using namespace {}", config.namespace)));
    children.push(Fragment::blank());
    children.push(parts.registration);

    for part in [parts.kernel_class, parts.kernel_registration].into_iter().flatten() {
        children.push(Fragment::blank());
        children.push(part);
    }

    Fragment::module(children)
}

/// `<vector>` becomes a system include, anything else a quoted one
fn header_include(header: &str) -> Fragment {
    match header.strip_prefix('<').and_then(|h| h.strip_suffix('>')) {
        Some(path) => Fragment::system_include(path),
        None => Fragment::include(header),
    }
}

/// Linearize `parts` into source text
pub fn render_module(parts: ModuleParts, config: &GeneratorConfig) -> String {
    assemble_module(parts, config).render()
}
