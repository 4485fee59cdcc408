//! Immutable code-fragment tree for generated C++ sources.
//!
//! Fragments are built bottom-up: a parent owns its children and nothing
//! is edited once constructed. Linearization to text lives in [`render`]
//! and never happens while the tree is being assembled.

pub mod render;

pub use render::{render, INDENT};

/// One node of the generated-source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `#include "path"` or `#include <path>`
    Include { path: String, system: bool },
    /// A single raw line; an empty string is a blank line
    Line(String),
    /// `// text`
    Comment(String),
    /// The inner fragment terminated by `;`
    Statement(Box<Fragment>),
    /// `lvalue = rvalue;`
    Assign { lvalue: String, rvalue: String },
    /// Optional header line followed by a braced, indented body
    Block { header: Option<String>, children: Vec<Fragment> },
    /// `callee(arg, arg, ...)`, arguments may span several lines
    Call { callee: String, args: Vec<Fragment> },
    /// Links joined on one line by a separator, e.g. `Name("x").Device(..)`
    Join { parts: Vec<Fragment>, separator: String },
    /// Method chain with one link per line, each after the first prefixed by `.`
    Chain(Vec<Fragment>),
    /// Top-level unit of rendering
    Module(Vec<Fragment>),
}

impl Fragment {
    /* ------------------------------------------------------------------ */
    /* Leaves                                                             */
    /* ------------------------------------------------------------------ */

    pub fn include(path: impl Into<String>) -> Self {
        Fragment::Include { path: path.into(), system: false }
    }

    pub fn system_include(path: impl Into<String>) -> Self {
        Fragment::Include { path: path.into(), system: true }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Fragment::Line(text.into())
    }

    pub fn blank() -> Self {
        Fragment::Line(String::new())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Fragment::Comment(text.into())
    }

    /// `text;`
    pub fn statement(text: impl Into<String>) -> Self {
        Fragment::Statement(Box::new(Fragment::Line(text.into())))
    }

    pub fn assign(lvalue: impl Into<String>, rvalue: impl Into<String>) -> Self {
        Fragment::Assign { lvalue: lvalue.into(), rvalue: rvalue.into() }
    }

    /// A string literal argument, quoted exactly once
    pub fn quoted(text: &str) -> Self {
        Fragment::Line(format!("\"{text}\""))
    }

    /* ------------------------------------------------------------------ */
    /* Composites                                                         */
    /* ------------------------------------------------------------------ */

    /// Terminate any fragment with `;`
    pub fn terminated(inner: Fragment) -> Self {
        Fragment::Statement(Box::new(inner))
    }

    pub fn block(children: Vec<Fragment>) -> Self {
        Fragment::Block { header: None, children }
    }

    pub fn scope(header: impl Into<String>, children: Vec<Fragment>) -> Self {
        Fragment::Block { header: Some(header.into()), children }
    }

    pub fn call(callee: impl Into<String>, args: Vec<Fragment>) -> Self {
        Fragment::Call { callee: callee.into(), args }
    }

    pub fn join(parts: Vec<Fragment>, separator: impl Into<String>) -> Self {
        Fragment::Join { parts, separator: separator.into() }
    }

    pub fn chain(links: Vec<Fragment>) -> Self {
        Fragment::Chain(links)
    }

    pub fn module(children: Vec<Fragment>) -> Self {
        Fragment::Module(children)
    }
}
