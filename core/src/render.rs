//! Tree-walk linearization of [`Fragment`]s into source text.
//!
//! Rendering is a pure function of the tree: the same fragments always give
//! byte-identical output. Every rendered line ends with `\n`.

use std::fmt;

use crate::Fragment;

/// Indentation added per nested block
pub const INDENT: &str = "  ";

impl Fragment {
    /// Lines this fragment occupies, relative to its parent's indentation
    pub fn lines(&self) -> Vec<String> {
        match self {
            Fragment::Include { path, system: false } => vec![format!("#include \"{path}\"")],
            Fragment::Include { path, system: true } => vec![format!("#include <{path}>")],
            Fragment::Line(text) => vec![text.clone()],
            Fragment::Comment(text) => vec![format!("// {text}")],
            Fragment::Statement(inner) => {
                let mut lines = inner.lines();
                match lines.last_mut() {
                    Some(last) => last.push(';'),
                    None => lines.push(";".to_string()),
                }
                lines
            }
            Fragment::Assign { lvalue, rvalue } => vec![format!("{lvalue} = {rvalue};")],
            Fragment::Block { header, children } => {
                let mut lines = Vec::new();
                if let Some(header) = header {
                    lines.push(header.clone());
                }
                lines.push("{".to_string());
                for child in children {
                    lines.extend(child.lines().into_iter().map(indent));
                }
                lines.push("}".to_string());
                lines
            }
            Fragment::Call { callee, args } => {
                let mut lines = vec![format!("{callee}(")];
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        splice(&mut lines, vec![", ".to_string()]);
                    }
                    splice(&mut lines, arg.lines());
                }
                splice(&mut lines, vec![")".to_string()]);
                lines
            }
            Fragment::Join { parts, separator } => {
                let mut lines = vec![String::new()];
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        splice(&mut lines, vec![separator.clone()]);
                    }
                    splice(&mut lines, part.lines());
                }
                lines
            }
            Fragment::Chain(links) => {
                let mut lines = Vec::new();
                for (i, link) in links.iter().enumerate() {
                    let mut link_lines = link.lines().into_iter();
                    if i == 0 {
                        lines.extend(link_lines);
                        continue;
                    }
                    let head = link_lines.next().unwrap_or_default();
                    lines.push(format!(".{head}"));
                    lines.extend(link_lines);
                }
                lines
            }
            Fragment::Module(children) => children.iter().flat_map(Fragment::lines).collect(),
        }
    }

    /// Full text of this fragment, one `\n` after every line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render a sequence of fragments in the order given
pub fn render(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::render).collect()
}

/// Blank lines stay empty so the output carries no trailing whitespace
fn indent(line: String) -> String {
    if line.is_empty() {
        line
    } else {
        format!("{INDENT}{line}")
    }
}

/// Continue the last line with the first of `more`, then append the rest
fn splice(lines: &mut Vec<String>, more: Vec<String>) {
    let mut more = more.into_iter();
    if let Some(first) = more.next() {
        match lines.last_mut() {
            Some(last) => last.push_str(&first),
            None => lines.push(first),
        }
    }
    lines.extend(more);
}
