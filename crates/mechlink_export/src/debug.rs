use std::fmt::Write;

use mechlink_message::Occurrence;

/// Indented text view of an occurrence tree, one node per line.
///
/// ```text
/// Arm [3f2a…] component=3f2a… grounded
///   Base [91c0…] component=77de… grounded
///     Link [0b4e…] component=c1a9…
/// ```
#[must_use]
pub fn render_hierarchy(root: &Occurrence) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &Occurrence, depth: usize, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{:indent$}{} [{}] component={}",
        "",
        node.header.name,
        node.header.uuid,
        node.component_uuid,
        indent = depth * 2
    );
    if node.is_grounded {
        out.push_str(" grounded");
    }
    out.push('\n');

    for child in &node.child_occurrences {
        render_node(child, depth + 1, out);
    }
}
