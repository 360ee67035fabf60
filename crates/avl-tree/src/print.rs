//! Text rendering of query results and tree shapes.

use crate::node::{Link, Node};
use crate::tree::{find, in_order};

/// Renders one child subtree given the indentation to continue with.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// `Key: <k>` for a hit, `No such element` for a miss.
pub fn describe_find(root: &Link, key: i32) -> String {
    if find(root, key) {
        format!("Key: {key}")
    } else {
        "No such element".to_string()
    }
}

pub fn describe_node(node: &Node) -> String {
    format!("Key: {}", node.key())
}

/// Ascending keys separated by single spaces.
pub fn format_in_order(root: &Link) -> String {
    join_keys(&in_order(root))
}

pub fn join_keys(keys: &[i32]) -> String {
    keys.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Box-drawing dump of the tree, one node per line.
///
/// ```
/// use avl_tree::{insert, print::print_tree};
///
/// let root = [20, 10, 30].into_iter().fold(None, insert);
/// assert_eq!(
///     print_tree(&root),
///     "20 [h=2, bf=0]\n├─ 10 [h=1, bf=0]\n└─ 30 [h=1, bf=0]"
/// );
/// ```
pub fn print_tree(root: &Link) -> String {
    match root.as_deref() {
        Some(node) => print_node(node, ""),
        None => "∅".to_string(),
    }
}

fn print_node(node: &Node, tab: &str) -> String {
    let mut out = format!("{} [h={}, bf={}]", node.key(), node.height(), node.balance());
    if node.is_leaf() {
        return out;
    }

    let left = |tab: &str| print_child(node.left(), tab);
    let right = |tab: &str| print_child(node.right(), tab);
    out.push_str(&print_children(
        Some(tab),
        &[Some(&left as &PrintChild), Some(&right as &PrintChild)],
    ));
    out
}

fn print_child(child: Option<&Node>, tab: &str) -> String {
    child.map_or_else(|| "∅".to_string(), |n| print_node(n, tab))
}

/// Appends `children` under the current line, each on its own branch.
/// Trailing `None` entries are dropped, and an empty rendering becomes a
/// bare `│` connector.
pub fn print_children(tab: Option<&str>, children: &[Option<&PrintChild>]) -> String {
    let tab = tab.unwrap_or("");
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::insert;

    fn build(keys: &[i32]) -> Link {
        keys.iter().fold(None, |root, &k| insert(root, k))
    }

    #[test]
    fn find_messages() {
        let root = build(&[3, 1, 2]);
        assert_eq!(describe_find(&root, 2), "Key: 2");
        assert_eq!(describe_find(&root, 9), "No such element");
        assert_eq!(describe_find(&None, 9), "No such element");
        assert_eq!(describe_node(root.as_deref().unwrap()), "Key: 2");
    }

    #[test]
    fn in_order_line() {
        assert_eq!(format_in_order(&build(&[5, -3, 9, 0])), "-3 0 5 9");
        assert_eq!(format_in_order(&None), "");
    }

    #[test]
    fn dump_marks_missing_child() {
        let root = build(&[20, 10, 30, 40]);
        assert_eq!(
            print_tree(&root),
            "20 [h=3, bf=-1]\n├─ 10 [h=1, bf=0]\n└─ 30 [h=2, bf=-1]\n   ├─ ∅\n   └─ 40 [h=1, bf=0]"
        );
        assert_eq!(print_tree(&None), "∅");
    }

    #[test]
    fn children_skip_none_entries() {
        let a = |_: &str| "a".to_string();
        let empty = |_: &str| String::new();
        assert_eq!(print_children(None, &[None, None]), "");
        assert_eq!(
            print_children(Some(">"), &[Some(&a as &PrintChild), None, Some(&empty as &PrintChild)]),
            "\n>├─ a\n>│"
        );
    }
}
