//! Menu tree model and keystroke resolution
//!
//! The in-memory representation of the menu: nodes keyed by short
//! identifiers, polymorphic over submenu/action, with declaration order
//! preserved as display order. The navigation engine only ever reads
//! this tree.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// An external action carried by a leaf node.
///
/// Closed tagged union, dispatched once at launch time by
/// [`crate::infra::launcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Open a folder or file in the configured editor
    OpenEditor { path: PathBuf },
    /// Open a URL in the system browser
    OpenUrl { url: String },
    /// Launch an application by name
    OpenApp { app: String },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenEditor { path } => write!(f, "edit {}", path.display()),
            Self::OpenUrl { url } => write!(f, "open {url}"),
            Self::OpenApp { app } => write!(f, "launch {app}"),
        }
    }
}

/// What a node is: a branch or a leaf. Never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Branch holding an ordered child menu
    Submenu(Menu),
    /// Leaf carrying one action
    Action(Action),
}

/// A single node in the menu tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    /// Selector key, unique among siblings (case-insensitive)
    pub key: String,
    /// Human-readable display string
    pub label: String,
    /// Branch or leaf
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl MenuNode {
    /// Create a submenu node
    pub fn submenu(key: impl Into<String>, label: impl Into<String>, children: Menu) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: NodeKind::Submenu(children),
        }
    }

    /// Create an action node
    pub fn action(key: impl Into<String>, label: impl Into<String>, action: Action) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: NodeKind::Action(action),
        }
    }
}

/// An ordered collection of sibling nodes.
///
/// Declaration order in the menu file is the display order; positional
/// addressing (`"1"`, `"2"`, ...) follows the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    entries: Vec<MenuNode>,
}

impl Menu {
    /// Create a menu from an ordered list of nodes
    pub fn new(entries: Vec<MenuNode>) -> Self {
        Self { entries }
    }

    /// Sibling nodes in display order
    pub fn entries(&self) -> &[MenuNode] {
        &self.entries
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one keystroke against this menu.
    ///
    /// Resolution order: exact case-insensitive match against a sibling
    /// key, then - if the input parses as a positive integer - the
    /// 1-based ordinal position in display order. Pure read-only lookup.
    pub fn resolve(&self, input: &str) -> Option<&MenuNode> {
        if let Some(node) = self
            .entries
            .iter()
            .find(|node| node.key.eq_ignore_ascii_case(input))
        {
            return Some(node);
        }
        if let Ok(position) = input.parse::<usize>() {
            if position >= 1 {
                return self.entries.get(position - 1);
            }
        }
        None
    }

    /// Collect size statistics for the whole tree below this menu
    pub fn stats(&self) -> MenuStats {
        let mut stats = MenuStats::default();
        collect_stats(self, 1, &mut stats);
        stats
    }
}

/// Size statistics for a menu tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuStats {
    /// Total submenu nodes
    pub submenus: usize,
    /// Total action nodes
    pub actions: usize,
    /// Deepest nesting level (1 = flat root menu)
    pub max_depth: usize,
}

fn collect_stats(menu: &Menu, depth: usize, stats: &mut MenuStats) {
    if !menu.is_empty() {
        stats.max_depth = stats.max_depth.max(depth);
    }
    for node in menu.entries() {
        match &node.kind {
            NodeKind::Submenu(children) => {
                stats.submenus += 1;
                collect_stats(children, depth + 1, stats);
            }
            NodeKind::Action(_) => stats.actions += 1,
        }
    }
}

/// Render the menu tree as box-drawing art for `keynav tree`
pub fn render_tree(menu: &Menu, title: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    render_level(menu, "", &mut out);
    out
}

fn render_level(menu: &Menu, prefix: &str, out: &mut String) {
    let last = menu.len().saturating_sub(1);
    for (idx, node) in menu.entries().iter().enumerate() {
        let connector = if idx == last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        match &node.kind {
            NodeKind::Submenu(children) => {
                out.push_str(&format!("{} {}\n", node.key, node.label));
                let child_prefix = if idx == last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                render_level(children, &child_prefix, out);
            }
            NodeKind::Action(action) => {
                out.push_str(&format!("{} {} -> {}\n", node.key, node.label, action));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_menu() -> Menu {
        Menu::new(vec![
            MenuNode::submenu(
                "d",
                "Dev",
                Menu::new(vec![MenuNode::action(
                    "1",
                    "Scratch",
                    Action::OpenEditor {
                        path: PathBuf::from("/tmp"),
                    },
                )]),
            ),
            MenuNode::action(
                "g",
                "GitHub",
                Action::OpenUrl {
                    url: "https://github.com".to_string(),
                },
            ),
            MenuNode::action(
                "s",
                "Slack",
                Action::OpenApp {
                    app: "Slack".to_string(),
                },
            ),
        ])
    }

    #[test]
    fn resolve_matches_exact_key() {
        let menu = sample_menu();
        let node = menu.resolve("g").expect("key should resolve");
        assert_eq!(node.label, "GitHub");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let menu = sample_menu();
        let lower = menu.resolve("d").expect("lowercase should resolve");
        let upper = menu.resolve("D").expect("uppercase should resolve");
        assert_eq!(lower, upper);
    }

    #[test]
    fn resolve_falls_back_to_ordinal_position() {
        let menu = sample_menu();
        let second = menu.resolve("2").expect("position should resolve");
        assert_eq!(second.label, "GitHub");
    }

    #[test]
    fn resolve_prefers_key_over_position() {
        // A menu whose keys are digits in shuffled order: the key match
        // must win over the positional fallback.
        let menu = Menu::new(vec![
            MenuNode::action(
                "2",
                "First",
                Action::OpenApp {
                    app: "a".to_string(),
                },
            ),
            MenuNode::action(
                "1",
                "Second",
                Action::OpenApp {
                    app: "b".to_string(),
                },
            ),
        ]);
        assert_eq!(menu.resolve("2").unwrap().label, "First");
        assert_eq!(menu.resolve("1").unwrap().label, "Second");
    }

    #[test]
    fn resolve_rejects_unknown_key() {
        let menu = sample_menu();
        assert!(menu.resolve("z").is_none());
        assert!(menu.resolve("0").is_none());
        assert!(menu.resolve("4").is_none());
    }

    #[test]
    fn stats_counts_nodes_and_depth() {
        let stats = sample_menu().stats();
        assert_eq!(stats.submenus, 1);
        assert_eq!(stats.actions, 3);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn render_tree_shows_every_label() {
        let rendered = render_tree(&sample_menu(), "KeyNav");
        assert!(rendered.starts_with("KeyNav\n"));
        for label in ["Dev", "Scratch", "GitHub", "Slack"] {
            assert!(rendered.contains(label), "missing {label}: {rendered}");
        }
        assert!(rendered.contains("└── s Slack -> launch Slack"));
    }

    #[test]
    fn action_display_is_compact() {
        let action = Action::OpenEditor {
            path: PathBuf::from("/tmp"),
        };
        assert_eq!(action.to_string(), "edit /tmp");
    }

    /// Menu whose keys are their own 1-based positions
    fn numeric_menu_strategy() -> impl Strategy<Value = Menu> {
        (1usize..=9).prop_map(|count| {
            Menu::new(
                (1..=count)
                    .map(|i| {
                        MenuNode::action(
                            i.to_string(),
                            format!("Item {i}"),
                            Action::OpenUrl {
                                url: format!("https://example.com/{i}"),
                            },
                        )
                    })
                    .collect(),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Dual addressing: when keys are numeric and match their display
        /// position, key lookup and ordinal lookup agree on every child.
        #[test]
        fn prop_key_and_position_resolve_same_node(menu in numeric_menu_strategy()) {
            for (idx, node) in menu.entries().iter().enumerate() {
                let by_key = menu.resolve(&node.key);
                let by_position = menu.resolve(&(idx + 1).to_string());
                prop_assert_eq!(by_key, by_position);
                prop_assert_eq!(by_key, Some(node));
            }
        }
    }
}
