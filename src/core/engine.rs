//! Navigation state machine
//!
//! The engine owns the whole mutable navigation state: the menu level
//! currently shown, the breadcrumb label, and the stack of ancestor
//! frames. It interprets one keystroke at a time into a [`Step`] and
//! never performs I/O itself - dispatching actions, reloading the menu
//! file, and terminating the process are carried out by the caller.
//!
//! Control keys are matched case-sensitively before menu resolution:
//! `Q` quits from anywhere, `b` pops exactly one frame, `q` flushes the
//! whole stack back to the root (and quits when already there), `R`
//! requests a reload. `b` and `q` are deliberately asymmetric: `b` is a
//! strict pop, `q` always gets you home in one keystroke.

use crate::config::defaults::BREADCRUMB_SEPARATOR;
use crate::core::menu::{Action, Menu, NodeKind};

/// One saved ancestor level: the menu and breadcrumb that were current
/// before descending into a submenu. Value-semantic snapshot, no back
/// pointers into the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NavFrame {
    /// Menu that was being displayed at this level
    pub menu: Menu,
    /// Breadcrumb accumulated up to this level
    pub breadcrumb: String,
}

/// Outcome of feeding one keystroke to the engine.
///
/// The engine has already updated its own state when a `Step` is
/// returned; the caller only performs the named side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Descended into a submenu
    Entered,
    /// Popped one frame back to the parent menu
    Back,
    /// `b` pressed at the root: nothing to pop, show a notice
    AtRoot,
    /// `q` pressed below the root: state flushed back to the root menu
    Home,
    /// Keystroke resolved to a leaf; caller dispatches the action.
    /// The engine is already back at the root state.
    Dispatch(Action),
    /// `R` pressed: caller reloads the menu file and calls [`Engine::reload`]
    Reload,
    /// Terminate the process
    Quit,
    /// Keystroke matched neither a control key nor a sibling
    Invalid(String),
}

/// The navigation engine
#[derive(Debug, Clone)]
pub struct Engine {
    root: Menu,
    current: Menu,
    breadcrumb: String,
    stack: Vec<NavFrame>,
}

impl Engine {
    /// Create an engine positioned at the root of `root`
    pub fn new(root: Menu) -> Self {
        Self {
            current: root.clone(),
            root,
            breadcrumb: String::new(),
            stack: Vec::new(),
        }
    }

    /// Menu level currently displayed
    pub fn current_menu(&self) -> &Menu {
        &self.current
    }

    /// Breadcrumb label for the current level (empty at the root)
    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    /// Nesting depth below the root (0 = at root)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the engine is at the top-level menu
    pub fn at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Feed one keystroke and advance the state machine
    pub fn press(&mut self, key: char) -> Step {
        match key {
            'Q' => Step::Quit,
            'b' => match self.stack.pop() {
                Some(frame) => {
                    self.current = frame.menu;
                    self.breadcrumb = frame.breadcrumb;
                    Step::Back
                }
                None => Step::AtRoot,
            },
            'q' => {
                if self.stack.is_empty() {
                    Step::Quit
                } else {
                    self.reset_to_root();
                    Step::Home
                }
            }
            'R' => Step::Reload,
            _ => self.select(key),
        }
    }

    /// Replace the whole tree after a menu file reload; discards all
    /// navigation history and rebuilds the root state
    pub fn reload(&mut self, root: Menu) {
        self.root = root;
        self.reset_to_root();
    }

    fn select(&mut self, key: char) -> Step {
        let input = key.to_string();
        let resolved = self
            .current
            .resolve(&input)
            .map(|node| (node.label.clone(), node.kind.clone()));
        match resolved {
            Some((label, NodeKind::Submenu(children))) => {
                let crumb = if self.breadcrumb.is_empty() {
                    label
                } else {
                    format!("{}{BREADCRUMB_SEPARATOR}{label}", self.breadcrumb)
                };
                let frame = NavFrame {
                    menu: std::mem::replace(&mut self.current, children),
                    breadcrumb: std::mem::replace(&mut self.breadcrumb, crumb),
                };
                self.stack.push(frame);
                Step::Entered
            }
            Some((_, NodeKind::Action(action))) => {
                // Every action returns the user to the top-level menu,
                // not to the action's parent submenu.
                self.reset_to_root();
                Step::Dispatch(action)
            }
            None => Step::Invalid(input),
        }
    }

    fn reset_to_root(&mut self) {
        self.current = self.root.clone();
        self.breadcrumb.clear();
        self.stack.clear();
    }
}
