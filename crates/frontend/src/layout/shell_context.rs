//! Shell-wide UI state: drawer visibility and which sidebar groups are
//! expanded.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ShellContext {
    /// Whether the navigation drawer is open. Starts open.
    pub drawer_open: RwSignal<bool>,
    /// Labels of the expanded menu groups.
    pub expanded: RwSignal<Vec<String>>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self {
            drawer_open: RwSignal::new(true),
            expanded: RwSignal::new(Vec::new()),
        }
    }

    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    /// Expand a collapsed group or collapse an expanded one.
    pub fn toggle_group(&self, label: &str) {
        self.expanded.update(|groups| {
            if let Some(position) = groups.iter().position(|g| g == label) {
                groups.remove(position);
            } else {
                groups.push(label.to_string());
            }
        });
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_toggle_round_trips() {
        let shell = ShellContext::new();
        assert!(shell.drawer_open.get_untracked());
        shell.toggle_drawer();
        assert!(!shell.drawer_open.get_untracked());
        shell.toggle_drawer();
        assert!(shell.drawer_open.get_untracked());
    }

    #[test]
    fn group_toggle_round_trips() {
        let shell = ShellContext::new();
        shell.toggle_group("Manufacturing");
        assert_eq!(shell.expanded.get_untracked(), vec!["Manufacturing"]);
        shell.toggle_group("Manufacturing");
        assert!(shell.expanded.get_untracked().is_empty());
    }
}
