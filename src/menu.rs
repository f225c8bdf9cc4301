//! Letter and subject menus as plain data.
//!
//! Every [`MenuItem`] carries the [`Action`] it triggers and the fragment it
//! points at, fixed when the menu is built. Wiring an item to an event handler
//! only needs the item itself; nothing refers back to a shared loop index.

use serde::{Deserialize, Serialize};

/// What activating a menu item does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    ShowLetter(char),
    /// Carries the hyphenated subject key.
    ShowSubject(String),
    Reset,
}

/// How a "view all" item updates the fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetFragment {
    /// Point at `#all`.
    #[default]
    Marker,
    /// Clear the fragment, i.e. go back to the bare page address.
    Clear,
}

impl ResetFragment {
    pub const MARKER: &'static str = "all";

    pub fn fragment(self) -> Option<&'static str> {
        match self {
            ResetFragment::Marker => Some(Self::MARKER),
            ResetFragment::Clear => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// Fragment written on activation, without `#`. `None` clears it.
    pub fragment: Option<String>,
    pub action: Action,
    /// Pre-selected option (subject menu only).
    pub selected: bool,
}

impl MenuItem {
    pub fn href(&self) -> String {
        format!("#{}", self.fragment.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    /// `<ul>` of `<li><a>` links.
    List,
    /// `<select>` of `<option>`s.
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub kind: MenuKind,
    pub class: Option<String>,
    pub items: Vec<MenuItem>,
}

pub const LETTER_RESET_LABEL: &str = "[view all]";
pub const SUBJECT_RESET_LABEL: &str = "--view all --";

impl Menu {
    /// One link per letter in the given order, then a trailing "view all".
    pub fn letters(
        letters: impl IntoIterator<Item = char>,
        class: Option<&str>,
        reset: ResetFragment,
    ) -> Self {
        let mut items: Vec<MenuItem> = letters
            .into_iter()
            .map(|letter| MenuItem {
                label: letter.to_uppercase().collect(),
                fragment: Some(letter.to_string()),
                action: Action::ShowLetter(letter),
                selected: false,
            })
            .collect();
        items.push(reset_item(LETTER_RESET_LABEL, reset, false));
        Self {
            kind: MenuKind::List,
            class: class.map(str::to_string),
            items,
        }
    }

    /// A leading, pre-selected "view all", then one option per subject key.
    pub fn subjects<'a>(
        subjects: impl IntoIterator<Item = &'a str>,
        class: Option<&str>,
        reset: ResetFragment,
    ) -> Self {
        let mut items = vec![reset_item(SUBJECT_RESET_LABEL, reset, true)];
        items.extend(subjects.into_iter().map(|key| MenuItem {
            label: crate::keys::subject_label(key),
            fragment: Some(key.to_string()),
            action: Action::ShowSubject(key.to_string()),
            selected: false,
        }));
        Self {
            kind: MenuKind::Select,
            class: class.map(str::to_string),
            items,
        }
    }
}

fn reset_item(label: &str, reset: ResetFragment, selected: bool) -> MenuItem {
    MenuItem {
        label: label.to_string(),
        fragment: reset.fragment().map(str::to_string),
        action: Action::Reset,
        selected,
    }
}

/// Mount points for generated menus.
pub trait MenuHost {
    /// Append `menu` under the first element matching `selector`. Returns
    /// `false` if there is no such element.
    fn mount(&mut self, selector: &str, menu: &Menu) -> bool;
}
