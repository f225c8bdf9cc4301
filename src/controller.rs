//! The catalog filter controller.
//!
//! [`CatalogFilter`] indexes the catalog rows once at construction and then
//! moves row nodes in and out of its container to show one letter, one
//! subject or everything. Row order in the container always follows document
//! order.

use tracing::{debug, info};

use crate::config::FilterOptions;
use crate::error::{FilterError, Result};
use crate::fragment;
use crate::keys::{subject_phrase, title_case};
use crate::menu::{Action, Menu, MenuHost, MenuItem};
use crate::model::{CatalogIndex, Field, RowRecord, SourceRow};
use crate::render::{CaptionTarget, Navigator, NoCaption, RenderTarget};

pub const ALL: &str = "all";
pub const CAPTION_ALL: &str = "Showing all databases";

pub struct CatalogFilter<T: RenderTarget, C = NoCaption> {
    index: CatalogIndex<T::Node>,
    container: T,
    caption: Option<C>,
    options: FilterOptions,
}

impl<T: RenderTarget, C: CaptionTarget> CatalogFilter<T, C> {
    /// Index `rows` (in document order) and take over `container`.
    ///
    /// Fails with [`FilterError::Configuration`] when there is no container.
    /// Zero rows is fine and yields an empty index.
    pub fn new(
        rows: impl IntoIterator<Item = SourceRow<T::Node>>,
        container: Option<T>,
        caption: Option<C>,
        options: FilterOptions,
    ) -> Result<Self> {
        let container = container.ok_or_else(|| FilterError::Configuration {
            selector: options.container_selector.clone(),
            reason: "nothing matches".to_string(),
        })?;
        let index = CatalogIndex::build(rows);
        info!(
            records = index.records().len(),
            letters = index.letters().count(),
            subjects = index.subjects().len(),
            "indexed catalog"
        );
        Ok(Self {
            index,
            container,
            caption,
            options,
        })
    }

    pub fn index(&self) -> &CatalogIndex<T::Node> {
        &self.index
    }

    pub fn records(&self) -> &[RowRecord<T::Node>] {
        self.index.records()
    }

    pub fn letters(&self) -> Vec<char> {
        self.index.letters().collect()
    }

    pub fn subjects(&self) -> &[String] {
        self.index.subjects()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn container(&self) -> &T {
        &self.container
    }

    pub fn caption(&self) -> Option<&C> {
        self.caption.as_ref()
    }

    /// Replace the caption markup. Without a caption this does nothing.
    pub fn add_caption(&mut self, html: &str) {
        match self.caption.as_mut() {
            Some(caption) => caption.replace_markup(html),
            None => debug!("no caption element, skipping caption update"),
        }
    }

    // ── menus ──────────────────────────────────────────────────────────────

    pub fn letter_menu(&self, class: Option<&str>) -> Menu {
        let class = class.or(self.options.letter_menu_class.as_deref());
        Menu::letters(self.index.letters(), class, self.options.reset_fragment)
    }

    pub fn subject_menu(&self, class: Option<&str>) -> Menu {
        let class = class.or(self.options.subject_menu_class.as_deref());
        Menu::subjects(
            self.index.subjects().iter().map(String::as_str),
            class,
            self.options.reset_fragment,
        )
    }

    /// Build the letter menu and append it under `target` (default: the
    /// configured menu selector). Calling this twice appends two menus.
    pub fn build_letter_menu(
        &self,
        host: &mut impl MenuHost,
        target: Option<&str>,
        class: Option<&str>,
    ) -> Menu {
        let menu = self.letter_menu(class);
        self.mount(host, target, &menu);
        menu
    }

    /// Build the subject dropdown and append it under `target`.
    pub fn build_subject_menu(
        &self,
        host: &mut impl MenuHost,
        target: Option<&str>,
        class: Option<&str>,
    ) -> Menu {
        let menu = self.subject_menu(class);
        self.mount(host, target, &menu);
        menu
    }

    fn mount(&self, host: &mut impl MenuHost, target: Option<&str>, menu: &Menu) {
        let selector = target.unwrap_or(&self.options.menu_selector);
        if !host.mount(selector, menu) {
            debug!(selector, "no menu mount point, skipping menu");
        }
    }

    // ── filtering ──────────────────────────────────────────────────────────

    pub fn show_letter(&mut self, letter: &str) {
        let caption = format!(
            "Showing databases that begin with <strong>{}</strong>",
            html_escape::encode_text(&letter.to_uppercase())
        );
        self.add_caption(&caption);
        self.show(Field::Letter, letter);
    }

    /// Show one subject given its hyphenated key.
    pub fn show_subject(&mut self, subject: &str) {
        let phrase = subject_phrase(subject);
        let caption = format!(
            "Showing databases that cover <strong>{}</strong>",
            html_escape::encode_text(&title_case(&phrase))
        );
        self.add_caption(&caption);
        self.show(Field::Subject, &phrase);
    }

    /// Re-attach exactly the records matching `field = value`, in document
    /// order. `"all"` resets instead.
    pub fn show(&mut self, field: Field, value: &str) {
        if value == ALL {
            self.reset();
            return;
        }
        let value = field.normalize(value);
        self.container.clear();
        let mut shown = 0usize;
        for record in self.index.matching(field, &value) {
            self.container.append(&record.element);
            shown += 1;
        }
        debug!(?field, value = %value, shown, "filtered catalog");
    }

    /// [`show`](Self::show) with the field given by name. An unknown field
    /// matches nothing: the container is left empty.
    pub fn show_named(&mut self, field: &str, value: &str) {
        if value == ALL {
            self.reset();
            return;
        }
        match Field::parse(field) {
            Some(field) => self.show(field, value),
            None => {
                debug!(field, "unknown filter field, showing no rows");
                self.container.clear();
            }
        }
    }

    /// Show every record in document order.
    pub fn reset(&mut self) {
        self.container.clear();
        self.add_caption(CAPTION_ALL);
        for record in self.index.records() {
            self.container.append(&record.element);
        }
    }

    // ── actions & navigation ───────────────────────────────────────────────

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::ShowLetter(letter) => self.show_letter(&letter.to_string()),
            Action::ShowSubject(key) => self.show_subject(key),
            Action::Reset => self.reset(),
        }
    }

    /// Handle a menu item activation: update the fragment, then run the
    /// item's action.
    pub fn activate(&mut self, item: &MenuItem, navigator: &mut impl Navigator) {
        navigator.set_fragment(item.fragment.as_deref());
        self.apply(&item.action);
    }

    /// Apply whatever `fragment` (e.g. `#b`, `#/social-sciences`) points at.
    pub fn navigate(&mut self, fragment: &str) {
        self.apply(&fragment::route(fragment));
    }
}
