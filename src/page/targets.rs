//! Page-backed implementations of the controller's collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use super::{NodeId, Page};
use crate::config::FilterOptions;
use crate::controller::CatalogFilter;
use crate::error::{FilterError, Result};
use crate::menu::{Menu, MenuHost, MenuKind};
use crate::render::{CaptionTarget, RenderTarget};

/// A page shared between the controller's container and caption.
pub type SharedPage = Rc<RefCell<Page>>;

pub fn shared(page: Page) -> SharedPage {
    Rc::new(RefCell::new(page))
}

/// The element whose children are the visible rows.
#[derive(Debug, Clone)]
pub struct PageContainer {
    page: SharedPage,
    element: NodeId,
}

impl PageContainer {
    pub fn new(page: SharedPage, element: NodeId) -> Self {
        Self { page, element }
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Currently attached row elements, in order.
    pub fn rows(&self) -> Vec<NodeId> {
        self.page.borrow().element_children(self.element).collect()
    }
}

impl RenderTarget for PageContainer {
    type Node = NodeId;

    fn clear(&mut self) {
        self.page.borrow_mut().clear_children(self.element);
    }

    fn append(&mut self, node: &NodeId) {
        self.page.borrow_mut().append_child(self.element, *node);
    }
}

#[derive(Debug, Clone)]
pub struct PageCaption {
    page: SharedPage,
    element: NodeId,
}

impl PageCaption {
    pub fn new(page: SharedPage, element: NodeId) -> Self {
        Self { page, element }
    }

    pub fn markup(&self) -> String {
        self.page.borrow().inner_markup(self.element)
    }
}

impl CaptionTarget for PageCaption {
    /// Replaces the caption's children; the old ones are freed so repeated
    /// updates do not grow the page.
    fn replace_markup(&mut self, html: &str) {
        let mut page = self.page.borrow_mut();
        for old in page.children(self.element).to_vec() {
            page.remove(old);
        }
        let nodes = match page.parse_fragment(html) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(%err, "caption markup is not well-formed, inserting as text");
                vec![page.create_text(html)]
            }
        };
        for n in nodes {
            page.append_child(self.element, n);
        }
    }
}

impl MenuHost for Page {
    fn mount(&mut self, selector: &str, menu: &Menu) -> bool {
        let target = match self.select_first(selector) {
            Ok(Some(target)) => target,
            Ok(None) => return false,
            Err(err) => {
                warn!(%err, "cannot mount menu");
                return false;
            }
        };
        let node = self.build_menu(menu);
        self.append_child(target, node);
        true
    }
}

impl Page {
    /// Materialize `menu` as `ul/li/a` or `select/option` elements (detached).
    pub fn build_menu(&mut self, menu: &Menu) -> NodeId {
        let (list_tag, item_tag) = match menu.kind {
            MenuKind::List => ("ul", "li"),
            MenuKind::Select => ("select", "option"),
        };
        let list = self.create_element(list_tag);
        self.set_attribute(list, "class", menu.class.as_deref().unwrap_or(""));
        for item in &menu.items {
            let entry = self.create_element(item_tag);
            let label = self.create_text(&item.label);
            match menu.kind {
                MenuKind::List => {
                    let a = self.create_element("a");
                    self.set_attribute(a, "href", &item.href());
                    self.append_child(a, label);
                    self.append_child(entry, a);
                }
                MenuKind::Select => {
                    self.set_attribute(entry, "value", &item.href());
                    if item.selected {
                        self.set_attribute(entry, "selected", "selected");
                    }
                    self.append_child(entry, label);
                }
            }
            self.append_child(list, entry);
        }
        list
    }
}

impl CatalogFilter<PageContainer, PageCaption> {
    /// Index the rows of `page` and take over its container and caption as
    /// named by `options`.
    pub fn from_page(page: &SharedPage, options: FilterOptions) -> Result<Self> {
        let (rows, container, caption) = {
            let p = page.borrow();
            let rows = p.source_rows(&options)?;
            let container = p.select_first(&options.container_selector)?;
            // a row holding the container could never be moved into it
            if let Some(c) = container {
                if rows.iter().any(|r| p.is_ancestor_or_self(r.element, c)) {
                    return Err(FilterError::Configuration {
                        selector: options.container_selector.clone(),
                        reason: format!("rows matched by `{}` contain it", options.row_selector),
                    });
                }
            }
            (rows, container, p.select_first(&options.caption_selector)?)
        };
        CatalogFilter::new(
            rows,
            container.map(|id| PageContainer::new(Rc::clone(page), id)),
            caption.map(|id| PageCaption::new(Rc::clone(page), id)),
            options,
        )
    }
}
