//! Dropdown Menus
//!
//! A menu family is a set of sibling menus of which at most one is open.
//! Opening one closes the others; a document click outside the family's
//! container closes whichever is open.

use leptos::prelude::*;

use crate::dom::{self, DocumentEvents};

#[derive(Clone, Copy)]
pub struct MenuFamily<K: Send + Sync + 'static> {
    open: RwSignal<Option<K>>,
}

impl<K> MenuFamily<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    /// New family closed by clicks outside `container` (a CSS selector
    /// matching the trigger and menu wrapper).
    pub fn new(container: &'static str) -> Self {
        let family = Self { open: RwSignal::new(None) };
        DocumentEvents::on_click(move |ev| {
            if !dom::target_within(&ev, container) {
                family.close();
            }
        });
        family
    }

    pub fn toggle(&self, key: K) {
        self.open.update(|open| {
            *open = if *open == Some(key) { None } else { Some(key) };
        });
    }

    pub fn close(&self) {
        if self.open.get_untracked().is_some() {
            self.open.set(None);
        }
    }

    pub fn is_open(&self, key: K) -> bool {
        self.open.get() == Some(key)
    }

    /// Class for a menu element: `"{base} show"` while open
    pub fn class(&self, base: &'static str, key: K) -> String {
        if self.is_open(key) {
            format!("{} show", base)
        } else {
            base.to_string()
        }
    }
}
