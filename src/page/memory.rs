//! In-memory page model
//!
//! A small stand-in for the browser document: elements with class sets and
//! attributes, a ready state and one-shot content-loaded listeners. It lets
//! the initializer run on the host and records every mutation so callers can
//! check that a failed initialization left the page alone.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use super::{PageElement, PageHost, ReadySignal, ReadyState};
use super::{DEV_NOTICE_ID, ERROR_NOTICE_ID, HIDDEN_CLASS, JOIN_BUTTON_ID};
use crate::shared::JoinError;

#[derive(Debug, Default, Clone)]
struct ElementData {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Default)]
struct Document {
    ready_state: ReadyState,
    elements: BTreeMap<String, ElementData>,
    listeners: Vec<Box<dyn FnOnce()>>,
    mutations: usize,
}

/// Shared handle to an in-memory document
#[derive(Clone, Default)]
pub struct MemoryPage {
    doc: Rc<RefCell<Document>>,
}

/// Handle to one element of a [`MemoryPage`]
#[derive(Clone)]
pub struct MemoryElement {
    doc: Rc<RefCell<Document>>,
    id: String,
}

impl MemoryPage {
    /// Empty, fully loaded page
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the three expected regions, all hidden
    pub fn with_standard_elements() -> Self {
        let page = Self::new();
        for id in [JOIN_BUTTON_ID, DEV_NOTICE_ID, ERROR_NOTICE_ID] {
            page.insert_element(id, &[HIDDEN_CLASS]);
        }
        page
    }

    /// Add (or replace) an element with the given classes
    pub fn insert_element(&self, id: &str, classes: &[&str]) {
        let data = ElementData {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: BTreeMap::new(),
        };
        self.doc.borrow_mut().elements.insert(id.to_string(), data);
    }

    pub fn remove_element(&self, id: &str) {
        self.doc.borrow_mut().elements.remove(id);
    }

    pub fn set_ready_state(&self, state: ReadyState) {
        self.doc.borrow_mut().ready_state = state;
    }

    /// Move to `interactive` and run the pending listeners, each exactly once
    pub fn fire_content_loaded(&self) {
        let listeners = {
            let mut doc = self.doc.borrow_mut();
            doc.ready_state = ReadyState::Interactive;
            std::mem::take(&mut doc.listeners)
        };
        for listener in listeners {
            listener();
        }
    }

    pub fn pending_listeners(&self) -> usize {
        self.doc.borrow().listeners.len()
    }

    pub fn classes(&self, id: &str) -> Option<BTreeSet<String>> {
        self.doc.borrow().elements.get(id).map(|e| e.classes.clone())
    }

    pub fn is_hidden(&self, id: &str) -> Option<bool> {
        self.doc
            .borrow()
            .elements
            .get(id)
            .map(|e| e.classes.contains(HIDDEN_CLASS))
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.doc
            .borrow()
            .elements
            .get(id)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    /// Ids of elements not carrying the hidden class
    pub fn visible_ids(&self) -> Vec<String> {
        self.doc
            .borrow()
            .elements
            .iter()
            .filter(|(_, e)| !e.classes.contains(HIDDEN_CLASS))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Number of class or attribute writes so far
    pub fn mutation_count(&self) -> usize {
        self.doc.borrow().mutations
    }
}

impl fmt::Debug for MemoryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.doc.borrow();
        f.debug_struct("MemoryPage")
            .field("ready_state", &doc.ready_state)
            .field("elements", &doc.elements)
            .field("listeners", &doc.listeners.len())
            .field("mutations", &doc.mutations)
            .finish()
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement").field("id", &self.id).finish()
    }
}

impl MemoryElement {
    fn update<F>(&self, f: F) -> Result<(), JoinError>
    where
        F: FnOnce(&mut ElementData),
    {
        let mut doc = self.doc.borrow_mut();
        let element = doc
            .elements
            .get_mut(&self.id)
            .ok_or_else(|| JoinError::dom(format!("element '{}' was removed", self.id)))?;
        f(element);
        doc.mutations += 1;
        Ok(())
    }
}

impl PageElement for MemoryElement {
    fn remove_class(&self, class: &str) -> Result<(), JoinError> {
        self.update(|e| {
            e.classes.remove(class);
        })
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), JoinError> {
        self.update(|e| {
            e.attributes.insert(name.to_string(), value.to_string());
        })
    }
}

impl PageHost for MemoryPage {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.doc
            .borrow()
            .elements
            .contains_key(id)
            .then(|| MemoryElement {
                doc: self.doc.clone(),
                id: id.to_string(),
            })
    }
}

impl ReadySignal for MemoryPage {
    fn ready_state(&self) -> ReadyState {
        self.doc.borrow().ready_state
    }

    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), JoinError> {
        self.doc.borrow_mut().listeners.push(callback);
        Ok(())
    }
}
