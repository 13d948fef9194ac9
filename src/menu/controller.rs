//! Open/closed state for every registered menu

use std::collections::HashMap;

use super::{MenuId, MenuSpec};
use crate::error::{Result, ShellError};
use crate::geometry::{Point, Rect};

/// State for a single menu
///
/// The content region only exists while the menu is open, so "open" is
/// derived from it rather than stored next to it.
#[derive(Debug, Clone)]
struct MenuEntry {
    trigger_region: Rect,
    /// Where the overlay will be placed when it opens
    content_bounds: Rect,
    content_region: Option<Rect>,
}

impl MenuEntry {
    fn from_spec(spec: &MenuSpec) -> Self {
        Self {
            trigger_region: spec.trigger,
            content_bounds: spec.content,
            content_region: None,
        }
    }

    fn is_open(&self) -> bool {
        self.content_region.is_some()
    }

    fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.content_region = Some(self.content_bounds);
        true
    }

    fn close(&mut self) -> bool {
        self.content_region.take().is_some()
    }

    fn contains(&self, point: Point) -> bool {
        self.trigger_region.contains_point(point)
            || self
                .content_region
                .is_some_and(|region| region.contains_point(point))
    }
}

/// Owns open/closed state for an arbitrary set of independent menus
///
/// Every operation on an id that was never registered is a no-op that
/// returns `ShellError::UnknownMenu`.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    menus: HashMap<MenuId, MenuEntry>,
    /// Registration order, used for deterministic iteration
    order: Vec<MenuId>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a controller with every menu registered and closed
    pub fn with_menus(specs: &[MenuSpec]) -> Result<Self> {
        let mut controller = Self::new();
        for spec in specs {
            controller.register(spec.clone())?;
        }
        Ok(controller)
    }

    /// Register a menu (closed). A trigger id may only be mounted once.
    pub fn register(&mut self, spec: MenuSpec) -> Result<()> {
        if self.menus.contains_key(&spec.id) {
            return Err(ShellError::DuplicateMenu(spec.id));
        }
        self.menus.insert(spec.id.clone(), MenuEntry::from_spec(&spec));
        self.order.push(spec.id);
        Ok(())
    }

    /// Remove a menu, returning whether it was open at the time
    pub fn unregister(&mut self, id: &MenuId) -> Result<bool> {
        let entry = self
            .menus
            .remove(id)
            .ok_or_else(|| ShellError::UnknownMenu(id.clone()))?;
        self.order.retain(|other| other != id);
        Ok(entry.is_open())
    }

    /// Flip the open state of a menu and return the new state
    pub fn toggle(&mut self, id: &MenuId) -> Result<bool> {
        let entry = self.entry_mut(id)?;
        if entry.is_open() {
            entry.close();
            Ok(false)
        } else {
            entry.open();
            Ok(true)
        }
    }

    /// Open a menu. Returns whether the state changed.
    pub fn open(&mut self, id: &MenuId) -> Result<bool> {
        Ok(self.entry_mut(id)?.open())
    }

    /// Close a menu. Returns whether the state changed.
    pub fn close(&mut self, id: &MenuId) -> Result<bool> {
        Ok(self.entry_mut(id)?.close())
    }

    pub fn is_open(&self, id: &MenuId) -> Result<bool> {
        Ok(self.entry(id)?.is_open())
    }

    /// Replace the geometry of a menu after the host re-laid out the header.
    ///
    /// An open menu picks up the new content region immediately.
    pub fn set_regions(&mut self, id: &MenuId, trigger: Rect, content: Rect) -> Result<()> {
        let entry = self.entry_mut(id)?;
        entry.trigger_region = trigger;
        entry.content_bounds = content;
        if entry.is_open() {
            entry.content_region = Some(content);
        }
        Ok(())
    }

    pub fn trigger_region(&self, id: &MenuId) -> Result<Rect> {
        Ok(self.entry(id)?.trigger_region)
    }

    /// The overlay region; `None` while the menu is closed
    pub fn content_region(&self, id: &MenuId) -> Result<Option<Rect>> {
        Ok(self.entry(id)?.content_region)
    }

    /// Whether a point falls in the union of the trigger and content regions
    pub fn region_contains(&self, id: &MenuId, point: Point) -> Result<bool> {
        Ok(self.entry(id)?.contains(point))
    }

    /// Ids of all open menus, in registration order
    pub fn open_menus(&self) -> Vec<MenuId> {
        self.order
            .iter()
            .filter(|id| self.menus.get(*id).is_some_and(MenuEntry::is_open))
            .cloned()
            .collect()
    }

    pub fn any_open(&self) -> bool {
        self.menus.values().any(MenuEntry::is_open)
    }

    /// Close every menu, returning the ids that were open
    pub fn close_all(&mut self) -> Vec<MenuId> {
        let open = self.open_menus();
        for id in &open {
            if let Some(entry) = self.menus.get_mut(id) {
                entry.close();
            }
        }
        open
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &MenuId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entry(&self, id: &MenuId) -> Result<&MenuEntry> {
        self.menus
            .get(id)
            .ok_or_else(|| ShellError::UnknownMenu(id.clone()))
    }

    fn entry_mut(&mut self, id: &MenuId) -> Result<&mut MenuEntry> {
        self.menus
            .get_mut(id)
            .ok_or_else(|| ShellError::UnknownMenu(id.clone()))
    }
}
