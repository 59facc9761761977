use crate::app::{App, AppMode, Navigable};
use crate::content::NAV_ITEMS;

/// Row of the collapsed navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenuEntry {
    pub label: &'static str,
    pub anchor: &'static str,
    pub highlighted: bool,
}

/// Navigation items followed by the call to action
#[must_use]
pub fn nav_menu_entries() -> Vec<NavMenuEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| NavMenuEntry {
            label: item.label,
            anchor: item.id,
            highlighted: false,
        })
        .chain(std::iter::once(NavMenuEntry {
            label: "Join the Challenge",
            anchor: "get-involved",
            highlighted: true,
        }))
        .collect()
}

impl App {
    pub fn toggle_nav_menu(&mut self) {
        if self.mode == AppMode::NavMenu {
            self.close_nav_menu();
        } else {
            self.mode = AppMode::NavMenu;
            self.nav_menu_index = 0;
        }
    }

    pub fn close_nav_menu(&mut self) {
        self.mode = AppMode::Page;
    }

    /// Follows the highlighted menu entry and closes the menu
    pub fn select_nav_menu_entry(&mut self) {
        let entry = nav_menu_entries().get(self.nav_menu_index).copied();
        self.close_nav_menu();
        if let Some(entry) = entry {
            self.scroll_to_section(entry.anchor);
        }
    }
}

impl Navigable for App {
    fn item_count(&self) -> usize {
        nav_menu_entries().len()
    }

    fn selected_index(&self) -> usize {
        self.nav_menu_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.nav_menu_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scroll::SectionId;
    use crate::app::test_support::test_app;

    #[test]
    fn test_menu_lists_nav_items_and_cta() {
        let entries = nav_menu_entries();
        assert_eq!(entries.len(), NAV_ITEMS.len() + 1);
        assert_eq!(entries.last().map(|entry| entry.anchor), Some("get-involved"));
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut app = test_app();
        app.toggle_nav_menu();
        assert_eq!(app.mode, AppMode::NavMenu);
        app.toggle_nav_menu();
        assert_eq!(app.mode, AppMode::Page);
    }

    #[test]
    fn test_selecting_entry_scrolls_and_closes() {
        let mut app = test_app();
        app.toggle_nav_menu();
        app.next_item();
        app.next_item();
        app.select_nav_menu_entry();
        assert_eq!(app.mode, AppMode::Page);
        assert_eq!(app.location, "#learn");
        assert_eq!(app.active_section(), Some(SectionId::Learn));
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut app = test_app();
        app.toggle_nav_menu();
        app.previous_item();
        assert_eq!(app.nav_menu_index, NAV_ITEMS.len());
    }
}
