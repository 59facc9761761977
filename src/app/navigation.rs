/// Wrap-around cursor over a list: the navbar menu and the Tab focus ring
/// both move through their entries with it.
pub trait Navigable {
    fn item_count(&self) -> usize;

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);

    /// Moves to the next item, wrapping to the start
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_selected_index((self.selected_index() % count + 1) % count);
        }
    }

    /// Moves to the previous item, wrapping to the end
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_selected_index((self.selected_index() % count + count - 1) % count);
        }
    }

    fn select_first(&mut self) {
        self.set_selected_index(0);
    }

    fn select_last(&mut self) {
        self.set_selected_index(self.item_count().saturating_sub(1));
    }
}
