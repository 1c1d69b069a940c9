/// Highlighted position in the flattened list of visible commands.
///
/// Movement clamps at both ends rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCursor {
    index: usize,
}

impl SelectionCursor {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn move_down(&mut self, len: usize) {
        self.index = (self.index + 1).min(len.saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn set_from_hover(&mut self, index: usize) {
        self.index = index;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[must_use]
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
