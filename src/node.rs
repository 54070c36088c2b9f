/// Arena slot of the sentinel. Allocated in `new` and never freed.
pub(crate) const SENTINEL: usize = 0;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn sentinel() -> Self {
        Node {
            value: None,
            next: None,
        }
    }

    pub(crate) fn new(value: T, next: Option<usize>) -> Self {
        Node {
            value: Some(value),
            next,
        }
    }

    /// Does this slot hold an element (not the sentinel, not freed)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
