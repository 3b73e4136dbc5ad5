use std::marker::PhantomData;

/// Typed index into a `Store<T>`. The phantom keeps a mesh handle from being
/// used to look up a texture; `fn() -> T` keeps the handle Send + Sync even
/// for GL resources that are neither.
pub struct Handle<T>(usize, PhantomData<fn() -> T>);

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

/// Append-only pool of GPU resources. Handles stay valid for the life of the
/// store; nothing is ever removed.
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) -> Handle<T> {
        let handle = Handle(self.items.len(), PhantomData);
        self.items.push(item);
        handle
    }

    pub fn get(&self, handle: Handle<T>) -> &T {
        &self.items[handle.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_resolve_to_their_own_items() {
        let mut store = Store::new();
        let first = store.add("ball");
        let second = store.add("moon");
        assert_eq!(*store.get(first), "ball");
        assert_eq!(*store.get(second), "moon");
    }
}
