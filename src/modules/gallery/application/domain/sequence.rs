/// An item with its stored position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    pub order_index: i32,
    pub item: T,
}

/// Index assignment happens here and nowhere else: consecutive positions
/// from a start value, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<Sequenced<T>>,
}

impl<T> Sequence<T> {
    /// `start` is clamped to 1; indices are 1-based. `None` when a position
    /// would pass `i32::MAX`.
    pub fn starting_at(start: i32, items: impl IntoIterator<Item = T>) -> Option<Self> {
        let mut next = Some(start.max(1));
        let mut sequenced = Vec::new();
        for item in items {
            let order_index = next?;
            next = order_index.checked_add(1);
            sequenced.push(Sequenced { order_index, item });
        }
        Some(Self { items: sequenced })
    }

    pub fn from_one(items: impl IntoIterator<Item = T>) -> Option<Self> {
        Self::starting_at(1, items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequenced<T>> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = Sequenced<T>;
    type IntoIter = std::vec::IntoIter<Sequenced<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
