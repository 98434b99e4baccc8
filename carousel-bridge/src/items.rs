use std::fmt;

type ItemBuilder<'a, T> = dyn Fn(usize) -> T + 'a;

/// Items handed to the engine, either all at once or on request.
pub enum ItemSource<'a, T> {
    /// Every child rendered upfront, in order.
    Eager(Vec<T>),
    /// Children rendered when the engine asks for them.
    Lazy(LazyItems<'a, T>),
}

/// Count plus a builder the engine may call any number of times per index.
pub struct LazyItems<'a, T> {
    count: usize,
    builder: Box<ItemBuilder<'a, T>>,
}

impl<'a, T> LazyItems<'a, T> {
    pub fn new(count: usize, builder: impl Fn(usize) -> T + 'a) -> Self {
        Self {
            count,
            builder: Box::new(builder),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Render the item at `index`, or `None` past the end.
    pub fn build(&self, index: usize) -> Option<T> {
        (index < self.count).then(|| (self.builder)(index))
    }
}

impl<'a, T> ItemSource<'a, T> {
    /// Wrap `children`, rendering each through `render`.
    ///
    /// With `build_on_demand` nothing is rendered here; otherwise every
    /// child is rendered before this returns.
    pub fn from_children<C>(
        children: &'a [C],
        build_on_demand: bool,
        render: impl Fn(usize, &'a C) -> T + 'a,
    ) -> Self {
        if build_on_demand {
            ItemSource::Lazy(LazyItems::new(children.len(), move |index| {
                render(index, &children[index])
            }))
        } else {
            ItemSource::Eager(
                children
                    .iter()
                    .enumerate()
                    .map(|(index, child)| render(index, child))
                    .collect(),
            )
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ItemSource::Eager(items) => items.len(),
            ItemSource::Lazy(lazy) => lazy.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ItemSource::Lazy(_))
    }
}

impl<T> fmt::Debug for ItemSource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSource::Eager(items) => {
                f.debug_tuple("Eager").field(&items.len()).finish()
            },
            ItemSource::Lazy(lazy) => {
                f.debug_tuple("Lazy").field(&lazy.len()).finish()
            },
        }
    }
}
