use crate::{DomainError, EventCatalog, EventRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Closed,
    Open(usize),
}

/// What an operation did to the navigator. `NoOp` covers boundary moves and
/// repeated closes, which are allowed and leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened(usize),
    Moved { from: usize, to: usize },
    Closed { from: usize },
    NoOp,
}

impl Transition {
    pub fn changed(self) -> bool {
        !matches!(self, Self::NoOp)
    }
}

/// Tracks which event, if any, is open in the detail view.
///
/// The catalog length is captured at construction; the catalog never changes
/// size, so every index the navigator holds stays valid for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    len: usize,
    state: NavigatorState,
}

impl GalleryNavigator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: NavigatorState::Closed,
        }
    }

    pub fn for_catalog(catalog: &EventCatalog) -> Self {
        Self::new(catalog.len())
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            NavigatorState::Open(index) => Some(index),
            NavigatorState::Closed => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open(&mut self, index: usize) -> Result<Transition, DomainError> {
        if index >= self.len {
            return Err(DomainError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let transition = match self.state {
            NavigatorState::Closed => Transition::Opened(index),
            NavigatorState::Open(current) if current == index => Transition::NoOp,
            NavigatorState::Open(current) => Transition::Moved {
                from: current,
                to: index,
            },
        };
        self.state = NavigatorState::Open(index);
        Ok(transition)
    }

    pub fn next(&mut self) -> Transition {
        match self.state {
            NavigatorState::Open(current) if current + 1 < self.len => {
                self.state = NavigatorState::Open(current + 1);
                Transition::Moved {
                    from: current,
                    to: current + 1,
                }
            }
            _ => Transition::NoOp,
        }
    }

    pub fn previous(&mut self) -> Transition {
        match self.state {
            NavigatorState::Open(current) if current > 0 => {
                self.state = NavigatorState::Open(current - 1);
                Transition::Moved {
                    from: current,
                    to: current - 1,
                }
            }
            _ => Transition::NoOp,
        }
    }

    pub fn close(&mut self) -> Transition {
        match std::mem::take(&mut self.state) {
            NavigatorState::Open(from) => Transition::Closed { from },
            NavigatorState::Closed => Transition::NoOp,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.state, NavigatorState::Open(current) if current > 0)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.state, NavigatorState::Open(current) if current + 1 < self.len)
    }

    /// Everything the detail surface needs to draw the open event, or `None`
    /// while the gallery is closed.
    pub fn detail<'a>(&self, catalog: &'a EventCatalog) -> Option<DetailView<'a>> {
        let index = self.selected()?;
        let record = catalog.get(index).ok()?;
        Some(DetailView {
            record,
            index,
            total: catalog.len(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub record: &'a EventRecord,
    pub index: usize,
    pub total: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl DetailView<'_> {
    pub fn counter_label(&self) -> String {
        format!("Event {} of {}", self.index + 1, self.total)
    }
}
