//! Navigation - route stack and the coordinator tree
//!
//! Coordinators own their children directly and are addressed by
//! [`CoordinatorId`]; removal goes by id.

use std::fmt;

/// A screen on the navigation stack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    UserList,
    UserDetail { user_id: u64 },
}

/// Push/pop navigation over routes
pub trait Navigator {
    fn push(&mut self, route: Route);
    /// Pop the top route. The root is never popped.
    fn pop(&mut self) -> Option<Route>;
    fn current(&self) -> Route;
    fn depth(&self) -> usize;
}

/// Vec-backed [`Navigator`] rooted at [`Route::UserList`]
#[derive(Clone, Debug)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    pub fn new() -> Self {
        NavigationStack {
            routes: vec![Route::UserList],
        }
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for NavigationStack {
    fn push(&mut self, route: Route) {
        tracing::debug!(route = ?route, "Push");
        self.routes.push(route);
    }

    fn pop(&mut self) -> Option<Route> {
        if self.routes.len() <= 1 {
            return None;
        }
        let route = self.routes.pop();
        tracing::debug!(route = ?route, "Pop");
        route
    }

    fn current(&self) -> Route {
        self.routes.last().copied().unwrap_or(Route::UserList)
    }

    fn depth(&self) -> usize {
        self.routes.len()
    }
}

/// Opaque coordinator handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinatorId(u64);

impl fmt::Display for CoordinatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinator#{}", self.0)
    }
}

/// The flow a coordinator drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Application root
    Base,
    UserList,
    UserDetail { user_id: u64 },
}

#[derive(Clone, Debug)]
pub struct Coordinator {
    pub id: CoordinatorId,
    pub flow: Flow,
    children: Vec<Coordinator>,
}

impl Coordinator {
    fn new(id: CoordinatorId, flow: Flow) -> Self {
        Coordinator {
            id,
            flow,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Coordinator] {
        &self.children
    }

    fn find(&self, id: CoordinatorId) -> Option<&Coordinator> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn find_mut(&mut self, id: CoordinatorId) -> Option<&mut Coordinator> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Coordinator::count).sum::<usize>()
    }
}

/// Tree of coordinators rooted at a [`Flow::Base`] coordinator
#[derive(Clone, Debug)]
pub struct CoordinatorTree {
    root: Coordinator,
    next_id: u64,
}

impl CoordinatorTree {
    pub fn new() -> Self {
        CoordinatorTree {
            root: Coordinator::new(CoordinatorId(0), Flow::Base),
            next_id: 1,
        }
    }

    pub fn root_id(&self) -> CoordinatorId {
        self.root.id
    }

    /// Register `flow` under `parent`. `None` if the parent does not exist.
    pub fn add_child(&mut self, parent: CoordinatorId, flow: Flow) -> Option<CoordinatorId> {
        let id = CoordinatorId(self.next_id);
        let parent = self.root.find_mut(parent)?;
        parent.children.push(Coordinator::new(id, flow));
        self.next_id += 1;
        tracing::debug!(%id, parent = %parent.id, flow = ?flow, "Coordinator started");
        Some(id)
    }

    /// Remove `child` (and its subtree) from `parent`. Returns false when
    /// `child` is not a direct child of `parent`.
    pub fn child_did_finish(&mut self, parent: CoordinatorId, child: CoordinatorId) -> bool {
        let Some(parent) = self.root.find_mut(parent) else {
            return false;
        };
        let before = parent.children.len();
        parent.children.retain(|c| c.id != child);
        let removed = parent.children.len() != before;
        if removed {
            tracing::debug!(id = %child, "Coordinator finished");
        }
        removed
    }

    pub fn get(&self, id: CoordinatorId) -> Option<&Coordinator> {
        self.root.find(id)
    }

    pub fn children(&self, id: CoordinatorId) -> &[Coordinator] {
        self.get(id).map(Coordinator::children).unwrap_or(&[])
    }

    /// Number of coordinators including the root
    pub fn coordinator_count(&self) -> usize {
        self.root.count()
    }
}

impl Default for CoordinatorTree {
    fn default() -> Self {
        Self::new()
    }
}
