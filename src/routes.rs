use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Parameters of the route currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivatedRoute {
    params: HashMap<String, String>,
}

impl ActivatedRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Heroes,
    Detail(ActivatedRoute),
}

impl Route {
    /// Resolves a path against the route table. The empty path redirects to
    /// the dashboard.
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["dashboard"] => Some(Route::Dashboard),
            ["heroes"] => Some(Route::Heroes),
            ["detail", id] => Some(Route::Detail(ActivatedRoute::new().with_param("id", *id))),
            _ => None,
        }
    }

    /// Only the detail page has a hero to edit.
    pub fn accepts_edits(&self) -> bool {
        matches!(self, Route::Detail(_))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Heroes => "/heroes".to_string(),
            Route::Detail(route) => format!("/detail/{}", route.param("id").unwrap_or_default()),
        }
    }
}

pub trait Location: Send + Sync {
    fn back(&self);
}

/// Browser-style history stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Arc<Mutex<Vec<String>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&self, path: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(path.into());
        }
    }

    pub fn current(&self) -> Option<String> {
        self.entries.lock().ok().and_then(|entries| entries.last().cloned())
    }
}

impl Location for History {
    fn back(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.pop();
        }
    }
}
