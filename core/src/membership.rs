use indexmap::{IndexMap, IndexSet};

/// Route display name → names of the stops it serves.
///
/// Both levels keep insertion order, so every consumer sees routes and stops
/// in the order the data source reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteStops {
    routes: IndexMap<String, IndexSet<String>>,
}

impl RouteStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route even if it turns out to serve no stops.
    pub fn insert_route(&mut self, route: &str) {
        if !self.routes.contains_key(route) {
            self.routes.insert(route.to_string(), IndexSet::new());
        }
    }

    pub fn insert(&mut self, route: &str, stop: &str) {
        self.insert_route(route);
        if let Some(stops) = self.routes.get_mut(route) {
            stops.insert(stop.to_string());
        }
    }

    pub fn stops(&self, route: &str) -> Option<&IndexSet<String>> {
        self.routes.get(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.routes.iter().map(|(r, s)| (r.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Flip into the stop → routes view.
    pub fn invert(&self) -> StopRoutes {
        let mut inverted = StopRoutes::new();
        for (route, stops) in &self.routes {
            for stop in stops {
                inverted.insert(stop, route);
            }
        }
        inverted
    }
}

impl<R: AsRef<str>, S: AsRef<str>> FromIterator<(R, S)> for RouteStops {
    fn from_iter<I: IntoIterator<Item = (R, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (route, stop) in iter {
            map.insert(route.as_ref(), stop.as_ref());
        }
        map
    }
}

/// Stop display name → names of the routes serving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopRoutes {
    stops: IndexMap<String, IndexSet<String>>,
}

impl StopRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stop: &str, route: &str) {
        match self.stops.get_mut(stop) {
            Some(routes) => {
                routes.insert(route.to_string());
            }
            None => {
                let mut routes = IndexSet::new();
                routes.insert(route.to_string());
                self.stops.insert(stop.to_string(), routes);
            }
        }
    }

    pub fn routes(&self, stop: &str) -> Option<&IndexSet<String>> {
        self.stops.get(stop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.stops.iter().map(|(s, r)| (s.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<S: AsRef<str>, R: AsRef<str>> FromIterator<(S, R)> for StopRoutes {
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (stop, route) in iter {
            map.insert(stop.as_ref(), route.as_ref());
        }
        map
    }
}
