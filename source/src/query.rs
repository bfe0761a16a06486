use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// An outbound request against the transit API, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Query {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// `/routes` filtered to the given route type codes.
    pub fn routes(route_types: &[u8]) -> Self {
        let types = route_types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::get("/routes").param("filter[type]", &types)
    }

    /// `/stops` served by one route.
    pub fn stops_for_route(route_id: &str) -> Self {
        Self::get("/stops").param("filter[route]", route_id)
    }

    /// Path plus unencoded query string, e.g. `/stops?filter[route]=Red`.
    pub fn target(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    /// Cache key: method and target. Two queries share a key only if they
    /// would produce the same request.
    pub fn key(&self) -> String {
        format!("{} {}", self.method.as_str(), self.target())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
