use serde::Deserialize;

/// A transit route as reported by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: String,
    pub long_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub name: String,
}

// JSON:API envelope: `{"data": [{"id": .., "attributes": {..}}, ..]}`.
// Fields beyond these are ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct Document<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteResource {
    pub id: String,
    pub attributes: RouteAttributes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteAttributes {
    pub long_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopResource {
    pub attributes: StopAttributes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopAttributes {
    pub name: String,
}

impl From<RouteResource> for Route {
    fn from(resource: RouteResource) -> Self {
        Route {
            id: resource.id,
            long_name: resource.attributes.long_name,
        }
    }
}

impl From<StopResource> for Stop {
    fn from(resource: StopResource) -> Self {
        Stop {
            name: resource.attributes.name,
        }
    }
}
