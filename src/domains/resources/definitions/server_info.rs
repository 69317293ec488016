//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "docs://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Information about this documentation server: version, store mode, root";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "docs://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_is_dynamic() {
        assert!(matches!(
            ServerInfoResource::content(),
            ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
        ));
    }
}
