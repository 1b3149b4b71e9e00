//! Compiled-in catalog of queryable services.
//!
//! One [`ServiceDescriptor`] per tab. The catalog is static; nothing is
//! loaded from the server or from configuration.

use serde::Serialize;

/// Reference documentation version the doc links point at.
pub const API_VERSION: &str = "v201708";

/// Filter clause used when a descriptor does not name one.
pub const DEFAULT_FILTER_CLAUSE: &str = "WHERE id != 0";

/// Reference documentation URL for a service.
pub fn docs_url(service: &str) -> String {
    format!(
        "https://developers.google.com/doubleclick-publishers/docs/reference/{API_VERSION}/{service}"
    )
}

/// One selectable sub-resource of a dual-route service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubRoute {
    pub route: &'static str,
    /// Short label shown in the route selector ("Key", "Value").
    pub label: &'static str,
    pub default_clause: &'static str,
}

/// How a service maps onto API routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ServiceRoutes {
    /// A single endpoint.
    Single { route: &'static str },
    /// Two related endpoints sharing a tab. Selecting `secondary` switches
    /// the filter clause to `secondary.default_clause`; selecting anything
    /// else reverts it to [`DEFAULT_FILTER_CLAUSE`].
    Dual {
        primary: SubRoute,
        secondary: SubRoute,
    },
}

impl ServiceRoutes {
    /// Route a freshly created tab starts on.
    pub const fn initial_route(&self) -> &'static str {
        match self {
            Self::Single { route } => route,
            Self::Dual { primary, .. } => primary.route,
        }
    }

    /// Every route the tab may be switched to.
    pub fn routes(&self) -> Vec<&'static str> {
        match self {
            Self::Single { route } => vec![route],
            Self::Dual { primary, secondary } => vec![primary.route, secondary.route],
        }
    }

    /// Sub-routes, for the selector. Empty for single-route services.
    pub fn sub_routes(&self) -> Vec<SubRoute> {
        match self {
            Self::Single { .. } => Vec::new(),
            Self::Dual { primary, secondary } => vec![*primary, *secondary],
        }
    }

    /// Filter clause to install after the active route changed to `route`.
    ///
    /// `None` means the service has no clause rule and the tab keeps
    /// whatever clause it has.
    pub fn clause_for_route(&self, route: &str) -> Option<&'static str> {
        match self {
            Self::Single { .. } => None,
            Self::Dual { secondary, .. } if secondary.route == route => {
                Some(secondary.default_clause)
            }
            Self::Dual { .. } => Some(DEFAULT_FILTER_CLAUSE),
        }
    }
}

/// Static description of one queryable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    /// Tab title.
    pub name: &'static str,
    pub routes: ServiceRoutes,
    /// Row attribute used as the list label; `None` for PQL, whose rows
    /// are rendered through the server-provided columns.
    pub display_attribute: Option<&'static str>,
    pub display_attribute_label: Option<&'static str>,
    /// Clause a new tab starts with; falls back to [`DEFAULT_FILTER_CLAUSE`].
    pub default_clause: Option<&'static str>,
    /// Service name in the reference documentation.
    pub doc_service: &'static str,
}

impl ServiceDescriptor {
    pub fn initial_clause(&self) -> &'static str {
        self.default_clause.unwrap_or(DEFAULT_FILTER_CLAUSE)
    }

    pub fn doc_link(&self) -> String {
        docs_url(self.doc_service)
    }

    /// Schema-less services return their own column list.
    pub const fn has_dynamic_columns(&self) -> bool {
        self.display_attribute.is_none()
    }
}

const fn single(
    name: &'static str,
    route: &'static str,
    display_attribute: &'static str,
    display_attribute_label: &'static str,
    default_clause: &'static str,
    doc_service: &'static str,
) -> ServiceDescriptor {
    ServiceDescriptor {
        name,
        routes: ServiceRoutes::Single { route },
        display_attribute: Some(display_attribute),
        display_attribute_label: Some(display_attribute_label),
        default_clause: Some(default_clause),
        doc_service,
    }
}

static SERVICES: [ServiceDescriptor; 11] = [
    single("Ad Unit Service", "adunits", "name", "Name", "WHERE id != 0", "InventoryService"),
    single("Company Service", "companies", "name", "Name", "WHERE id != 0", "CompanyService"),
    single("Creative Service", "creatives", "name", "Name", "WHERE id != 0", "CreativeService"),
    single(
        "Creative Template Service",
        "creativetemplates",
        "name",
        "Name",
        "WHERE id != 0",
        "CreativeTemplateService",
    ),
    ServiceDescriptor {
        name: "Custom Targeting Service",
        routes: ServiceRoutes::Dual {
            primary: SubRoute {
                route: "customtargetingkeys",
                label: "Key",
                default_clause: "WHERE id != 0",
            },
            secondary: SubRoute {
                route: "customtargetingvalues",
                label: "Value",
                default_clause: "WHERE customTargetingKeyId != 0",
            },
        },
        display_attribute: Some("name"),
        display_attribute_label: Some("Name"),
        default_clause: None,
        doc_service: "CustomTargetingService",
    },
    single("Line Item Service", "lineitems", "name", "Name", "WHERE id != 0", "LineItemService"),
    single(
        "Line Item Creative Association Service",
        "licas",
        "lineItemId",
        "Line Item ID",
        "WHERE lineItemId != 0",
        "LineItemCreativeAssociationService",
    ),
    single("Order Service", "orders", "name", "Name", "WHERE id != 0", "OrderService"),
    single("Placement Service", "placements", "name", "Name", "WHERE id != 0", "PlacementService"),
    ServiceDescriptor {
        name: "PQL Service",
        routes: ServiceRoutes::Single { route: "pql" },
        display_attribute: None,
        display_attribute_label: None,
        default_clause: Some("SELECT Id, BrowserName from Browser"),
        doc_service: "PublisherQueryLanguageService",
    },
    single("User Service", "users", "email", "Email", "WHERE id != 0", "UserService"),
];

/// All services, in tab order.
pub fn all_services() -> &'static [ServiceDescriptor] {
    &SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_unique() {
        let mut routes: Vec<_> = all_services()
            .iter()
            .flat_map(|s| s.routes.routes())
            .collect();
        let total = routes.len();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), total);
        assert_eq!(total, 12);
    }

    #[test]
    fn exactly_one_dual_route_service() {
        let dual: Vec<_> = all_services()
            .iter()
            .filter(|s| matches!(s.routes, ServiceRoutes::Dual { .. }))
            .collect();
        assert_eq!(dual.len(), 1);
        assert_eq!(dual[0].routes.initial_route(), "customtargetingkeys");
        assert_eq!(dual[0].initial_clause(), DEFAULT_FILTER_CLAUSE);
    }

    #[test]
    fn dual_clause_rule() {
        let routes = all_services()[4].routes;
        assert_eq!(
            routes.clause_for_route("customtargetingvalues"),
            Some("WHERE customTargetingKeyId != 0")
        );
        assert_eq!(
            routes.clause_for_route("customtargetingkeys"),
            Some(DEFAULT_FILTER_CLAUSE)
        );
        assert_eq!(ServiceRoutes::Single { route: "orders" }.clause_for_route("orders"), None);
    }

    #[test]
    fn only_pql_has_dynamic_columns() {
        let dynamic: Vec<_> = all_services()
            .iter()
            .filter(|s| s.has_dynamic_columns())
            .map(|s| s.routes.initial_route())
            .collect();
        assert_eq!(dynamic, vec!["pql"]);
    }

    #[test]
    fn doc_links_are_versioned() {
        assert_eq!(
            all_services()[0].doc_link(),
            "https://developers.google.com/doubleclick-publishers/docs/reference/v201708/InventoryService"
        );
    }

    #[test]
    fn licas_use_line_item_id() {
        let licas = all_services()
            .iter()
            .find(|s| s.routes.initial_route() == "licas")
            .unwrap();
        assert_eq!(licas.display_attribute, Some("lineItemId"));
        assert_eq!(licas.initial_clause(), "WHERE lineItemId != 0");
    }
}
