// Endpoint bindings for the Auvik REST API, grouped by API area.
//
// Each file holds thin parameter-binding methods on `AuvikClient`; no
// aggregation logic lives here. Empty result sets are `Ok(vec![])`,
// never an error.

mod alerts;
mod inventory;
mod stats;
mod tenants;
