pub mod assignments;
pub mod devices;
pub mod enrollment_status_pages;
pub mod events;
pub mod imported_devices;
pub mod organization;
pub mod profiles;
pub mod sync;

/// Escapes a value for use inside an OData string literal.
fn odata_literal(value: &str) -> String {
    value.replace('\'', "''")
}
