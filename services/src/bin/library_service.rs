//! Library service: `/users` and `/books`, port 8081 by default.

use record_service::ServiceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    record_services::launch(ServiceKind::Library).await
}
