//! Task service: `/tasks`, port 8080 by default.

use record_service::ServiceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    record_services::launch(ServiceKind::Tasks).await
}
