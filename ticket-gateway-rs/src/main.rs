// ticket-gateway-rs/src/main.rs
// Ticket Gateway - HTTP entry point for the categorization engine
// Port 8000 - accepts support tickets, returns deterministic action plans

use std::sync::Arc;

use ticket_gateway::TicketGateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let default_port = config_rs::get_default_port("TICKET_GATEWAY");
    let addr = config_rs::get_bind_address("TICKET_GATEWAY", default_port);

    log::info!(
        "Starting {} on {} (engine v{})",
        config_rs::get_formatted_service_name("TICKET_GATEWAY"),
        addr,
        categorization_engine::VERSION
    );

    let gateway = Arc::new(TicketGateway::new());
    let app = gateway.create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
