use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bus_server::timetable;
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Static tables; a bad entry is a programming error, so fail fast.
    let timetable = timetable::data::load().expect("invalid timetable data");
    info!(
        stops = timetable.directory.len(),
        workday_runs = timetable.calendars.workday.len(),
        weekend_runs = timetable.calendars.weekend.len(),
        holiday_runs = timetable.calendars.holiday.len(),
        "timetable loaded"
    );

    let state = AppState::new(Arc::new(timetable));
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("next-bus server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
