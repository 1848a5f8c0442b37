use actix_web::{web, App, HttpServer};
use techguess::config::{DataPaths, ServerConfig};
use techguess::infra::state::build_state;
use techguess::middleware::cors::cors_middleware;
use techguess::middleware::request_trace::RequestTrace;
use techguess::middleware::structured_logger::StructuredLogger;
use techguess::middleware::trace_span::TraceSpan;
use techguess::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let data_paths = DataPaths::from_env();

    println!(
        "🚀 Starting TechGuess on http://{}:{}",
        server.host, server.port
    );

    let app_state = match build_state().with_data(data_paths.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "✅ Catalog at {}, scores at {}",
        data_paths.catalog.display(),
        data_paths.scores.display()
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
