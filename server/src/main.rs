use tokio::net::TcpListener;
use tracing::info;

use todo_api_core::store::{default_todos, SharedStore, TodoStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let store = SharedStore::new(TodoStore::with_todos(default_todos()));
    info!(%addr, "todo api listening");
    todo_api_server::run(listener, store).await
}
