use axum::Router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Route handlers are an external collaborator; the scaffold binary
    // mounts an empty tree and only the shared layers.
    chassis::run(Router::new()).await
}
