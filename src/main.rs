#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hotel_nova_backend::run().await
}
