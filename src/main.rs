#[tokio::main]
async fn main() -> anyhow::Result<()> {
    evidence_mock::server::run().await
}
