#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lecture_quiz_backend::run().await
}
