#[tokio::main]
async fn main() {
    clubs::start_server().await;
}
