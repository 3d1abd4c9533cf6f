use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tgs_lambda_organizations::run().await
}
