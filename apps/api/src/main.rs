//! DrivingMaster API entry point

use core_config::tracing::install_color_eyre;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    drivingmaster_api::run().await
}
