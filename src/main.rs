// File dialogs and exports are spawned onto this runtime from the UI thread.
#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    seatmap::run_app()
}
