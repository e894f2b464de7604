use tracing::{error, info};
use user_registry::{get_version, render_listing, seed_demo_users, setup_tracing, UserService};

fn main() -> Result<(), String> {
    setup_tracing();

    info!(version = get_version(), "Starting user registry demo");

    let mut service = UserService::create_test_service();
    if let Err(e) = seed_demo_users(&mut service) {
        error!(error = %e, "Seeding demo users failed");
        return Err(e.to_string());
    }

    print!("{}", render_listing(&service));

    info!(user_count = service.user_count(), "Demo completed");
    Ok(())
}
