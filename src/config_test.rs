use super::*;

#[test]
fn default_routes() {
    let config = AppConfig::default();
    assert_eq!(config.app_name, "TourTribe");
    assert_eq!(config.home_path, "/");
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.profile_path, "/profile");
}

#[test]
fn default_delays_are_one_second() {
    let config = AppConfig::default();
    assert_eq!(config.login_delay, Duration::from_secs(1));
    assert_eq!(config.share_delay, Duration::from_secs(1));
}
