//! Session persistence across separate runs.

use std::path::{Path, PathBuf};

use mapventures_auth::MOCK_PASSWORD;
use mapventures_cli::{App, HubConfig};
use mapventures_core::ResourceType;
use tempfile::TempDir;

/// Writes a config pointing the session into `dir`, with latency disabled.
fn write_config(dir: &Path) -> PathBuf {
    let session = dir.join("state").join("currentUser.json");
    let config_path = dir.join("config.toml");
    let content = format!(
        "[session]\npath = {:?}\n\n[api]\nsimulate_latency = false\n",
        session.to_str().unwrap()
    );
    std::fs::write(&config_path, content).unwrap();
    config_path
}

/// One "process run": load config, build the app.
fn run(config_path: &Path) -> App {
    let config = HubConfig::load(Some(config_path.to_str().unwrap())).unwrap();
    App::from_config(&config).unwrap()
}

fn whoami(app: &App) -> String {
    let mut out = Vec::new();
    app.whoami(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    let first = run(&config_path);
    first
        .login(&mut Vec::new(), "admin@admin.com", MOCK_PASSWORD)
        .unwrap();
    assert!(dir.path().join("state").join("currentUser.json").exists());

    let second = run(&config_path);
    assert!(whoami(&second).contains("admin@admin.com"));
}

#[test]
fn test_logout_clears_persisted_session() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    run(&config_path)
        .login(&mut Vec::new(), "organizador@eventos.com", MOCK_PASSWORD)
        .unwrap();
    run(&config_path).logout(&mut Vec::new()).unwrap();

    assert_eq!(whoami(&run(&config_path)), "anonymous\n");
}

#[test]
fn test_failed_login_keeps_previous_identity() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    run(&config_path)
        .login(&mut Vec::new(), "contato@techjoinville.com.br", MOCK_PASSWORD)
        .unwrap();
    let app = run(&config_path);
    assert!(app.login(&mut Vec::new(), "nobody@example.com", MOCK_PASSWORD).is_err());

    assert!(whoami(&run(&config_path)).contains("contato@techjoinville.com.br"));
}

#[test]
fn test_corrupt_session_file_starts_anonymous() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());
    let session = dir.path().join("state").join("currentUser.json");
    std::fs::create_dir_all(session.parent().unwrap()).unwrap();
    std::fs::write(&session, "{not json").unwrap();

    assert_eq!(whoami(&run(&config_path)), "anonymous\n");
    assert!(!session.exists());
}

#[tokio::test]
async fn test_restored_session_drives_owner_gate() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    run(&config_path)
        .login(&mut Vec::new(), "contato@metalurgicnorte.com.br", MOCK_PASSWORD)
        .unwrap();

    let app = run(&config_path);
    let mut out = Vec::new();
    app.open(&mut out, "/admin/companies/2/edit").await.unwrap();
    app.can_edit(&mut out, ResourceType::Company, "1").await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("edit company '2'"));
    assert!(text.contains("company '1': denied (not affiliated with this company)"));
}
