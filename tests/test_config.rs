use std::sync::Mutex;

use pixel_demo::config::Config;

// Tests in this file mutate process-wide env vars; serialize them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("PIXEL_DEMO_CONFIG");
    }
}

#[test]
fn test_default_address() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("PIXEL_DEMO_CONFIG", "/nonexistent/pixel-demo.yaml");
    }

    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    clear_env();
}

#[test]
fn test_listen_env_override() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }

    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    clear_env();
}

#[test]
fn test_yaml_file_load() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join("pixel-demo-test-config.yaml");
    std::fs::write(&path, "server:\n  listen_addr: 127.0.0.1:9999\n").unwrap();
    unsafe {
        std::env::set_var("PIXEL_DEMO_CONFIG", &path);
    }

    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9999");

    std::fs::remove_file(&path).ok();
    clear_env();
}

#[test]
fn test_listen_env_beats_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join("pixel-demo-test-config-beaten.yaml");
    std::fs::write(&path, "server:\n  listen_addr: 127.0.0.1:9999\n").unwrap();
    unsafe {
        std::env::set_var("PIXEL_DEMO_CONFIG", &path);
        std::env::set_var("LISTEN", "127.0.0.1:4000");
    }

    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:4000");

    std::fs::remove_file(&path).ok();
    clear_env();
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join("pixel-demo-test-config-bad.yaml");
    std::fs::write(&path, "server: [not, a, mapping").unwrap();
    unsafe {
        std::env::set_var("PIXEL_DEMO_CONFIG", &path);
    }

    let cfg = Config::load();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");

    std::fs::remove_file(&path).ok();
    clear_env();
}
