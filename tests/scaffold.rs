//! Scaffold tools end to end: files on disk and reported results.

use jamkit::config::Config;
use jamkit::context::{Context, ProjectRoot};
use jamkit::mcp::Dispatcher;
use jamkit::models::{ToolRequest, ToolResult};
use serde_json::{json, Value};
use tempfile::TempDir;

fn dispatcher() -> (TempDir, Dispatcher) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = Context::new(ProjectRoot::new(dir.path()), Config::default());
    (dir, Dispatcher::new(ctx))
}

async fn call(d: &Dispatcher, name: &str, args: Value) -> ToolResult {
    d.invoke(ToolRequest::new(name, args)).await
}

fn read(dir: &TempDir, relative: &str) -> String {
    std::fs::read_to_string(dir.path().join(relative)).unwrap()
}

#[tokio::test]
async fn test_godot_project_layout() {
    let (dir, d) = dispatcher();
    let result = call(&d, "godot_create_project", json!({"name": "Neon Drift"})).await;

    assert!(result.success);
    assert_eq!(
        result.get_str("message"),
        Some("Created Godot project 'Neon Drift'")
    );
    assert_eq!(
        result.get("files_created"),
        Some(&json!([
            "src/project.godot",
            "src/scenes/main.tscn",
            "src/scripts/game_manager.gd"
        ]))
    );
    assert!(result.get("note").is_none());

    let settings = read(&dir, "src/project.godot");
    assert!(settings.contains("config/name=\"Neon Drift\""));
    assert!(settings.contains("run/main_scene=\"res://scenes/main.tscn\""));
    assert!(dir.path().join("src/assets").is_dir());
}

#[tokio::test]
async fn test_create_project_twice_is_idempotent() {
    let (dir, d) = dispatcher();
    let first = call(&d, "godot_create_project", json!({"name": "Hop"})).await;
    let before = read(&dir, "src/project.godot");

    let second = call(&d, "godot_create_project", json!({"name": "Hop"})).await;

    assert!(second.success);
    assert_eq!(first.get("files_created"), second.get("files_created"));
    assert_eq!(before, read(&dir, "src/project.godot"));
}

#[tokio::test]
async fn test_godot_unknown_script_type_uses_node_template() {
    let (dir, d) = dispatcher();

    let node = call(&d, "godot_create_script", json!({"name": "a", "type": "node"})).await;
    let lenient = call(&d, "godot_create_script", json!({"name": "b", "type": "wizard"})).await;

    assert!(node.success);
    assert!(lenient.success);
    assert_eq!(
        lenient.get_str("message"),
        Some("Created wizard script: b.gd")
    );
    assert_eq!(read(&dir, "src/scripts/a.gd"), read(&dir, "src/scripts/b.gd"));
}

#[tokio::test]
async fn test_godot_script_path_is_absolute() {
    let (dir, d) = dispatcher();
    let result = call(&d, "godot_create_script", json!({"name": "player", "type": "player"})).await;

    let path = std::path::PathBuf::from(result.get_str("path").unwrap());
    assert!(path.is_absolute());
    assert_eq!(path, dir.path().join("src/scripts/player.gd"));
    assert!(read(&dir, "src/scripts/player.gd").contains("CharacterBody2D"));
}

#[tokio::test]
async fn test_script_type_is_required() {
    let (_dir, d) = dispatcher();
    let result = call(&d, "godot_create_script", json!({"name": "a"})).await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("type"));
}

#[tokio::test]
async fn test_unity_project_carries_note() {
    let (dir, d) = dispatcher();
    let result = call(&d, "unity_create_project", json!({"name": "Neon"})).await;

    assert!(result.success);
    assert_eq!(
        result.get_str("message"),
        Some("Created Unity project structure for 'Neon'")
    );
    assert_eq!(
        result.get_str("note"),
        Some("Open Unity Hub and create new project at src/ folder, or open existing project there")
    );
    assert!(read(&dir, "src/Assets/Scripts/GameManager.cs").contains("Neon"));
    assert!(dir.path().join("src/Assets/Prefabs").is_dir());
}

#[tokio::test]
async fn test_unity_script_declares_class() {
    let (dir, d) = dispatcher();
    let result = call(
        &d,
        "unity_create_script",
        json!({"name": "ScoreKeeper", "type": "manager"}),
    )
    .await;

    assert_eq!(
        result.get_str("message"),
        Some("Created manager script: ScoreKeeper.cs")
    );
    let source = read(&dir, "src/Assets/Scripts/ScoreKeeper.cs");
    assert!(source.contains("public class ScoreKeeper"));
}

#[tokio::test]
async fn test_phaser_project_and_next_steps() {
    let (dir, d) = dispatcher();
    let result = call(&d, "phaser_create_project", json!({"name": "Space Hop"})).await;

    assert!(result.success);
    assert_eq!(
        result.get("next_steps"),
        Some(&json!([
            "cd src && npm install",
            "npm run dev",
            "Open http://localhost:5173 in browser"
        ]))
    );

    let manifest: Value = serde_json::from_str(&read(&dir, "src/package.json")).unwrap();
    assert_eq!(manifest["name"], "space-hop");
    assert!(read(&dir, "src/index.html").contains("<title>Space Hop</title>"));
    assert!(dir.path().join("src/scenes/GameScene.js").is_file());
}

#[cfg(unix)]
#[tokio::test]
async fn test_write_failure_is_reported() {
    let (dir, d) = dispatcher();
    // A file where the src directory should go.
    std::fs::write(dir.path().join("src"), "").unwrap();

    let result = call(&d, "phaser_create_project", json!({"name": "x"})).await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("src"));
}
