//! Phaser 3 + Vite project templates and dev server preconditions.

use std::path::PathBuf;

use serde::Serialize;

use super::{fill, ScaffoldPlan, SRC_DIR};
use crate::context::ProjectRoot;
use crate::error::AppError;

/// npm manifest, relative to the project root.
pub const MANIFEST_FILE: &str = "src/package.json";
/// Installed dependencies, relative to the project root.
pub const DEPENDENCIES_DIR: &str = "src/node_modules";

/// Commands to run after generation.
pub const NEXT_STEPS: &[&str] = &[
    "cd src && npm install",
    "npm run dev",
    "Open http://localhost:5173 in browser",
];

/// npm manifest written as `package.json`. Field order is the file order.
#[derive(Debug, Serialize)]
struct PackageManifest {
    name: String,
    version: &'static str,
    description: String,
    scripts: Scripts,
    dependencies: Dependencies,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DevDependencies,
}

#[derive(Debug, Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    preview: &'static str,
}

#[derive(Debug, Serialize)]
struct Dependencies {
    phaser: &'static str,
}

#[derive(Debug, Serialize)]
struct DevDependencies {
    vite: &'static str,
}

impl PackageManifest {
    fn new(name: &str) -> Self {
        Self {
            name: package_name(name),
            version: "1.0.0",
            description: format!("{} - Game Jam Project", name),
            scripts: Scripts {
                dev: "npx vite",
                build: "npx vite build",
                preview: "npx vite preview",
            },
            dependencies: Dependencies { phaser: "^3.70.0" },
            dev_dependencies: DevDependencies { vite: "^5.0.0" },
        }
    }
}

/// npm package name: lower case, spaces replaced by dashes.
pub fn package_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Vite-served Phaser project with one arcade-physics scene.
pub fn project_plan(name: &str) -> Result<ScaffoldPlan, AppError> {
    let manifest = serde_json::to_string_pretty(&PackageManifest::new(name))?;

    Ok(ScaffoldPlan::new()
        .dir(SRC_DIR)
        .file(MANIFEST_FILE, manifest)
        .file("src/index.html", fill(INDEX_HTML, name))
        .file("src/main.js", MAIN_JS)
        .dir("src/scenes")
        .file("src/scenes/GameScene.js", GAME_SCENE)
        .dir("src/assets"))
}

/// Check that a dev server could start: manifest present, dependencies
/// installed. Returns the directory to run it from.
pub fn dev_server_dir(root: &ProjectRoot) -> Result<PathBuf, AppError> {
    if !root.join(MANIFEST_FILE).exists() {
        return Err(AppError::PhaserProjectMissing);
    }
    if !root.join(DEPENDENCIES_DIR).exists() {
        return Err(AppError::DependenciesMissing);
    }
    Ok(root.join(SRC_DIR))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{name}}</title>
    <style>
        body {
            margin: 0;
            padding: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            background: #1a1a2e;
        }
    </style>
</head>
<body>
    <script type="module" src="/main.js"></script>
</body>
</html>
"#;

const MAIN_JS: &str = r#"import Phaser from 'phaser';
import { GameScene } from './scenes/GameScene.js';

const config = {
    type: Phaser.AUTO,
    width: 800,
    height: 600,
    backgroundColor: '#2d2d2d',
    physics: {
        default: 'arcade',
        arcade: {
            gravity: { y: 300 },
            debug: false
        }
    },
    scene: [GameScene]
};

const game = new Phaser.Game(config);
"#;

const GAME_SCENE: &str = r#"import Phaser from 'phaser';

export class GameScene extends Phaser.Scene {
    constructor() {
        super({ key: 'GameScene' });
        this.score = 0;
    }

    preload() {
        // Load assets here
        // this.load.image('player', 'assets/player.png');
    }

    create() {
        // Create game objects
        this.add.text(400, 300, 'Game Jam!', {
            fontSize: '48px',
            fill: '#fff'
        }).setOrigin(0.5);

        // Create player (placeholder rectangle)
        this.player = this.add.rectangle(400, 500, 32, 32, 0x00ff00);
        this.physics.add.existing(this.player);
        this.player.body.setCollideWorldBounds(true);

        // Setup controls
        this.cursors = this.input.keyboard.createCursorKeys();

        // Score text
        this.scoreText = this.add.text(16, 16, 'Score: 0', {
            fontSize: '24px',
            fill: '#fff'
        });
    }

    update() {
        const speed = 200;

        // Horizontal movement
        if (this.cursors.left.isDown) {
            this.player.body.setVelocityX(-speed);
        } else if (this.cursors.right.isDown) {
            this.player.body.setVelocityX(speed);
        } else {
            this.player.body.setVelocityX(0);
        }

        // Jump
        if (this.cursors.up.isDown && this.player.body.touching.down) {
            this.player.body.setVelocityY(-330);
        }
    }

    addScore(amount) {
        this.score += amount;
        this.scoreText.setText('Score: ' + this.score);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_package_name_normalization() {
        assert_eq!(package_name("Space Hop Deluxe"), "space-hop-deluxe");
        assert_eq!(package_name("neon"), "neon");
    }

    #[test]
    fn test_manifest_key_order_and_values() {
        let plan = project_plan("Space Hop").unwrap();
        let manifest = plan.content_of(MANIFEST_FILE).unwrap();

        let keys: Vec<usize> = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"scripts\"",
            "\"dependencies\"",
            "\"devDependencies\"",
        ]
        .iter()
        .map(|k| manifest.find(k).unwrap())
        .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));

        let json: Value = serde_json::from_str(manifest).unwrap();
        assert_eq!(json["name"], "space-hop");
        assert_eq!(json["description"], "Space Hop - Game Jam Project");
        assert_eq!(json["scripts"]["dev"], "npx vite");
        assert_eq!(json["dependencies"]["phaser"], "^3.70.0");
        assert_eq!(json["devDependencies"]["vite"], "^5.0.0");
    }

    #[test]
    fn test_manifest_escapes_quotes_in_name() {
        let plan = project_plan("The \"Best\" Game").unwrap();
        let json: Value = serde_json::from_str(plan.content_of(MANIFEST_FILE).unwrap()).unwrap();
        assert_eq!(json["description"], "The \"Best\" Game - Game Jam Project");
    }

    #[test]
    fn test_project_plan_files() {
        assert_eq!(
            project_plan("x").unwrap().files(),
            vec![
                "src/package.json",
                "src/index.html",
                "src/main.js",
                "src/scenes/GameScene.js"
            ]
        );
    }

    #[test]
    fn test_index_title() {
        let plan = project_plan("Neon Drift").unwrap();
        assert!(plan
            .content_of("src/index.html")
            .unwrap()
            .contains("<title>Neon Drift</title>"));
    }

    #[test]
    fn test_dev_server_preconditions() {
        let dir = tempfile::tempdir().unwrap();
        let root = ProjectRoot::new(dir.path());

        let err = dev_server_dir(&root).unwrap_err();
        assert!(matches!(err, AppError::PhaserProjectMissing));

        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{}").unwrap();
        let err = dev_server_dir(&root).unwrap_err();
        assert!(matches!(err, AppError::DependenciesMissing));

        std::fs::create_dir_all(dir.path().join(DEPENDENCIES_DIR)).unwrap();
        assert_eq!(dev_server_dir(&root).unwrap(), dir.path().join("src"));
    }
}
