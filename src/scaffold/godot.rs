//! Godot 4 project layout and GDScript templates.

use super::{fill, ScaffoldPlan, SRC_DIR};

/// Project settings file, relative to the project root.
pub const PROJECT_FILE: &str = "src/project.godot";
/// GDScript directory, relative to the project root.
pub const SCRIPTS_DIR: &str = "src/scripts";

/// Godot project skeleton: settings with input map, a main scene and a
/// game manager script.
pub fn project_plan(name: &str) -> ScaffoldPlan {
    ScaffoldPlan::new()
        .dir(SRC_DIR)
        .file(PROJECT_FILE, project_settings(name))
        .dir("src/scenes")
        .dir(SCRIPTS_DIR)
        .dir("src/assets")
        .file("src/scenes/main.tscn", MAIN_SCENE)
        .file("src/scripts/game_manager.gd", GAME_MANAGER)
}

/// Single GDScript file `src/scripts/<name>.gd`.
pub fn script_plan(name: &str, kind: GodotScriptKind) -> ScaffoldPlan {
    ScaffoldPlan::new()
        .dir(SCRIPTS_DIR)
        .file(format!("{}/{}.gd", SCRIPTS_DIR, name), kind.template())
}

/// Boilerplate variants for `godot_create_script`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GodotScriptKind {
    /// Plain `Node` with `_ready`/`_process`.
    #[default]
    Node,
    /// Platformer `CharacterBody2D` with gravity, jump and axis movement.
    Player,
    /// `CharacterBody2D` with health, `died` signal and damage handling.
    Enemy,
    /// `Control` node.
    Ui,
    /// Subsystem manager node.
    Manager,
}

impl GodotScriptKind {
    pub fn all() -> &'static [GodotScriptKind] {
        &[
            GodotScriptKind::Node,
            GodotScriptKind::Player,
            GodotScriptKind::Enemy,
            GodotScriptKind::Ui,
            GodotScriptKind::Manager,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GodotScriptKind::Node => "node",
            GodotScriptKind::Player => "player",
            GodotScriptKind::Enemy => "enemy",
            GodotScriptKind::Ui => "ui",
            GodotScriptKind::Manager => "manager",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            GodotScriptKind::Node => NODE_SCRIPT,
            GodotScriptKind::Player => PLAYER_SCRIPT,
            GodotScriptKind::Enemy => ENEMY_SCRIPT,
            GodotScriptKind::Ui => UI_SCRIPT,
            GodotScriptKind::Manager => MANAGER_SCRIPT,
        }
    }
}

/// Unknown kinds fall back to [`GodotScriptKind::Node`].
impl From<&str> for GodotScriptKind {
    fn from(kind: &str) -> Self {
        GodotScriptKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == kind)
            .unwrap_or_default()
    }
}

// ============================================================================
// project.godot
// ============================================================================

/// An input action bound to keys, as `(keycode, unicode)` pairs.
struct InputAction {
    name: &'static str,
    keys: &'static [(u32, u32)],
}

/// WASD plus arrow keys for movement, space for jump.
const INPUT_ACTIONS: &[InputAction] = &[
    InputAction {
        name: "move_left",
        keys: &[(65, 97), (4194319, 0)],
    },
    InputAction {
        name: "move_right",
        keys: &[(68, 100), (4194321, 0)],
    },
    InputAction {
        name: "move_up",
        keys: &[(87, 119), (4194320, 0)],
    },
    InputAction {
        name: "move_down",
        keys: &[(83, 115), (4194322, 0)],
    },
    InputAction {
        name: "jump",
        keys: &[(32, 32)],
    },
];

fn project_settings(name: &str) -> String {
    let mut settings = fill(PROJECT_SETTINGS_HEAD, name);
    for action in INPUT_ACTIONS {
        let events: Vec<String> = action
            .keys
            .iter()
            .map(|&(keycode, unicode)| key_event(keycode, unicode))
            .collect();
        settings.push_str(action.name);
        settings.push_str("={\n\"deadzone\": 0.5,\n\"events\": [");
        settings.push_str(&events.join(", "));
        settings.push_str("]\n}\n");
    }
    settings
}

fn key_event(keycode: u32, unicode: u32) -> String {
    format!(
        concat!(
            r#"Object(InputEventKey,"resource_local_to_scene":false,"resource_name":"","device":-1,"#,
            r#""window_id":0,"alt_pressed":false,"shift_pressed":false,"ctrl_pressed":false,"#,
            r#""meta_pressed":false,"pressed":false,"keycode":{},"physical_keycode":0,"key_label":0,"#,
            r#""unicode":{},"echo":false,"script":null)"#
        ),
        keycode, unicode
    )
}

const PROJECT_SETTINGS_HEAD: &str = r#"; Engine configuration file.
; It's best edited using the editor UI and not directly.

config_version=5

[application]
config/name="{{name}}"
run/main_scene="res://scenes/main.tscn"
config/features=PackedStringArray("4.2", "Forward Plus")

[display]
window/size/viewport_width=1280
window/size/viewport_height=720

[input]
"#;

// ============================================================================
// Scenes and scripts
// ============================================================================

const MAIN_SCENE: &str = r#"[gd_scene load_steps=1 format=3]

[node name="Main" type="Node2D"]
"#;

const GAME_MANAGER: &str = r#"extends Node

## Game Manager - Central game state and logic

var score: int = 0
var is_paused: bool = false

func _ready() -> void:
    print("Game started!")

func add_score(amount: int) -> void:
    score += amount
    print("Score: ", score)

func pause_game() -> void:
    is_paused = true
    get_tree().paused = true

func resume_game() -> void:
    is_paused = false
    get_tree().paused = false
"#;

const NODE_SCRIPT: &str = r#"extends Node

func _ready() -> void:
    pass

func _process(delta: float) -> void:
    pass
"#;

const PLAYER_SCRIPT: &str = r#"extends CharacterBody2D

@export var speed: float = 200.0
@export var jump_force: float = 400.0

var gravity: float = ProjectSettings.get_setting("physics/2d/default_gravity")

func _physics_process(delta: float) -> void:
    # Gravity
    if not is_on_floor():
        velocity.y += gravity * delta

    # Jump
    if Input.is_action_just_pressed("jump") and is_on_floor():
        velocity.y = -jump_force

    # Movement
    var direction := Input.get_axis("move_left", "move_right")
    velocity.x = direction * speed

    move_and_slide()
"#;

const ENEMY_SCRIPT: &str = r#"extends CharacterBody2D

@export var speed: float = 100.0
@export var health: int = 3

signal died

func _physics_process(delta: float) -> void:
    # Basic patrol or chase logic here
    move_and_slide()

func take_damage(amount: int) -> void:
    health -= amount
    if health <= 0:
        die()

func die() -> void:
    died.emit()
    queue_free()
"#;

const UI_SCRIPT: &str = r#"extends Control

func _ready() -> void:
    pass

func update_display() -> void:
    pass
"#;

const MANAGER_SCRIPT: &str = r#"extends Node

## Manager for handling game subsystem

func _ready() -> void:
    pass

func initialize() -> void:
    pass

func cleanup() -> void:
    pass
"#;
