//! Unity folder layout and C# script templates.
//!
//! Unity projects cannot be created without the editor, so the generator
//! only lays out `Assets/` and seeds two scripts. The caller opens the
//! folder through Unity Hub afterwards.

use super::{fill, ScaffoldPlan};

/// C# script directory, relative to the project root.
pub const SCRIPTS_DIR: &str = "src/Assets/Scripts";

/// Guidance returned alongside a generated Unity layout.
pub const OPEN_NOTE: &str =
    "Open Unity Hub and create new project at src/ folder, or open existing project there";

/// `Assets/` skeleton with a singleton game manager and a 2D player controller.
pub fn project_plan(name: &str) -> ScaffoldPlan {
    ScaffoldPlan::new()
        .dir(SCRIPTS_DIR)
        .dir("src/Assets/Scenes")
        .dir("src/Assets/Prefabs")
        .dir("src/Assets/Materials")
        .file("src/Assets/Scripts/GameManager.cs", fill(GAME_MANAGER, name))
        .file("src/Assets/Scripts/PlayerController.cs", PLAYER_CONTROLLER)
}

/// Single C# file `src/Assets/Scripts/<name>.cs` declaring class `<name>`.
pub fn script_plan(name: &str, kind: UnityScriptKind) -> ScaffoldPlan {
    ScaffoldPlan::new()
        .dir(SCRIPTS_DIR)
        .file(format!("{}/{}.cs", SCRIPTS_DIR, name), fill(kind.template(), name))
}

/// Boilerplate variants for `unity_create_script`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnityScriptKind {
    #[default]
    MonoBehaviour,
    /// Data asset with a `CreateAssetMenu` entry.
    ScriptableObject,
    /// `DontDestroyOnLoad` singleton.
    Manager,
}

impl UnityScriptKind {
    pub fn all() -> &'static [UnityScriptKind] {
        &[
            UnityScriptKind::MonoBehaviour,
            UnityScriptKind::ScriptableObject,
            UnityScriptKind::Manager,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnityScriptKind::MonoBehaviour => "monobehaviour",
            UnityScriptKind::ScriptableObject => "scriptableobject",
            UnityScriptKind::Manager => "manager",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            UnityScriptKind::MonoBehaviour => MONOBEHAVIOUR_SCRIPT,
            UnityScriptKind::ScriptableObject => SCRIPTABLE_OBJECT_SCRIPT,
            UnityScriptKind::Manager => MANAGER_SCRIPT,
        }
    }
}

/// Unknown kinds fall back to [`UnityScriptKind::MonoBehaviour`].
impl From<&str> for UnityScriptKind {
    fn from(kind: &str) -> Self {
        UnityScriptKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == kind)
            .unwrap_or_default()
    }
}

const GAME_MANAGER: &str = r#"using UnityEngine;

public class GameManager : MonoBehaviour
{
    public static GameManager Instance { get; private set; }

    public int Score { get; private set; }
    public bool IsPaused { get; private set; }

    void Awake()
    {
        if (Instance == null)
        {
            Instance = this;
            DontDestroyOnLoad(gameObject);
        }
        else
        {
            Destroy(gameObject);
        }
    }

    void Start()
    {
        Debug.Log("{{name}} started!");
    }

    public void AddScore(int amount)
    {
        Score += amount;
        Debug.Log($"Score: {Score}");
    }

    public void TogglePause()
    {
        IsPaused = !IsPaused;
        Time.timeScale = IsPaused ? 0f : 1f;
    }
}
"#;

const PLAYER_CONTROLLER: &str = r#"using UnityEngine;

public class PlayerController : MonoBehaviour
{
    [Header("Movement")]
    public float moveSpeed = 5f;
    public float jumpForce = 10f;

    private Rigidbody2D rb;
    private bool isGrounded;

    void Start()
    {
        rb = GetComponent<Rigidbody2D>();
    }

    void Update()
    {
        // Horizontal movement
        float horizontal = Input.GetAxisRaw("Horizontal");
        rb.velocity = new Vector2(horizontal * moveSpeed, rb.velocity.y);

        // Jump
        if (Input.GetButtonDown("Jump") && isGrounded)
        {
            rb.velocity = new Vector2(rb.velocity.x, jumpForce);
        }
    }

    void OnCollisionEnter2D(Collision2D collision)
    {
        if (collision.gameObject.CompareTag("Ground"))
        {
            isGrounded = true;
        }
    }

    void OnCollisionExit2D(Collision2D collision)
    {
        if (collision.gameObject.CompareTag("Ground"))
        {
            isGrounded = false;
        }
    }
}
"#;

const MONOBEHAVIOUR_SCRIPT: &str = r#"using UnityEngine;

public class {{name}} : MonoBehaviour
{
    void Start()
    {

    }

    void Update()
    {

    }
}
"#;

const SCRIPTABLE_OBJECT_SCRIPT: &str = r#"using UnityEngine;

[CreateAssetMenu(fileName = "{{name}}", menuName = "Game/{{name}}")]
public class {{name}} : ScriptableObject
{
    public string displayName;
    public int value;
}
"#;

const MANAGER_SCRIPT: &str = r#"using UnityEngine;

public class {{name}} : MonoBehaviour
{
    public static {{name}} Instance { get; private set; }

    void Awake()
    {
        if (Instance == null)
        {
            Instance = this;
            DontDestroyOnLoad(gameObject);
        }
        else
        {
            Destroy(gameObject);
        }
    }

    void Start()
    {
        Initialize();
    }

    void Initialize()
    {

    }
}
"#;
