// src/data/projects.rs
//
// Built-in project catalog, in display order.

use crate::domain::{Project, ProjectCategory, ProjectLink};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn links(values: &[(&str, &str)]) -> Vec<ProjectLink> {
    values
        .iter()
        .map(|(label, href)| ProjectLink::new(*label, *href))
        .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "jecs-dust-field".to_string(),
            title: "Server-Authoritative ECS Simulation – 1,500+ Entities".to_string(),
            category: ProjectCategory::Roblox,
            pitch: "Deterministic data-oriented simulation streamed over custom Blink networking with delta + snapshot replication.".to_string(),
            summary: "A pure ECS server simulation with no server Instances. 1,500+ entities are simulated at a fixed tick and streamed via batched deltas and periodic snapshots. Clients reconstruct a mirrored ECS world for rendering and effects, fully decoupled from simulation tick.".to_string(),
            technical_highlights: strings(&[
                "Pure JECS server world (data-only, no physics Instances)",
                "Hybrid networking: bulk spawn + transform deltas + periodic full snapshots",
                "Mailbox batching pattern (PendingMovements / PendingStates)",
                "Join-in-progress reconstruction via full snapshot sync",
                "Client ECS mirror fully decoupled from simulation tick",
                "Explicit tick scheduling to prevent frame-dependent drift",
            ]),
            metrics: strings(&[
                "1,500+ live entities",
                "~200 KB/s client net intake",
                "Simulation 20 Hz • Network 12 Hz • Effects 60 Hz",
            ]),
            youtube_ids: strings(&["ooikRRlfHRs"]),
            links: links(&[
                ("Play Demo", "https://www.roblox.com/games/129984384759966/Server-Simulation"),
                ("Watch Demo", "https://youtu.be/ooikRRlfHRs"),
                ("GitHub", "https://github.com/ItipatS/Roblox-Server-Simulation"),
            ]),
            is_private: false,
        },
        Project {
            id: "jecs-rpg-template".to_string(),
            title: "Deterministic Mob Simulation – 150 Server-Driven Entities".to_string(),
            category: ProjectCategory::Roblox,
            pitch: "Server-authoritative AI with explicit tick separation and minimal engine-native replication.".to_string(),
            summary: "An ECS-driven server simulation validating scalable AI, raycast-based movement, and decoupled replication. AI, movement, and sync are explicitly separated across ticks to maintain stability under load while clients interpolate at 60 FPS.".to_string(),
            technical_highlights: strings(&[
                "ECS components: Transform, Traits, Locomotion, AIState, Hitbox",
                "Strict system ordering: AI → Movement → Sync → Interpolation",
                "Server replicates minimal hitbox transforms (no RemoteEvent spam)",
                "Client-side interpolation fully decoupled from simulation tick",
                "Raycast-based ground snapping to avoid per-entity physics overhead",
                "Pre-baked navigation nodes could further reduce per-tick raycasts",
            ]),
            metrics: strings(&[
                "~150 active mobs",
                "~80 KB/s net intake",
                "AI 8 Hz • Simulation 20 Hz • Render 60 Hz",
            ]),
            youtube_ids: strings(&["eprIcdV42WM"]),
            links: links(&[
                ("Play Demo", "https://www.roblox.com/games/104444037041931/RPGJECS-DEMO"),
                ("Watch Demo", "https://youtu.be/eprIcdV42WM"),
                ("GitHub", "https://github.com/ItipatS/RPGJECS"),
            ]),
            is_private: false,
        },
        Project {
            id: "unity-arena-fighter".to_string(),
            title: "3D Arena Fighting Game (Unity)".to_string(),
            category: ProjectCategory::Unity,
            pitch: "A Smash/Brawlhalla-inspired arena fighter prototype focused on modular gameplay systems and polished UI flow.".to_string(),
            summary: "Built entirely in Unity with component-based modules for movement/physics/stats/combat, plus a scene-aware UI system and responsive input buffering for fighting-game feel.".to_string(),
            technical_highlights: strings(&[
                "Modular, inspector-friendly architecture (movement, gravity, ground check, stats, combat)",
                "Input buffering + input windows for frame-precise actions",
                "Scene-aware UI managers with animator-driven button feedback",
                "Shader/VFX-driven feedback to reduce reliance on traditional UI bars",
            ]),
            metrics: Vec::new(),
            youtube_ids: strings(&["NoEU0BiMYJQ", "6s0k-Z0F8c8"]),
            links: links(&[
                ("Play (itch.io)", "https://itipats.itch.io/holo-arena"),
                ("Watch Demo", "https://youtu.be/NoEU0BiMYJQ"),
                ("UI Demo", "https://youtu.be/6s0k-Z0F8c8"),
                ("GitHub", "https://github.com/ItipatS/HoloArena"),
            ]),
            is_private: false,
        },
        Project {
            id: "voxlcoding-mini-language".to_string(),
            title: "VoxlCoding – In-Game Mini Programming Language (Roblox)".to_string(),
            category: ProjectCategory::Tooling,
            pitch: "An in-game coding sandbox: write simple rules and instantly generate a 3D block structure.".to_string(),
            summary: "A rapid prototype: a tokenizer/parser/compiler pipeline inside Roblox, syntax highlighting, error feedback, and real-time preview rendering.".to_string(),
            technical_highlights: strings(&[
                "Tokenizer → recursive descent parser → AST → expand/compile into eval(x,y,z)",
                "Syntax highlight overlay + error reporting",
                "Debounced rebuild loop to avoid recompute every keystroke",
                "Preview renderer uses pooled parts and updates visibility/color efficiently",
                "AI-assisted implementation accelerated scaffolding; design/integration owned end-to-end",
            ]),
            metrics: Vec::new(),
            youtube_ids: strings(&["CMWizPhxsQc", "dzdsKzTBOmY"]),
            links: links(&[
                ("Play", "https://www.roblox.com/games/119162488544766"),
                ("Watch Demo 1", "https://youtu.be/CMWizPhxsQc"),
                ("Watch Demo 2", "https://youtu.be/dzdsKzTBOmY"),
            ]),
            is_private: false,
        },
        Project {
            id: "voxl-terra".to_string(),
            title: "Voxl Terra – Procedural Voxel World Streaming (Private)".to_string(),
            category: ProjectCategory::Roblox,
            pitch: "Procedural voxel world with server-driven chunk streaming and client-side greedy meshing.".to_string(),
            summary: "Server generates and caches chunk data, streams region-based updates per player, and enforces authority over world state. Clients perform greedy meshing with frame-budgeted build queues and pooled rendering to maintain stable performance.".to_string(),
            technical_highlights: strings(&[
                "Server-wide chunk cache + per-player region streaming (radius + shift threshold)",
                "Join-boost streaming mode (fast batches early, normal batches after)",
                "Client world stores sparse voxel data + heightfields; builds meshes via greedy face merging",
                "Mesh queue with frame budget + part pooling + unload/recycle to control memory/CPU",
                "Biome shaping via multi-frequency noise + cave carving via 3D noise threshold",
            ]),
            metrics: Vec::new(),
            youtube_ids: strings(&["6OcOnGqwPhM"]),
            links: links(&[("Watch Demo", "https://youtu.be/6OcOnGqwPhM")]),
            is_private: true,
        },
        Project {
            id: "data-bound-ui-framework".to_string(),
            title: "Roblox Custom UI Framework – Inventory, Tooltips, Transitions".to_string(),
            category: ProjectCategory::Roblox,
            pitch: "A modular UI framework with clean state management, inventory sync, and dynamic tooltips.".to_string(),
            summary: "Designed for maintainability: centralized UI manager, tween orchestration, lifecycle cleanup, and data-bound UI patterns backed by persistent storage.".to_string(),
            technical_highlights: strings(&[
                "UIManager: caches GUI refs, tracks open/close states, supports composite UI groups",
                "TweenManager centralizes transitions and prevents overlapping tweens",
                "InventoryManager syncs inventory state to UI; TooltipBuilder generates hover tooltips from metadata",
                "Cleanup lifecycle to prevent memory leaks (Maid-like patterns)",
                "ProfileService-backed persistence on server",
            ]),
            metrics: Vec::new(),
            youtube_ids: strings(&["0NLv2Lb7Fcc"]),
            links: links(&[
                ("Play Demo", "https://www.roblox.com/games/112639746648812/Data-Bound-UI-with-Datastore"),
                ("Watch Demo", "https://youtu.be/0NLv2Lb7Fcc"),
                ("GitHub", "https://github.com/ItipatS/Roblox-Data-Bound-UI-with-Datastore"),
            ]),
            is_private: false,
        },
    ]
}
