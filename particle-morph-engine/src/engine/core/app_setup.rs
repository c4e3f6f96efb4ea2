// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION, CLEAR_COLOR_HEX,
};

// Crate engine modules
use crate::engine::animation::{
    ActiveTimeline, AnimateRequestEvent, advance_timeline, start_animation_on_request,
};
use crate::engine::assets::particle_assets::ParticleAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::{OrbitCamera, SceneCamera, orbit_camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{load_scene_config, start_loading};
use crate::engine::loading::model_loader::check_model_loading;
use crate::engine::loading::particle_creator::create_particles_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::parameters::ParticleParameters;
use crate::engine::shaders::ParticleMaterial;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::resize::handle_viewport_resize;
use crate::engine::systems::uniform_sync::sync_particle_uniforms;

// Crate tools modules
use crate::tools::debug_panel::DebugPanelPlugin;

// Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<ParticleMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(DebugPanelPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ParticleAssets>()
        .init_resource::<ParticleParameters>()
        .init_resource::<ActiveTimeline>()
        .init_resource::<OrbitCamera>()
        .insert_resource(ClearColor(
            Srgba::hex(CLEAR_COLOR_HEX).unwrap_or(Srgba::BLACK).into(),
        ))
        .add_event::<AnimateRequestEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_scene_config,
                check_model_loading,
                create_particles_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Runtime systems - only run when everything is ready
    app.add_systems(
        Update,
        (
            start_animation_on_request,
            advance_timeline,
            orbit_camera_controller,
            fps_notification_system,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    // Viewport and uniform upkeep run in every state, after all parameter writers.
    app.add_systems(
        Update,
        (handle_viewport_resize, sync_particle_uniforms)
            .chain()
            .after(orbit_camera_controller),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::engine::systems::fps_tracking::fps_text_update_system;
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        // Colours are authored in sRGB and blended additively; keep them untouched.
        Tonemapping::None,
        Msaa::Sample4,
        SceneCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== PARTICLE MORPH VIEWER ===");
    create_scene_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    use crate::engine::core::app_state::FpsText;

    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
