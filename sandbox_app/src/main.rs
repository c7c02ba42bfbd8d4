//! Sandbox demo: a colored quad driven around with WASD / arrow keys
//!
//! Exercises the full engine loop against the headless backend: scene
//! setup, a custom movement component, the built-in camera and mesh
//! components, and a bounded run of the main loop.

use lumen_engine::prelude::*;
use std::sync::Arc;

const VERTEX_SHADER: &str = r"
#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec3 color;

out vec3 vColor;

uniform mat4 uModel;
uniform mat4 uView;
uniform mat4 uProjection;

void main()
{
    vColor = color;
    gl_Position = uProjection * uView * uModel * vec4(position, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"
#version 330 core
out vec4 FragColor;

in vec3 vColor;

void main()
{
    FragColor = vec4(vColor, 1.0);
}
";

/// How many frames the demo runs before requesting shutdown
const DEMO_FRAMES: u64 = 600;

/// Moves its owner in the XY plane from keyboard state
struct PlayerController {
    speed: f32,
}

impl Component for PlayerController {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let mut direction = Vec3::zeros();
        if ctx.input.is_key_pressed(Key::A) || ctx.input.is_key_pressed(Key::Left) {
            direction.x -= 1.0;
        }
        if ctx.input.is_key_pressed(Key::D) || ctx.input.is_key_pressed(Key::Right) {
            direction.x += 1.0;
        }
        if ctx.input.is_key_pressed(Key::S) || ctx.input.is_key_pressed(Key::Down) {
            direction.y -= 1.0;
        }
        if ctx.input.is_key_pressed(Key::W) || ctx.input.is_key_pressed(Key::Up) {
            direction.y += 1.0;
        }

        if direction != Vec3::zeros() {
            let step = direction.normalize() * self.speed * ctx.dt;
            let owner = ctx.owner;
            if let Some(object) = ctx.scene.get_mut(owner) {
                let position = object.position() + step;
                object.set_position(position);
            }
        }
    }
}

struct SandboxGame;

impl SandboxGame {
    fn build_quad(backend: &mut dyn GraphicsBackend) -> Arc<Mesh> {
        // Interleaved position + color, one corner per color.
        let vertices: [f32; 24] = [
            0.5, 0.5, 0.0, 1.0, 0.0, 0.0, //
            -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, //
            -0.5, -0.5, 0.0, 0.0, 0.0, 1.0, //
            0.5, -0.5, 0.0, 1.0, 1.0, 0.0,
        ];
        let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];

        let mut layout = VertexLayout::with_stride(24);
        layout.push(VertexElement {
            location: 0,
            components: 3,
            offset: 0,
        });
        layout.push(VertexElement {
            location: 1,
            components: 3,
            offset: 12,
        });

        Arc::new(Mesh::new(backend, layout, &vertices, &indices))
    }
}

impl Application for SandboxGame {
    fn initialize(
        &mut self,
        engine: &mut Engine,
        backend: &mut dyn GraphicsBackend,
    ) -> Result<(), AppError> {
        let material = Arc::new(Material::from_sources(
            backend,
            VERTEX_SHADER,
            FRAGMENT_SHADER,
        ));
        let mesh = Self::build_quad(backend);

        let scene = engine.scene_mut();

        let player = scene.create_object("player", None);
        if let Some(object) = scene.get_mut(player) {
            object.add_component(MeshComponent::new(material, mesh));
            object.add_component(PlayerController { speed: 1.5 });
        }

        let camera = scene.create_object("camera", None);
        if let Some(object) = scene.get_mut(camera) {
            object.set_position(Vec3::new(0.0, 0.0, 3.0));
            object.add_component(CameraComponent::default());
        }
        scene.set_main_camera(camera);

        log::info!("Sandbox scene ready: {} objects", scene.object_count());
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if engine.frame_count() >= DEMO_FRAMES {
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "Sandbox finished after {} frames",
            engine.frame_count()
        );
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = EngineConfig {
        title: "Lumen Sandbox".to_string(),
        clear_color: Color::Silver,
        ..EngineConfig::default()
    };

    let mut backend = HeadlessBackend::new();
    let mut game = SandboxGame;

    if let Err(err) = Engine::run(config, &mut backend, &mut game) {
        log::error!("engine exited with error: {err}");
        std::process::exit(1);
    }
}
