use std::{cell::RefCell, io, rc::Rc};

use wavefire::{
    console,
    gl::{GlContext, ShaderProgram},
    glam::Vec3,
    run_animation_loop,
    scene::Scene,
    shaders::{FRAGMENT_SHADER, VERTEX_SHADER},
    utils::{alert, get_raw_window_size},
    Camera, ControlPanel, Controls, Error, Renderer, RendererOptions,
};

fn main() -> io::Result<()> {
    console::init(log::LevelFilter::Info);
    run().map_err(io::Error::from)
}

fn run() -> Result<(), Error> {
    let controls = Rc::new(RefCell::new(Controls::default()));
    let panel = ControlPanel::new(None, controls.clone())?;

    let options = RendererOptions::new()
        .canvas_id("canvas")
        .clear_color([0.2, 0.2, 0.2, 1.0]);
    let mut renderer = match Renderer::new_with_options(options) {
        Err(Error::UnableToRetrieveWebGl2Context) => {
            alert("WebGL 2 not supported!")?;
            return Err(Error::UnableToRetrieveWebGl2Context);
        }
        renderer => renderer?,
    };
    renderer.context().gl().enable_depth_test();

    let program = ShaderProgram::from_sources(renderer.context(), VERTEX_SHADER, FRAGMENT_SHADER)?;
    let mut scene = Scene::load(renderer.context())?;
    let mut camera = Camera::new(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO);
    let mut window_size = None;
    let mut time = 0.0_f32;
    log::info!("wavefire started");

    run_animation_loop(move || {
        let _panel = &panel;
        time += 1.0;
        camera.update();

        let (width, height) = get_raw_window_size();
        if window_size != Some((width, height)) {
            renderer.set_size(width, height);
            camera.set_aspect_ratio(width as f32 / height.max(1) as f32);
            camera.update_projection_matrix();
            window_size = Some((width, height));
            log::debug!("resized to {width}x{height}");
        }
        renderer.set_viewport(width, height);
        renderer.clear();

        controls.borrow().apply(renderer.context(), &program);
        program.set_time(renderer.context(), time);
        renderer.render(&camera, &program, &scene.drawables());

        if controls.borrow_mut().take_reload() {
            scene.reload(renderer.context());
        }
        Ok(())
    })
}
