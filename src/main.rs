mod app;
mod color;
mod etching;
mod font;
mod graphics;
mod grid;
mod input;
mod menu;
mod palette;
mod status;

use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::app::EtchApp;
use crate::graphics::GraphicsRenderer;
use crate::input::InputHandler;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 760;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Etch")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut graphics = GraphicsRenderer::new(&window, size.width, size.height)?;
    let mut app = EtchApp::new();
    let mut input_handler = InputHandler::new();

    let mut cursor_position: Option<(f32, f32)> = None;
    let mut redraw_requested = true;

    log::info!("etch started with a {0}x{0} grid", app.model.dimension());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                    redraw_requested = true;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    let action = input_handler.handle_keyboard_input(&input, app.mode());
                    if app.handle_action(action) {
                        redraw_requested = true;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_position = Some((position.x as f32, position.y as f32));
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some((x, y)) = cursor_position {
                        if let Some((row, col)) = graphics.hit_test(x, y, app.model.dimension()) {
                            if app.handle_tap(row, col) {
                                redraw_requested = true;
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if redraw_requested {
                    graphics.render(&app);
                    if let Err(err) = graphics.present() {
                        log::error!("render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                    redraw_requested = false;
                }
            }
            _ => {}
        }
    });
}
