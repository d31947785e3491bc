//! Ball Drop entry point
//!
//! The web build wires the controller to a canvas: clicks spawn balls and
//! `requestAnimationFrame` drives the frames. The native build runs the same
//! loop headless with scripted spawns and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use ball_drop::platform::{FrameRequests, SpawnQueue};
    use ball_drop::renderer::{RenderState, VertexBatch};
    use ball_drop::sim::CanvasBounds;
    use ball_drop::{BallController, Settings};

    /// Everything the browser callbacks share
    struct Host {
        controller: BallController,
        render_state: Option<RenderState>,
        batch: VertexBatch,
        frames: FrameRequests,
        spawns: SpawnQueue,
    }

    impl Host {
        /// Draw the batch the last frame produced
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Find the canvas, or create one sized to the bounds
    fn canvas_for(bounds: &CanvasBounds) -> Option<HtmlCanvasElement> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into().ok()?,
            None => {
                let el = document.create_element("canvas").ok()?;
                el.set_id("canvas");
                document.body()?.append_child(&el).ok()?;
                el.dyn_into().ok()?
            }
        };
        canvas.set_width(bounds.width().round() as u32);
        canvas.set_height(bounds.height().round() as u32);
        Some(canvas)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Drop starting...");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let bounds = settings.bounds;

        let Some(canvas) = canvas_for(&bounds) else {
            log::error!("No canvas available");
            return;
        };

        let controller = match BallController::new(settings, seed, now_ms()) {
            Ok(controller) => controller,
            Err(e) => {
                log::error!("Cannot start simulation: {}", e);
                return;
            }
        };

        let host = Rc::new(RefCell::new(Host {
            controller,
            render_state: None,
            batch: VertexBatch::new(),
            frames: FrameRequests::new(),
            spawns: SpawnQueue::new(),
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, canvas.width(), canvas.height()).await {
            Ok(render_state) => host.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_click_handler(&canvas, bounds, host.clone());

        // Kick off the loop
        let start = {
            let mut h = host.borrow_mut();
            let h = &mut *h;
            h.controller.animate(&mut h.frames);
            h.frames.take()
        };
        if start {
            request_animation_frame(host);
        }

        log::info!("Ball Drop running!");
    }

    /// Clicks queue a spawn point in canvas coordinates
    fn setup_click_handler(canvas: &HtmlCanvasElement, bounds: CanvasBounds, host: Rc<RefCell<Host>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // The canvas may be scaled by CSS
            let client_w = canvas_clone.client_width().max(1) as f64;
            let client_h = canvas_clone.client_height().max(1) as f64;
            let scale = DVec2::new(bounds.width() / client_w, bounds.height() / client_h);
            let offset = DVec2::new(event.offset_x() as f64, event.offset_y() as f64);
            let point = bounds.origin() + offset * scale;

            // Clicks on a border or padding land outside the canvas area
            if bounds.contains(point) {
                host.borrow_mut().spawns.push(point);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(host: Rc<RefCell<Host>>, time: f64) {
        let again = {
            let mut h = host.borrow_mut();
            let h = &mut *h;

            h.controller.drain_spawns(&mut h.spawns);
            match h.controller.frame(time, &mut h.batch, &mut h.frames, false) {
                Ok(_) => h.render(),
                Err(e) => log::error!("Simulation halted: {}", e),
            }
            h.frames.take()
        };

        if again {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_host::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ball Drop (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use glam::DVec2;

    use ball_drop::platform::{FrameRequests, SpawnQueue};
    use ball_drop::renderer::VertexBatch;
    use ball_drop::{BallController, Settings};

    /// Frame interval of the simulated display (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop after this many simulated seconds even if balls remain
    const MAX_SECONDS: f64 = 120.0;

    /// Usage: ball-drop [settings.json] [ball count]
    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::load_from_path(path)?,
            None => Settings::load(),
        };
        let count: usize = match args.next() {
            Some(n) => n.parse()?,
            None => 10,
        };

        let seed = settings.seed.unwrap_or(0x5eed);
        let mut controller = BallController::new(settings, seed, 0.0)?;
        let bounds = controller.settings().bounds;

        // Scripted clicks spread across the upper half of the canvas
        let mut spawns = SpawnQueue::new();
        for i in 0..count {
            let t = (i as f64 + 0.5) / count as f64;
            spawns.push(bounds.origin() + DVec2::new(t * bounds.width(), 0.25 * bounds.height()));
        }

        let mut batch = VertexBatch::new();
        let mut frames = FrameRequests::new();
        controller.animate(&mut frames);

        let mut now = 0.0;
        let mut frame = 0u64;
        while frames.take() && now < MAX_SECONDS * 1000.0 {
            now += FRAME_MS;
            frame += 1;
            controller.drain_spawns(&mut spawns);
            controller.frame(now, &mut batch, &mut frames, false)?;

            if frame % 60 == 0 {
                log::info!(
                    "t={:.0}s balls={} drawn={} vertices={} removed last tick={}",
                    now / 1000.0,
                    controller.balls().len(),
                    batch.ball_count(),
                    batch.vertices().len(),
                    controller.last_report().removed
                );
            }
            if controller.balls().is_empty() {
                log::info!("All balls gone after {:.2}s", now / 1000.0);
                break;
            }
        }

        println!(
            "{} of {} balls still on the canvas after {} frames ({} requested)",
            controller.balls().len(),
            count,
            frame,
            frames.total()
        );
        Ok(())
    }
}
