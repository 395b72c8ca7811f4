//! Heroes Unleashed entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent,
    };

    use heroes_unleashed::consts::*;
    use heroes_unleashed::platform::{CanvasRenderer, load_all};
    use heroes_unleashed::{AssetRegistry, Game, Roster, Tuning};

    /// Everything the frame loop and event handlers share
    struct App {
        game: Game,
        images: Rc<RefCell<AssetRegistry<HtmlImageElement>>>,
        renderer: CanvasRenderer,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            if !self.game.assets_ready() {
                let viewport = self.game.state.viewport;
                self.renderer.draw_loading(viewport.x, viewport.y);
                return;
            }
            let images = self.images.borrow();
            self.game.frame(time, &*images, &mut self.renderer);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Heroes Unleashed starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into().expect("not a canvas"),
            None => {
                let canvas: HtmlCanvasElement = document
                    .create_element("canvas")
                    .expect("create canvas")
                    .dyn_into()
                    .expect("not a canvas");
                document
                    .body()
                    .expect("no body")
                    .append_child(&canvas)
                    .expect("append canvas");
                canvas
            }
        };
        canvas.set_width(VIEWPORT_WIDTH as u32);
        canvas.set_height(VIEWPORT_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let roster = Roster::default();
        let required = roster.required_assets();
        let images = Rc::new(RefCell::new(AssetRegistry::new()));
        let game = Game::new(
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            roster,
            Tuning::load(),
        );
        let app = Rc::new(RefCell::new(App {
            game,
            images: images.clone(),
            renderer: CanvasRenderer::new(ctx, images.clone()),
        }));

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app.clone());

        // Asset gate: opens once every image has loaded or failed
        let failed = load_all(&required, images.clone()).await;
        if failed > 0 {
            log::warn!("{} image(s) missing, continuing without them", failed);
        }
        let opened = app
            .borrow_mut()
            .game
            .open_gate_when_settled(&*images.borrow(), &required);
        if !opened {
            log::error!("Asset gate still closed: some images never settled");
            return;
        }

        log::info!("Heroes Unleashed running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.input.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup will never arrive for keys held while unfocused
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.input.release_all();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click, converted to canvas-local coordinates
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                app.borrow_mut().game.input.click(x, y);
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heroes Unleashed (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning scripted session...");
    headless::scripted_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use heroes_unleashed::consts::*;
    use heroes_unleashed::sim::SessionPhase;
    use heroes_unleashed::{AssetRegistry, FrameView, Game, Renderer, Roster, Tuning};

    /// Logs phase changes instead of drawing
    #[derive(Default)]
    struct LogRenderer {
        last: Option<SessionPhase>,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, view: &FrameView<'_>) {
            if self.last != Some(view.phase) {
                println!("  screen: {:?} ({} regions)", view.phase, view.hit_regions.len());
                self.last = Some(view.phase);
            }
        }
    }

    /// Click through the menus with placeholder assets, then web the villain
    pub fn scripted_session() {
        let roster = Roster::default();
        let required = roster.required_assets();
        let mut assets: AssetRegistry<()> = AssetRegistry::new();
        assets.request(required.iter().cloned());
        for key in &required {
            assets.settle(key, Ok(())).ok();
        }

        let mut game = Game::new(
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            roster,
            Tuning::default(),
        );
        if !game.open_gate_when_settled(&assets, &required) {
            log::error!("Placeholder assets failed to settle");
            return;
        }
        let mut renderer = LogRenderer::default();
        let mut now = 0.0;

        let click_first = |game: &mut Game, now: f64, renderer: &mut LogRenderer| {
            let target = game.view().hit_regions.first().map(|r| r.rect.center());
            if let Some(p) = target {
                game.input.click(p.x, p.y);
            }
            game.frame(now, &assets, renderer);
        };
        while game.state.phase != SessionPhase::Playing {
            now += 16.0;
            click_first(&mut game, now, &mut renderer);
        }

        // Fly straight up under the villain with fire held
        game.input.key_down("ArrowUp");
        game.input.key_down("Space");

        let mut frames = 0;
        let mut shots = 0;
        while game.state.villain.alive() && frames < 600 {
            now += 16.0;
            frames += 1;
            if let Some(report) = game.frame(now, &assets, &mut renderer) {
                shots += report.spawned as u32;
            }
        }

        println!(
            "  villain health {}/{} after {} frames, {} webs fired",
            game.state.villain.health.health,
            game.state.villain.health.max_health,
            frames,
            shots,
        );
        if !game.state.villain.alive() {
            println!("✓ Villain defeated!");
        }
    }
}
