//! WebGPU client for single-player Pong
//!
//! The simulation lives in `pong_core`; this crate paints it with wgpu and
//! forwards pointer and keyboard input. The page drives frames through
//! `requestAnimationFrame` and calls [`render_frame`] once per callback.

pub mod camera;
pub mod input;
pub mod mesh;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::input::{handle_key_down, handle_key_up, pointer_to_field_y};
    use crate::renderer::Renderer;
    use pong_core::{Config, FrameDriver, GameRng, GameState};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    macro_rules! console_log {
        ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
    }

    macro_rules! console_warn {
        ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
    }

    /// One browser session: the GPU surface and the game it shows
    struct Client {
        renderer: Renderer,
        driver: FrameDriver<GameRng>,
        canvas: HtmlCanvasElement,
        key_dir: i8,
    }

    impl Client {
        async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let config = Config::new();
            let mut rng = GameRng::from_entropy();
            let state = GameState::new(config.clone(), &mut rng)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

            let renderer = Renderer::new(canvas.clone(), (config.field_width, config.field_height))
                .await
                .map_err(|e| JsValue::from_str(&e))?;

            console_log!(
                "Pong client ready: {}x{} canvas, {}x{} field",
                canvas.width(),
                canvas.height(),
                config.field_width,
                config.field_height
            );

            Ok(Self {
                renderer,
                driver: FrameDriver::new(state, rng),
                canvas,
                key_dir: 0,
            })
        }

        fn pointer_move(&mut self, client_y: f32) {
            let rect = self.canvas.get_bounding_client_rect();
            let field_height = self.driver.state().config().field_height;
            let y = pointer_to_field_y(client_y, rect.top() as f32, rect.height() as f32, field_height);
            self.driver.set_human_paddle_target(y);
        }

        fn key_down(&mut self, key: &str) {
            self.key_dir = handle_key_down(key, self.key_dir);
            self.driver.set_human_intent(self.key_dir);
        }

        fn key_up(&mut self, key: &str) {
            self.key_dir = handle_key_up(key, self.key_dir);
            self.driver.set_human_intent(self.key_dir);
        }

        /// Returns false once the session is stopped
        fn render(&mut self) -> bool {
            if self.driver.is_stopped() {
                return false;
            }

            self.driver.tick(&mut self.renderer);
            if let Err(e) = self.renderer.present() {
                console_warn!("Frame skipped: {}", e);
            }
            true
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => Ok(f(client)),
            None => Err(JsValue::from_str("Client not initialized")),
        })
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();

        wasm_bindgen_futures::future_to_promise(async move {
            let client = Client::new(canvas).await?;
            CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen]
    pub fn pointer_move(client_y: f32) -> Result<(), JsValue> {
        with_client(|client| client.pointer_move(client_y))
    }

    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<(), JsValue> {
        with_client(|client| client.key_down(key))
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<(), JsValue> {
        with_client(|client| client.key_up(key))
    }

    #[wasm_bindgen]
    pub fn render_frame() -> Result<bool, JsValue> {
        with_client(|client| client.render())
    }

    #[wasm_bindgen]
    pub fn stop_client() -> Result<(), JsValue> {
        with_client(|client| {
            client.driver.stop_handle().stop();
            console_log!("Pong client stopped after {} frames", client.driver.frames());
        })
    }
}
