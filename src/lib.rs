pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use data::QuestionBank;
pub use error::{BankError, QuizError};
pub use session::QuizSession;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::sync::Arc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::config::QuizConfig;
    use crate::{QuestionBank, QuizApp};

    /// Punto de entrada web: pinta el quiz en el `<canvas id="quiz_canvas">`.
    #[wasm_bindgen(start)]
    pub fn start() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        wasm_bindgen_futures::spawn_local(async {
            let Some(canvas) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("quiz_canvas"))
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("canvas #quiz_canvas not found");
                return;
            };

            let bank = match QuestionBank::embedded() {
                Ok(bank) => Arc::new(bank),
                Err(e) => {
                    log::error!("{e}");
                    return;
                }
            };

            let result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(move |cc| {
                        let mut app = QuizApp::new(bank, &QuizConfig::default());
                        app.restore_preferences(cc);
                        Ok(Box::new(app))
                    }),
                )
                .await;
            if let Err(e) = result {
                log::error!("failed to start eframe: {e:?}");
            }
        });
    }
}
