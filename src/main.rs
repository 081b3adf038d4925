use std::sync::Arc;

use log::{error, info};
use trivia_quiz::QuizApp;
use trivia_quiz::config::QuizConfig;
use trivia_quiz::data::QuestionBank;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = match QuizConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let bank = match &config.bank_path {
        Some(path) => QuestionBank::from_path(path),
        None => QuestionBank::embedded(),
    };
    let bank = match bank {
        Ok(bank) => Arc::new(bank),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!("question bank ready: {:?}", bank.list_categories());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Trivia Quiz",
        options,
        Box::new(move |cc| {
            let mut app = QuizApp::new(bank, &config);
            app.restore_preferences(cc);
            Ok(Box::new(app))
        }),
    )
}
