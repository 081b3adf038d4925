use super::*;
use crate::model::ScoreSnapshot;

impl QuizApp {
    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        let active = self.session.active_category();
        self.session
            .bank()
            .list_categories()
            .into_iter()
            .map(|id| CategoryInfo {
                id: id.to_string(),
                active: active == Some(id),
            })
            .collect()
    }

    pub fn controls(&self) -> Controls {
        Controls::derive(self.session.state(), self.selected_choice.is_some())
    }

    pub fn scores(&self) -> ScoreSnapshot {
        self.session.score_snapshot()
    }
}
