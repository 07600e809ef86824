use std::sync::Arc;

use crate::error::Error;
use crate::routes::{ActivatedRoute, Location};
use crate::service::HeroService;
use crate::types::Hero;

pub struct HeroDetail {
    service: HeroService,
    route: ActivatedRoute,
    location: Arc<dyn Location>,
    hero: Option<Hero>,
}

impl HeroDetail {
    pub fn new(service: HeroService, route: ActivatedRoute, location: Arc<dyn Location>) -> Self {
        Self {
            service,
            route,
            location,
            hero: None,
        }
    }

    /// Loads the hero named by the route's `id` parameter.
    pub async fn init(&mut self) {
        let raw = self.route.param("id").unwrap_or_default();
        let id = match raw.trim().parse::<u32>() {
            Ok(id) => id,
            Err(_) => {
                let e = Error::InvalidId(raw.to_string());
                tracing::warn!(error = %e, "hero detail not loaded");
                self.service.messages().add(format!("HeroDetail: {e}"));
                return;
            }
        };
        self.hero = self.service.get_hero(id).await;
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(hero) = &mut self.hero {
            hero.name = name.into();
        }
    }

    /// Saves the edited hero and navigates back once the write succeeds.
    pub async fn save(&mut self) -> bool {
        let Some(hero) = &self.hero else {
            return false;
        };
        let saved = self.service.update_hero(hero).await;
        if saved {
            self.go_back();
        }
        saved
    }

    pub fn go_back(&self) {
        self.location.back();
    }

    pub fn render(&self) -> String {
        match &self.hero {
            Some(hero) => format!(
                "{} Details\nid: {}\nname: {}\n",
                hero.name.to_uppercase(),
                hero.id,
                hero.name
            ),
            None => String::new(),
        }
    }
}
