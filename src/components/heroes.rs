use crate::service::HeroService;
use crate::types::{Hero, NewHero};

pub struct HeroesView {
    service: HeroService,
    heroes: Vec<Hero>,
}

impl HeroesView {
    pub fn new(service: HeroService) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    pub async fn load(&mut self) {
        self.heroes = self.service.get_heroes().await;
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Adds a hero by name. Blank names are ignored.
    pub async fn add(&mut self, name: &str) -> Option<Hero> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let added = self.service.add_hero(&NewHero::new(name)).await?;
        self.heroes.push(added.clone());
        Some(added)
    }

    /// The hero leaves the list immediately, whether or not the backend
    /// delete succeeds.
    pub async fn delete(&mut self, id: u32) -> bool {
        self.heroes.retain(|h| h.id != id);
        self.service.delete_hero(id).await
    }

    pub fn render(&self) -> String {
        let mut out = String::from("My Heroes\n");
        for hero in &self.heroes {
            out.push_str(&format!("{:>4} {}\n", hero.id, hero.name));
        }
        out
    }
}
