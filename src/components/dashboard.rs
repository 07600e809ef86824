use crate::service::HeroService;
use crate::types::Hero;

const TOP_HEROES: std::ops::Range<usize> = 1..5;

pub struct Dashboard {
    service: HeroService,
    heroes: Vec<Hero>,
}

impl Dashboard {
    pub fn new(service: HeroService) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    pub async fn load(&mut self) {
        let heroes = self.service.get_heroes().await;
        self.heroes = heroes
            .into_iter()
            .skip(TOP_HEROES.start)
            .take(TOP_HEROES.len())
            .collect();
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Top Heroes\n");
        for hero in &self.heroes {
            out.push_str(&format!("  {}\n", hero.name));
        }
        out
    }
}
