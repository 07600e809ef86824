use std::fmt::Display;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{hero_url, heroes_url, search_url};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::messages::MessageService;
use crate::transport::{Method, Request, Transport};
use crate::types::{Hero, NewHero};

/// Client for the heroes endpoint.
///
/// Every operation resolves to a value: failures are logged to the message
/// sink and replaced with the operation's fallback (see [`HeroService::recover`]).
#[derive(Clone)]
pub struct HeroService {
    transport: Arc<dyn Transport>,
    messages: MessageService,
    api_base: String,
}

impl HeroService {
    pub fn new(transport: Arc<dyn Transport>, messages: MessageService, config: &Config) -> Self {
        Self {
            transport,
            messages,
            api_base: config.api_base.clone(),
        }
    }

    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    pub async fn get_heroes(&self) -> Vec<Hero> {
        let result = self
            .fetch::<Vec<Hero>>(Request::new(Method::Get, heroes_url(&self.api_base)))
            .await
            .map(Option::unwrap_or_default);
        if result.is_ok() {
            self.log("fetched heroes");
        }
        self.recover("getHeroes", result, Vec::new())
    }

    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let result = self
            .fetch_one::<Hero>(Request::new(Method::Get, hero_url(&self.api_base, id)))
            .await
            .map(Some);
        if result.is_ok() {
            self.log(format!("fetched hero id={id}"));
        }
        self.recover(&format!("getHero id={id}"), result, None)
    }

    /// Looks the hero up through the collection endpoint, so a missing id is
    /// an empty result rather than a 404.
    pub async fn get_hero_no_404(&self, id: u32) -> Option<Hero> {
        let request =
            Request::new(Method::Get, search_url(&self.api_base)).query("id", id.to_string());
        let result = self
            .fetch::<Vec<Hero>>(request)
            .await
            .map(|heroes| heroes.and_then(|heroes| heroes.into_iter().next()));
        match &result {
            Ok(Some(_)) => self.log(format!("fetched hero id={id}")),
            Ok(None) => self.log(format!("did not find hero id={id}")),
            Err(_) => {}
        }
        self.recover(&format!("getHero id={id}"), result, None)
    }

    pub async fn update_hero(&self, hero: &Hero) -> bool {
        let result = match serde_json::to_value(hero) {
            Ok(body) => self
                .send(Request::new(Method::Put, heroes_url(&self.api_base)).json(body))
                .await
                .map(|_| true),
            Err(e) => Err(e.into()),
        };
        if result.is_ok() {
            self.log(format!("updated hero id={}", hero.id));
        }
        self.recover("updateHero", result, false)
    }

    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let result = match serde_json::to_value(hero) {
            Ok(body) => self
                .fetch_one::<Hero>(Request::new(Method::Post, heroes_url(&self.api_base)).json(body))
                .await
                .map(Some),
            Err(e) => Err(e.into()),
        };
        if let Ok(Some(added)) = &result {
            self.log(format!("added hero w/ id={}", added.id));
        }
        self.recover("addHero", result, None)
    }

    pub async fn delete_hero(&self, id: u32) -> bool {
        let result = self
            .send(Request::new(Method::Delete, hero_url(&self.api_base, id)))
            .await
            .map(|_| true);
        if result.is_ok() {
            self.log(format!("deleted hero id={id}"));
        }
        self.recover("deleteHero", result, false)
    }

    /// Heroes whose name contains `term`. A blank term never reaches the backend.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let request = Request::new(Method::Get, search_url(&self.api_base)).query("name", term);
        let result = self
            .fetch::<Vec<Hero>>(request)
            .await
            .map(Option::unwrap_or_default);
        match &result {
            Ok(heroes) if heroes.is_empty() => self.log(format!("no heroes matching \"{term}\"")),
            Ok(_) => self.log(format!("found heroes matching \"{term}\"")),
            Err(_) => {}
        }
        self.recover("searchHeroes", result, Vec::new())
    }

    /// Failure policy shared by every operation: report the error to the
    /// console and the message sink, then hand back `fallback`.
    pub fn recover<T, E: Display>(&self, operation: &str, result: Result<T, E>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(operation, error = %e, "hero service call failed");
                self.log(format!("{operation} failed: {e}"));
                fallback
            }
        }
    }

    async fn send(&self, request: Request) -> Result<Option<Value>> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.send(request).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<Option<T>> {
        match self.send(request).await? {
            None | Some(Value::Null) => Ok(None),
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
        }
    }

    /// Like `fetch`, but an empty body is an error.
    async fn fetch_one<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.fetch(request).await?.ok_or(Error::EmptyBody)
    }

    fn log(&self, message: impl Display) {
        self.messages.add(format!("HeroService: {message}"));
    }
}
