#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use heroes::{Config, Error, Hero, HeroService, MessageService, Request, Result, Transport};
use serde_json::{json, Value};

pub const BASE: &str = "http://test/api/heroes";

type Responder = Box<dyn Fn(&Request) -> Result<Option<Value>> + Send + Sync>;

/// Records every request and answers with `responder`.
pub struct FakeTransport {
    requests: Mutex<Vec<Request>>,
    responder: Responder,
    delay: Duration,
}

impl FakeTransport {
    pub fn new(responder: impl Fn(&Request) -> Result<Option<Value>> + Send + Sync + 'static) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
            delay: Duration::ZERO,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(move |_| Ok(Some(body.clone())))
    }

    pub fn empty() -> Self {
        Self::new(|_| Ok(None))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(move |request| {
            Err(Error::Status {
                status,
                url: request.url.clone(),
            })
        })
    }

    /// Answers name searches from `heroes`, matching case-insensitively.
    pub fn searching(heroes: Vec<Hero>) -> Self {
        Self::new(move |request| {
            let term = request
                .query
                .iter()
                .find(|(k, _)| k == "name")
                .map(|(_, v)| v.to_lowercase())
                .unwrap_or_default();
            let found: Vec<&Hero> = heroes
                .iter()
                .filter(|h| h.name.to_lowercase().contains(&term))
                .collect();
            Ok(Some(json!(found)))
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: Request) -> Result<Option<Value>> {
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        (self.responder)(&request)
    }
}

pub fn service(transport: &Arc<FakeTransport>) -> (HeroService, MessageService) {
    let messages = MessageService::new();
    let config = Config::default().with_api_base(BASE);
    let service = HeroService::new(transport.clone(), messages.clone(), &config);
    (service, messages)
}

pub fn hero(id: u32, name: &str) -> Hero {
    Hero {
        id,
        name: name.to_string(),
    }
}

pub fn roster() -> Vec<Hero> {
    vec![
        hero(12, "Dr. Nice"),
        hero(13, "Bombasto"),
        hero(14, "Celeritas"),
        hero(15, "Magneta"),
        hero(16, "RubberMan"),
        hero(17, "Dynama"),
        hero(18, "Dr. IQ"),
        hero(19, "Magma"),
        hero(20, "Tornado"),
    ]
}
