mod support;

use std::sync::Arc;
use std::time::Duration;

use heroes::components::HeroSearch;
use support::{hero, roster, service, FakeTransport};

const DEBOUNCE: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn debounces_rapid_terms() {
    let transport = Arc::new(FakeTransport::searching(roster()));
    let (service, _) = service(&transport);
    let mut search = HeroSearch::spawn(service, DEBOUNCE);

    search.search("m");
    search.search("ma");
    search.search("mag");

    let found = search.changed().await;
    assert_eq!(found, Some(vec![hero(15, "Magneta"), hero(19, "Magma")]));
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query[0].1, "mag");
    search.close().await;
}

#[tokio::test(start_paused = true)]
async fn repeated_term_is_not_searched_again() {
    let transport = Arc::new(FakeTransport::searching(roster()));
    let (service, _) = service(&transport);
    let mut search = HeroSearch::spawn(service, DEBOUNCE);

    search.search("dr");
    search.changed().await;
    search.search("dr");
    tokio::time::sleep(DEBOUNCE * 3).await;

    assert_eq!(transport.requests().len(), 1);
    assert_eq!(search.results().len(), 2);
    search.close().await;
}

#[tokio::test(start_paused = true)]
async fn newer_term_replaces_in_flight_search() {
    let transport = Arc::new(FakeTransport::searching(roster()).with_delay(Duration::from_secs(1)));
    let (service, _) = service(&transport);
    let mut search = HeroSearch::spawn(service, DEBOUNCE);

    search.search("dr");
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
    search.search("tor");

    let found = search.changed().await;
    assert_eq!(found, Some(vec![hero(20, "Tornado")]));
    assert_eq!(transport.requests().len(), 2);
    search.close().await;
}

#[tokio::test(start_paused = true)]
async fn blank_term_clears_results_without_request() {
    let transport = Arc::new(FakeTransport::searching(roster()));
    let (service, _) = service(&transport);
    let mut search = HeroSearch::spawn(service, DEBOUNCE);

    search.search("tor");
    assert_eq!(search.changed().await.map(|h| h.len()), Some(1));
    search.search("  ");
    assert_eq!(search.changed().await, Some(Vec::new()));

    assert_eq!(transport.requests().len(), 1);
    search.close().await;
}
