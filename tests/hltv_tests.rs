//! End-to-end tests for the HLTV scraper
//!
//! Fixture pages mimicking the live markup are served with wiremock and
//! driven through the endpoint dispatch.

use pantera_scrape::config::ScrapeConfig;
use pantera_scrape::hltv::{HltvScraper, Record};
use pantera_scrape::ScrapeError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_config() -> ScrapeConfig {
    let mut config = ScrapeConfig::default();
    config.retry.base_delay_ms = 5;
    config
}

const TEAM_PAGE: &str = r#"
<html><body>
  <div class="player-holder">
    <div class="flagCon"><span class="name">yuurih</span><img class="flag" title="Brazil" /></div>
    <div class="flagCon"><span class="name">KSCERATO</span><img class="flag" title="Brazil" /></div>
    <div class="flagCon"><span class="name">FalleN</span><img class="flag" title="Brazil" /></div>
  </div>
  <div class="upcoming-match">
    <div class="matchList">
      <a class="match" href="/matches/12345/furia-vs-mibr" data-zonedgrouping-entry-unix="1700000000000">
        <div class="opponent"><div>MIBR</div></div>
        <div class="matchInfoEmpty"><span>IEM Dallas</span></div>
      </a>
    </div>
  </div>
  <div class="results-holder">
    <div class="results-sublist">
      <a href="/matches/99/furia-vs-navi">
        <div class="result-score">2 - 1</div>
        <div class="team">NAVI</div>
        <div class="event">BLAST Premier</div>
      </a>
    </div>
  </div>
  <a href="/news/40000/furia-qualify">read more</a>
  <a href="/about">about</a>
</body></html>
"#;

/// Seven table rows, one of them too short to be a map entry
const STATS_PAGE: &str = r#"
<html><body>
  <div class="standard-box">
    <span class="rating">1.08</span>
    <span class="kd">1.02</span>
    <span class="maps">734</span>
  </div>
  <table class="stats-table"><tbody>
    <tr><td>Mirage</td><td>120</td><td>55%</td><td>+40</td><td>1.10</td></tr>
    <tr><td>Inferno</td><td>98</td><td>51%</td><td>+12</td><td>1.04</td></tr>
    <tr><td>Broken row</td><td>3</td></tr>
    <tr><td>Nuke</td><td>77</td><td>49%</td><td>-5</td><td>0.99</td></tr>
    <tr><td>Ancient</td><td>64</td><td>52%</td><td>+8</td><td>1.02</td></tr>
    <tr><td>Vertigo</td><td>51</td><td>47%</td><td>-11</td><td>0.97</td></tr>
    <tr><td>Anubis</td><td>33</td><td>54%</td><td>+6</td><td>1.05</td></tr>
  </tbody></table>
</body></html>
"#;

const MATCH_PAGE: &str = r#"
<html><body>
  <div class="teamName">FURIA</div>
  <div class="teamName">NAVI</div>
  <div class="score">2</div>
  <div class="score">1</div>
  <div class="veto-box"><ul>
    <li>1. FURIA removed Dust2</li>
    <li>2. NAVI removed Vertigo</li>
    <li>3. FURIA picked Mirage</li>
  </ul></div>
  <div class="highlighted-player"><div class="name">KSCERATO</div></div>
</body></html>
"#;

const NEWS_PAGE: &str = r#"
<html><body>
  <h1 class="newsline-title">FURIA qualify for the major</h1>
  <span class="author"><a>standin</a></span>
  <span class="date" data-unix="1700000000000">14/11/2023</span>
  <div class="newsline-body">
    <p>The Brazilian side secured their spot.</p>
    <p>They face NAVI next.</p>
  </div>
</body></html>
"#;

fn scraper_for(server: &MockServer) -> HltvScraper {
    HltvScraper::with_base_url(&fast_config(), server.uri()).unwrap()
}

#[tokio::test]
async fn test_team_overview_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team/8297/furia"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEAM_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let overview = scraper.team_overview().await.unwrap();

    assert_eq!(overview.roster.len(), 3);
    assert_eq!(overview.roster[2].nickname, "FalleN");
    assert_eq!(overview.next_matches.len(), 1);
    assert_eq!(overview.next_matches[0].opponent, "MIBR");
    assert!(overview.next_matches[0].time.is_some());
    assert_eq!(overview.recent_results.len(), 1);
    assert_eq!(overview.recent_results[0].opponent, "NAVI");
    assert_eq!(overview.source, scraper.team_url());

    // A second call is served from the cache; expect(1) verifies on drop.
    scraper.team_overview().await.unwrap();
}

#[tokio::test]
async fn test_team_stats_skips_malformed_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/teams/8297/furia"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATS_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let stats = scraper.team_stats().await.unwrap();

    assert_eq!(stats.rating.as_deref(), Some("1.08"));
    // Seven rows on the page, one malformed: six well-formed entries.
    assert_eq!(stats.top_maps.len(), 6);
    assert!(stats.top_maps.iter().all(|m| m.map != "Broken row"));
    assert_eq!(stats.top_maps[0].map, "Mirage");
    assert_eq!(stats.top_maps[0].times_played, 120);
}

#[tokio::test]
async fn test_match_summary_via_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/1/furia-vs-navi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MATCH_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let url = format!("{}/matches/1/furia-vs-navi", server.uri());
    let record = scraper.run("match_summary", Some(&url)).await.unwrap();

    let Record::MatchSummary(summary) = record else {
        panic!("expected a match summary record");
    };
    assert_eq!(summary.teams, ["FURIA".to_string(), "NAVI".to_string()]);
    assert_eq!(summary.scores, [2, 1]);
    assert_eq!(summary.veto.len(), 3);
    assert_eq!(summary.mvp.as_deref(), Some("KSCERATO"));
}

#[tokio::test]
async fn test_news_via_dispatch_alias() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/40000/furia-qualify"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NEWS_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let url = format!("{}/news/40000/furia-qualify", server.uri());
    let record = scraper.run("news", Some(&url)).await.unwrap();

    let Record::News(article) = record else {
        panic!("expected a news record");
    };
    assert_eq!(article.title, "FURIA qualify for the major");
    assert_eq!(
        article.body_md,
        "The Brazilian side secured their spot.\n\nThey face NAVI next."
    );
}

#[tokio::test]
async fn test_dispatch_failures_do_not_touch_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and show up in the log.
    let scraper = scraper_for(&server);

    let err = scraper.run("match_summary", None).await.unwrap_err();
    assert!(matches!(err, ScrapeError::MissingUrl { .. }));

    let err = scraper.run("bogus_endpoint", None).await.unwrap_err();
    assert!(matches!(err, ScrapeError::UnknownEndpoint(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_discover_links_on_fetched_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team/8297/furia"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEAM_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let links = scraper.discover(&scraper.team_url()).await.unwrap();

    // Relative hrefs resolve against the live site base, and /about is
    // not on the allow-list.
    assert!(links.contains("https://www.hltv.org/news/40000/furia-qualify"));
    assert!(links.contains("https://www.hltv.org/matches/12345/furia-vs-mibr"));
    assert!(links.contains("https://www.hltv.org/matches/99/furia-vs-navi"));
    assert!(!links.iter().any(|l| l.contains("/about")));
}

#[tokio::test]
async fn test_record_json_boundary_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/40000/furia-qualify"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NEWS_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let url = format!("{}/news/40000/furia-qualify", server.uri());
    let record = scraper.run("news", Some(&url)).await.unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["kind"], "news");
    assert_eq!(json["title"], "FURIA qualify for the major");
    assert_eq!(json["author"], "standin");
    assert!(json["datetime_utc"].is_string());
    assert!(json["body_md"].as_str().unwrap().contains("\n\n"));
}
