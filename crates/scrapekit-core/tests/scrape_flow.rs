//! End-to-end pipeline tests against a local mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scrapekit_core::{
    writer, ClientConfig, PageFetcher, QuoteAnalyzer, QuotesScraper, RepoAnalyzer,
    TrendingScraper,
};

fn quiet_fetcher() -> PageFetcher {
    PageFetcher::with_config(ClientConfig {
        timeout_secs: 5,
        page_delay_ms: 0,
    })
    .unwrap()
}

fn quotes_page(bodies: &[(&str, &str, &[&str])]) -> String {
    let mut listings = String::new();
    for (text, author, tags) in bodies {
        let tag_links: String = tags
            .iter()
            .map(|t| format!(r#"<a class="tag">{t}</a>"#))
            .collect();
        listings.push_str(&format!(
            r#"<div class="quote">
                <span class="text">{text}</span>
                <small class="author">{author}</small>
                {tag_links}
            </div>"#
        ));
    }
    format!("<html><body>{listings}</body></html>")
}

const TRENDING_PAGE: &str = r#"
    <html><body>
        <article class="Box-row">
            <h2><a href="/rust-lang/rust">rust-lang / rust</a></h2>
            <p class="col-9">Empowering everyone.</p>
            <span itemprop="programmingLanguage">Rust</span>
            <a href="/rust-lang/rust/stargazers">94,123</a>
            <a href="/rust-lang/rust/forks">12,345</a>
        </article>
        <article class="Box-row">
            <h2><a href="/sharkdp/bat">sharkdp / bat</a></h2>
            <span itemprop="programmingLanguage">Rust</span>
            <a href="/sharkdp/bat/stargazers">48,000</a>
            <a href="/sharkdp/bat/forks">1,200</a>
        </article>
        <article class="Box-row">
            <p class="col-9">row without identity link, must be skipped</p>
        </article>
    </body></html>"#;

#[tokio::test]
async fn quotes_range_skips_failed_pages() {
    let server = MockServer::start().await;

    let page1 = quotes_page(&[
        ("The first quote", "Einstein", ["life", "science"].as_slice()),
        ("The second quote", "Darwin", [].as_slice()),
    ]);
    let page3 = quotes_page(&[("The third quote", "Einstein", ["life"].as_slice())]);

    Mock::given(method("GET"))
        .and(path("/page/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page3))
        .mount(&server)
        .await;

    let scraper = QuotesScraper::with_parts(quiet_fetcher(), server.uri());
    let quotes = scraper.scrape_pages(1..=3).await.unwrap();

    // Page 2 contributes zero records, the rest arrive in page order.
    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0].text(), "The first quote");
    assert_eq!(quotes[2].text(), "The third quote");

    let mut analyzer = QuoteAnalyzer::new(quotes);
    assert_eq!(analyzer.by_tag("life", false).count(), 2);
    assert_eq!(analyzer.clear().by_author("Darwin", false).count(), 1);
}

#[tokio::test]
async fn quotes_all_pages_failed_yields_empty_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = QuotesScraper::with_parts(quiet_fetcher(), server.uri());
    let quotes = scraper.scrape_pages(1..=4).await.unwrap();

    // Zero scraped records is a valid, reported outcome.
    assert!(quotes.is_empty());
    assert_eq!(QuoteAnalyzer::new(quotes).count(), 0);
}

#[tokio::test]
async fn trending_scrape_analyze_export() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TRENDING_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/trending", server.uri());
    let scraper = TrendingScraper::with_parts(quiet_fetcher(), url);
    let repos = scraper.scrape().await.unwrap();

    // The malformed third row is dropped.
    assert_eq!(repos.len(), 2);

    let mut analyzer = RepoAnalyzer::new(repos);
    let top = analyzer.most_starred_n(1).get();
    assert_eq!(top[0].repo_name(), "rust");
    assert_eq!(top[0].stars(), 94123);

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("repositories.json");
    let csv_path = dir.path().join("repositories.csv");
    let all = analyzer.clear().get();
    writer::repos_to_json(&json_path, &all).unwrap();
    writer::repos_to_csv(&csv_path, &all).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(json["repo1"]["repo_name"], "bat");

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("owner,repo_name,description,language,stars,forks"));
}

#[tokio::test]
async fn quotes_non_200_success_status_is_skipped() {
    let server = MockServer::start().await;

    // A 203 from an intermediary carries a body, but only a plain 200
    // counts as a fetched page.
    let body = quotes_page(&[("Looks real but is not", "Nobody", [].as_slice())]);
    Mock::given(method("GET"))
        .and(path("/page/1"))
        .respond_with(ResponseTemplate::new(203).set_body_string(body))
        .mount(&server)
        .await;

    let scraper = QuotesScraper::with_parts(quiet_fetcher(), server.uri());
    let quotes = scraper.scrape_page(1).await.unwrap();
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn trending_non_200_contributes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = TrendingScraper::with_parts(quiet_fetcher(), server.uri());
    let repos = scraper.scrape().await.unwrap();
    assert!(repos.is_empty());
}
