//! Listing page parsing
//!
//! Turns one page of the regulator's news listing into announcement
//! candidates. Items are located with a structural selector first and a
//! looser naming-convention selector when the page layout changes.

use chrono::{NaiveDate, NaiveDateTime};
use docket_domain::RawAnnouncement;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

lazy_static! {
    static ref PRIMARY_ITEM: Selector = Selector::parse("div.noticia-item").unwrap();
    static ref FALLBACK_ITEM: Selector = Selector::parse(
        r#"article[class*="noticia"], article[class*="news"], article[class*="item"],
           div[class*="noticia"], div[class*="news"], div[class*="item"]"#
    )
    .unwrap();
    static ref LABELLED_TITLE: Selector = Selector::parse(
        r#"h2[class*="titulo"], h2[class*="title"], h2[class*="headline"],
           h3[class*="titulo"], h3[class*="title"], h3[class*="headline"],
           h4[class*="titulo"], h4[class*="title"], h4[class*="headline"],
           a[class*="titulo"], a[class*="title"], a[class*="headline"]"#
    )
    .unwrap();
    static ref ANY_TITLE: Selector = Selector::parse("h2, h3, h4, a").unwrap();
    static ref LINK: Selector = Selector::parse("a[href]").unwrap();
    static ref DATE_LABEL: Selector = Selector::parse(
        r#"time[class*="data"], time[class*="date"], time[class*="time"],
           span[class*="data"], span[class*="date"], span[class*="time"],
           div[class*="data"], div[class*="date"], div[class*="time"]"#
    )
    .unwrap();
    static ref NUMERIC_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Field order tried when reading a date label's numeric runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    DayMonthYear,
    YearMonthDay,
    DayMonthShortYear,
}

const DATE_ORDERS: &[DateOrder] = &[
    DateOrder::DayMonthYear,
    DateOrder::YearMonthDay,
    DateOrder::DayMonthShortYear,
];

impl DateOrder {
    fn read(self, runs: &[&str]) -> Option<NaiveDate> {
        let number = |s: &str| s.parse::<u32>().ok();
        let (a, b, c) = (runs[0], runs[1], runs[2]);

        match self {
            DateOrder::DayMonthYear if c.len() == 4 => {
                NaiveDate::from_ymd_opt(number(c)? as i32, number(b)?, number(a)?)
            }
            DateOrder::YearMonthDay if a.len() == 4 => {
                NaiveDate::from_ymd_opt(number(a)? as i32, number(b)?, number(c)?)
            }
            DateOrder::DayMonthShortYear if c.len() == 2 => {
                NaiveDate::from_ymd_opt(2000 + number(c)? as i32, number(b)?, number(a)?)
            }
            _ => None,
        }
    }
}

/// Parse a free-form date label such as `10/05/2024` or `2024-05-10 14:00`
///
/// Returns `None` when fewer than three numeric runs are present or no
/// field order yields a real calendar date.
pub fn parse_date_label(label: &str) -> Option<NaiveDateTime> {
    let runs: Vec<&str> = NUMERIC_RUN.find_iter(label).map(|m| m.as_str()).collect();
    if runs.len() < 3 {
        return None;
    }

    DATE_ORDERS
        .iter()
        .find_map(|order| order.read(&runs[..3]))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Whether `title` contains one of the relevance keywords
pub fn is_relevant(title: &str, keywords: &[String]) -> bool {
    let title = title.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .any(|k| title.contains(k.as_str()))
}

/// Parse every listing item on a page
///
/// Items without a title are dropped. Unreadable date labels fall back to
/// `now`.
pub fn parse_listing(html: &str, base: &Url, now: NaiveDateTime) -> Vec<RawAnnouncement> {
    let document = Html::parse_document(html);

    let mut items: Vec<ElementRef> = document.select(&PRIMARY_ITEM).collect();
    if items.is_empty() {
        debug!("No primary listing items, trying fallback selector");
        items = document.select(&FALLBACK_ITEM).collect();
    }

    items
        .into_iter()
        .filter_map(|item| parse_item(item, base, now))
        .collect()
}

fn parse_item(item: ElementRef, base: &Url, now: NaiveDateTime) -> Option<RawAnnouncement> {
    let title_element = item
        .select(&LABELLED_TITLE)
        .next()
        .or_else(|| item.select(&ANY_TITLE).next())?;

    let title = element_text(title_element);
    if title.is_empty() {
        return None;
    }

    let url = item
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(href, base));

    let publication_date = item
        .select(&DATE_LABEL)
        .next()
        .and_then(|label| parse_date_label(&element_text(label)))
        .unwrap_or(now);

    Some(RawAnnouncement {
        title,
        url,
        publication_date,
        raw_body: item.html(),
    })
}

fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.starts_with("http") {
        return Some(href.to_string());
    }

    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            debug!(href, error = %e, "Could not resolve listing link");
            None
        }
    }
}

/// Element text with whitespace runs collapsed
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www2.aneel.gov.br/aplicacoes_liferay/noticias_area/").unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_date_label_orders() {
        assert_eq!(parse_date_label("10/05/2024"), Some(ymd(2024, 5, 10)));
        assert_eq!(parse_date_label("Publicado em 10.05.2024 às 14h30"), Some(ymd(2024, 5, 10)));
        assert_eq!(parse_date_label("2024-05-10"), Some(ymd(2024, 5, 10)));
        assert_eq!(parse_date_label("10/05/24"), Some(ymd(2024, 5, 10)));
    }

    #[test]
    fn test_parse_date_label_rejects_incomplete_or_invalid() {
        assert_eq!(parse_date_label("maio de 2024"), None);
        assert_eq!(parse_date_label("10/05"), None);
        assert_eq!(parse_date_label("31/02/2024"), None);
        assert_eq!(parse_date_label("1/2/345"), None);
    }

    #[test]
    fn test_is_relevant() {
        let keywords: Vec<String> = ["pauta", "reunião", "circuito"]
            .iter()
            .map(|k| k.to_string())
            .collect();

        assert!(is_relevant("PAUTA da 12ª Reunião", &keywords));
        assert!(is_relevant("Resultado do Circuito Deliberativo", &keywords));
        assert!(!is_relevant("Leilão de transmissão", &keywords));
    }

    #[test]
    fn test_parse_primary_items() {
        let html = r#"
            <html><body>
              <div class="noticia-item">
                <h3 class="titulo">Pauta da 12ª Reunião Ordinária</h3>
                <a href="/pauta-12.pdf">Leia mais</a>
                <span class="data">10/05/2024</span>
              </div>
              <div class="noticia-item">
                <a href="https://example.org/ata">Ata da Reunião</a>
              </div>
              <div class="noticia-item"><p>sem título</p></div>
            </body></html>
        "#;

        let items = parse_listing(html, &base(), now());
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Pauta da 12ª Reunião Ordinária");
        assert_eq!(items[0].url.as_deref(), Some("https://www2.aneel.gov.br/pauta-12.pdf"));
        assert_eq!(items[0].publication_date, ymd(2024, 5, 10));
        assert!(items[0].raw_body.contains("noticia-item"));

        assert_eq!(items[1].title, "Ata da Reunião");
        assert_eq!(items[1].url.as_deref(), Some("https://example.org/ata"));
        assert_eq!(items[1].publication_date, now());
    }

    #[test]
    fn test_relative_link_without_leading_slash() {
        let html = r#"<div class="noticia-item"><a href="detalhe?id=7">Pauta</a></div>"#;
        let items = parse_listing(html, &base(), now());
        assert_eq!(
            items[0].url.as_deref(),
            Some("https://www2.aneel.gov.br/aplicacoes_liferay/noticias_area/detalhe?id=7")
        );
    }

    #[test]
    fn test_fallback_selector() {
        let html = r#"
            <article class="news-card">
              <h2>Circuito Deliberativo 2024</h2>
              <time class="date">2024-03-01</time>
            </article>
        "#;

        let items = parse_listing(html, &base(), now());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Circuito Deliberativo 2024");
        assert_eq!(items[0].url, None);
        assert_eq!(items[0].publication_date, ymd(2024, 3, 1));
    }

    #[test]
    fn test_labelled_title_preferred_over_first_heading() {
        let html = r#"
            <div class="noticia-item">
              <h4>Notícias</h4>
              <h3 class="headline">Ata da 5ª Reunião</h3>
            </div>
        "#;
        let items = parse_listing(html, &base(), now());
        assert_eq!(items[0].title, "Ata da 5ª Reunião");
    }

    #[test]
    fn test_page_without_items() {
        let items = parse_listing("<html><body><p>Nada</p></body></html>", &base(), now());
        assert!(items.is_empty());
    }
}
