//! News browsing command.

use std::time::Instant;

use anyhow::{anyhow, Result};
use fabsite_catalog::controller::{NewsAction, NewsOutcome};
use fabsite_catalog::news::{NewsItem, NewsSort, SharePlatform};

use super::NewsArgs;
use crate::context::Context;

/// Run the news command.
pub fn run(args: NewsArgs, ctx: &Context) -> Result<()> {
    let share = match (&args.share, &args.url) {
        (Some(platform), Some(url)) => Some((parse_platform(platform)?, url.as_str())),
        _ => None,
    };
    let mut news = ctx.news()?;

    if let Some(category) = &args.category {
        news.dispatch(NewsAction::SelectCategory(category.clone()));
    }
    if let Some(sort) = &args.sort {
        news.dispatch(NewsAction::SetSort(parse_sort(sort)?));
    }
    if let Some(term) = &args.search {
        news.dispatch(NewsAction::SearchInput {
            term: term.clone(),
            at: Instant::now(),
        });
        news.dispatch(NewsAction::FlushSearch);
    }
    if args.page != 1 && news.dispatch(NewsAction::GoToPage(args.page)) == NewsOutcome::Unchanged {
        ctx.output.warn(&format!(
            "Page {} does not exist, showing page {}",
            args.page,
            news.current_page()
        ));
    }

    let listing = news.listing();

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!("News ({} found)", listing.found));
    if listing.found == 0 {
        ctx.output.info("Nothing found");
        return Ok(());
    }

    if let Some(featured) = &listing.page.featured {
        print_item(featured, true, share, ctx);
    }
    for item in &listing.page.items {
        print_item(item, false, share, ctx);
    }

    let pagination = listing.page.pagination;
    ctx.output.blank();
    ctx.output.info(&format!(
        "Page {} of {}  [{}]",
        pagination.page,
        pagination.total_pages,
        pagination
            .page_numbers(5)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    ));

    Ok(())
}

fn parse_sort(sort: &str) -> Result<NewsSort> {
    let parsed = NewsSort::parse(sort);
    if parsed.as_str() != sort.trim() {
        return Err(anyhow!(
            "Unknown sort '{}'. Expected one of: default, newest, oldest, popular",
            sort
        ));
    }
    Ok(parsed)
}

fn parse_platform(platform: &str) -> Result<SharePlatform> {
    SharePlatform::parse(platform).ok_or_else(|| {
        anyhow!(
            "Unknown share platform '{}'. Expected one of: vk, telegram, twitter, linkedin",
            platform
        )
    })
}

fn print_item(
    item: &NewsItem,
    featured: bool,
    share: Option<(SharePlatform, &str)>,
    ctx: &Context,
) {
    let date = item
        .date
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default();
    let title = if featured {
        format!("{} {}", console::style("★").yellow(), console::style(&item.title).bold())
    } else {
        item.title.clone()
    };
    ctx.output.list_item(&title);
    ctx.output.kv("date", &date);
    ctx.output.kv("category", &item.category);
    ctx.output.kv("views", &item.views.to_string());
    if !item.excerpt.is_empty() {
        ctx.output.kv("excerpt", &item.excerpt);
    }
    if !item.tags.is_empty() {
        ctx.output.kv("tags", &item.tags.join(", "));
    }
    if let Some((platform, url)) = share {
        let link = format!("{}#{}", url, item.id);
        ctx.output.kv("share", &platform.share_url(&link, &item.title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("oldest").unwrap(), NewsSort::Oldest);
        assert_eq!(parse_sort("default").unwrap(), NewsSort::Default);
        assert!(parse_sort("random").is_err());
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!(parse_platform("telegram").unwrap(), SharePlatform::Telegram);
        assert!(parse_platform("myspace").is_err());
    }
}
