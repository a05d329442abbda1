//! Small helpers over `scraper` shared by the traversal engine

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Selector};

/// Compile a CSS selector, turning the borrowed parse error into an owned one
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {}", css, e))
}

/// First descendant of `scope` matching `css`
pub fn find<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).next())
}

/// All descendants of `scope` matching `css`, in document order
pub fn find_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// Like [`find`], but a missing element is an error naming the selector
pub fn require<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    find(scope, css)?.ok_or_else(|| anyhow!("Missing element '{}'", css))
}

/// Concatenated descendant text, trimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// First token of the `class` attribute as written in the markup
pub fn first_class<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element.value().attr("class").and_then(|c| c.split_whitespace().next())
}

/// Direct element children of `parent` with the given tag name
pub fn child_elements<'a>(parent: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}
