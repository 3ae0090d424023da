//! Boot sequence: finds the page elements and wires every behavior.

use crate::dom::{Listener, Page};
use crate::error::{FolioError, dom_error};
use crate::headings::HeadingLinker;
use crate::keyboard::EscapeDispatcher;
use crate::modal::ImageModal;
use crate::nav::NavHighlighter;
use crate::navbar::NavbarScroll;
use crate::sidebar::SidebarController;
use crate::video::VideoInitializer;
use folio_core::{
    BehaviorError, BootReport, Feature, FeatureStatus, PlaybackSettings, SiteConfig,
};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlMediaElement};

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Boots every behavior now, once per page.
pub fn boot(config: SiteConfig) -> Result<BootReport, FolioError> {
    config.validate()?;
    let page = Page::current()?;
    if BOOTED.with(|booted| booted.replace(true)) {
        return Err(BehaviorError::AlreadyBooted.into());
    }

    let report = run_on(&page, &config);
    if report.is_clean() {
        log::info!("Page behaviors ready: {}", report.summary());
    } else {
        log::warn!("Page behaviors booted with failures: {}", report.summary());
    }
    Ok(report)
}

/// Boots once the document has been parsed, or right away if it already has.
pub fn boot_when_ready(config: SiteConfig) -> Result<(), FolioError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| BehaviorError::Environment("No document object available".into()))?;

    if !is_loading(&document) {
        boot(config)?;
        return Ok(());
    }

    let mut pending = Some(config);
    Listener::new(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            if let Err(e) = boot(config) {
                log::error!("Page behaviors failed to boot: {}", e);
            }
        }
    })?
    .forget();
    Ok(())
}

fn is_loading(document: &web_sys::Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

/// Wires every behavior onto `page` without the once-per-page guard.
///
/// [`boot`] is the entry point; this is exposed for in-browser tests that
/// boot scoped fixtures.
#[doc(hidden)]
pub fn run_on(page: &Page, config: &SiteConfig) -> BootReport {
    let selectors = &config.selectors;
    let mut report = BootReport::new();

    report.run(Feature::HeadingLinks, || {
        let headings = page.query_all(&selectors.headings)?;
        let mut linker = HeadingLinker::new(page, Rc::new(config.copy_link.clone()));
        Ok(FeatureStatus::ready(linker.link_all(&headings)?))
    });

    report.run(Feature::NavHighlight, || {
        let pathname = page
            .window
            .location()
            .pathname()
            .map_err(|e| dom_error("location.pathname", e))?;
        let links = page.query_all(&format!(
            "{}, {}",
            selectors.nav_links, selectors.sidebar_links
        ))?;
        NavHighlighter::new(config.nav.clone()).highlight(&pathname, &links)?;
        Ok(FeatureStatus::ready(links.len()))
    });

    report.run(Feature::Videos, || {
        let videos: Vec<HtmlMediaElement> = page
            .query_all(&selectors.videos)?
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlMediaElement>().ok())
            .collect();
        let count = VideoInitializer::new(PlaybackSettings::from(&config.video)).configure(&videos)?;
        Ok(FeatureStatus::ready(count))
    });

    report.run(Feature::NavbarScroll, || {
        let Some(navbar) = page.query(&selectors.navbar)? else {
            return Ok(FeatureStatus::disabled(format!("no '{}' element", selectors.navbar)));
        };
        let navbar = navbar
            .dyn_into::<HtmlElement>()
            .map_err(|_| BehaviorError::Dom("navbar is not an HTML element".into()))?;
        NavbarScroll::new(navbar, config.navbar.clone()).bind(&page.window)?;
        Ok(FeatureStatus::ready(1))
    });

    let mut modal = None;
    report.run(Feature::ImageModal, || {
        let images = page.query_all(&selectors.clickable_images)?;
        let controller = ImageModal::new(page.document.clone(), page.body.clone());
        let count = controller.bind(&images)?;
        modal = Some(controller);
        Ok(FeatureStatus::ready(count))
    });

    let mut sidebar = None;
    report.run(Feature::MobileMenu, || {
        let parts = (
            page.query(&selectors.hamburger)?,
            page.query(&selectors.sidebar)?,
            page.query(&selectors.sidebar_overlay)?,
        );
        let (Some(trigger), Some(panel), Some(backdrop)) = parts else {
            return Ok(FeatureStatus::disabled("hamburger, sidebar or overlay missing"));
        };
        let links = page.query_all(&selectors.sidebar_links)?;
        let controller = SidebarController::new(trigger, panel, backdrop, page.body.clone());
        let count = controller.bind(&links)?;
        sidebar = Some(controller);
        Ok(FeatureStatus::ready(count))
    });

    report.run(Feature::EscapeKey, || {
        if modal.is_none() && sidebar.is_none() {
            return Ok(FeatureStatus::disabled("nothing to dismiss"));
        }
        let surfaces = usize::from(modal.is_some()) + usize::from(sidebar.is_some());
        EscapeDispatcher::new(modal, sidebar).bind(&page.document)?;
        Ok(FeatureStatus::ready(surfaces))
    });

    report
}

/// JavaScript view of a [`BootReport`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootSummary {
    pub clean: bool,
    pub features: Vec<FeatureSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummary {
    pub feature: &'static str,
    pub status: &'static str,
    pub elements: Option<usize>,
    pub detail: Option<String>,
}

impl From<&BootReport> for BootSummary {
    fn from(report: &BootReport) -> Self {
        let features = report
            .entries()
            .iter()
            .map(|(feature, status)| {
                let (status, elements, detail) = match status {
                    FeatureStatus::Ready { elements } => ("ready", Some(*elements), None),
                    FeatureStatus::Disabled { reason } => ("disabled", None, Some(reason.clone())),
                    FeatureStatus::Failed { error } => ("failed", None, Some(error.to_string())),
                };
                FeatureSummary {
                    feature: feature.name(),
                    status,
                    elements,
                    detail,
                }
            })
            .collect();

        Self {
            clean: report.is_clean(),
            features,
        }
    }
}
