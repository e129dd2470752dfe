//! Status page parser
//!
//! The status page lists one component container per region. The first
//! container on the page is an overall summary and is always skipped. Every
//! other container carries a group label (the region name) and a list of
//! child components, one per data center:
//!
//! ```html
//! <div class="component-container">
//!   <div class="component-inner-container">
//!     <span class="name"><span>Europe</span><span class="font-small">(50)</span></span>
//!   </div>
//!   <div class="child-components-container">
//!     <div class="component-inner-container status-yellow">
//!       <span class="name">Amsterdam, Netherlands - (AMS)</span>
//!       <span class="component-status">Re-routed</span>
//!     </div>
//!   </div>
//! </div>
//! ```
//!
//! Children marked `status-green` are operational and are not reported.

use super::types::StatusRecord;
use crate::{ExtractError, MissingGroupName, MissingGroupNames};
use scraper::{ElementRef, Html, Selector};
use std::io::Read;
use tracing::{debug, warn};

const CONTAINER: &str = "div.component-container";
const GROUP_LABEL: &str = "div.component-inner-container > span.name > span:not(.font-small)";
const CHILD_COMPONENT: &str = "div.child-components-container > div.component-inner-container";
const NAME: &str = "span.name";
const STATUS: &str = "span.component-status";
const OPERATIONAL_CLASS: &str = "status-green";

/// Records extracted from one status page
///
/// Containers with an empty group label contribute no records and are listed
/// in `missing_groups` instead; records from every other container are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Non-operational components in document order
    pub records: Vec<StatusRecord>,

    /// Containers whose group label was empty
    pub missing_groups: Vec<MissingGroupName>,
}

impl Extraction {
    /// Returns the joined group-name error, if any container had one
    pub fn error(&self) -> Option<MissingGroupNames> {
        join_missing(self.missing_groups.clone())
    }

    /// Splits into the partial records and the joined group-name error
    pub fn into_parts(self) -> (Vec<StatusRecord>, Option<MissingGroupNames>) {
        (self.records, join_missing(self.missing_groups))
    }

    /// Returns the records only when every container had a group label
    pub fn into_result(self) -> Result<Vec<StatusRecord>, MissingGroupNames> {
        match self.into_parts() {
            (records, None) => Ok(records),
            (_, Some(error)) => Err(error),
        }
    }
}

fn join_missing(missing: Vec<MissingGroupName>) -> Option<MissingGroupNames> {
    if missing.is_empty() {
        None
    } else {
        Some(MissingGroupNames(missing))
    }
}

/// Compiled selectors for the status page layout
struct PageSelectors {
    container: Selector,
    group_label: Selector,
    child_component: Selector,
    name: Selector,
    status: Selector,
}

impl PageSelectors {
    fn compile() -> Result<Self, ExtractError> {
        Ok(Self {
            container: compile(CONTAINER)?,
            group_label: compile(GROUP_LABEL)?,
            child_component: compile(CHILD_COMPONENT)?,
            name: compile(NAME)?,
            status: compile(STATUS)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Reads an HTML document from a stream and extracts its status records
///
/// # Returns
///
/// * `Ok(Extraction)` - Records and missing group labels
/// * `Err(ExtractError::MalformedDocument)` - The stream could not be read
///
/// Bytes that are not valid UTF-8 are decoded as U+FFFD.
pub fn extract_statuses<R: Read>(mut reader: R) -> Result<Extraction, ExtractError> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| ExtractError::MalformedDocument {
            reason: format!("failed to read document: {}", e),
        })?;

    let html = String::from_utf8_lossy(&raw);

    parse_status_page(&html)
}

/// Extracts status records from an HTML document
///
/// # Example
///
/// ```
/// use colo_status::page::parse_status_page;
///
/// let html = r#"
///     <div class="component-container"></div>
///     <div class="component-container">
///       <div class="component-inner-container"><span class="name"><span>EU</span></span></div>
///       <div class="child-components-container">
///         <div class="component-inner-container status-red">
///           <span class="name">AMS</span><span class="component-status">Degraded</span>
///         </div>
///       </div>
///     </div>"#;
///
/// let extraction = parse_status_page(html).unwrap();
/// assert_eq!(extraction.records[0].to_string(), "AMS (EU): Degraded");
/// ```
pub fn parse_status_page(html: &str) -> Result<Extraction, ExtractError> {
    let selectors = PageSelectors::compile()?;
    let document = Html::parse_document(html);

    let mut extraction = Extraction::default();

    // The first container is the page-wide summary
    for (index, container) in document.select(&selectors.container).enumerate().skip(1) {
        let group = collect_text(container.select(&selectors.group_label));
        if group.is_empty() {
            warn!("Component container #{} has no group name", index);
            extraction.missing_groups.push(MissingGroupName {
                container_index: index,
            });
            continue;
        }

        for child in container.select(&selectors.child_component) {
            if is_operational(&child) {
                continue;
            }

            let name = collect_text(child.select(&selectors.name).take(1));
            let status = collect_text(child.select(&selectors.status));

            extraction.records.push(StatusRecord {
                name,
                status,
                group: group.clone(),
            });
        }
    }

    debug!(
        "Extracted {} status records ({} containers without group name)",
        extraction.records.len(),
        extraction.missing_groups.len()
    );

    Ok(extraction)
}

fn is_operational(component: &ElementRef) -> bool {
    component
        .value()
        .classes()
        .any(|class| class == OPERATIONAL_CLASS)
}

/// Concatenates the text of all elements and trims the result
fn collect_text<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> String {
    elements
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}
